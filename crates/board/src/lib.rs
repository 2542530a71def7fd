//! uDSP-Card board bring-up
//!
//! Brings the card's devices into a known operating state: master clock,
//! GPIO enables, and the ESS ES9033 stereo DAC.
//!
//! # Architecture
//!
//! ```text
//! boot::devices_init
//!         ↓
//! Bring-up Sequencer (audio::dac::es9033::sequence)
//!         ↓
//! Register Dispatcher (audio::dac::es9033::dispatcher)
//!         ↓
//! embedded-hal I2c (host HAL)
//! ```
//!
//! Everything is blocking and single-threaded. There are no retries: the
//! caller gets one pass/fail result per bring-up.
//!
//! # Features
//!
//! - `defmt` - log through defmt (target builds)
//! - `tracing` - log through tracing (host builds)
//! - `std` - Enable standard library
//!
//! # Example
//!
//! ```rust,ignore
//! let mut dac = Es9033::new(i2c, delay);
//! devices_init(&mut mclk, &mut gpio_out, &mut boot_delay, &mut dac)?;
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// unsafe fn body is not implicitly unsafe block
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

// MUST be first: the logging macros are textually scoped.
mod fmt;

pub mod audio;
pub mod boot;

pub use audio::dac::es9033::{
    es9033_init, es9033_init_with, write_register, BringUpError, DiagnosticSink, Es9033Error,
    FailureLog, LogDiagnostics,
};
pub use audio::{DacDriver, Es9033, MockDac};
pub use boot::{devices_init, master_clock_init, BootError, MasterClock};
