//! Board description for the uDSP-Card audio add-on
//!
//! Hardware-independent data for the card: which host ports carry which
//! signals, the clocks the audio path runs at, the bus configurations, and
//! the register map of the ES9033 stereo DAC.
//!
//! # Architecture Layers
//!
//! ```text
//! Board bring-up (board crate: dispatcher, sequencer, boot)
//!         ↓
//! Board description (this crate - constants, partitions, bit-fields)
//!         ↓
//! Host HAL (embedded-hal I2c / DelayNs implementations)
//! ```
//!
//! # Modules
//!
//! - [`board`] - port map, clock blocks, GPIO masks, clock frequencies
//! - [`clock_config`] - clock ratios and master clock settle time
//! - [`gpio`] - whole-port GPIO trait
//! - [`peripheral`] - system I2C bus configuration
//! - [`es9033`] - DAC register map, address partitions, typed bit-fields
//!
//! # Features
//!
//! - `std`: Enable standard library support (for testing)
//! - `defmt`: Enable defmt logging
//!
//! # Example
//!
//! ```
//! use platform::es9033::{bus_address_for, REG_RESYNC_CONFIG};
//!
//! assert_eq!(bus_address_for(REG_RESYNC_CONFIG), Some(0x4B));
//! assert_eq!(bus_address_for(0xE1), None); // CHIP_ID is read-only
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
// Pedantic lints suppressed for this board-description crate:
#![allow(clippy::doc_markdown)] // hex addresses and register names in doc comments
#![allow(clippy::must_use_candidate)] // constant accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unreadable_literal)] // register masks are written as the datasheet shows them

pub mod board;
pub mod clock_config;
pub mod es9033;
pub mod gpio;
pub mod peripheral;

// Re-export GPIO types
pub use gpio::{PinGroup, PinState};

// Re-export peripheral types
pub use peripheral::I2cConfig;
