//! ES9033 DAC driver module (ESS Technology)
//!
//! - [`dispatcher`] — one register write, routed by address partition
//! - [`sequence`] — the fixed power-on table and the sequencer that runs it
//! - [`diagnostics`] — where per-write failures are reported
//!
//! The register map itself lives in `platform::es9033`.

pub mod diagnostics;
pub mod dispatcher;
mod driver;
pub mod error;
pub mod sequence;

pub use diagnostics::{DiagnosticSink, FailureLog, LogDiagnostics};
pub use dispatcher::write_register;
pub use driver::Es9033;
pub use error::{BringUpError, Es9033Error};
pub use sequence::{
    apply_sequence, es9033_init, es9033_init_with, BringUpStep, BRING_UP_SEQUENCE, BRING_UP_STEPS,
};
