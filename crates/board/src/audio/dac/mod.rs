//! DAC (Digital-to-Analogue Converter) driver abstractions
//!
//! - `es9033` — ESS ES9033 driver (blocking I²C)
//! - `mock` — In-process mock for host tests (always available)

pub mod es9033;
pub mod mock;

/// Board-level DAC bring-up.
pub trait DacDriver {
    /// Error reported when bring-up fails.
    type Error;

    /// Full hardware initialisation sequence.
    ///
    /// The master clock must be running and the DAC enable line high.
    fn hardware_init(&mut self) -> Result<(), Self::Error>;
}
