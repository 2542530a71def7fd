//! Mock DAC for host-side testing
//!
//! Implements [`DacDriver`] without any hardware dependency. Records calls
//! for assertion in tests.

use super::es9033::BringUpError;
use super::DacDriver;

/// Mock DAC — records all calls for test assertions.
#[derive(Debug, Default)]
pub struct MockDac {
    /// Number of [`DacDriver::hardware_init`] calls
    pub init_calls: usize,
    /// Error returned from every `hardware_init`, if set
    pub fail_with: Option<BringUpError>,
}

impl MockDac {
    /// Create a mock DAC whose bring-up succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock DAC whose bring-up always fails with `err`.
    pub fn failing(err: BringUpError) -> Self {
        Self { init_calls: 0, fail_with: Some(err) }
    }
}

impl DacDriver for MockDac {
    type Error = BringUpError;

    fn hardware_init(&mut self) -> Result<(), Self::Error> {
        self.init_calls = self.init_calls.saturating_add(1);
        self.fail_with.map_or(Ok(()), Err)
    }
}
