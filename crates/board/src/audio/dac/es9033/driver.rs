//! ES9033 driver owning its I²C bus and delay provider.
//!
//! Blocking `embedded_hal::i2c::I2c`: bring-up runs once at boot, before any
//! executor exists.
//!
//! # I²C Addresses
//!
//! | Block      | Registers      | Address |
//! |------------|----------------|---------|
//! | general    | `0x00..=0x58`  | `0x4B`  |
//! | sub-system | `0xC0..=0xCB`  | `0x4F`  |

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::diagnostics::DiagnosticSink;
use super::dispatcher::write_register;
use super::error::{BringUpError, Es9033Error};
use super::sequence::{es9033_init, es9033_init_with};
use crate::audio::dac::DacDriver;

/// ES9033 DAC driver
pub struct Es9033<I, D> {
    i2c: I,
    delay: D,
}

impl<I: I2c, D: DelayNs> Es9033<I, D> {
    /// Create a new ES9033 driver.
    ///
    /// `i2c` must be a configured I²C bus (see `platform::peripheral::SYS_I2C_CONFIG`).
    pub fn new(i2c: I, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Write a single register through the partition dispatcher.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Es9033Error> {
        write_register(&mut self.i2c, reg, value)
    }

    /// Run the bring-up sequence, reporting failures to `sink`.
    pub fn init_with<S: DiagnosticSink>(&mut self, sink: S) -> Result<(), BringUpError> {
        es9033_init_with(&mut self.i2c, &mut self.delay, sink)
    }

    /// Give back the bus and delay provider.
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}

impl<I: I2c, D: DelayNs> DacDriver for Es9033<I, D> {
    type Error = BringUpError;

    fn hardware_init(&mut self) -> Result<(), Self::Error> {
        info!("Initialising ES9033 DAC");
        es9033_init(&mut self.i2c, &mut self.delay)?;
        info!("ES9033 initialisation complete");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::*;
    use crate::audio::dac::es9033::FailureLog;

    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        nack_addr: Option<u8>,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(&mut self, addr: u8, ops: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
            for op in ops.iter() {
                if let Operation::Write(d) = op {
                    self.writes.push((addr, d.to_vec()));
                }
            }
            if self.nack_addr == Some(addr) {
                Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address))
            } else {
                Ok(())
            }
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn hardware_init_runs_full_sequence() {
        let mut dac = Es9033::new(MockI2c::default(), NoDelay);
        dac.hardware_init().unwrap();
        let (i2c, _) = dac.release();
        assert_eq!(i2c.writes.len(), 9);
        assert_eq!(i2c.writes.last(), Some(&(0x4B, std::vec![0x00, 0x3E])));
    }

    #[test]
    fn missing_subsystem_target_fails_three_writes() {
        let mut dac = Es9033::new(MockI2c { nack_addr: Some(0x4F), ..MockI2c::default() }, NoDelay);
        let mut log = FailureLog::<9>::new();
        let err = dac.init_with(&mut log).unwrap_err();
        assert_eq!(err.failed_writes, 3);
        assert_eq!(err.first.reg(), 0xC0);
        let steps: Vec<usize> = log.entries().iter().map(|(s, _)| *s).collect();
        assert_eq!(steps, [0, 1, 2]);
    }

    #[test]
    fn single_write_through_driver() {
        let mut dac = Es9033::new(MockI2c::default(), NoDelay);
        dac.write_register(0x2E, 0x00).unwrap();
        assert_eq!(
            dac.write_register(0xE1, 0x00),
            Err(Es9033Error::UnsupportedRegister { reg: 0xE1 })
        );
        let (i2c, _) = dac.release();
        assert_eq!(i2c.writes, [(0x4B, std::vec![0x2E, 0x00])]);
    }
}
