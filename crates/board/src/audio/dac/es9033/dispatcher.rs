//! Single register write, routed to the bus address that owns the register.

use embedded_hal::i2c::{Error as _, I2c};
use platform::es9033::bus_address_for;

use super::error::Es9033Error;

/// Write `value` to ES9033 register `reg`.
///
/// The bus address comes from the partition table. Registers outside both
/// writable partitions fail with [`Es9033Error::UnsupportedRegister`] without
/// touching the bus. Otherwise exactly one `[reg, value]` write is issued;
/// it is not retried.
///
/// # Errors
/// `UnsupportedRegister` for non-writable registers, `BusWriteFailed` if the
/// transport rejects the write.
pub fn write_register<I>(i2c: &mut I, reg: u8, value: u8) -> Result<(), Es9033Error>
where
    I: I2c,
{
    let Some(addr) = bus_address_for(reg) else {
        return Err(Es9033Error::UnsupportedRegister { reg });
    };
    i2c.write(addr, &[reg, value])
        .map_err(|e| Es9033Error::BusWriteFailed { reg, value, kind: e.kind() })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::*;

    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
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
            if self.fail {
                Err(ErrorKind::Bus)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn general_register_goes_to_0x4b() {
        let mut m = MockI2c::default();
        write_register(&mut m, 0x2C, 0x10).unwrap();
        assert_eq!(m.writes, [(0x4B, std::vec![0x2C, 0x10])]);
    }

    #[test]
    fn subsystem_register_goes_to_0x4f() {
        let mut m = MockI2c::default();
        write_register(&mut m, 0xCA, 0x40).unwrap();
        assert_eq!(m.writes, [(0x4F, std::vec![0xCA, 0x40])]);
    }

    #[test]
    fn unsupported_register_never_touches_bus() {
        let mut m = MockI2c::default();
        let err = write_register(&mut m, 0x59, 0x00).unwrap_err();
        assert_eq!(err, Es9033Error::UnsupportedRegister { reg: 0x59 });
        assert!(m.writes.is_empty());
    }

    #[test]
    fn bus_failure_carries_reg_value_and_kind() {
        let mut m = MockI2c { fail: true, ..MockI2c::default() };
        let err = write_register(&mut m, 0x00, 0x3E).unwrap_err();
        assert_eq!(
            err,
            Es9033Error::BusWriteFailed { reg: 0x00, value: 0x3E, kind: ErrorKind::Bus }
        );
        assert_eq!(m.writes.len(), 1);
    }
}
