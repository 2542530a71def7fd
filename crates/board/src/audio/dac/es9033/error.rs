//! ES9033 error types.

use embedded_hal::i2c::ErrorKind;

/// Outcome of a single failed register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
pub enum Es9033Error {
    /// The register is in neither writable partition. No bus transaction was issued.
    #[error("ES9033: Reg {reg:#x} is not writable")]
    UnsupportedRegister {
        /// Register number as requested.
        reg: u8,
    },
    /// The bus transport rejected the write.
    #[error("ES9033: Failed to write reg {reg:#x} val {value:#x}")]
    BusWriteFailed {
        /// Register number.
        reg: u8,
        /// Value that was being written.
        value: u8,
        /// Transport failure class.
        kind: ErrorKind,
    },
}

impl Es9033Error {
    /// Register the failed write targeted.
    #[must_use]
    pub const fn reg(&self) -> u8 {
        match *self {
            Self::UnsupportedRegister { reg } | Self::BusWriteFailed { reg, .. } => reg,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Es9033Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match *self {
            Self::UnsupportedRegister { reg } => {
                defmt::write!(f, "ES9033: Reg {=u8:#x} is not writable", reg);
            }
            Self::BusWriteFailed { reg, value, kind } => defmt::write!(
                f,
                "ES9033: Failed to write reg {=u8:#x} val {=u8:#x} ({})",
                reg,
                value,
                defmt::Debug2Format(&kind)
            ),
        }
    }
}

/// Aggregate result of a bring-up run in which at least one write failed.
///
/// Every step is still attempted after a failure, so `attempted_writes`
/// always equals the length of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[error("ES9033: Error during configuration ({failed_writes}/{attempted_writes} writes failed, first: {first})")]
pub struct BringUpError {
    /// Number of writes that failed.
    pub failed_writes: usize,
    /// Number of writes issued.
    pub attempted_writes: usize,
    /// Earliest failure in sequence order.
    pub first: Es9033Error,
}

#[cfg(feature = "defmt")]
impl defmt::Format for BringUpError {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "ES9033: Error during configuration ({}/{} writes failed, first: {})",
            self.failed_writes,
            self.attempted_writes,
            self.first
        );
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn unsupported_message_names_register() {
        let e = Es9033Error::UnsupportedRegister { reg: 0x60 };
        assert_eq!(e.to_string(), "ES9033: Reg 0x60 is not writable");
    }

    #[test]
    fn bus_failure_message_names_register_and_value() {
        let e = Es9033Error::BusWriteFailed { reg: 0x2c, value: 0xf, kind: ErrorKind::Other };
        assert_eq!(e.to_string(), "ES9033: Failed to write reg 0x2c val 0xf");
    }

    #[test]
    fn reg_accessor() {
        assert_eq!(Es9033Error::UnsupportedRegister { reg: 0xE1 }.reg(), 0xE1);
        let e = Es9033Error::BusWriteFailed { reg: 0xCA, value: 0x40, kind: ErrorKind::Bus };
        assert_eq!(e.reg(), 0xCA);
    }

    #[test]
    fn aggregate_message() {
        let e = BringUpError {
            failed_writes: 2,
            attempted_writes: 9,
            first: Es9033Error::UnsupportedRegister { reg: 0x60 },
        };
        assert_eq!(
            e.to_string(),
            "ES9033: Error during configuration (2/9 writes failed, first: ES9033: Reg 0x60 is not writable)"
        );
    }
}
