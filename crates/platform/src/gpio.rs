//! GPIO port abstraction
//!
//! The card's GPIOs are grouped into whole ports that are read and written as
//! one value. Bit masks for the individual signals live in [`crate::board`].

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Pin group for whole-port operations
pub trait PinGroup {
    /// Error type
    type Error;

    /// Read all pins at once
    fn read(&self) -> Result<u32, Self::Error>;

    /// Write all pins at once
    fn write(&mut self, value: u32) -> Result<(), Self::Error>;

    /// Set specific pins high
    fn set_high(&mut self, mask: u32) -> Result<(), Self::Error> {
        let v = self.read()?;
        self.write(v | mask)
    }

    /// Set specific pins low
    fn set_low(&mut self, mask: u32) -> Result<(), Self::Error> {
        let v = self.read()?;
        self.write(v & !mask)
    }

    /// State of the pins in `mask`: `High` only if all of them are high.
    fn state(&self, mask: u32) -> Result<PinState, Self::Error> {
        Ok(PinState::from(self.read()? & mask == mask))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::board::{GPIO_OUT_BOOT, GPIO_OUT_DAC_EN, GPIO_OUT_LED_0, GPIO_OUT_LED_1};

    #[derive(Default)]
    struct Latch(u32);

    impl PinGroup for Latch {
        type Error = core::convert::Infallible;
        fn read(&self) -> Result<u32, Self::Error> {
            Ok(self.0)
        }
        fn write(&mut self, value: u32) -> Result<(), Self::Error> {
            self.0 = value;
            Ok(())
        }
    }

    #[test]
    fn write_replaces_whole_port() {
        let mut port = Latch(0xF);
        port.write(GPIO_OUT_BOOT).unwrap();
        assert_eq!(port.0, GPIO_OUT_DAC_EN | GPIO_OUT_LED_0);
    }

    #[test]
    fn set_high_keeps_other_pins() {
        let mut port = Latch(GPIO_OUT_BOOT);
        port.set_high(GPIO_OUT_LED_1).unwrap();
        assert_eq!(port.0, GPIO_OUT_BOOT | GPIO_OUT_LED_1);
    }

    #[test]
    fn set_low_clears_only_mask() {
        let mut port = Latch(GPIO_OUT_BOOT);
        port.set_low(GPIO_OUT_LED_0).unwrap();
        assert_eq!(port.0, GPIO_OUT_DAC_EN);
    }

    #[test]
    fn state_requires_all_bits() {
        let port = Latch(GPIO_OUT_DAC_EN);
        assert_eq!(port.state(GPIO_OUT_DAC_EN).unwrap(), PinState::High);
        assert_eq!(port.state(GPIO_OUT_BOOT).unwrap(), PinState::Low);
    }

    #[test]
    fn pin_state_bool_conversions() {
        assert!(bool::from(PinState::from(true)));
        assert!(!bool::from(PinState::Low));
    }
}
