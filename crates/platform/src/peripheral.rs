//! System I2C bus configuration for the uDSP-Card.
//!
//! Plain data: the host HAL consumes this when it constructs the bus that is
//! later handed to the DAC driver. Every target on the card uses 7-bit
//! addresses (see [`embedded_hal::i2c::SevenBitAddress`]).

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

/// System I2C bus (DAC control): 100 kHz standard mode.
pub const SYS_I2C_CONFIG: I2cConfig = I2cConfig {
    frequency: 100_000,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_i2c_is_standard_mode() {
        assert_eq!(SYS_I2C_CONFIG.frequency, 100_000);
    }
}
