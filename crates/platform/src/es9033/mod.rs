//! ESS ES9033 stereo DAC: register map, bus address partitions, bit-fields.
//!
//! The chip exposes two I2C targets. Registers `0x00..=0x58` sit behind the
//! general address and only respond once the system clock runs; the reset and
//! PLL registers `0xC0..=0xCB` sit behind the sub-system address and can be
//! written before any clock is present. See [`partition`].

pub mod fields;
pub mod partition;
pub mod registers;

pub use fields::{DacClockConfig, Pll2, Pll7, PllInput, ResetPll1, ResyncConfig, SystemConfig};
pub use partition::{
    bus_address_for, partition_for, AddressPartition, ES9033_GENERAL_ADDR, ES9033_SUBSYSTEM_ADDR,
    WRITABLE_PARTITIONS,
};
pub use registers::*;
