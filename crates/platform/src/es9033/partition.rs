//! ES9033 bus address partitions
//!
//! The ES9033 answers on two I2C addresses. Which one owns a register is
//! decided only by the register number, so the lookup is a static ordered
//! table: the first partition whose range contains the register wins.
//!
//! Read-only status registers (`0xE0..=0xF2`) are deliberately absent. They
//! live on the general address but are never written.

use core::ops::RangeInclusive;

use embedded_hal::i2c::SevenBitAddress;

use super::registers::{REG_MASTER_TRIM, REG_PLL8, REG_RESET_PLL1, REG_SYSTEM_CONFIG};

/// General (clocked) register block address: `0x96 >> 1`.
pub const ES9033_GENERAL_ADDR: SevenBitAddress = 0x96 >> 1;

/// Sub-system (reset / PLL) register block address: `0x9E >> 1`.
pub const ES9033_SUBSYSTEM_ADDR: SevenBitAddress = 0x9E >> 1;

/// A contiguous range of writable registers that share one bus address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPartition {
    /// Short name printed by the bring-up diagnostics.
    pub name: &'static str,
    /// Register numbers owned by this partition.
    pub registers: RangeInclusive<u8>,
    /// 7-bit I2C address that accepts writes for these registers.
    pub bus_address: SevenBitAddress,
    /// Writes only take effect once the DAC system clock is running.
    pub requires_sys_clock: bool,
}

impl AddressPartition {
    /// `true` if `reg` belongs to this partition.
    #[inline]
    #[must_use]
    pub fn contains(&self, reg: u8) -> bool {
        self.registers.contains(&reg)
    }
}

/// General R/W registers, system clock required.
pub const GENERAL_PARTITION: AddressPartition = AddressPartition {
    name: "general",
    registers: REG_SYSTEM_CONFIG..=REG_MASTER_TRIM,
    bus_address: ES9033_GENERAL_ADDR,
    requires_sys_clock: true,
};

/// Reset and PLL registers, writable before the system clock is up.
pub const SUBSYSTEM_PARTITION: AddressPartition = AddressPartition {
    name: "subsystem",
    registers: REG_RESET_PLL1..=REG_PLL8,
    bus_address: ES9033_SUBSYSTEM_ADDR,
    requires_sys_clock: false,
};

/// Ordered lookup table. First match wins.
pub static WRITABLE_PARTITIONS: [AddressPartition; 2] = [GENERAL_PARTITION, SUBSYSTEM_PARTITION];

/// Partition owning `reg`, or `None` if the register is not writable.
#[must_use]
pub fn partition_for(reg: u8) -> Option<&'static AddressPartition> {
    WRITABLE_PARTITIONS.iter().find(|p| p.contains(reg))
}

/// Bus address to write `reg` to, or `None` if the register is not writable.
#[inline]
#[must_use]
pub fn bus_address_for(reg: u8) -> Option<SevenBitAddress> {
    partition_for(reg).map(|p| p.bus_address)
}
