//! Typed bit-fields for the ES9033 registers touched during bring-up.
//!
//! Each struct maps one register byte (or the 24-bit PLL7 value) to named
//! fields. `encode` clears reserved bits and masks multi-bit fields to their
//! width; `decode` ignores reserved bits.

use super::registers::{
    BIT_AMP_MODE_REG, BIT_AO_SOFT_RESET, BIT_CP_PDB_ON_MUTE, BIT_DOP_CLK_RESYNC, BIT_DVDD_SHUNTB,
    BIT_ENABLE_2X_MODE, BIT_ENABLE_ANALOG_DAC_CH1, BIT_ENABLE_ANALOG_DAC_CH2, BIT_ENABLE_DAC,
    BIT_ENABLE_NSMOD, BIT_EN_PLL_CLKIN, BIT_FIR_RESYNC, BIT_FS_RESYNC, BIT_GPIO1_SDB_SYNC,
    BIT_PLL_BYPASS, BIT_PLL_CLKHV_PHASE, BIT_PLL_CLK_OUT_DIV_PHASE_EN, BIT_PLL_FB_DIV_LOAD,
    BIT_PLL_LOW_BW, BIT_PLL_REG_PDB_1V2, BIT_PLL_REG_PDB_HV, BIT_PLL_SOFT_RESET, BIT_SEL_1V_DREG,
    BIT_SEL_PLL_IN, BIT_SELECT_IDAC_HALF, BIT_SOFT_RESET, BIT_SYNC_DAC_CLK_DIV,
    BIT_VOL_THD_RESYNC, MASK_PLL_CLK_IN_DIV, MASK_PLL_CLK_OUT_DIV, MASK_PLL_CLK_OUT_DIV_PHASE,
    MASK_PLL_HVREG_VREF_SEL, MASK_PLL_VCO_I, MASK_SELECT_IDAC_NUM,
};

#[inline]
const fn flag8(on: bool, bit: u8) -> u8 {
    if on {
        bit
    } else {
        0
    }
}

#[inline]
const fn flag32(on: bool, bit: u32) -> u32 {
    if on {
        bit
    } else {
        0
    }
}

#[inline]
const fn is_set8(raw: u8, bit: u8) -> bool {
    raw & bit != 0
}

#[inline]
const fn is_set32(raw: u32, bit: u32) -> bool {
    raw & bit != 0
}

// ── 0x00 SYSTEM_CONFIG ──────────────────────────────────────────────────────

/// `REG_SYSTEM_CONFIG` (0x00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct SystemConfig {
    /// Soft reset of the digital core.
    pub soft_reset: bool,
    /// 768 kHz mode.
    pub enable_2x_mode: bool,
    /// Analog stage, channel 2.
    pub analog_ch2: bool,
    /// Analog stage, channel 1.
    pub analog_ch1: bool,
    /// Noise-shaping modulator clock.
    pub nsmod: bool,
    /// Interpolation path clock.
    pub dac: bool,
    /// `true` = HIFI, `false` = power down.
    pub hifi_mode: bool,
}

impl SystemConfig {
    /// Both analog channels, modulator and interpolation clocks on, HIFI mode.
    pub const RUNNING: Self = Self {
        soft_reset: false,
        enable_2x_mode: false,
        analog_ch2: true,
        analog_ch1: true,
        nsmod: true,
        dac: true,
        hifi_mode: true,
    };

    /// Register byte.
    #[must_use]
    pub const fn encode(self) -> u8 {
        flag8(self.soft_reset, BIT_SOFT_RESET)
            | flag8(self.enable_2x_mode, BIT_ENABLE_2X_MODE)
            | flag8(self.analog_ch2, BIT_ENABLE_ANALOG_DAC_CH2)
            | flag8(self.analog_ch1, BIT_ENABLE_ANALOG_DAC_CH1)
            | flag8(self.nsmod, BIT_ENABLE_NSMOD)
            | flag8(self.dac, BIT_ENABLE_DAC)
            | flag8(self.hifi_mode, BIT_AMP_MODE_REG)
    }

    /// Parse a register byte.
    #[must_use]
    pub const fn decode(raw: u8) -> Self {
        Self {
            soft_reset: is_set8(raw, BIT_SOFT_RESET),
            enable_2x_mode: is_set8(raw, BIT_ENABLE_2X_MODE),
            analog_ch2: is_set8(raw, BIT_ENABLE_ANALOG_DAC_CH2),
            analog_ch1: is_set8(raw, BIT_ENABLE_ANALOG_DAC_CH1),
            nsmod: is_set8(raw, BIT_ENABLE_NSMOD),
            dac: is_set8(raw, BIT_ENABLE_DAC),
            hifi_mode: is_set8(raw, BIT_AMP_MODE_REG),
        }
    }
}

// ── 0x02 DAC_CLOCK_CONFIG ───────────────────────────────────────────────────

/// `REG_DAC_CLOCK_CONFIG` (0x02). CLK_IDAC = CLK / (`idac_num` + 1 [+ 0.5]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DacClockConfig {
    /// Add a half step to the divider.
    pub idac_half: bool,
    /// Whole divider minus one, 6 bits.
    pub idac_num: u8,
}

impl DacClockConfig {
    /// Largest value `idac_num` can hold.
    pub const IDAC_NUM_MAX: u8 = MASK_SELECT_IDAC_NUM;

    /// Divide-by-2 setting used at bring-up.
    pub const DIV_2: Self = Self { idac_half: false, idac_num: 1 };

    /// Register byte.
    #[must_use]
    pub const fn encode(self) -> u8 {
        flag8(self.idac_half, BIT_SELECT_IDAC_HALF) | (self.idac_num & MASK_SELECT_IDAC_NUM)
    }

    /// Parse a register byte.
    #[must_use]
    pub const fn decode(raw: u8) -> Self {
        Self { idac_half: is_set8(raw, BIT_SELECT_IDAC_HALF), idac_num: raw & MASK_SELECT_IDAC_NUM }
    }
}

// ── 0x2C RESYNC_CONFIG ──────────────────────────────────────────────────────

/// `REG_RESYNC_CONFIG` (0x2C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct ResyncConfig {
    /// Power down the charge pump on mute.
    pub cp_pdb_on_mute: bool,
    /// Resync the DAC clock divider.
    pub sync_dac_clk_div: bool,
    /// Resync the DoP clock divider.
    pub dop: bool,
    /// Resync the volume / THD clock generator.
    pub vol_thd: bool,
    /// Resync the FIR filters.
    pub fir: bool,
    /// Resync the FS clock generator.
    pub fs: bool,
}

impl ResyncConfig {
    /// Everything off.
    pub const CLEAR: Self = Self {
        cp_pdb_on_mute: false,
        sync_dac_clk_div: false,
        dop: false,
        vol_thd: false,
        fir: false,
        fs: false,
    };

    /// Only the DAC clock divider resync.
    pub const DAC_CLOCK_DIVIDER: Self = Self { sync_dac_clk_div: true, ..Self::CLEAR };

    /// DoP, volume/THD, FIR and FS resync together.
    pub const DATAPATH: Self = Self { dop: true, vol_thd: true, fir: true, fs: true, ..Self::CLEAR };

    /// Register byte.
    #[must_use]
    pub const fn encode(self) -> u8 {
        flag8(self.cp_pdb_on_mute, BIT_CP_PDB_ON_MUTE)
            | flag8(self.sync_dac_clk_div, BIT_SYNC_DAC_CLK_DIV)
            | flag8(self.dop, BIT_DOP_CLK_RESYNC)
            | flag8(self.vol_thd, BIT_VOL_THD_RESYNC)
            | flag8(self.fir, BIT_FIR_RESYNC)
            | flag8(self.fs, BIT_FS_RESYNC)
    }

    /// Parse a register byte.
    #[must_use]
    pub const fn decode(raw: u8) -> Self {
        Self {
            cp_pdb_on_mute: is_set8(raw, BIT_CP_PDB_ON_MUTE),
            sync_dac_clk_div: is_set8(raw, BIT_SYNC_DAC_CLK_DIV),
            dop: is_set8(raw, BIT_DOP_CLK_RESYNC),
            vol_thd: is_set8(raw, BIT_VOL_THD_RESYNC),
            fir: is_set8(raw, BIT_FIR_RESYNC),
            fs: is_set8(raw, BIT_FS_RESYNC),
        }
    }
}

// ── 0xC0 RESET_PLL1 ─────────────────────────────────────────────────────────

/// `REG_RESET_PLL1` (0xC0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct ResetPll1 {
    /// Soft reset of the slave registers.
    pub ao_soft_reset: bool,
    /// Soft reset of the synchronous slave registers.
    pub pll_soft_reset: bool,
    /// VCO current, 3 bits.
    pub pll_vco_i: u8,
    /// GPIO1 shutdown sync.
    pub gpio1_sdb_sync: bool,
    /// `true` = normal DAC clock phase, `false` = inverted.
    pub clkhv_phase_normal: bool,
}

impl ResetPll1 {
    const VCO_I_SHIFT: u32 = 3;

    /// GPIO1 shutdown sync with normal clock phase.
    pub const BRING_UP: Self = Self {
        ao_soft_reset: false,
        pll_soft_reset: false,
        pll_vco_i: 0,
        gpio1_sdb_sync: true,
        clkhv_phase_normal: true,
    };

    /// Register byte.
    #[must_use]
    pub const fn encode(self) -> u8 {
        flag8(self.ao_soft_reset, BIT_AO_SOFT_RESET)
            | flag8(self.pll_soft_reset, BIT_PLL_SOFT_RESET)
            | (self.pll_vco_i.wrapping_shl(Self::VCO_I_SHIFT) & MASK_PLL_VCO_I)
            | flag8(self.gpio1_sdb_sync, BIT_GPIO1_SDB_SYNC)
            | flag8(self.clkhv_phase_normal, BIT_PLL_CLKHV_PHASE)
    }

    /// Parse a register byte.
    #[must_use]
    pub const fn decode(raw: u8) -> Self {
        Self {
            ao_soft_reset: is_set8(raw, BIT_AO_SOFT_RESET),
            pll_soft_reset: is_set8(raw, BIT_PLL_SOFT_RESET),
            pll_vco_i: (raw & MASK_PLL_VCO_I).wrapping_shr(Self::VCO_I_SHIFT),
            gpio1_sdb_sync: is_set8(raw, BIT_GPIO1_SDB_SYNC),
            clkhv_phase_normal: is_set8(raw, BIT_PLL_CLKHV_PHASE),
        }
    }
}

// ── 0xC1 PLL2 ───────────────────────────────────────────────────────────────

/// Clock feeding the PLL input mux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PllInput {
    /// Master clock pin.
    #[default]
    Mclk,
    /// I2S bit clock.
    Bck,
}

/// `REG_PLL2` (0xC1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct Pll2 {
    /// Bypass the PLL.
    pub bypass: bool,
    /// Disable the 10k DVDD shunt.
    pub dvdd_shunt_disable: bool,
    /// DVDD = 1 V.
    pub dvdd_1v: bool,
    /// HV regulator reference select, 3 bits.
    pub hvreg_vref_sel: u8,
    /// PLL input mux.
    pub input: PllInput,
    /// PLL input clock enable.
    pub clk_in_enable: bool,
}

impl Pll2 {
    const HVREG_VREF_SHIFT: u32 = 2;

    /// PLL bypassed, DVDD shunt off, MCLK routed to the (bypassed) PLL.
    pub const BRING_UP: Self = Self {
        bypass: true,
        dvdd_shunt_disable: true,
        dvdd_1v: false,
        hvreg_vref_sel: 0,
        input: PllInput::Mclk,
        clk_in_enable: true,
    };

    /// Register byte.
    #[must_use]
    pub const fn encode(self) -> u8 {
        flag8(self.bypass, BIT_PLL_BYPASS)
            | flag8(self.dvdd_shunt_disable, BIT_DVDD_SHUNTB)
            | flag8(self.dvdd_1v, BIT_SEL_1V_DREG)
            | (self.hvreg_vref_sel.wrapping_shl(Self::HVREG_VREF_SHIFT) & MASK_PLL_HVREG_VREF_SEL)
            | flag8(matches!(self.input, PllInput::Bck), BIT_SEL_PLL_IN)
            | flag8(self.clk_in_enable, BIT_EN_PLL_CLKIN)
    }

    /// Parse a register byte.
    #[must_use]
    pub const fn decode(raw: u8) -> Self {
        Self {
            bypass: is_set8(raw, BIT_PLL_BYPASS),
            dvdd_shunt_disable: is_set8(raw, BIT_DVDD_SHUNTB),
            dvdd_1v: is_set8(raw, BIT_SEL_1V_DREG),
            hvreg_vref_sel: (raw & MASK_PLL_HVREG_VREF_SEL).wrapping_shr(Self::HVREG_VREF_SHIFT),
            input: if is_set8(raw, BIT_SEL_PLL_IN) { PllInput::Bck } else { PllInput::Mclk },
            clk_in_enable: is_set8(raw, BIT_EN_PLL_CLKIN),
        }
    }
}

// ── 0xC8..=0xCA PLL7 (24 bit) ───────────────────────────────────────────────

/// `REG_PLL7_LSB..=REG_PLL7_MSB` (0xC8..=0xCA), 24-bit little endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct Pll7 {
    /// HV regulator enable.
    pub reg_hv_enable: bool,
    /// 1.2 V regulator enable.
    pub reg_1v2_enable: bool,
    /// Low bandwidth mode.
    pub low_bw: bool,
    /// Apply `clk_out_div_phase`.
    pub clk_out_div_phase_en: bool,
    /// Output divider phase, 4 bits.
    pub clk_out_div_phase: u8,
    /// Output divider minus one, 4 bits.
    pub clk_out_div: u8,
    /// Input divider minus one, 9 bits.
    pub clk_in_div: u16,
    /// Feedback divider load strobe.
    pub fb_div_load: bool,
}

impl Pll7 {
    const OUT_DIV_PHASE_SHIFT: u32 = 14;
    const OUT_DIV_SHIFT: u32 = 10;
    const IN_DIV_SHIFT: u32 = 1;

    /// Only the 1.2 V regulator enabled.
    pub const REGULATOR_1V2_ON: Self = Self {
        reg_hv_enable: false,
        reg_1v2_enable: true,
        low_bw: false,
        clk_out_div_phase_en: false,
        clk_out_div_phase: 0,
        clk_out_div: 0,
        clk_in_div: 0,
        fb_div_load: false,
    };

    /// Full 24-bit value.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn encode(self) -> u32 {
        flag32(self.reg_hv_enable, BIT_PLL_REG_PDB_HV)
            | flag32(self.reg_1v2_enable, BIT_PLL_REG_PDB_1V2)
            | flag32(self.low_bw, BIT_PLL_LOW_BW)
            | flag32(self.clk_out_div_phase_en, BIT_PLL_CLK_OUT_DIV_PHASE_EN)
            | ((self.clk_out_div_phase as u32).wrapping_shl(Self::OUT_DIV_PHASE_SHIFT)
                & MASK_PLL_CLK_OUT_DIV_PHASE)
            | ((self.clk_out_div as u32).wrapping_shl(Self::OUT_DIV_SHIFT) & MASK_PLL_CLK_OUT_DIV)
            | ((self.clk_in_div as u32).wrapping_shl(Self::IN_DIV_SHIFT) & MASK_PLL_CLK_IN_DIV)
            | flag32(self.fb_div_load, BIT_PLL_FB_DIV_LOAD)
    }

    /// Parse a 24-bit value. Bits above 23 are ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn decode(raw: u32) -> Self {
        Self {
            reg_hv_enable: is_set32(raw, BIT_PLL_REG_PDB_HV),
            reg_1v2_enable: is_set32(raw, BIT_PLL_REG_PDB_1V2),
            low_bw: is_set32(raw, BIT_PLL_LOW_BW),
            clk_out_div_phase_en: is_set32(raw, BIT_PLL_CLK_OUT_DIV_PHASE_EN),
            // masked to 4 / 4 / 9 bits before narrowing
            clk_out_div_phase: ((raw & MASK_PLL_CLK_OUT_DIV_PHASE)
                .wrapping_shr(Self::OUT_DIV_PHASE_SHIFT)) as u8,
            clk_out_div: ((raw & MASK_PLL_CLK_OUT_DIV).wrapping_shr(Self::OUT_DIV_SHIFT)) as u8,
            clk_in_div: ((raw & MASK_PLL_CLK_IN_DIV).wrapping_shr(Self::IN_DIV_SHIFT)) as u16,
            fb_div_load: is_set32(raw, BIT_PLL_FB_DIV_LOAD),
        }
    }

    /// Register bytes in bus order: `[LSB, MID, MSB]`.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        let [lsb, mid, msb, _] = self.encode().to_le_bytes();
        [lsb, mid, msb]
    }

    /// Parse `[LSB, MID, MSB]`.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        let [lsb, mid, msb] = bytes;
        Self::decode(u32::from_le_bytes([lsb, mid, msb, 0]))
    }

    /// Byte written to `REG_PLL7_MSB`.
    #[must_use]
    pub const fn msb(self) -> u8 {
        let [_, _, msb] = self.to_bytes();
        msb
    }
}
