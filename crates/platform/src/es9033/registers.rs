//! ES9033 register map
//!
//! Source: ESS Technology ES9033Q / ES9033 datasheet, register map section.
//!
//! # Layout
//!
//! | Range        | Bus address | Access | Needs system clock |
//! |--------------|-------------|--------|--------------------|
//! | `0x00..=0x58`| `0x4B`      | R/W    | yes                |
//! | `0xC0..=0xCB`| `0x4F`      | W only | no                 |
//! | `0xE0..=0xF2`| `0x4B`      | R only | yes                |
//!
//! Multi-byte values are split over consecutive little-endian registers
//! (`_LSB`, `_MID`, `_MSB`). Bit constants for those registers are expressed in
//! the width of the whole value (`u16` / `u32`), not of a single byte.
//!
//! Values in parentheses are power-on defaults.

// ---------------------------------------------------------------------------
// 0x00 System Configuration (R/W)
// ---------------------------------------------------------------------------

/// System configuration: soft reset, 2x mode, analog/clock enables, amp mode.
pub const REG_SYSTEM_CONFIG: u8 = 0x00;
/// Soft reset of the digital core, PLL registers excluded. (0)
pub const BIT_SOFT_RESET: u8 = 1 << 7;
/// 2x mode for 768 kHz sample rates. (0)
pub const BIT_ENABLE_2X_MODE: u8 = 1 << 6;
/// Analog DAC channel 2 enable. (1)
pub const BIT_ENABLE_ANALOG_DAC_CH2: u8 = 1 << 5;
/// Analog DAC channel 1 enable. (1)
pub const BIT_ENABLE_ANALOG_DAC_CH1: u8 = 1 << 4;
/// Noise-shaping modulator (NSMOD) clock enable. (1)
pub const BIT_ENABLE_NSMOD: u8 = 1 << 3;
/// DAC interpolation path clock enable. (1)
pub const BIT_ENABLE_DAC: u8 = 1 << 2;
/// System mode: 0 = power down, 1 = HIFI. (0)
pub const BIT_AMP_MODE_REG: u8 = 1 << 1;

// ---------------------------------------------------------------------------
// 0x01 System Mode Configuration (R/W)
// ---------------------------------------------------------------------------

/// Input decoder selection.
pub const REG_SYS_MODE_CONFIG: u8 = 0x01;
/// DoP decoder enable. (0)
pub const BIT_ENABLE_DOP_DECODE: u8 = 1 << 2;
/// DSD decoder enable. (0)
pub const BIT_ENABLE_DSD_DECODE: u8 = 1 << 1;
/// TDM decoder enable. (1)
pub const BIT_ENABLE_TDM_DECODE: u8 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x02 DAC Clock Configuration (R/W)
// ---------------------------------------------------------------------------

/// CLK_IDAC divider. Divide value is `SELECT_IDAC_NUM + 1` (+ 0.5 with HALF).
pub const REG_DAC_CLOCK_CONFIG: u8 = 0x02;
/// Adds half a step to the CLK_IDAC divider. (0)
pub const BIT_SELECT_IDAC_HALF: u8 = 1 << 6;
/// Whole-number CLK_IDAC divider minus one. (7)
pub const MASK_SELECT_IDAC_NUM: u8 = 0x3F;

// ---------------------------------------------------------------------------
// 0x03 Master Clock Configuration (R/W)
// ---------------------------------------------------------------------------

/// MENC clock divider. Divide value is `SELECT_MENC_NUM + 1` (+ 0.5 with HALF).
pub const REG_MASTER_CLOCK_CONFIG: u8 = 0x03;
/// Adds half a step to the MENC divider. (0)
pub const BIT_SELECT_MENC_HALF: u8 = 1 << 7;
/// Whole-number MENC divider minus one. (7)
pub const MASK_SELECT_MENC_NUM: u8 = 0x7F;

// ---------------------------------------------------------------------------
// 0x04 Charge Pump Clock Divider (R/W)
// ---------------------------------------------------------------------------

/// Charge-pump (PNEG) clock divider, whole byte. (31)
pub const REG_CP_CLOCK_DIV: u8 = 0x04;

// ---------------------------------------------------------------------------
// 0x09..=0x0E Interrupt mask / clear (R/W, 16-bit)
// ---------------------------------------------------------------------------

/// Positive-edge interrupt mask, low byte.
pub const REG_INTERRUPT_MASK_P_LSB: u8 = 0x09;
/// Positive-edge interrupt mask, high byte.
pub const REG_INTERRUPT_MASK_P_MSB: u8 = 0x0A;
/// Negative-edge interrupt mask, low byte.
pub const REG_INTERRUPT_MASK_N_LSB: u8 = 0x0B;
/// Negative-edge interrupt mask, high byte.
pub const REG_INTERRUPT_MASK_N_MSB: u8 = 0x0C;
/// Interrupt clear, low byte.
pub const REG_INTERRUPT_CLEAR_LSB: u8 = 0x0D;
/// Interrupt clear, high byte.
pub const REG_INTERRUPT_CLEAR_MSB: u8 = 0x0E;

/// Input data type change.
pub const MASK_INTERRUPT_INPUT_DATA_TYPE: u16 = 0x03 << 14;
/// TDM data valid flag.
pub const BIT_INTERRUPT_TDM_DATA_VALID: u16 = 1 << 13;
/// Clock valid flag.
pub const BIT_INTERRUPT_CLK_AVALID: u16 = 1 << 12;
/// RWS reference counter full flag.
pub const BIT_INTERRUPT_RWS_REFERENCE_COUNTER_FULL: u16 = 1 << 11;
/// BCK/WS failure flag.
pub const BIT_INTERRUPT_BCK_WS_FAILED: u16 = 1 << 10;
/// DoP valid flag.
pub const BIT_INTERRUPT_DOP_VALID: u16 = 1 << 8;
/// Soft ramp flag, channel 2.
pub const BIT_INTERRUPT_SOFT_RAMP_CH2: u16 = 1 << 7;
/// Soft ramp flag, channel 1.
pub const BIT_INTERRUPT_SOFT_RAMP_CH1: u16 = 1 << 6;
/// DRE flag, channel 2.
pub const BIT_INTERRUPT_DRE_CH2: u16 = 1 << 5;
/// DRE flag, channel 1.
pub const BIT_INTERRUPT_DRE_CH1: u16 = 1 << 4;
/// Automute flag, channel 2.
pub const BIT_INTERRUPT_AUTOMUTE_CH2: u16 = 1 << 3;
/// Automute flag, channel 1.
pub const BIT_INTERRUPT_AUTOMUTE_CH1: u16 = 1 << 2;
/// Volume-minimum flag, channel 2.
pub const BIT_INTERRUPT_VOL_MIN_CH2: u16 = 1 << 1;
/// Volume-minimum flag, channel 1.
pub const BIT_INTERRUPT_VOL_MIN_CH1: u16 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x0F Analog Control Configuration (R/W)
// ---------------------------------------------------------------------------

/// Analog amplifier and regulator control.
pub const REG_ANALOG_CTRL_CONFIG: u8 = 0x0F;
/// Amp power control for soft ramp on normal mute. (1)
pub const BIT_AMP_PDB_ON_SS: u8 = 1 << 6;
/// Amp power control for soft ramp on abnormal (clock invalid) mute. (1)
pub const BIT_AMP_PDB_CLK_INVALID: u8 = 1 << 5;
/// Low power mode for the DAC regulator. (0)
pub const BIT_LP_DAC_REG: u8 = 1 << 1;
/// Fast charge for VREF_L / VREF_R. (0)
pub const BIT_EN_FCB: u8 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x10 Line Driver Control (R/W)
// ---------------------------------------------------------------------------

/// Line driver over-current protection.
pub const REG_LDRV_CTRL: u8 = 0x10;
/// Disable line driver over-current protection, channel 2. (0)
pub const BIT_ENB_OCP_LDRV_CH2: u8 = 1 << 7;
/// Disable line driver over-current protection, channel 1. (0)
pub const BIT_ENB_OCP_LDRV_CH1: u8 = 1 << 6;

// ---------------------------------------------------------------------------
// 0x13 Analog Control Override (R/W)
// ---------------------------------------------------------------------------

/// DAC output tri-state override.
pub const REG_ANALOG_CONTROL_OVERRIDE: u8 = 0x13;
/// Disable tri-state, DAC channel 2. (1)
pub const BIT_TRIB_DAC_CH2: u8 = 1 << 7;
/// Disable tri-state, DAC channel 1. (1)
pub const BIT_TRIB_DAC_CH1: u8 = 1 << 6;

// ---------------------------------------------------------------------------
// 0x18..=0x1A GPIO (R/W)
// ---------------------------------------------------------------------------

/// GPIO1 configuration.
pub const REG_GPIO_CONFIG: u8 = 0x18;
/// Invert GPIO1. (0)
pub const BIT_INVERT_GPIO1: u8 = 1 << 7;
/// GPIO1 weak keeper. (0)
pub const BIT_GPIO1_WK_EN: u8 = 1 << 6;
/// GPIO1 enable. (0)
pub const BIT_GPIO1_SDB: u8 = 1 << 5;
/// GPIO1 output enable. (0)
pub const BIT_GPIO1_OE: u8 = 1 << 4;
/// GPIO1 function select. (0)
pub const MASK_GPIO1_CFG: u8 = 0x0F;

/// GPIO1 flag combination logic.
pub const REG_GPIO_CONFIG2: u8 = 0x19;
/// OR soft-ramp flags onto GPIO. (0)
pub const BIT_GPIO_OR_SS_RAMP: u8 = 1 << 7;
/// OR volume-minimum flags onto GPIO. (0)
pub const BIT_GPIO_OR_VOL_MIN: u8 = 1 << 6;
/// OR automute flags onto GPIO. (0)
pub const BIT_GPIO_OR_AUTOMUTE: u8 = 1 << 5;
/// AND soft-ramp flags onto GPIO. (0)
pub const BIT_GPIO_AND_SS_RAMP: u8 = 1 << 4;
/// AND volume-minimum flags onto GPIO. (0)
pub const BIT_GPIO_AND_VOL_MIN: u8 = 1 << 3;
/// AND automute flags onto GPIO. (0)
pub const BIT_GPIO_AND_AUTOMUTE: u8 = 1 << 2;
/// Allow GPIO1 to be read back. (0)
pub const BIT_GPIO_READ: u8 = 1 << 0;

/// GPIO input function enable.
pub const REG_INPUT_ENABLE: u8 = 0x1A;
/// GPIO1 drives AMP_MODE. (0)
pub const BIT_GPIO_AMP_MODE: u8 = 1 << 1;
/// GPIO1 drives input select. (0)
pub const BIT_GPIO_SEL: u8 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x1B..=0x23 PWM generators (R/W)
// ---------------------------------------------------------------------------

/// PWM1 count in SYS_CLK periods. (0)
pub const REG_PWM1_COUNT: u8 = 0x1B;
/// PWM1 frequency in SYS_CLK divisions, low byte. (0)
pub const REG_PWM1_FREQUENCY_LSB: u8 = 0x1C;
/// PWM1 frequency, high byte.
pub const REG_PWM1_FREQUENCY_MSB: u8 = 0x1D;
/// PWM2 count in SYS_CLK periods. (0)
pub const REG_PWM2_COUNT: u8 = 0x1E;
/// PWM2 frequency, low byte. (0)
pub const REG_PWM2_FREQUENCY_LSB: u8 = 0x1F;
/// PWM2 frequency, high byte.
pub const REG_PWM2_FREQUENCY_MSB: u8 = 0x20;
/// PWM3 count in SYS_CLK periods. (0)
pub const REG_PWM3_COUNT: u8 = 0x21;
/// PWM3 frequency, low byte. (0)
pub const REG_PWM3_FREQUENCY_LSB: u8 = 0x22;
/// PWM3 frequency, high byte.
pub const REG_PWM3_FREQUENCY_MSB: u8 = 0x23;

// ---------------------------------------------------------------------------
// 0x24 Input Configuration (R/W)
// ---------------------------------------------------------------------------

/// Input format and source selection.
pub const REG_INPUT_CONFIG: u8 = 0x24;
/// Tune CLK_DAC / CLK_IDAC to the detected input sample rate. (1)
pub const BIT_AUTO_FS_DETECT: u8 = 1 << 7;
/// Latch DSD data on the falling edge of DSD_CLK. (0)
pub const BIT_DSD_NEGEDGE: u8 = 1 << 6;
/// DSD master mode. (0)
pub const BIT_DSD_MASTER_MODE: u8 = 1 << 5;
/// TDM master mode: BCK and WS driven by the DAC. (0)
pub const BIT_TDM_MASTER_MODE: u8 = 1 << 4;
/// PDM playback enable. (0)
pub const BIT_ENABLE_PDM: u8 = 1 << 3;
/// Input select when automatic selection is off. (0)
pub const MASK_INPUT_SEL: u8 = 0x03 << 1;
/// Input select: TDM.
pub const INPUT_SEL_TDM: u8 = 0x00 << 1;
/// Input select: DSD.
pub const INPUT_SEL_DSD: u8 = 0x01 << 1;
/// Input select: DoP.
pub const INPUT_SEL_DOP: u8 = 0x02 << 1;
/// Automatic DSD/TDM input selection. (0)
pub const BIT_AUTO_INPUT_SELECT: u8 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x25 Master Mode Configuration (R/W)
// ---------------------------------------------------------------------------

/// Master-mode clock output format.
pub const REG_MASTER_MODE_CONFIG: u8 = 0x25;
/// Block automatic 2x mode when CLK_DAC/CLK_IDAC is 64. (0)
pub const BIT_AUTO_FS_DETECT_BLOCK_2XMODE: u8 = 1 << 7;
/// BCK = 128 fs (otherwise <= 64 fs). (0)
pub const BIT_BCK_DIV1: u8 = 1 << 6;
/// Hold WS high while idle. (0)
pub const BIT_WS_IDLE: u8 = 1 << 5;
/// Master-mode TDM slot length. (0)
pub const MASK_FRAME_LENGTH: u8 = 0x03 << 3;
/// Slot length: 32 bit.
pub const FRAME_LENGTH_32BIT: u8 = 0x00 << 3;
/// Slot length: 16 bit.
pub const FRAME_LENGTH_16BIT: u8 = 0x02 << 3;
/// WS pulse mode. (0)
pub const BIT_WS_PULSE_MODE: u8 = 1 << 2;
/// Invert WS. (0)
pub const BIT_WS_INVERT: u8 = 1 << 1;
/// Invert BCK / DSD_CLK. (1)
pub const BIT_BCK_INVERT: u8 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x26..=0x2A TDM configuration (R/W)
// ---------------------------------------------------------------------------

/// TDM decoder resync and frame size.
pub const REG_TDM_CONFIG1: u8 = 0x26;
/// Force the TDM decoder to resync. (0)
pub const BIT_TDM_RESYNC: u8 = 1 << 7;
/// Master WS scaling. (0)
pub const MASK_WS_SCALE: u8 = 0x07 << 4;
/// WS scale: none.
pub const WS_SCALE_NONE: u8 = 0x00 << 4;
/// WS scale: divide by 2.
pub const WS_SCALE_DIV2: u8 = 0x01 << 4;
/// WS scale: divide by 4.
pub const WS_SCALE_DIV4: u8 = 0x02 << 4;
/// WS scale: divide by 8.
pub const WS_SCALE_DIV8: u8 = 0x03 << 4;
/// WS scale: divide by 16.
pub const WS_SCALE_DIV16: u8 = 0x04 << 4;
/// TDM slots per frame minus one. (1)
pub const MASK_CH_NUM: u8 = 0x0F;

/// TDM justification and valid-pulse timing.
pub const REG_TDM_CONFIG2: u8 = 0x27;
/// Left-justified TDM. (0)
pub const BIT_LJ_MODE: u8 = 1 << 7;
/// TDM WS valid edge. (0)
pub const BIT_VALID_EDGE: u8 = 1 << 6;
/// Data valid pulse length adjustment. (1)
pub const MASK_VALID_PULSE_LEN: u8 = 0x3F;

/// TDM data width and latch position.
pub const REG_TDM_CONFIG3: u8 = 0x28;
/// PDM edge polarity: 0 = ch1 positive, 1 = ch2 positive. (0)
pub const BIT_PDM_NEG_FIRST: u8 = 1 << 7;
/// TDM data width. (0)
pub const MASK_BIT_WIDTH: u8 = 0x03 << 5;
/// Data width: 32 bit.
pub const BIT_WIDTH_32BIT: u8 = 0x00 << 5;
/// Data width: 24 bit.
pub const BIT_WIDTH_24BIT: u8 = 0x01 << 5;
/// Data width: 16 bit.
pub const BIT_WIDTH_16BIT: u8 = 0x02 << 5;
/// Start-bit position inside each slot relative to the MSB. (0)
pub const MASK_DATA_LATCH_ADJ: u8 = 0x1F;

/// TDM slot to channel routing.
pub const REG_TDM_SLOT_CONFIG: u8 = 0x2A;
/// CH2 slot index minus one. (1)
pub const MASK_CH2_SLOT_SEL: u8 = 0x0F << 4;
/// CH1 slot index minus one. (1)
pub const MASK_CH1_SLOT_SEL: u8 = 0x0F;

// ---------------------------------------------------------------------------
// 0x2C Resync Configuration (R/W)
// ---------------------------------------------------------------------------

/// Clock divider resync on the falling edge of WS.
pub const REG_RESYNC_CONFIG: u8 = 0x2C;
/// Power down the charge pump on mute. (1)
pub const BIT_CP_PDB_ON_MUTE: u8 = 1 << 6;
/// Reset the DAC clock divider on every WS falling edge. (0)
pub const BIT_SYNC_DAC_CLK_DIV: u8 = 1 << 4;
/// Reset the DoP clock divider on every WS falling edge. (0)
pub const BIT_DOP_CLK_RESYNC: u8 = 1 << 3;
/// Reset the volume / THD clock generator on every WS falling edge. (0)
pub const BIT_VOL_THD_RESYNC: u8 = 1 << 2;
/// Reset the FIR filters on every WS falling edge. (0)
pub const BIT_FIR_RESYNC: u8 = 1 << 1;
/// Reset the FS clock generator on every WS falling edge. (0)
pub const BIT_FS_RESYNC: u8 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x2D..=0x36 Volume, mute and filter (R/W)
// ---------------------------------------------------------------------------

/// DSD level trim.
pub const REG_DSD_2DB_DOWN: u8 = 0x2D;
/// Scale DSD down by 2 dB to match PCM. (1)
pub const BIT_DSD_2DB_DOWN_ENABLE: u8 = 1 << 7;

/// Channel 1 volume, 0.5 dB steps: 0x00 = 0 dB, 0xFF = -127.5 dB. (0)
pub const REG_VOLUME1: u8 = 0x2E;
/// Channel 2 volume, same encoding as [`REG_VOLUME1`]. (0)
pub const REG_VOLUME2: u8 = 0x2F;
/// Volume ramp-up step, 0 = instant. (150)
pub const REG_DAC_VOL_UP_RATE: u8 = 0x30;
/// Volume ramp-down step, 0 = instant. (150)
pub const REG_DAC_VOL_DOWN_RATE: u8 = 0x31;
/// Volume ramp-down step used on abnormal mute. (0)
pub const REG_DAC_VOL_DOWN_RATE_FAST: u8 = 0x32;

/// Mute, inversion and volume update control.
pub const REG_MUTE_CTRL: u8 = 0x33;
/// Force volume update. (0)
pub const BIT_FORCE_VOLUME: u8 = 1 << 7;
/// Use channel 1 volume for both channels. (0)
pub const BIT_DAC_USE_MONO_VOLUME: u8 = 1 << 6;
/// Toggle to latch new VOLUME1/VOLUME2 values. (0)
pub const BIT_RUN_VOLUME: u8 = 1 << 5;
/// Invert channel 2 at the NSMOD input. (0)
pub const BIT_DAC_INVERT_CH2: u8 = 1 << 3;
/// Invert channel 1 at the NSMOD input. (0)
pub const BIT_DAC_INVERT_CH1: u8 = 1 << 2;
/// Mute channel 2. (0)
pub const BIT_DAC_MUTE_CH2: u8 = 1 << 1;
/// Mute channel 1. (0)
pub const BIT_DAC_MUTE_CH1: u8 = 1 << 0;

/// De-emphasis and interpolation filter selection.
pub const REG_FILTER_CONFIG: u8 = 0x34;
/// Detect TDM channel count from the BCK/frame ratio. (0)
pub const BIT_AUTO_CH_DETECT: u8 = 1 << 7;
/// Bypass the de-emphasis filter. (1)
pub const BIT_BYPASS_DEEMPH: u8 = 1 << 6;
/// DRE peak filter enable. (0)
pub const BIT_PEAK_FILTER: u8 = 1 << 4;
/// De-emphasis sample rate. (1)
pub const MASK_SEL_DEEMPH: u8 = 0x03 << 2;
/// De-emphasis for 32 kHz.
pub const SEL_DEEMPH_32K: u8 = 0x00 << 2;
/// De-emphasis for 44.1 kHz.
pub const SEL_DEEMPH_44K1: u8 = 0x01 << 2;
/// De-emphasis for 48 kHz.
pub const SEL_DEEMPH_48K: u8 = 0x02 << 2;
/// 8x interpolation FIR shape. (0)
pub const MASK_FILTER_SHAPE: u8 = 0x07;
/// Minimum phase.
pub const FILTER_SHAPE_MINIMUM_PHASE: u8 = 0x00;
/// Linear phase apodizing.
pub const FILTER_SHAPE_LINEAR_APODIZING: u8 = 0x01;
/// Linear phase fast roll-off.
pub const FILTER_SHAPE_LINEAR_FAST: u8 = 0x02;
/// Linear phase fast roll-off, low ripple.
pub const FILTER_SHAPE_LINEAR_FAST_LOW_RIPPLE: u8 = 0x03;
/// Linear phase slow roll-off.
pub const FILTER_SHAPE_LINEAR_SLOW: u8 = 0x04;
/// Minimum phase fast roll-off.
pub const FILTER_SHAPE_MINIMUM_FAST: u8 = 0x05;
/// Minimum phase slow roll-off.
pub const FILTER_SHAPE_MINIMUM_SLOW: u8 = 0x06;
/// Minimum phase slow roll-off, low dispersion.
pub const FILTER_SHAPE_MINIMUM_SLOW_LOW_DISPERSION: u8 = 0x07;

/// Interpolation FIR bypass.
pub const REG_DATAPATH_CONTROL: u8 = 0x36;
/// Bypass the 4x interpolation FIR. (0)
pub const BIT_BYPASS_FIR_4X: u8 = 1 << 1;
/// Bypass the 2x interpolation FIR. (0)
pub const BIT_BYPASS_FIR_2X: u8 = 1 << 0;

// ---------------------------------------------------------------------------
// 0x37..=0x3E THD compensation (R/W, 16-bit)
// ---------------------------------------------------------------------------

/// THD compensation C2, channel 1, low byte. (360)
pub const REG_THD_COMP_C2_CH1_LSB: u8 = 0x37;
/// THD compensation C2, channel 1, high byte.
pub const REG_THD_COMP_C2_CH1_MSB: u8 = 0x38;
/// THD compensation C3, channel 1, low byte. (141)
pub const REG_THD_COMP_C3_CH1_LSB: u8 = 0x39;
/// THD compensation C3, channel 1, high byte.
pub const REG_THD_COMP_C3_CH1_MSB: u8 = 0x3A;
/// THD compensation C2, channel 2, low byte. (360)
pub const REG_THD_COMP_C2_CH2_LSB: u8 = 0x3B;
/// THD compensation C2, channel 2, high byte.
pub const REG_THD_COMP_C2_CH2_MSB: u8 = 0x3C;
/// THD compensation C3, channel 2, low byte. (141)
pub const REG_THD_COMP_C3_CH2_LSB: u8 = 0x3D;
/// THD compensation C3, channel 2, high byte.
pub const REG_THD_COMP_C3_CH2_MSB: u8 = 0x3E;

// ---------------------------------------------------------------------------
// 0x3F..=0x45 Automute and soft ramp (R/W)
// ---------------------------------------------------------------------------

/// Automute time and enables, low byte.
pub const REG_AUTOMUTE_TIME_LSB: u8 = 0x3F;
/// Automute time and enables, high byte.
pub const REG_AUTOMUTE_TIME_MSB: u8 = 0x40;
/// Soft ramp to ground once at minimum volume during normal mute. (1)
pub const BIT_AUTOMUTE_RAMP_TO_GROUND: u16 = 1 << 15;
/// Flag automute only once DRE is engaged. (1)
pub const BIT_AUTOMUTE_WAIT_ON_DRE: u16 = 1 << 14;
/// Automute enable, channel 2. (1)
pub const BIT_AUTOMUTE_EN_CH2: u16 = 1 << 12;
/// Automute enable, channel 1. (1)
pub const BIT_AUTOMUTE_EN_CH1: u16 = 1 << 11;
/// Automute time, `t = 128 fs * (2^18 / AUTOMUTE_TIME)`; 0 disables. (15)
pub const MASK_AUTOMUTE_TIME: u16 = 0x07FF;

/// Automute threshold, low byte: 0x0001 = -132 dB, 0xFFFF = -42 dB. (8)
pub const REG_AUTOMUTE_LEVEL_LSB: u8 = 0x41;
/// Automute threshold, high byte.
pub const REG_AUTOMUTE_LEVEL_MSB: u8 = 0x42;
/// Automute release threshold, low byte. (10)
pub const REG_AUTOMUTE_OFF_LEVEL_LSB: u8 = 0x43;
/// Automute release threshold, high byte.
pub const REG_AUTOMUTE_OFF_LEVEL_MSB: u8 = 0x44;

/// Digital gain and soft ramp shape.
pub const REG_SOFT_RAMP_CONFIG: u8 = 0x45;
/// +18 dB digital gain, channel 2. (0)
pub const BIT_GAIN_18DB_CH2: u8 = 1 << 7;
/// +18 dB digital gain, channel 1. (0)
pub const BIT_GAIN_18DB_CH1: u8 = 1 << 6;
/// Soft ramp type: 0 = quadratic, 1 = linear. (0)
pub const BIT_SOFT_RAMP_TYPE: u8 = 1 << 5;
/// Soft start ramp time, 0..=20. (2)
pub const MASK_SOFT_RAMP_TIME: u8 = 0x1F;

// ---------------------------------------------------------------------------
// 0x49..=0x52 Dynamic range enhancement (R/W)
// ---------------------------------------------------------------------------

/// Force DRE per channel.
pub const REG_DRE_FORCE: u8 = 0x49;
/// Force channel 2 into DRE mode without waiting for a zero cross. (1)
pub const BIT_DRE_FORCE_CH2: u8 = 1 << 7;
/// Force channel 1 into DRE mode without waiting for a zero cross. (1)
pub const BIT_DRE_FORCE_CH1: u8 = 1 << 6;

/// DRE gain channel 1, low byte: 0x07FF = 0 dB, 0x7FFF = 30 dB. (0x1A34)
pub const REG_DRE_GAIN_CH1_LSB: u8 = 0x4A;
/// DRE gain channel 1, high byte.
pub const REG_DRE_GAIN_CH1_MSB: u8 = 0x4B;
/// DRE gain channel 2, low byte. (0x1A34)
pub const REG_DRE_GAIN_CH2_LSB: u8 = 0x4C;
/// DRE gain channel 2, high byte.
pub const REG_DRE_GAIN_CH2_MSB: u8 = 0x4D;
/// DRE on threshold, low byte: 0x0CF1 = -48 dB. (0x0CF1)
pub const REG_DRE_ON_THRESH_LSB: u8 = 0x4E;
/// DRE on threshold, high byte.
pub const REG_DRE_ON_THRESH_MSB: u8 = 0x4F;
/// DRE off threshold, low byte: 0x8184 = -28 dB. (0x8184)
pub const REG_DRE_OFF_THRESH_LSB: u8 = 0x50;
/// DRE off threshold, high byte.
pub const REG_DRE_OFF_THRESH_MSB: u8 = 0x51;

/// DRE decay rate and peak detector control.
pub const REG_DRE_DECAY_RATE: u8 = 0x52;
/// Force both channels into DRE mode. (1)
pub const BIT_DRE_FORCE_LEVEL: u8 = 1 << 7;
/// Peak detector start point: 0 = maximum, 1 = minimum. (1)
pub const BIT_DRE_MIN_PEAK: u8 = 1 << 5;
/// Decay rate, 0 (fastest) to 31 (slowest). (0)
pub const MASK_DRE_DECAY_RATE: u8 = 0x1F;

// ---------------------------------------------------------------------------
// 0x53..=0x58 DC offset and master trim (R/W)
// ---------------------------------------------------------------------------

/// DC offset channel 1, low byte. `V = DC_OFFSET / (2^24 - 1) * V_ref`. (0)
pub const REG_DC_OFFSET_CH1_LSB: u8 = 0x53;
/// DC offset channel 1, high byte.
pub const REG_DC_OFFSET_CH1_MSB: u8 = 0x54;
/// DC offset channel 2, low byte. (0)
pub const REG_DC_OFFSET_CH2_LSB: u8 = 0x55;
/// DC offset channel 2, high byte.
pub const REG_DC_OFFSET_CH2_MSB: u8 = 0x56;
/// DC offset ramp step per sample, 0 = instant. (0)
pub const REG_DC_RAMP_RATE: u8 = 0x57;
/// Master trim: 0 = bypass, 1 = -42 dB, 255 = 0 dB. (0)
///
/// Last register of the clocked R/W block.
pub const REG_MASTER_TRIM: u8 = 0x58;

// ---------------------------------------------------------------------------
// 0xC0..=0xCB Reset & PLL (W only, no system clock required)
// ---------------------------------------------------------------------------

/// Reset and PLL register 1. First register of the sub-system block.
pub const REG_RESET_PLL1: u8 = 0xC0;
/// Soft reset of the slave registers. (0)
pub const BIT_AO_SOFT_RESET: u8 = 1 << 7;
/// Soft reset of the synchronous slave registers. (0)
pub const BIT_PLL_SOFT_RESET: u8 = 1 << 6;
/// PLL VCO current; 0x06 for normal operation. (0)
pub const MASK_PLL_VCO_I: u8 = 0x07 << 3;
/// GPIO1 shutdown sync enable. (0)
pub const BIT_GPIO1_SDB_SYNC: u8 = 1 << 1;
/// Digital/analog DAC clock phase: 0 = inverted, 1 = normal. (1)
pub const BIT_PLL_CLKHV_PHASE: u8 = 1 << 0;

/// PLL register 2: bypass, DVDD shunt, input mux.
pub const REG_PLL2: u8 = 0xC1;
/// Bypass the PLL. (0)
pub const BIT_PLL_BYPASS: u8 = 1 << 7;
/// Disable the 10k DVDD shunt to ground. (0)
pub const BIT_DVDD_SHUNTB: u8 = 1 << 6;
/// DVDD = 1 V. (0)
pub const BIT_SEL_1V_DREG: u8 = 1 << 5;
/// PLL HV regulator reference; 0x01 (1.6 V) for normal operation. (0)
pub const MASK_PLL_HVREG_VREF_SEL: u8 = 0x07 << 2;
/// PLL input select: 0 = MCLK, 1 = BCK. (0)
pub const BIT_SEL_PLL_IN: u8 = 1 << 1;
/// PLL input clock enable. (0)
pub const BIT_EN_PLL_CLKIN: u8 = 1 << 0;

/// PLL register 3.
pub const REG_PLL3: u8 = 0xC2;
/// Relock after 256 valid input cycles when lock is lost. (0)
pub const BIT_AUTO_LOCK_EN: u8 = 1 << 2;

/// PLL register 4: charge pump and VCO enables.
pub const REG_PLL4: u8 = 0xC3;
/// Charge pump bias; 0x03 for normal operation. (0)
pub const MASK_PLL_CP_BIAS_SEL: u8 = 0x07 << 5;
/// PFD internal delay; 0x03 for normal operation. (0)
pub const MASK_PLL_PFD_DELAY_SEL: u8 = 0x03 << 3;
/// Disable the VCO frequency limit; set for normal operation. (0)
pub const BIT_PLL_VCO_FLIMIT_PD: u8 = 1 << 2;
/// PLL VCO enable. (0)
pub const BIT_PLL_VCO_PDB: u8 = 1 << 1;
/// PLL charge pump enable. (0)
pub const BIT_PLL_CP_PDB: u8 = 1 << 0;

/// PLL register 5: VCO band and bias.
pub const REG_PLL5: u8 = 0xC4;
/// VCO frequency band; 0x03 for normal operation. (0)
pub const MASK_PLL_VCO_BAND_CTRL: u8 = 0x07 << 5;
/// VCO V/I bias current; 0x02 for normal operation. (0)
pub const MASK_PLL_VCO_IB_AMP_CTRL: u8 = 0x03;

/// PLL feedback divider (`2^25 / n`), low byte. (0)
pub const REG_PLL6_LSB: u8 = 0xC5;
/// PLL feedback divider, middle byte.
pub const REG_PLL6_MID: u8 = 0xC6;
/// PLL feedback divider, high byte.
pub const REG_PLL6_MSB: u8 = 0xC7;

/// PLL register 7 (24 bit), low byte.
pub const REG_PLL7_LSB: u8 = 0xC8;
/// PLL register 7, middle byte.
pub const REG_PLL7_MID: u8 = 0xC9;
/// PLL register 7, high byte: regulator enables and bandwidth.
pub const REG_PLL7_MSB: u8 = 0xCA;
/// PLL HV regulator enable. (0)
pub const BIT_PLL_REG_PDB_HV: u32 = 1 << 23;
/// PLL 1.2 V regulator enable. (0)
pub const BIT_PLL_REG_PDB_1V2: u32 = 1 << 22;
/// PLL low bandwidth mode; set for normal operation. (0)
pub const BIT_PLL_LOW_BW: u32 = 1 << 19;
/// Apply `PLL_CLK_OUT_DIV_PHASE` to the output divider. (0)
pub const BIT_PLL_CLK_OUT_DIV_PHASE_EN: u32 = 1 << 18;
/// Output divider phase. (0)
pub const MASK_PLL_CLK_OUT_DIV_PHASE: u32 = 0x0F << 14;
/// Output divider minus one. (0)
pub const MASK_PLL_CLK_OUT_DIV: u32 = 0x0F << 10;
/// Input divider minus one. (0)
pub const MASK_PLL_CLK_IN_DIV: u32 = 0x1FF << 1;
/// Write 1 then 0 to load CLK_FB_DIV. (0)
pub const BIT_PLL_FB_DIV_LOAD: u32 = 1 << 0;

/// PLL register 8. Last register of the sub-system block.
pub const REG_PLL8: u8 = 0xCB;
/// Release the PLL digital block from reset; set for normal operation. (0)
pub const BIT_PLL_DIG_RSTB: u8 = 1 << 5;
/// VCO diode enable; set for normal operation. (0)
pub const BIT_PLL_VCO_DIODE_EN: u8 = 1 << 4;

// ---------------------------------------------------------------------------
// 0xE0..=0xF2 Status (R only)
// ---------------------------------------------------------------------------

/// System mode and strap read-back.
pub const REG_SYS_READ: u8 = 0xE0;
/// Current system mode.
pub const MASK_SYS_MODES: u8 = 0x03 << 3;
/// ADDR1 strap.
pub const BIT_SYS_ADDR1: u8 = 1 << 2;
/// ADDR0 strap.
pub const BIT_SYS_ADDR0: u8 = 1 << 1;

/// Chip ID.
pub const REG_CHIP_ID: u8 = 0xE1;

/// Interrupt state 1.
pub const REG_INTERRUPT_STATE: u8 = 0xE5;
/// Full-ramp soft start state, both channels.
pub const MASK_SS_FULL_RAMP_INTSTATE: u8 = 0x03 << 6;
/// DRE select state, channel 2.
pub const BIT_DRE_SELECT2_INTSTATE: u8 = 1 << 5;
/// DRE select state, channel 1.
pub const BIT_DRE_SELECT1_INTSTATE: u8 = 1 << 4;
/// Automute state, both channels.
pub const MASK_AUTOMUTE_INTSTATE: u8 = 0x03 << 2;
/// Volume-minimum state, both channels.
pub const MASK_VOL_MIN_INTSTATE: u8 = 0x03;

/// Interrupt state 2.
pub const REG_INTERRUPT_STATE2: u8 = 0xE6;
/// Input select override state.
pub const MASK_INPUT_SELECT_OVERRIDE_INTSTATE: u8 = 0x03 << 6;
/// TDM data valid.
pub const BIT_TDM_DATA_VALID_INT: u8 = 1 << 5;
/// Clock valid.
pub const BIT_CLK_AVALID_INT: u8 = 1 << 4;
/// RWS reference counter full.
pub const BIT_RWS_REF_CNT_FULL_INT: u8 = 1 << 3;
/// BCK/WS failure.
pub const BIT_BCK_WS_FAIL_INT: u8 = 1 << 2;
/// PLL locked.
pub const BIT_PLL_LOCKED_R_INT: u8 = 1 << 1;
/// DoP valid.
pub const BIT_DOP_VALID_INT: u8 = 1 << 0;

/// Interrupt source 1 (same layout as [`REG_INTERRUPT_STATE`]).
pub const REG_INTERRUPT_SOURCE: u8 = 0xE7;
/// Interrupt source 2 (same layout as [`REG_INTERRUPT_STATE2`]).
pub const REG_INTERRUPT_SOURCE2: u8 = 0xE8;

/// Automatic sample-rate tuning result.
pub const REG_AUTO_TUNING_READ: u8 = 0xEF;
/// Detected ratio is valid.
pub const BIT_RATIO_VALID: u8 = 1 << 7;
/// Tuned CLK_IDAC half step.
pub const BIT_IDAC_DIV_HALF_REG: u8 = 1 << 6;
/// Tuned CLK_IDAC divider.
pub const MASK_IDAC_DIV_REG: u8 = 0x3F;

/// GPIO1 input level.
pub const REG_GPIO_READ: u8 = 0xF0;
/// GPIO1 input.
pub const BIT_GPIO1_I_READ: u8 = 1 << 0;

/// Soft ramp, automute and volume-minimum status.
pub const REG_DAC_STATUS_READ: u8 = 0xF1;
/// Ramping down, channel 2.
pub const BIT_SS_RAMP_DOWN_CH2: u8 = 1 << 7;
/// Ramping down, channel 1.
pub const BIT_SS_RAMP_DOWN_CH1: u8 = 1 << 6;
/// Ramping up, channel 2.
pub const BIT_SS_RAMP_UP_CH2: u8 = 1 << 5;
/// Ramping up, channel 1.
pub const BIT_SS_RAMP_UP_CH1: u8 = 1 << 4;
/// Automuted, channel 2.
pub const BIT_AUTOMUTE_CH2: u8 = 1 << 3;
/// Automuted, channel 1.
pub const BIT_AUTOMUTE_CH1: u8 = 1 << 2;
/// At minimum volume, channel 2.
pub const BIT_VOL_MIN_CH2: u8 = 1 << 1;
/// At minimum volume, channel 1.
pub const BIT_VOL_MIN_CH1: u8 = 1 << 0;

/// DRE and input validity status.
pub const REG_DRE_STATUS_READ: u8 = 0xF2;
/// TDM data valid.
pub const BIT_TDM_DATA_VALID: u8 = 1 << 7;
/// DoP valid.
pub const BIT_DOP_VALID: u8 = 1 << 6;
/// DRE detected, channel 2.
pub const BIT_DRE_DETECT_CH2: u8 = 1 << 3;
/// DRE detected, channel 1.
pub const BIT_DRE_DETECT_CH1: u8 = 1 << 2;
/// DRE selected, channel 2.
pub const BIT_DRE_SELECT_CH2: u8 = 1 << 1;
/// DRE selected, channel 1.
pub const BIT_DRE_SELECT_CH1: u8 = 1 << 0;
