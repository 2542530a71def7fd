//! Clock relationships for the uDSP-Card audio path.
//!
//! The integer ratios the audio interfaces rely on, and how long the master
//! clock needs before the DAC can be configured.
//!
//! # Background
//!
//! The ES9033 holds two register blocks. The reset/PLL block answers without a
//! clock, but the general block ignores writes until MCLK is present. The
//! board therefore starts the master clock and waits 100 ms before touching
//! the DAC.
//!
//! # Sources
//!
//! - ES9033 datasheet, "Register access" and "Clocking"

use crate::board::{AUDIO_CLOCK_FREQUENCY, MASTER_CLOCK_FREQUENCY, PDM_CLOCK_FREQUENCY};

/// Master clock cycles per audio sample.
#[allow(clippy::arithmetic_side_effects)]
pub const MCLK_PER_FS: u32 = MASTER_CLOCK_FREQUENCY / AUDIO_CLOCK_FREQUENCY;

/// Master clock cycles per PDM clock cycle.
#[allow(clippy::arithmetic_side_effects)]
pub const MCLK_PER_PDM_CLK: u32 = MASTER_CLOCK_FREQUENCY / PDM_CLOCK_FREQUENCY;

/// Time to wait after programming the master clock before the DAC is touched.
pub const MASTER_CLOCK_SETTLE_MS: u32 = 100;
