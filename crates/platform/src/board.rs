//! uDSP-Card pin, clock-block and GPIO assignments.
//!
//! The card sits on a host processor whose I/O is organised in named ports of
//! 1, 4 or 16 pins (`1A`, `4C`, `16B`, …). Several 1-bit ports are shared
//! between functions that are never active at the same time (e.g. I2S data
//! lines 2..=4 and the system I2C pins), so ports are not unique across this
//! table.
//!
//! # Sources
//! - uDSP-Card schematic, host connector pin-out
//! - ES9033 datasheet, "Clocking" (MCLK / fs ratios)

/// Host I/O port: pin count plus bank letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Port {
    /// Number of pins in the port (1, 4, 8, 16 or 32).
    pub width: u8,
    /// Bank letter.
    pub bank: char,
}

impl Port {
    /// Port `<width><bank>`.
    #[must_use]
    pub const fn new(width: u8, bank: char) -> Self {
        Self { width, bank }
    }

    /// `true` for 1-bit ports, usable for clock and serial data signals.
    #[must_use]
    pub const fn is_single_bit(self) -> bool {
        self.width == 1
    }
}

/// Host clock block index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockBlock(pub u8);

// ── GPIO ────────────────────────────────────────────────────────────────────

/// 4-bit GPIO input port (IMU interrupts, buttons).
pub const PORT_GPIO_IN: Port = Port::new(4, 'A');
/// 4-bit GPIO output port (SPI enable, DAC enable, LEDs).
pub const PORT_GPIO_OUT: Port = Port::new(4, 'C');

/// Input: IMU interrupt 1.
pub const GPIO_IN_IMU_IRQ_1: u32 = 1 << 0;
/// Input: IMU interrupt 2.
pub const GPIO_IN_IMU_IRQ_2: u32 = 1 << 1;
/// Input: button 0.
pub const GPIO_IN_BUTTON_0: u32 = 1 << 2;
/// Input: button 1.
pub const GPIO_IN_BUTTON_1: u32 = 1 << 3;

/// Output: SPI enable, active low.
pub const GPIO_OUT_SPI_EN_N: u32 = 1 << 0;
/// Output: DAC enable. Must be high before the DAC answers on I2C.
pub const GPIO_OUT_DAC_EN: u32 = 1 << 1;
/// Output: LED 0.
pub const GPIO_OUT_LED_0: u32 = 1 << 2;
/// Output: LED 1.
pub const GPIO_OUT_LED_1: u32 = 1 << 3;

/// Output port value written at bring-up: DAC powered, LED 0 lit.
///
/// `SPI_EN_N` and `LED_1` are driven low.
pub const GPIO_OUT_BOOT: u32 = GPIO_OUT_DAC_EN | GPIO_OUT_LED_0;

// ── Buses ───────────────────────────────────────────────────────────────────

/// System I2C clock.
pub const PORT_SYS_SCL: Port = Port::new(1, 'N');
/// System I2C data.
pub const PORT_SYS_SDA: Port = Port::new(1, 'O');

/// SPI clock.
pub const PORT_SPI_CLK: Port = Port::new(1, 'I');
/// SPI controller out.
pub const PORT_SPI_MOSI: Port = Port::new(1, 'J');
/// SPI controller in.
pub const PORT_SPI_MISO: Port = Port::new(1, 'L');
/// SPI chip selects.
pub const PORT_SPI_CS: Port = Port::new(4, 'E');
/// SPI device interrupt lines.
pub const PORT_SPI_IRQ: Port = Port::new(4, 'F');

// ── Audio ───────────────────────────────────────────────────────────────────

/// Master clock input.
pub const PORT_MCLK: Port = Port::new(1, 'D');
/// I2S word clock.
pub const PORT_I2S_LRCLK: Port = Port::new(1, 'C');
/// I2S bit clock.
pub const PORT_I2S_BCLK: Port = Port::new(1, 'B');
/// I2S data lines 0..=4.
pub const PORT_I2S_DATA: [Port; I2S_LINES] = [
    Port::new(1, 'A'),
    Port::new(1, 'M'),
    Port::new(1, 'N'),
    Port::new(1, 'O'),
    Port::new(1, 'P'),
];

/// PDM microphone clock.
pub const PORT_PDM_CLK: Port = Port::new(1, 'F');
/// PDM microphone data.
pub const PORT_PDM_DATA: Port = Port::new(4, 'C');

/// Master clock edge counter, used to measure the USB master clock.
pub const PORT_MCLK_COUNT: Port = Port::new(16, 'B');
/// Master clock input from the USB audio side.
pub const PORT_MCLK_IN_USB: Port = Port::new(1, 'M');

/// I2S bit clock generator.
pub const CLKBLK_I2S_BCLK: ClockBlock = ClockBlock(4);
/// Master clock.
pub const CLKBLK_MCLK: ClockBlock = ClockBlock(5);
/// PDM clock A.
pub const CLKBLK_PDM_A: ClockBlock = ClockBlock(2);
/// PDM clock B.
pub const CLKBLK_PDM_B: ClockBlock = ClockBlock(3);
/// USB audio master clock.
pub const CLKBLK_AUDIO_MCLK_USB: ClockBlock = ClockBlock(1);

/// Every clock block the card claims.
pub const CLOCK_BLOCKS: [ClockBlock; 5] = [
    CLKBLK_AUDIO_MCLK_USB,
    CLKBLK_PDM_A,
    CLKBLK_PDM_B,
    CLKBLK_I2S_BCLK,
    CLKBLK_MCLK,
];

// ── Clocks and channel counts ───────────────────────────────────────────────

/// Master clock, Hz. 256 × 192 kHz.
pub const MASTER_CLOCK_FREQUENCY: u32 = 49_152_000;
/// Audio sample rate, Hz.
pub const AUDIO_CLOCK_FREQUENCY: u32 = 192_000;
/// PDM microphone clock, Hz. MCLK / 16.
pub const PDM_CLOCK_FREQUENCY: u32 = 3_072_000;

/// Width of the PDM data port.
pub const PDM_MICS_PORT: usize = 8;
/// Number of PDM microphones.
pub const PDM_MICS: usize = 8;

/// I2S data lines.
pub const I2S_LINES: usize = 5;
/// Channels per I2S frame.
pub const I2S_CHANS_PER_FRAME: usize = 2;
/// Bits per I2S sample slot.
pub const I2S_DATA_BITS: u32 = 32;
