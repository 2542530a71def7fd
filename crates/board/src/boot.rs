//! uDSP-Card device bring-up.
//!
//! Initialization order (MUST be respected — order matters for correctness):
//!   1. Master clock: program the host PLL to a fixed 49.152 MHz
//!   2. Wait 100 ms for MCLK to settle
//!   3. GPIO: drive `DAC_EN | LED_0` on the output port
//!   4. ES9033: run the register bring-up sequence
//!
//! The system I²C bus must be configured per
//! [`platform::peripheral::SYS_I2C_CONFIG`] before it is handed to the DAC
//! driver.

use embedded_hal::delay::DelayNs;
use platform::board::{GPIO_OUT_BOOT, MASTER_CLOCK_FREQUENCY};
use platform::clock_config::MASTER_CLOCK_SETTLE_MS;
use platform::PinGroup;

use crate::audio::dac::DacDriver;

/// Ordered list of boot sequence steps for documentation and testing.
///
/// # Correctness Invariants
///
/// - The ES9033 general register block ignores writes until MCLK runs, so the
///   master clock and its settle time come first.
/// - The DAC does not answer on I²C until `DAC_EN` is high.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. Master clock: fixed 49.152 MHz from the host PLL",
    "2. Settle: 100 ms for MCLK",
    "3. GPIO: DAC_EN | LED_0 on the output port",
    "4. ES9033: register bring-up sequence",
];

/// Fixed-frequency master clock generator on the host.
pub trait MasterClock {
    /// Error type
    type Error;

    /// Program a fixed output frequency in Hz.
    fn set_fixed_frequency(&mut self, hz: u32) -> Result<(), Self::Error>;
}

/// Start the master clock at [`MASTER_CLOCK_FREQUENCY`].
///
/// # Errors
/// Whatever the clock generator reports.
pub fn master_clock_init<C: MasterClock>(clock: &mut C) -> Result<(), C::Error> {
    debug!("MCLK: {} Hz", MASTER_CLOCK_FREQUENCY);
    clock.set_fixed_frequency(MASTER_CLOCK_FREQUENCY)
}

/// Failure during [`devices_init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError<C, G, E> {
    /// The master clock could not be programmed. Nothing else was touched.
    #[error("master clock init failed: {0:?}")]
    MasterClock(C),
    /// The GPIO output port could not be written. The DAC was not touched.
    #[error("GPIO output port write failed: {0:?}")]
    GpioPort(G),
    /// The DAC bring-up reported failure.
    #[error("DAC bring-up failed: {0:?}")]
    Dac(E),
}

/// Bring up every device on the card.
///
/// Clock and GPIO failures abort immediately, since the DAC cannot be reached
/// without them. The DAC result is returned as-is.
///
/// # Errors
/// See [`BootError`].
pub fn devices_init<C, G, D, A>(
    clock: &mut C,
    gpio_out: &mut G,
    delay: &mut D,
    dac: &mut A,
) -> Result<(), BootError<C::Error, G::Error, A::Error>>
where
    C: MasterClock,
    G: PinGroup,
    D: DelayNs,
    A: DacDriver,
{
    master_clock_init(clock).map_err(BootError::MasterClock)?;
    delay.delay_ms(MASTER_CLOCK_SETTLE_MS);

    gpio_out.write(GPIO_OUT_BOOT).map_err(BootError::GpioPort)?;

    dac.hardware_init().map_err(BootError::Dac)?;
    info!("uDSP-Card devices up");
    Ok(())
}
