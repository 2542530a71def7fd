//! ES9033 power-on register sequence.
//!
//! Order (MUST be respected):
//!   1. Sub-system block (no clock needed): GPIO1 sync, PLL bypass with MCLK
//!      routed in, PLL 1.2 V regulator on, then 1 ms for the regulator.
//!   2. General block (MCLK must already run): CLK_IDAC divider, charge-pump
//!      divider, the resync triple on `RESYNC_CONFIG`.
//!   3. `SYSTEM_CONFIG`: analog stages, modulator and interpolation clocks and
//!      HIFI mode in one write, then 10 µs.
//!
//! Every step is attempted even after a failure, and settle delays run
//! regardless of whether the preceding write succeeded.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use platform::es9033::{
    DacClockConfig, Pll2, Pll7, ResetPll1, ResyncConfig, SystemConfig, REG_CP_CLOCK_DIV,
    REG_DAC_CLOCK_CONFIG, REG_PLL2, REG_PLL7_MSB, REG_RESET_PLL1, REG_RESYNC_CONFIG,
    REG_SYSTEM_CONFIG,
};

use super::diagnostics::{DiagnosticSink, LogDiagnostics};
use super::dispatcher::write_register;
use super::error::{BringUpError, Es9033Error};

/// One register write, optionally followed by a fixed wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BringUpStep {
    /// Register number.
    pub reg: u8,
    /// Value to write.
    pub value: u8,
    /// Wait in microseconds after the write, whether or not it succeeded.
    pub settle_us: Option<u32>,
}

impl BringUpStep {
    /// Write with no settle time.
    #[must_use]
    pub const fn write(reg: u8, value: u8) -> Self {
        Self { reg, value, settle_us: None }
    }

    /// Same write, followed by a wait of `settle_us` microseconds.
    #[must_use]
    pub const fn then_wait_us(self, settle_us: u32) -> Self {
        Self { settle_us: Some(settle_us), ..self }
    }
}

/// Charge-pump clock divider for 768 kHz.
pub const CP_CLOCK_DIV_768K: u8 = 7;

/// PLL 1.2 V regulator start-up time, in microseconds.
pub const PLL_REGULATOR_SETTLE_US: u32 = 1_000;

/// Analog stage enable time after `SYSTEM_CONFIG`, in microseconds.
///
/// Passed to [`DelayNs::delay_us`] as is, so the wait does not depend on any
/// timer tick rate.
pub const ANALOG_ENABLE_SETTLE_US: u32 = 10;

/// Number of steps in [`BRING_UP_SEQUENCE`].
pub const BRING_UP_STEPS: usize = 9;

/// The fixed ES9033 bring-up table.
pub const BRING_UP_SEQUENCE: [BringUpStep; BRING_UP_STEPS] = [
    // sub-system block, reachable before MCLK
    BringUpStep::write(REG_RESET_PLL1, ResetPll1::BRING_UP.encode()),
    BringUpStep::write(REG_PLL2, Pll2::BRING_UP.encode()),
    BringUpStep::write(REG_PLL7_MSB, Pll7::REGULATOR_1V2_ON.msb()).then_wait_us(PLL_REGULATOR_SETTLE_US),
    // general block
    BringUpStep::write(REG_DAC_CLOCK_CONFIG, DacClockConfig::DIV_2.encode()),
    BringUpStep::write(REG_CP_CLOCK_DIV, CP_CLOCK_DIV_768K),
    // resync triple: keep these three adjacent and in this order
    BringUpStep::write(REG_RESYNC_CONFIG, ResyncConfig::DAC_CLOCK_DIVIDER.encode()),
    BringUpStep::write(REG_RESYNC_CONFIG, ResyncConfig::DATAPATH.encode()),
    BringUpStep::write(REG_RESYNC_CONFIG, ResyncConfig::CLEAR.encode()),
    BringUpStep::write(REG_SYSTEM_CONFIG, SystemConfig::RUNNING.encode())
        .then_wait_us(ANALOG_ENABLE_SETTLE_US),
];

/// Run `steps` in order, reporting each failed write to `sink`.
///
/// Never stops early. Returns `Ok` only if every write succeeded.
///
/// # Errors
/// [`BringUpError`] with the failure count and the first failure.
pub fn apply_sequence<I, D, S>(
    i2c: &mut I,
    delay: &mut D,
    steps: &[BringUpStep],
    mut sink: S,
) -> Result<(), BringUpError>
where
    I: I2c,
    D: DelayNs,
    S: DiagnosticSink,
{
    let mut failed_writes = 0usize;
    let mut first: Option<Es9033Error> = None;

    for (index, step) in steps.iter().enumerate() {
        if let Err(e) = write_register(i2c, step.reg, step.value) {
            sink.write_failed(index, &e);
            failed_writes = failed_writes.saturating_add(1);
            first.get_or_insert(e);
        }
        if let Some(us) = step.settle_us {
            delay.delay_us(us);
        }
    }

    match first {
        None => {
            debug!("ES9033: {} writes ok", steps.len());
            Ok(())
        }
        Some(first) => {
            let err = BringUpError { failed_writes, attempted_writes: steps.len(), first };
            error!("{}", err);
            Err(err)
        }
    }
}

/// Bring the ES9033 into its operating state.
///
/// The master clock must already be running. Failures are logged through the
/// crate log.
///
/// # Errors
/// [`BringUpError`] if any write failed.
pub fn es9033_init<I, D>(i2c: &mut I, delay: &mut D) -> Result<(), BringUpError>
where
    I: I2c,
    D: DelayNs,
{
    es9033_init_with(i2c, delay, LogDiagnostics)
}

/// [`es9033_init`] with a caller-provided diagnostic sink.
///
/// # Errors
/// [`BringUpError`] if any write failed.
pub fn es9033_init_with<I, D, S>(i2c: &mut I, delay: &mut D, sink: S) -> Result<(), BringUpError>
where
    I: I2c,
    D: DelayNs,
    S: DiagnosticSink,
{
    apply_sequence(i2c, delay, &BRING_UP_SEQUENCE, sink)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::super::diagnostics::FailureLog;
    use super::*;

    /// Records writes; fails the write whose index is in `fail_at`.
    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail_at: Vec<usize>,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(&mut self, addr: u8, ops: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
            let index = self.writes.len();
            for op in ops.iter() {
                if let Operation::Write(d) = op {
                    self.writes.push((addr, d.to_vec()));
                }
            }
            if self.fail_at.contains(&index) {
                Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockDelay {
        waits_us: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waits_us.push(ns / 1_000);
        }
        fn delay_us(&mut self, us: u32) {
            self.waits_us.push(us);
        }
    }

    #[test]
    fn table_matches_literal_bytes() {
        let pairs: Vec<(u8, u8)> = BRING_UP_SEQUENCE.iter().map(|s| (s.reg, s.value)).collect();
        assert_eq!(
            pairs,
            [
                (0xC0, 0x03),
                (0xC1, 0xC1),
                (0xCA, 0x40),
                (0x02, 0x01),
                (0x04, 0x07),
                (0x2C, 0x10),
                (0x2C, 0x0F),
                (0x2C, 0x00),
                (0x00, 0x3E),
            ]
        );
    }

    #[test]
    fn only_pll_regulator_and_system_config_settle() {
        let settles: Vec<_> = BRING_UP_SEQUENCE.iter().map(|s| s.settle_us).collect();
        assert_eq!(settles[2], Some(1_000));
        assert_eq!(settles[8], Some(10));
        assert_eq!(settles.iter().filter(|s| s.is_some()).count(), 2);
    }

    #[test]
    fn happy_path_writes_everything_and_waits() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        let mut log = FailureLog::<BRING_UP_STEPS>::new();
        es9033_init_with(&mut i2c, &mut delay, &mut log).unwrap();
        assert_eq!(i2c.writes.len(), BRING_UP_STEPS);
        assert_eq!(delay.waits_us, [1_000, 10]);
        assert!(log.is_empty());
    }

    #[test]
    fn subsystem_writes_use_subsystem_address() {
        let mut i2c = MockI2c::default();
        es9033_init(&mut i2c, &mut MockDelay::default()).unwrap();
        assert!(i2c.writes[..3].iter().all(|(a, _)| *a == 0x4F));
        assert!(i2c.writes[3..].iter().all(|(a, _)| *a == 0x4B));
    }

    #[test]
    fn failure_does_not_stop_sequence() {
        let mut i2c = MockI2c { fail_at: std::vec![2], ..MockI2c::default() };
        let mut delay = MockDelay::default();
        let mut log = FailureLog::<BRING_UP_STEPS>::new();
        let err = es9033_init_with(&mut i2c, &mut delay, &mut log).unwrap_err();
        assert_eq!(i2c.writes.len(), BRING_UP_STEPS);
        // settle after the failed PLL7 write still happens
        assert_eq!(delay.waits_us, [1_000, 10]);
        assert_eq!(err.failed_writes, 1);
        assert_eq!(err.attempted_writes, BRING_UP_STEPS);
        assert_eq!(err.first.reg(), 0xCA);
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].0, 2);
    }

    #[test]
    fn first_failure_is_earliest() {
        let mut i2c = MockI2c { fail_at: std::vec![6, 4], ..MockI2c::default() };
        let err = es9033_init(&mut i2c, &mut MockDelay::default()).unwrap_err();
        assert_eq!(err.failed_writes, 2);
        assert_eq!(
            err.first,
            Es9033Error::BusWriteFailed {
                reg: 0x04,
                value: 0x07,
                kind: ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address),
            }
        );
    }

    #[test]
    fn unsupported_step_is_reported_without_bus_traffic() {
        let steps = [BringUpStep::write(0x60, 0x01), BringUpStep::write(0x00, 0x3E)];
        let mut i2c = MockI2c::default();
        let mut log = FailureLog::<2>::new();
        let err = apply_sequence(&mut i2c, &mut MockDelay::default(), &steps, &mut log).unwrap_err();
        assert_eq!(err.first, Es9033Error::UnsupportedRegister { reg: 0x60 });
        assert_eq!(i2c.writes, [(0x4B, std::vec![0x00, 0x3E])]);
        assert_eq!(log.total(), 1);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut i2c = MockI2c::default();
        apply_sequence(&mut i2c, &mut MockDelay::default(), &[], LogDiagnostics).unwrap();
        assert!(i2c.writes.is_empty());
    }

    #[test]
    fn settle_times_reach_the_delay_unchanged() {
        let steps = [
            BringUpStep::write(0x00, 0x3E).then_wait_us(10),
            BringUpStep::write(0x00, 0x3E).then_wait_us(u32::MAX),
        ];
        let mut delay = MockDelay::default();
        apply_sequence(&mut MockI2c::default(), &mut delay, &steps, LogDiagnostics).unwrap();
        assert_eq!(delay.waits_us, [10, u32::MAX]);
    }
}
