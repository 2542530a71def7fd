//! Integration test: what the default bring-up sink writes to the host log.
//!
//! Tests that:
//!   1. Each failed write produces exactly one `warn` line
//!   2. That line names the step, the register block, the register and the value
//!   3. A failed run adds exactly one `error` summary line
//!   4. A clean run produces no `warn` or `error` lines
//!
//! Run with: cargo test -p udsp-board --features tracing --test log_diagnostics

#![cfg(feature = "tracing")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]

use std::fmt;
use std::sync::{Arc, Mutex};

use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use tracing::field::{Field, Visit};
use tracing::{span, Event, Level, Metadata, Subscriber};
use udsp_board::audio::dac::es9033::{apply_sequence, BringUpStep};
use udsp_board::{es9033_init, LogDiagnostics};

// -- Capturing subscriber -------------------------------------------------

type Captured = Arc<Mutex<Vec<(Level, String)>>>;

struct Capture {
    events: Captured,
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }
    fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }
    fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
    fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
    fn event(&self, event: &Event<'_>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push((*event.metadata().level(), visitor.0));
    }
    fn enter(&self, _: &span::Id) {}
    fn exit(&self, _: &span::Id) {}
}

/// Run `f` with a capturing subscriber installed on this thread.
fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    let events = Captured::default();
    let subscriber = Capture { events: events.clone() };
    tracing::subscriber::with_default(subscriber, f);
    let out = events.lock().unwrap().clone();
    out
}

fn at(events: &[(Level, String)], level: Level) -> Vec<String> {
    events.iter().filter(|(l, _)| *l == level).map(|(_, m)| m.clone()).collect()
}

fn expected_writes() -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write(0x4F, vec![0xC0, 0x03]),
        I2cTransaction::write(0x4F, vec![0xC1, 0xC1]),
        I2cTransaction::write(0x4F, vec![0xCA, 0x40]),
        I2cTransaction::write(0x4B, vec![0x02, 0x01]),
        I2cTransaction::write(0x4B, vec![0x04, 0x07]),
        I2cTransaction::write(0x4B, vec![0x2C, 0x10]),
        I2cTransaction::write(0x4B, vec![0x2C, 0x0F]),
        I2cTransaction::write(0x4B, vec![0x2C, 0x00]),
        I2cTransaction::write(0x4B, vec![0x00, 0x3E]),
    ]
}

// -- Tests ----------------------------------------------------------------

#[test]
fn one_warning_per_failed_write() {
    let mut expectations = expected_writes();
    expectations[2] = I2cTransaction::write(0x4F, vec![0xCA, 0x40]).with_error(ErrorKind::Other);
    expectations[6] = I2cTransaction::write(0x4B, vec![0x2C, 0x0F]).with_error(ErrorKind::Bus);
    let mut i2c = I2cMock::new(&expectations);

    let events = capture(|| {
        assert!(es9033_init(&mut i2c, &mut NoopDelay::new()).is_err());
    });
    i2c.done();

    let warnings = at(&events, Level::WARN);
    assert_eq!(
        warnings,
        [
            "step 2 (subsystem): ES9033: Failed to write reg 0xca val 0x40",
            "step 6 (general): ES9033: Failed to write reg 0x2c val 0xf",
        ]
    );

    let errors = at(&events, Level::ERROR);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("2/9 writes failed"), "{}", errors[0]);
}

#[test]
fn unmapped_register_is_named_as_such() {
    let steps = [BringUpStep::write(0xE1, 0x00)];
    let none: [I2cTransaction; 0] = [];
    let mut i2c = I2cMock::new(&none);

    let events = capture(|| {
        assert!(apply_sequence(&mut i2c, &mut NoopDelay::new(), &steps, LogDiagnostics).is_err());
    });
    i2c.done();

    assert_eq!(
        at(&events, Level::WARN),
        ["step 0 (unmapped): ES9033: Reg 0xe1 is not writable"]
    );
}

#[test]
fn clean_run_logs_no_warnings_or_errors() {
    let mut i2c = I2cMock::new(&expected_writes());

    let events = capture(|| {
        es9033_init(&mut i2c, &mut NoopDelay::new()).unwrap();
    });
    i2c.done();

    assert!(at(&events, Level::WARN).is_empty());
    assert!(at(&events, Level::ERROR).is_empty());
}
