//! Integration test: ES9033 bring-up against exact bus expectations.
//!
//! Tests that:
//!   1. A clean run issues exactly the nine expected writes, in order
//!   2. Two runs produce identical bus traffic
//!   3. A mid-sequence NACK does not stop later writes
//!   4. A clean run reports zero diagnostics
//!   5. The resync triple is three consecutive writes to 0x2C
//!   6. Unsupported registers produce no bus traffic at all
//!
//! Run with: cargo test -p udsp-board --test integration_bring_up

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]

use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use udsp_board::audio::dac::es9033::{apply_sequence, BringUpStep, BRING_UP_SEQUENCE};
use udsp_board::{es9033_init, es9033_init_with, Es9033Error, FailureLog};

const GENERAL: u8 = 0x4B;
const SUBSYSTEM: u8 = 0x4F;

fn expected_writes() -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write(SUBSYSTEM, vec![0xC0, 0x03]),
        I2cTransaction::write(SUBSYSTEM, vec![0xC1, 0xC1]),
        I2cTransaction::write(SUBSYSTEM, vec![0xCA, 0x40]),
        I2cTransaction::write(GENERAL, vec![0x02, 0x01]),
        I2cTransaction::write(GENERAL, vec![0x04, 0x07]),
        I2cTransaction::write(GENERAL, vec![0x2C, 0x10]),
        I2cTransaction::write(GENERAL, vec![0x2C, 0x0F]),
        I2cTransaction::write(GENERAL, vec![0x2C, 0x00]),
        I2cTransaction::write(GENERAL, vec![0x00, 0x3E]),
    ]
}

#[test]
fn clean_run_matches_expected_bus_traffic() {
    let mut i2c = I2cMock::new(&expected_writes());
    es9033_init(&mut i2c, &mut NoopDelay::new()).unwrap();
    i2c.done();
}

#[test]
fn replay_is_identical() {
    let mut expectations = expected_writes();
    expectations.extend(expected_writes());
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = NoopDelay::new();
    es9033_init(&mut i2c, &mut delay).unwrap();
    es9033_init(&mut i2c, &mut delay).unwrap();
    i2c.done();
}

#[test]
fn nack_mid_sequence_still_attempts_every_write() {
    let mut expectations = expected_writes();
    // CP_CLOCK_DIV
    expectations[4] = I2cTransaction::write(GENERAL, vec![0x04, 0x07]).with_error(ErrorKind::Other);
    let mut i2c = I2cMock::new(&expectations);
    let mut log = FailureLog::<9>::new();

    let err = es9033_init_with(&mut i2c, &mut NoopDelay::new(), &mut log).unwrap_err();

    // done() fails if any expected write was skipped
    i2c.done();
    assert_eq!(err.failed_writes, 1);
    assert_eq!(err.attempted_writes, 9);
    assert_eq!(
        err.first,
        Es9033Error::BusWriteFailed { reg: 0x04, value: 0x07, kind: ErrorKind::Other }
    );
    assert_eq!(log.entries(), &[(4, err.first)]);
}

#[test]
fn every_write_failing_reports_nine_diagnostics() {
    let expectations: Vec<_> =
        expected_writes().into_iter().map(|t| t.with_error(ErrorKind::Bus)).collect();
    let mut i2c = I2cMock::new(&expectations);
    let mut log = FailureLog::<9>::new();

    let err = es9033_init_with(&mut i2c, &mut NoopDelay::new(), &mut log).unwrap_err();

    i2c.done();
    assert_eq!(err.failed_writes, 9);
    assert_eq!(log.total(), 9);
    assert_eq!(log.dropped(), 0);
    assert_eq!(err.first.reg(), 0xC0);
}

#[test]
fn clean_run_emits_no_diagnostics() {
    let mut i2c = I2cMock::new(&expected_writes());
    let mut log = FailureLog::<9>::new();
    es9033_init_with(&mut i2c, &mut NoopDelay::new(), &mut log).unwrap();
    i2c.done();
    assert!(log.is_empty());
}

#[test]
fn resync_triple_is_consecutive_and_ordered() {
    let resync: Vec<_> = BRING_UP_SEQUENCE
        .iter()
        .enumerate()
        .filter(|(_, s)| s.reg == 0x2C)
        .map(|(i, s)| (i, s.value))
        .collect();
    assert_eq!(resync, [(5, 0x10), (6, 0x0F), (7, 0x00)]);
}

#[test]
fn unsupported_register_makes_no_transaction() {
    let steps = [
        BringUpStep::write(0x59, 0x00),
        BringUpStep::write(0xE1, 0x00),
        BringUpStep::write(0xFF, 0x00),
    ];
    // no expectations: any bus access would fail the mock
    let none: [I2cTransaction; 0] = [];
    let mut i2c = I2cMock::new(&none);
    let mut log = FailureLog::<3>::new();

    let err = apply_sequence(&mut i2c, &mut NoopDelay::new(), &steps, &mut log).unwrap_err();

    i2c.done();
    assert_eq!(err.failed_writes, 3);
    assert_eq!(err.first, Es9033Error::UnsupportedRegister { reg: 0x59 });
    assert_eq!(log.total(), 3);
}
