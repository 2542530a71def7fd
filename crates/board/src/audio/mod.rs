//! Audio subsystem — DAC drivers
//!
//! Vertically sliced: one sub-directory per hardware component.
//!
//! # Structure
//!
//! - `dac/` — DAC drivers (`Es9033` hardware, `MockDac` for tests)
//!
//! # Dependency Injection
//!
//! Board code targets the [`dac::DacDriver`] trait.
//! Concrete types are injected at the call site:
//!
//! ```rust,ignore
//! fn bring_up<A: DacDriver>(dac: &mut A) { /* ... */ }
//!
//! // Hardware:
//! bring_up(&mut Es9033::new(i2c, delay));
//! // Tests:
//! bring_up(&mut MockDac::new());
//! ```

pub mod dac;

pub use dac::es9033::Es9033;
pub use dac::mock::MockDac;
pub use dac::DacDriver;
