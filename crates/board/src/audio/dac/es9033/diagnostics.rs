//! Where per-write failure reports go during bring-up.

use heapless::Vec;
use platform::es9033::partition_for;

use super::error::Es9033Error;

/// Receives one report per failed write.
pub trait DiagnosticSink {
    /// `step` is the zero-based index of the failed step in its sequence.
    fn write_failed(&mut self, step: usize, error: &Es9033Error);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn write_failed(&mut self, step: usize, error: &Es9033Error) {
        (**self).write_failed(step, error);
    }
}

/// Reports failures through the crate log at `warn` level.
///
/// One line per failed write, naming the step, the register block and the
/// error. Registers outside every block are reported as `unmapped`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn write_failed(&mut self, step: usize, error: &Es9033Error) {
        let block = block_name(error.reg());
        warn!("step {} ({}): {}", step, block, error);
    }
}

/// Partition name for `reg`, as printed in diagnostics.
fn block_name(reg: u8) -> &'static str {
    partition_for(reg).map_or("unmapped", |p| p.name)
}

/// Keeps the first `N` failures in memory.
///
/// Failures beyond capacity are counted in [`dropped`](Self::dropped).
#[derive(Debug, Default)]
pub struct FailureLog<const N: usize> {
    entries: Vec<(usize, Es9033Error), N>,
    dropped: usize,
}

impl<const N: usize> FailureLog<N> {
    /// Empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new(), dropped: 0 }
    }

    /// Recorded `(step, error)` pairs in the order they happened.
    #[must_use]
    pub fn entries(&self) -> &[(usize, Es9033Error)] {
        &self.entries
    }

    /// Failures that did not fit.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Total reports received.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len().saturating_add(self.dropped)
    }

    /// `true` if no failure was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> DiagnosticSink for FailureLog<N> {
    fn write_failed(&mut self, step: usize, error: &Es9033Error) {
        if self.entries.push((step, *error)).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}
