/// Observateur de progression, injecté dans le mapper et le rasterizer.
///
/// The core only calls [`Progress::advance`]; rendering the progress is
/// entirely up to the implementation.
///
/// # Example
/// ```
/// use cg_core::traits::Progress;
///
/// struct Counter(u64);
/// impl Progress for Counter {
///     fn advance(&mut self, n: u64) { self.0 += n; }
/// }
///
/// let mut c = Counter(0);
/// c.advance(3);
/// assert_eq!(c.0, 3);
/// ```
pub trait Progress {
    /// Record `n` more completed units of work.
    fn advance(&mut self, n: u64);
}

/// Silent reporter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&mut self, _n: u64) {}
}

/// Reporter that logs at `info` every time another tenth of the work is done.
///
/// # Example
/// ```
/// use cg_core::traits::{LogProgress, Progress};
/// let mut p = LogProgress::new("Mapping", 100);
/// p.advance(150);
/// assert_eq!(p.done(), 100);
/// ```
#[derive(Debug)]
pub struct LogProgress {
    label: &'static str,
    total: u64,
    done: u64,
    last_decile: u64,
}

impl LogProgress {
    /// Reporter for `total` units of work.
    #[must_use]
    pub fn new(label: &'static str, total: u64) -> Self {
        Self {
            label,
            total,
            done: 0,
            last_decile: 0,
        }
    }

    /// Units completed so far, clamped to the total.
    #[must_use]
    pub fn done(&self) -> u64 {
        self.done
    }
}

impl Progress for LogProgress {
    fn advance(&mut self, n: u64) {
        self.done = (self.done + n).min(self.total);
        if self.total == 0 {
            return;
        }
        let decile = self.done * 10 / self.total;
        if decile > self.last_decile {
            self.last_decile = decile;
            log::info!(
                "{}: {}/{} ({:.1}%)",
                self.label,
                self.done,
                self.total,
                self.done as f64 / self.total as f64 * 100.0
            );
        }
    }
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn advance(&mut self, n: u64) {
        (**self).advance(n);
    }
}
