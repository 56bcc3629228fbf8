use std::io::{self, Write};

use cg_core::traits::Progress;

const BAR_WIDTH: u64 = 20;
const FILL: char = '█';
const EMPTY: char = '▒';

/// Barre de progression texte, redessinée sur place avec `\r`.
///
/// Only redraws when the displayed percentage changes; prints a newline
/// once the total is reached.
pub struct ProgressBar<W: Write> {
    name: &'static str,
    total: u64,
    progress: u64,
    last_permille: Option<u64>,
    out: W,
}

impl ProgressBar<io::Stderr> {
    /// Bar drawn on stderr, leaving stdout to the console art.
    #[must_use]
    pub fn stderr(name: &'static str, total: u64) -> Self {
        Self::new(name, total, io::stderr())
    }
}

impl<W: Write> ProgressBar<W> {
    /// Bar over `total` units drawn into `out`.
    pub fn new(name: &'static str, total: u64, out: W) -> Self {
        Self {
            name,
            total,
            progress: 0,
            last_permille: None,
            out,
        }
    }

    /// `name: [████▒▒…] 42.0%`. Empty when the total is zero.
    #[must_use]
    pub fn render(&self) -> String {
        if self.total == 0 {
            return String::new();
        }
        let filled = (self.progress * BAR_WIDTH + self.total / 2) / self.total;
        let mut bar = String::with_capacity(BAR_WIDTH as usize * 3 + 2);
        bar.push('[');
        bar.extend(std::iter::repeat_n(FILL, filled as usize));
        bar.extend(std::iter::repeat_n(EMPTY, (BAR_WIDTH - filled) as usize));
        bar.push(']');
        let percent = self.progress as f64 / self.total as f64 * 100.0;
        format!("{}: {bar} {percent:.1}%", self.name)
    }

    /// Consume the bar and hand back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ProgressBar<W> {
    fn advance(&mut self, n: u64) {
        if self.total == 0 {
            return;
        }
        self.progress = (self.progress + n).min(self.total);
        let permille = self.progress * 1000 / self.total;
        if self.last_permille == Some(permille) {
            return;
        }
        self.last_permille = Some(permille);

        // Purely cosmetic; a closed stderr must not abort the conversion.
        let _ = write!(self.out, "\r{}", self.render());
        if self.progress >= self.total {
            let _ = writeln!(self.out);
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(bar: ProgressBar<Vec<u8>>) -> String {
        String::from_utf8(bar.into_inner()).unwrap()
    }

    #[test]
    fn render_half_way() {
        let mut bar = ProgressBar::new("Creating Image", 10, Vec::new());
        bar.advance(5);
        assert_eq!(
            bar.render(),
            "Creating Image: [██████████▒▒▒▒▒▒▒▒▒▒] 50.0%"
        );
    }

    #[test]
    fn completes_with_newline_and_clamps() {
        let mut bar = ProgressBar::new("Mapping", 4, Vec::new());
        bar.advance(3);
        bar.advance(3);
        let text = output(bar);
        assert!(text.ends_with("100.0%\n"));
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn redraws_only_on_visible_change() {
        let mut bar = ProgressBar::new("Mapping", 1_000_000, Vec::new());
        for _ in 0..10 {
            bar.advance(1);
        }
        let text = output(bar);
        // 10 units of a million never move the permille counter past 0.
        assert_eq!(text.matches('\r').count(), 1);
    }

    #[test]
    fn zero_total_draws_nothing() {
        let mut bar = ProgressBar::new("Empty", 0, Vec::new());
        bar.advance(5);
        assert_eq!(bar.render(), "");
        assert!(output(bar).is_empty());
    }
}
