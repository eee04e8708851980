//! Benchmark Report
//!
//! Accumulates per-variant trial timings and renders the plain-text summary
//! the binary prints after the trial loop: one row per variant with total
//! and average wall-clock seconds, plus a dispatch-overhead comparison line
//! per element type.

use std::fmt::Write;
use std::time::Duration;

/// Accumulated timings for one sort variant across the trial loop.
#[derive(Debug, Clone)]
pub struct VariantStats {
    /// Display name, e.g. "generic-int" or "specialized-string".
    pub label: &'static str,
    /// Sum of wall-clock durations over all recorded trials.
    pub total: Duration,
    /// Number of trials recorded so far.
    pub trials: u32,
}

impl VariantStats {
    pub fn new(label: &'static str) -> Self {
        VariantStats {
            label,
            total: Duration::ZERO,
            trials: 0,
        }
    }

    /// Record one trial's duration.
    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.trials += 1;
    }

    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Average seconds per trial; zero when nothing was recorded.
    pub fn average_secs(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total.as_secs_f64() / f64::from(self.trials)
        }
    }
}

/// A complete benchmark report over the four variant combinations.
#[derive(Debug, Clone, Default)]
pub struct Report {
    variants: Vec<VariantStats>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn push(&mut self, stats: VariantStats) {
        self.variants.push(stats);
    }

    /// Render the summary table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(
            out,
            "{:>20} | {:>8} | {:>12} | {:>12}",
            "Variant", "Trials", "Total (s)", "Avg (s)"
        )
        .unwrap();
        writeln!(
            out,
            "{:-<20}-+-{:-<8}-+-{:-<12}-+-{:-<12}",
            "", "", "", ""
        )
        .unwrap();
        for v in &self.variants {
            writeln!(
                out,
                "{:>20} | {:>8} | {:>12.6} | {:>12.6}",
                v.label,
                v.trials,
                v.total_secs(),
                v.average_secs()
            )
            .unwrap();
        }
        out
    }
}

/// One-line comparison of the generic variant against its specialized
/// counterpart, phrased in whichever direction is the slowdown.
pub fn comparison_line(generic: &VariantStats, specialized: &VariantStats) -> String {
    let g = generic.average_secs();
    let s = specialized.average_secs();
    if g <= 0.0 || s <= 0.0 {
        return format!("{} vs {}: no timings recorded", generic.label, specialized.label);
    }
    let ratio = g / s;
    if ratio >= 1.0 {
        format!(
            "{} vs {}: generic is {:.2}x slower",
            generic.label, specialized.label, ratio
        )
    } else {
        format!(
            "{} vs {}: generic is {:.2}x faster",
            generic.label, specialized.label, 1.0 / ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_average() {
        let mut stats = VariantStats::new("generic-int");
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(30));
        assert_eq!(stats.trials, 2);
        assert!((stats.total_secs() - 0.040).abs() < 1e-9);
        assert!((stats.average_secs() - 0.020).abs() < 1e-9);
    }

    #[test]
    fn test_average_no_trials() {
        let stats = VariantStats::new("generic-int");
        assert_eq!(stats.average_secs(), 0.0);
    }

    #[test]
    fn test_render_contains_variants() {
        let mut report = Report::new();
        let mut a = VariantStats::new("generic-int");
        a.record(Duration::from_millis(5));
        let mut b = VariantStats::new("specialized-int");
        b.record(Duration::from_millis(2));
        report.push(a);
        report.push(b);

        let text = report.render();
        assert!(text.contains("generic-int"));
        assert!(text.contains("specialized-int"));
        assert!(text.contains("Total (s)"));
    }

    #[test]
    fn test_comparison_line_slower() {
        let mut g = VariantStats::new("generic-int");
        g.record(Duration::from_millis(20));
        let mut s = VariantStats::new("specialized-int");
        s.record(Duration::from_millis(10));
        let line = comparison_line(&g, &s);
        assert!(line.contains("2.00x slower"), "{}", line);
    }

    #[test]
    fn test_comparison_line_faster() {
        let mut g = VariantStats::new("generic-string");
        g.record(Duration::from_millis(10));
        let mut s = VariantStats::new("specialized-string");
        s.record(Duration::from_millis(20));
        let line = comparison_line(&g, &s);
        assert!(line.contains("2.00x faster"), "{}", line);
    }

    #[test]
    fn test_comparison_line_empty() {
        let g = VariantStats::new("generic-int");
        let s = VariantStats::new("specialized-int");
        assert!(comparison_line(&g, &s).contains("no timings"));
    }
}
