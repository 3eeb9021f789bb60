//! Shared utility functions for USHV crates.

/// Percentage and ratio helpers used by the summary tables
pub mod math {
    /// Round to two decimal places, half away from zero.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// `part / whole * 100`, rounded to two decimals.
    ///
    /// A zero `whole` yields 0.0 instead of NaN.
    pub fn percentage(part: u64, whole: u64) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        round2(part as f64 / whole as f64 * 100.0)
    }

    /// Percentages of every count against their sum.
    ///
    /// All zeros when the sum is zero.
    pub fn percentages_of_total(counts: &[u64]) -> Vec<f64> {
        let total: u64 = counts.iter().sum();
        counts.iter().map(|&c| percentage(c, total)).collect()
    }

}
