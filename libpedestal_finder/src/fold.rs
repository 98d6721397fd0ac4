/// Equal-width histogram of phase-folded timestamps over `[0, period)`.
///
/// A trial period that matches the true pedestal repetition rate collapses the
/// folded pedestal timestamps into a narrow set of bins, while uncorrelated
/// events spread out into a roughly flat floor. Only the tallest bin matters
/// for comparing hypotheses; the edges are kept so the winning histogram can
/// be turned into an acceptance window.
#[derive(Debug, Clone)]
pub struct FoldedHistogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl FoldedHistogram {
    /// Fold `timestamps` by `(t + phase) mod period` and bin over `[0, period)`.
    ///
    /// `period` must be positive and `bin_count` at least 1; callers validate both.
    pub fn fold(timestamps: &[f64], period: f64, phase: f64, bin_count: usize) -> Self {
        let bin_width = period / bin_count as f64;
        let mut counts = vec![0u64; bin_count];
        for &t in timestamps {
            let tmod = (t + phase).rem_euclid(period);
            let mut bin = (tmod / bin_width) as usize;
            // tmod can round up to the period itself at the float edge
            if bin >= bin_count {
                bin = bin_count - 1;
            }
            counts[bin] += 1;
        }
        let edges = (0..=bin_count).map(|i| i as f64 * bin_width).collect();
        Self { edges, counts }
    }

    /// Ascending bin edges, one more than the number of bins
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Index and content of the tallest bin. The first tallest bin wins ties.
    pub fn peak(&self) -> (usize, u64) {
        let mut peak_bin = 0;
        let mut peak = self.counts[0];
        for (bin, &content) in self.counts.iter().enumerate().skip(1) {
            if content > peak {
                peak = content;
                peak_bin = bin;
            }
        }
        (peak_bin, peak)
    }

    pub fn peak_height(&self) -> u64 {
        self.peak().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_bins_periodic_times_together() {
        // Four events one period apart plus one half a period off
        let timestamps = [0.25, 1.25, 2.25, 3.25, 0.75];
        let histogram = FoldedHistogram::fold(&timestamps, 1.0, 0.0, 10);
        assert_eq!(histogram.bin_count(), 10);
        assert_eq!(histogram.counts()[2], 4);
        assert_eq!(histogram.counts()[7], 1);
        assert_eq!(histogram.peak(), (2, 4));
    }

    #[test]
    fn test_fold_applies_phase_offset() {
        let timestamps = [0.95, 1.95, 2.95];
        let histogram = FoldedHistogram::fold(&timestamps, 1.0, 0.1, 10);
        // 0.95 + 0.1 wraps to 0.05
        assert_eq!(histogram.counts()[0], 3);
    }

    #[test]
    fn test_peak_first_bin_wins_ties() {
        let timestamps = [0.15, 0.85];
        let histogram = FoldedHistogram::fold(&timestamps, 1.0, 0.0, 10);
        assert_eq!(histogram.peak(), (1, 1));
    }

    #[test]
    fn test_edges_span_the_period() {
        let histogram = FoldedHistogram::fold(&[0.5], 2.0, 0.0, 4);
        assert_eq!(histogram.edges().len(), 5);
        assert!((histogram.edges()[0] - 0.0).abs() < 1e-12);
        assert!((histogram.edges()[4] - 2.0).abs() < 1e-12);
    }
}
