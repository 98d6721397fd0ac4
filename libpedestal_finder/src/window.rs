use ndarray::Array1;

use super::fold::FoldedHistogram;

/// Fraction of the peak content a neighboring bin needs to join the window.
const NEIGHBOR_FRACTION: f64 = 0.1;

/// Folded-time acceptance interval derived from the winning histogram.
///
/// The window starts as the tallest bin. The two neighboring bins may also
/// contain pedestals; each is included if its content is at least 10% of the
/// peak, checked independently and at most one bin per side. A peak sitting at
/// the first or last bin has no neighbor on that side and is not extended there.
pub fn acceptance_window(histogram: &FoldedHistogram) -> (f64, f64) {
    let counts = histogram.counts();
    let (peak_bin, peak) = histogram.peak();
    let threshold = NEIGHBOR_FRACTION * peak as f64;

    let mut first = peak_bin;
    let mut last = peak_bin;
    if peak_bin > 0 && counts[peak_bin - 1] as f64 > threshold {
        first = peak_bin - 1;
    }
    if peak_bin + 1 < counts.len() && counts[peak_bin + 1] as f64 > threshold {
        last = peak_bin + 1;
    }

    let edges = histogram.edges();
    (edges[first], edges[last + 1])
}

/// Mask of folded timestamps strictly inside the window; values on either
/// boundary are excluded.
pub fn window_mask(tmod: &[f64], min_edge: f64, max_edge: f64) -> Vec<bool> {
    tmod.iter()
        .map(|&t| t > min_edge && t < max_edge)
        .collect()
}

/// Deselect the brightest currently selected events.
///
/// Cosmics accidentally falling inside the acceptance window are the brightest
/// of the selected events; dropping a fixed number of them trades a few true
/// pedestals for a cleaner sample. Exactly `min(budget, n_selected)` events are
/// flipped: the highest-intensity selected ones, NaN intensity ranking as zero
/// brightness and ties resolved toward the earlier event.
pub fn remove_brightest(mask: &mut Array1<bool>, intensity: &Array1<f64>, budget: usize) {
    let brightness = |index: usize| -> f64 {
        let value = intensity[index];
        if value.is_nan() {
            0.0
        } else {
            value
        }
    };

    let mut selected: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter_map(|(index, &is_selected)| is_selected.then_some(index))
        .collect();
    if selected.is_empty() || budget == 0 {
        return;
    }

    // Partial selection of the brightest; the comparator is a total order
    // (brightness descending, then index ascending) so the kept set is unique.
    let n_remove = budget.min(selected.len());
    if n_remove < selected.len() {
        selected.select_nth_unstable_by(n_remove, |a, b| {
            brightness(*b).total_cmp(&brightness(*a)).then(a.cmp(b))
        });
    }
    for &index in selected.iter().take(n_remove) {
        mask[index] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn histogram_from(timestamps: &[f64], bin_count: usize) -> FoldedHistogram {
        FoldedHistogram::fold(timestamps, 1.0, 0.0, bin_count)
    }

    #[test]
    fn test_window_is_peak_bin_without_neighbors() {
        // peak of 20 in bin 5, single events next to it: 1 <= 2.0 threshold
        let mut timestamps = vec![0.55; 20];
        timestamps.push(0.45);
        timestamps.push(0.65);
        let histogram = histogram_from(&timestamps, 10);
        let (min_edge, max_edge) = acceptance_window(&histogram);
        assert!((min_edge - 0.5).abs() < 1e-12);
        assert!((max_edge - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_window_includes_populated_neighbors() {
        let mut timestamps = vec![0.55; 20];
        timestamps.extend(vec![0.45; 3]);
        timestamps.extend(vec![0.65; 5]);
        let histogram = histogram_from(&timestamps, 10);
        let (min_edge, max_edge) = acceptance_window(&histogram);
        assert!((min_edge - 0.4).abs() < 1e-12);
        assert!((max_edge - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_window_extends_one_side_only() {
        let mut timestamps = vec![0.55; 20];
        timestamps.extend(vec![0.45; 3]);
        let histogram = histogram_from(&timestamps, 10);
        let (min_edge, max_edge) = acceptance_window(&histogram);
        assert!((min_edge - 0.4).abs() < 1e-12);
        assert!((max_edge - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_window_peak_at_histogram_boundary() {
        // peak in the first bin: no neighbor on the left to look at
        let mut timestamps = vec![0.05; 20];
        timestamps.extend(vec![0.15; 5]);
        let histogram = histogram_from(&timestamps, 10);
        let (min_edge, max_edge) = acceptance_window(&histogram);
        assert!((min_edge - 0.0).abs() < 1e-12);
        assert!((max_edge - 0.2).abs() < 1e-12);

        // peak in the last bin: no neighbor on the right
        let mut timestamps = vec![0.95; 20];
        timestamps.extend(vec![0.85; 5]);
        let histogram = histogram_from(&timestamps, 10);
        let (min_edge, max_edge) = acceptance_window(&histogram);
        assert!((min_edge - 0.8).abs() < 1e-12);
        assert!((max_edge - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_mask_boundaries_are_exclusive() {
        let tmod = [0.5, 0.55, 0.6, 0.59999];
        let mask = window_mask(&tmod, 0.5, 0.6);
        assert_eq!(mask, vec![false, true, false, true]);
    }

    #[test]
    fn test_remove_brightest_takes_top_budget() {
        let mut mask = array![true, true, true, true, false];
        let intensity = array![10.0, 40.0, 20.0, 30.0, 99.0];
        remove_brightest(&mut mask, &intensity, 2);
        // 40 and 30 go; 99 was never selected
        assert_eq!(mask, array![true, false, true, false, false]);
    }

    #[test]
    fn test_remove_brightest_ties_drop_earlier_events() {
        let mut mask = array![true, true, true];
        let intensity = array![5.0, 5.0, 5.0];
        remove_brightest(&mut mask, &intensity, 2);
        assert_eq!(mask, array![false, false, true]);
    }

    #[test]
    fn test_remove_brightest_nan_ranks_as_zero() {
        let mut mask = array![true, true, true];
        let intensity = array![f64::NAN, 1.0, 2.0];
        remove_brightest(&mut mask, &intensity, 2);
        assert_eq!(mask, array![true, false, false]);
    }

    #[test]
    fn test_remove_brightest_budget_exceeds_selection() {
        let mut mask = array![false, true, true];
        let intensity = array![1.0, 2.0, 3.0];
        remove_brightest(&mut mask, &intensity, 10);
        assert_eq!(mask, array![false, false, false]);
    }
}
