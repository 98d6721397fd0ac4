use ndarray::Array1;

use super::constants::{EARLY_EPOCH_FREQUENCY, FREQUENCY_EPOCH_LAST_RUN, LATE_EPOCH_FREQUENCY};
use super::error::PedestalSearchError;
use super::event_table::EventTable;
use super::period_search::{best_period, best_phase, bin_count, SearchParams};
use super::prefilter::flatfield_mask;
use super::window::{acceptance_window, remove_brightest, window_mask};

/// Approximate interleaved pedestal frequency (Hz) for the epoch of a run.
pub fn approximate_frequency_for_run(run_number: u32) -> f64 {
    if run_number > FREQUENCY_EPOCH_LAST_RUN {
        LATE_EPOCH_FREQUENCY
    } else {
        EARLY_EPOCH_FREQUENCY
    }
}

/// Result of one completed pedestal search.
#[derive(Debug, Clone)]
pub struct PedestalSelection {
    /// Repetition period (s) with the sharpest phase-folded peak.
    pub best_period: f64,
    /// Phase offset (s) aligning the pedestal cluster within the fold.
    pub best_phase: f64,
    /// Selection mask aligned with the event table; true marks a pedestal.
    pub mask: Array1<bool>,
}

impl PedestalSelection {
    pub fn n_selected(&self) -> usize {
        self.mask.iter().filter(|&&selected| selected).count()
    }

    /// The event ids of the selected pedestals, in table order
    pub fn event_ids(&self, table: &EventTable) -> Vec<i64> {
        table
            .event_id
            .iter()
            .zip(self.mask.iter())
            .filter_map(|(&id, &selected)| selected.then_some(id))
            .collect()
    }
}

/// Identify the interleaved pedestal events of one sub-run table.
///
/// The pedestals are injected very regularly, to better than microsecond
/// precision, at approximately the given frequency. Four stages run in order:
/// probable flat-field events are excluded, the repetition period is found by a
/// grid search around `1 / approximate_frequency`, the phase offset is found by
/// a second grid search at that period, and finally an acceptance window around
/// the folded peak is turned into a selection mask from which the brightest
/// events are dropped as probable cosmics.
///
/// Fails with [`PedestalSearchError::TooFewEvents`] when the candidate
/// population cannot fill the configured binning, and with the grid errors when
/// the search is configured with no hypotheses. No mask is produced on failure.
pub fn find_pedestals(
    table: &EventTable,
    approximate_frequency: f64,
    params: &SearchParams,
) -> Result<PedestalSelection, PedestalSearchError> {
    let flatfield = flatfield_mask(&table.intensity, &table.concentration);
    let candidate_times: Vec<f64> = table
        .timestamp
        .iter()
        .zip(flatfield.iter())
        .filter_map(|(&t, &is_flatfield)| (!is_flatfield).then_some(t))
        .collect();

    let bins = bin_count(candidate_times.len(), params)?;
    let nominal_period = 1.0 / approximate_frequency;
    let (period, _) = best_period(&candidate_times, nominal_period, bins, params)?;
    let (phase, histogram) = best_phase(&candidate_times, period, bins, params)?;

    let tmod: Vec<f64> = candidate_times
        .iter()
        .map(|&t| (t + phase).rem_euclid(period))
        .collect();
    let (min_edge, max_edge) = acceptance_window(&histogram);
    let candidate_selected = window_mask(&tmod, min_edge, max_edge);

    // Scatter the candidate decisions back into a full-length mask; flat-field
    // events are never selected.
    let mut mask = Array1::from_elem(table.len(), false);
    let mut candidate = 0;
    for (index, &is_flatfield) in flatfield.iter().enumerate() {
        if !is_flatfield {
            mask[index] = candidate_selected[candidate];
            candidate += 1;
        }
    }

    remove_brightest(&mut mask, &table.intensity, params.brightest_removed);

    Ok(PedestalSelection {
        best_period: period,
        best_phase: phase,
        mask,
    })
}
