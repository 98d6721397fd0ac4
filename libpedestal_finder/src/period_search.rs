use super::error::PedestalSearchError;
use super::fold::FoldedHistogram;

/// Tuning knobs of the two-stage period/phase grid search.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Half-width of the period grid in steps; the full grid has `2 * n + 1` hypotheses.
    pub period_half_steps: i64,
    /// Width of one period grid step in seconds.
    pub period_step_width: f64,
    /// Number of phase hypotheses spread over one period.
    pub phase_steps: usize,
    /// Target average number of candidate events per histogram bin. Roughly this
    /// many uncorrelated events will remain per bin as contamination floor.
    pub average_events_per_bin: usize,
    /// Number of brightest selected events dropped as probable cosmics.
    pub brightest_removed: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            period_half_steps: 50,
            period_step_width: 1e-7,
            phase_steps: 1000,
            average_events_per_bin: 1,
            brightest_removed: 10,
        }
    }
}

/// Number of phase-fold histogram bins for a candidate population.
pub fn bin_count(
    n_candidates: usize,
    params: &SearchParams,
) -> Result<usize, PedestalSearchError> {
    if params.average_events_per_bin == 0 {
        return Err(PedestalSearchError::ZeroBinTarget);
    }
    let bins = n_candidates / params.average_events_per_bin;
    if bins < 1 {
        return Err(PedestalSearchError::TooFewEvents(n_candidates));
    }
    Ok(bins)
}

/// Running best of a grid scan.
#[derive(Debug)]
struct BestFold {
    value: f64,
    histogram: FoldedHistogram,
    peak: u64,
}

impl BestFold {
    /// Strict-improvement update: a hypothesis replaces the running best only if
    /// its peak exceeds it, so the earliest of equally sharp hypotheses is kept.
    fn offer(best: &mut Option<BestFold>, value: f64, histogram: FoldedHistogram) {
        let peak = histogram.peak_height();
        match best {
            Some(running) if peak <= running.peak => (),
            _ => {
                *best = Some(BestFold {
                    value,
                    histogram,
                    peak,
                })
            }
        }
    }
}

/// Scan trial periods around `nominal_period` and return the one whose
/// phase-folded histogram has the sharpest peak, together with that histogram.
///
/// The grid is `nominal_period + i * step` for `i` ascending through
/// `-half_steps..=half_steps`; each trial is folded as `t mod trial` and binned
/// over `[0, trial)`.
pub fn best_period(
    timestamps: &[f64],
    nominal_period: f64,
    bin_count: usize,
    params: &SearchParams,
) -> Result<(f64, FoldedHistogram), PedestalSearchError> {
    if params.period_half_steps < 0 {
        return Err(PedestalSearchError::EmptyPeriodGrid);
    }

    let mut best: Option<BestFold> = None;
    for i in -params.period_half_steps..=params.period_half_steps {
        let trial = nominal_period + i as f64 * params.period_step_width;
        let histogram = FoldedHistogram::fold(timestamps, trial, 0.0, bin_count);
        BestFold::offer(&mut best, trial, histogram);
    }

    let best = best.ok_or(PedestalSearchError::EmptyPeriodGrid)?;
    Ok((best.value, best.histogram))
}

/// Scan phase offsets over `[0, period)` and return the one whose folded
/// histogram has the sharpest peak, together with that histogram.
///
/// The fold is `(t + phase) mod period` with the bin count reused from the
/// period scan. Same strict-improvement rule: the earliest of tied phases wins.
pub fn best_phase(
    timestamps: &[f64],
    period: f64,
    bin_count: usize,
    params: &SearchParams,
) -> Result<(f64, FoldedHistogram), PedestalSearchError> {
    if params.phase_steps == 0 {
        return Err(PedestalSearchError::EmptyPhaseGrid);
    }

    let step = period / params.phase_steps as f64;
    let mut best: Option<BestFold> = None;
    for i in 0..params.phase_steps {
        let trial = i as f64 * step;
        let histogram = FoldedHistogram::fold(timestamps, period, trial, bin_count);
        BestFold::offer(&mut best, trial, histogram);
    }

    let best = best.ok_or(PedestalSearchError::EmptyPhaseGrid)?;
    Ok((best.value, best.histogram))
}
