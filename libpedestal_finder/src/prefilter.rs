use ndarray::Array1;

use super::constants::{FLATFIELD_MAX_CONCENTRATION, FLATFIELD_MIN_INTENSITY};

/// Flag the probable interleaved flat-field events (just in case the trigger tag is faulty).
///
/// Flat-field triggers illuminate the whole camera, so they combine a very large
/// intensity with a very low pixel concentration. Flagged events must not enter
/// the pedestal period search: they are themselves periodic and would contaminate it.
///
/// An event with NaN intensity or NaN concentration is never flagged; ambiguous
/// events stay in the candidate set.
pub fn flatfield_mask(intensity: &Array1<f64>, concentration: &Array1<f64>) -> Array1<bool> {
    Array1::from_iter(
        intensity
            .iter()
            .zip(concentration.iter())
            .map(|(&intensity, &concentration)| {
                if intensity.is_nan() || concentration.is_nan() {
                    return false;
                }
                intensity > FLATFIELD_MIN_INTENSITY && concentration < FLATFIELD_MAX_CONCENTRATION
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_flatfield_thresholds() {
        let intensity = array![5.0e4, 5.0e4, 100.0, FLATFIELD_MIN_INTENSITY];
        let concentration = array![0.001, 0.5, 0.001, 0.001];
        let mask = flatfield_mask(&intensity, &concentration);
        // bright + concentrated low -> flat-field; the thresholds are strict
        assert_eq!(mask, array![true, false, false, false]);
    }

    #[test]
    fn test_nan_features_stay_candidates() {
        let intensity = array![f64::NAN, 5.0e4];
        let concentration = array![0.001, f64::NAN];
        let mask = flatfield_mask(&intensity, &concentration);
        assert_eq!(mask, array![false, false]);
    }
}
