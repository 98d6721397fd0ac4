//! Detector constants for the LST-1 interleaved calibration triggers.

/// Intensity (p.e.) above which an event may be an interleaved flat-field trigger.
pub const FLATFIELD_MIN_INTENSITY: f64 = 3.0e4;

/// Pixel concentration below which an event may be an interleaved flat-field trigger.
pub const FLATFIELD_MAX_CONCENTRATION: f64 = 0.005;

/// Last run of the 50 Hz pedestal injection epoch. Later runs inject at 100 Hz.
pub const FREQUENCY_EPOCH_LAST_RUN: u32 = 2708;

/// Approximate pedestal injection frequency (Hz) up to [`FREQUENCY_EPOCH_LAST_RUN`].
pub const EARLY_EPOCH_FREQUENCY: f64 = 50.0;

/// Approximate pedestal injection frequency (Hz) after [`FREQUENCY_EPOCH_LAST_RUN`].
pub const LATE_EPOCH_FREQUENCY: f64 = 100.0;

/// This is the version of the output format
pub const FORMAT_VERSION: &str = "1.0";
