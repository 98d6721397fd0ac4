use hdf5::File;
use ndarray::Array1;
use std::path::Path;

use super::error::TableError;

/// HDF5 group holding the DL1 event parameter columns.
pub const PARAMETERS_GROUP: &str = "dl1/event/telescope/parameters/LST_LSTCam";

const EVENT_ID_NAME: &str = "event_id";
const TIMESTAMP_NAME: &str = "dragon_time";
const INTENSITY_NAME: &str = "intensity";
const CONCENTRATION_NAME: &str = "concentration_pixel";

/// Column-oriented view of one sub-run's DL1 event parameters.
///
/// `timestamp` is the Dragon board time in seconds of the instrument clock and is
/// not guaranteed to be sorted. `intensity` and `concentration` may contain NaN
/// for events where image parametrization failed.
#[derive(Debug, Clone)]
pub struct EventTable {
    pub event_id: Array1<i64>,
    pub timestamp: Array1<f64>,
    pub intensity: Array1<f64>,
    pub concentration: Array1<f64>,
}

impl EventTable {
    /// Assemble a table from its columns, checking that they are aligned
    pub fn new(
        event_id: Array1<i64>,
        timestamp: Array1<f64>,
        intensity: Array1<f64>,
        concentration: Array1<f64>,
    ) -> Result<Self, TableError> {
        let table = Self {
            event_id,
            timestamp,
            intensity,
            concentration,
        };
        for (name, rows) in [
            (TIMESTAMP_NAME, table.timestamp.len()),
            (INTENSITY_NAME, table.intensity.len()),
            (CONCENTRATION_NAME, table.concentration.len()),
        ] {
            if rows != table.event_id.len() {
                return Err(TableError::MismatchedColumns(
                    name,
                    rows,
                    table.event_id.len(),
                ));
            }
        }
        Ok(table)
    }

    /// Read the parameter columns of one DL1 sub-run file
    pub fn read(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::BadFilePath(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let group = file.group(PARAMETERS_GROUP)?;
        Self::new(
            group.dataset(EVENT_ID_NAME)?.read_1d::<i64>()?,
            group.dataset(TIMESTAMP_NAME)?.read_1d::<f64>()?,
            group.dataset(INTENSITY_NAME)?.read_1d::<f64>()?,
            group.dataset(CONCENTRATION_NAME)?.read_1d::<f64>()?,
        )
    }

    pub fn len(&self) -> usize {
        self.event_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_aligned_columns() {
        let table = EventTable::new(
            array![0, 1, 2],
            array![0.0, 0.1, 0.2],
            array![120.0, f64::NAN, 45.0],
            array![0.3, 0.2, 0.4],
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_mismatched_columns() {
        let result = EventTable::new(
            array![0, 1, 2],
            array![0.0, 0.1],
            array![120.0, 80.0, 45.0],
            array![0.3, 0.2, 0.4],
        );
        assert!(matches!(
            result,
            Err(TableError::MismatchedColumns("dragon_time", 2, 3))
        ));
    }
}
