use std::path::PathBuf;
use thiserror::Error;

use super::worker_status::WorkerStatus;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum SubrunError {
    #[error("Sub-run discovery failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Did not find any matching DL1 files in the DL1 directory")]
    NoMatchingFiles,
    #[error("File name {0} does not follow the dl1_LST-1.RunXXXXX.YYYY.h5 convention")]
    BadFileName(String),
    #[error("Failed to parse a run or sub-run number: {0}")]
    ParsingError(#[from] std::num::ParseIntError),
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Could not open event table because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("EventTable failed due to HDF5 error: {0}")]
    HDF5Error(#[from] hdf5::Error),
    #[error("EventTable column {0} has {1} rows; expected {2}")]
    MismatchedColumns(&'static str, usize, usize),
}

#[derive(Debug, Error)]
pub enum PedestalSearchError {
    #[error("Too few candidate events ({0}) for the configured histogram binning")]
    TooFewEvents(usize),
    #[error("The target of average events per bin must be at least 1")]
    ZeroBinTarget,
    #[error("The period search grid resolved to zero hypotheses")]
    EmptyPeriodGrid,
    #[error("The phase search grid resolved to zero hypotheses")]
    EmptyPhaseGrid,
}

#[derive(Debug, Error)]
pub enum WriterError {
    #[error("PedestalIdWriter failed due to HDF5 error: {0}")]
    HDF5Error(#[from] hdf5::Error),
    #[error("PedestalIdWriter failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Processor failed due to Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Processor failed due to Subrun error: {0}")]
    SubrunError(#[from] SubrunError),
    #[error("Processor failed due to EventTable error: {0}")]
    TableError(#[from] TableError),
    #[error("Processor failed due to pedestal search error: {0}")]
    SearchError(#[from] PedestalSearchError),
    #[error("Processor failed due to PedestalIdWriter error: {0}")]
    WriterError(#[from] WriterError),
    #[error("Processor failed due to Send error: {0}")]
    SendError(#[from] std::sync::mpsc::SendError<WorkerStatus>),
    #[error("Processor failed due to IO error: {0}")]
    IoError(#[from] std::io::Error),
}
