use hdf5::types::VarLenUnicode;
use hdf5::File;
use std::path::Path;
use std::str::FromStr;

use super::constants::FORMAT_VERSION;
use super::error::WriterError;
use super::subrun::SubrunId;

const PEDESTAL_GROUP_NAME: &str = "interleaved_pedestal_ids";
const EVENT_ID_NAME: &str = "event_id";

/// A simple struct which wraps around the hdf5-rust library.
///
/// Opens an HDF5 file for writing the identified pedestal ids of one sub-run.
#[allow(dead_code)]
#[derive(Debug)]
pub struct PedestalIdWriter {
    file_handle: File, //Idk if this needs to be kept alive, but I think it does
    ids_group: hdf5::Group,
}

// Structure
// interleaved_pedestal_ids - run_number, subrun_index, n_pedestals, version
// |---- event_id(dset)

impl PedestalIdWriter {
    /// Create the writer, opening a file at path and creating the id group
    pub fn new(path: &Path) -> Result<Self, WriterError> {
        let file_handle = File::create(path)?;
        let ids_group = file_handle.create_group(PEDESTAL_GROUP_NAME)?;

        let writer_version = format!("{}:{}", env!("CARGO_PKG_NAME"), FORMAT_VERSION);
        ids_group.new_attr::<VarLenUnicode>().create("version")?;
        ids_group
            .attr("version")?
            .write_scalar(&VarLenUnicode::from_str(&writer_version).unwrap())?;

        Ok(Self {
            file_handle,
            ids_group,
        })
    }

    /// Write the selected event ids and the sub-run metadata, consume the writer
    pub fn write(self, subrun: &SubrunId, event_ids: &[i64]) -> Result<(), WriterError> {
        self.ids_group
            .new_dataset_builder()
            .with_data(event_ids)
            .create(EVENT_ID_NAME)?;
        self.ids_group.new_attr::<u32>().create("run_number")?;
        self.ids_group
            .attr("run_number")?
            .write_scalar(&subrun.run_number)?;
        self.ids_group.new_attr::<u32>().create("subrun_index")?;
        self.ids_group
            .attr("subrun_index")?
            .write_scalar(&subrun.subrun_index)?;
        self.ids_group.new_attr::<u64>().create("n_pedestals")?;
        self.ids_group
            .attr("n_pedestals")?
            .write_scalar(&(event_ids.len() as u64))?;
        Ok(())
    }
}
