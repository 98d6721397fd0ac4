use std::sync::mpsc::Sender;

use super::config::Config;
use super::error::ProcessorError;
use super::event_table::EventTable;
use super::pedestal::{approximate_frequency_for_run, find_pedestals};
use super::pedestal_writer::PedestalIdWriter;
use super::period_search::SearchParams;
use super::subrun::{discover_subruns, SubrunFile};
use super::worker_status::{BarColor, WorkerStatus};

/// Identify and persist the pedestal ids of a single sub-run file.
///
/// This reads the DL1 event table, runs the four-stage pedestal search with the
/// frequency of the run's epoch, and writes the selected event ids. The output
/// file is only created once the search has succeeded.
pub fn process_subrun(
    config: &Config,
    subrun: &SubrunFile,
    tx: &Sender<WorkerStatus>,
    worker_id: &usize,
) -> Result<(), ProcessorError> {
    tx.send(WorkerStatus::new(
        0.0,
        subrun.id.run_number,
        *worker_id,
        BarColor::GREEN,
    ))?;

    let file_size = subrun.path.metadata()?.len();
    log::info!(
        "Reading {} ({})...",
        subrun.id.file_name(),
        human_bytes::human_bytes(file_size as f64)
    );
    let table = EventTable::read(&subrun.path)?;
    log::info!("Read {} events.", table.len());
    tx.send(WorkerStatus::new(
        0.3,
        subrun.id.run_number,
        *worker_id,
        BarColor::CYAN,
    ))?;

    let approximate_frequency = approximate_frequency_for_run(subrun.id.run_number);
    let params = SearchParams::default();
    let selection = find_pedestals(&table, approximate_frequency, &params)?;
    tx.send(WorkerStatus::new(
        0.8,
        subrun.id.run_number,
        *worker_id,
        BarColor::CYAN,
    ))?;

    let event_ids = selection.event_ids(&table);
    let time_span = match (table.timestamp.first(), table.timestamp.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0.0,
    };
    if time_span > 0.0 {
        log::info!(
            "Rate of identified pedestals: {:.3} Hz",
            event_ids.len() as f64 / time_span
        );
    }
    let max_intensity = table
        .intensity
        .iter()
        .zip(selection.mask.iter())
        .filter(|(intensity, &selected)| selected && !intensity.is_nan())
        .map(|(&intensity, _)| intensity)
        .fold(f64::NEG_INFINITY, f64::max);
    if max_intensity.is_finite() {
        log::info!("Maximum selected intensity: {max_intensity} pe");
    }

    let output_path = config.get_output_file_name(&subrun.id)?;
    let writer = PedestalIdWriter::new(&output_path)?;
    writer.write(&subrun.id, &event_ids)?;
    log::info!(
        "Wrote {} pedestal ids to {}",
        event_ids.len(),
        output_path.to_string_lossy()
    );

    tx.send(WorkerStatus::new(
        1.0,
        subrun.id.run_number,
        *worker_id,
        BarColor::GREEN,
    ))?;
    Ok(())
}

/// The function to be called by a separate thread (typically the UI).
/// Processes every discovered sub-run file with a single worker.
pub fn process(
    config: Config,
    tx: Sender<WorkerStatus>,
    worker_id: usize,
) -> Result<(), ProcessorError> {
    let subruns = discover_subruns(&config)?;
    process_subset(config, tx, worker_id, subruns)
}

/// Process a subset of sub-run files
pub fn process_subset(
    config: Config,
    tx: Sender<WorkerStatus>,
    worker_id: usize,
    subset: Vec<SubrunFile>,
) -> Result<(), ProcessorError> {
    for subrun in subset {
        log::info!(
            "Processing run {} sub-run {}...",
            subrun.id.run_number,
            subrun.id.subrun_index
        );
        process_subrun(&config, &subrun, &tx, &worker_id)?;
        log::info!(
            "Finished run {} sub-run {}.",
            subrun.id.run_number,
            subrun.id.subrun_index
        );
    }
    Ok(())
}

/// Divide the discovered sub-run files into a set of subsets (per thread/worker)
pub fn create_subsets(config: &Config) -> Result<Vec<Vec<SubrunFile>>, ProcessorError> {
    let subruns = discover_subruns(config)?;
    let mut subsets: Vec<Vec<SubrunFile>> = vec![Vec::new(); config.n_threads as usize];
    let n_subsets = subsets.len();

    for (idx, subrun) in subruns.into_iter().enumerate() {
        subsets[idx % n_subsets].push(subrun)
    }

    Ok(subsets)
}
