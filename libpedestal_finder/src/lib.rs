//! # pedestal_finder
//!
//! pedestal_finder identifies the interleaved pedestal events of LST-1 real
//! data, written in Rust. It scans the DL1 sub-run files of an observation,
//! finds the event ids of the interleaved pedestals from the event timestamps
//! alone, and writes them out into one HDF5 file per sub-run for downstream
//! calibration use.
//!
//! ## How it works
//!
//! Interleaved pedestals are injected very regularly in time, typically to
//! better than microsecond precision, at a rate that is only approximately
//! known (50 Hz for early runs, 100 Hz later). Cosmic triggers arrive at
//! irregular times in between. For each sub-run the finder:
//!
//! 1. excludes probable interleaved flat-field events (very bright and very
//!    compact images), which are also periodic and would contaminate the
//!    search,
//! 2. grid-searches trial periods around the nominal one, scoring each by the
//!    sharpest peak of the phase-folded timestamp histogram,
//! 3. grid-searches phase offsets at the best period the same way,
//! 4. selects the events inside an acceptance window around the folded peak
//!    and drops the brightest few of them, which might be cosmics accidentally
//!    falling in the window.
//!
//! ## Configuration
//!
//! Configuration files are YAML:
//!
//! ```yml
//! dl1_path: /data/real/DL1/20230901/v0.9/tailcut84
//! output_path: /data/auxiliary/pedestal_ids/20230901
//! first_run_number: 2900
//! last_run_number: 2910
//! n_threads: 4
//! ```
//!
//! - `dl1_path`: directory containing the (unmerged) DL1 sub-run files, named
//!   `dl1_LST-1.RunXXXXX.YYYY.h5`
//! - `output_path`: directory to which the pedestal id files will be written
//! - `first_run_number`/`last_run_number`: inclusive run range to process
//! - `n_threads`: number of parallel worker threads to divide the sub-run
//!   files amongst. Must be at least 1.
//!
//! ## Output
//!
//! One file per sub-run, `pedestal_ids_RunXXXXX.YYYY.h5`:
//!
//! ```text
//! pedestal_ids_Run02969.0042.h5
//! interleaved_pedestal_ids - run_number, subrun_index, n_pedestals, version
//! |---- event_id(dset)
//! ```
//!
//! A failed sub-run produces no output file; check the log for the reason.
pub mod config;
pub mod constants;
pub mod error;
pub mod event_table;
pub mod fold;
pub mod pedestal;
pub mod pedestal_writer;
pub mod period_search;
pub mod prefilter;
pub mod process;
pub mod subrun;
pub mod window;
pub mod worker_status;
