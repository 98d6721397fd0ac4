use clap::{Arg, Command};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use libpedestal_finder::config::Config;
use libpedestal_finder::process::{create_subsets, process_subset};
use libpedestal_finder::worker_status::BarColor;

fn make_template_config(path: &Path) {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config).unwrap();
    let mut file = File::create(path).expect("Could create template config file!");
    file.write_all(yaml_str.as_bytes())
        .expect("Failed to write yaml data to file!");
}

fn bar_style(color: &BarColor) -> ProgressStyle {
    let color_name = match color {
        BarColor::CYAN => "cyan",
        BarColor::MAGENTA => "magenta",
        BarColor::RED => "red",
        BarColor::GREEN => "green",
    };
    ProgressStyle::with_template(&format!(
        "{{bar:40.{color_name}}} {{percent:>3}}% Run {{msg}}"
    ))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn main() {
    // Create a cli
    let matches = Command::new("pedestal_finder_cli")
        .arg_required_else_help(true)
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .help("Path to the configuration file"),
        )
        .get_matches();

    // Initialize feedback
    let logger = simplelog::TermLogger::new(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    let pb_manager = MultiProgress::new();

    LogWrapper::new(pb_manager.clone(), logger)
        .try_init()
        .expect("Could not create logging/progress!");

    // Parse the cli
    let config_path = PathBuf::from(matches.get_one::<String>("path").expect("We require args"));

    if let Some(("new", _)) = matches.subcommand() {
        log::info!(
            "Making a template config at {}...",
            config_path.to_string_lossy()
        );

        make_template_config(&config_path);
        log::info!("Done.");
        return;
    }

    // Load our config
    log::info!("Loading config from {}...", config_path.to_string_lossy());
    let config = match Config::read_config_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Config successfully loaded.");
    log::info!("DL1 Path: {}", config.dl1_path.to_string_lossy());
    log::info!("Output Path: {}", config.output_path.to_string_lossy());
    log::info!(
        "First Run: {} Last Run: {}",
        config.first_run_number,
        config.last_run_number
    );

    if !config.is_n_threads_valid() {
        log::error!("Number of workers must be at least 1!");
        return;
    }

    let subsets = match create_subsets(&config) {
        Ok(subsets) => subsets,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    // Spawn the workers, one progress bar each
    let (tx, rx) = mpsc::channel();
    let mut workers = vec![];
    let mut bars = vec![];
    for (idx, subset) in subsets.into_iter().enumerate() {
        let bar = pb_manager.add(ProgressBar::new(100));
        bars.push(bar);
        if subset.is_empty() {
            bars[idx].finish();
            continue;
        }
        let conf = config.clone();
        let worker_tx = tx.clone();
        workers.push(std::thread::spawn(move || {
            process_subset(conf, worker_tx, idx, subset)
        }));
    }
    drop(tx);

    // The channel closes once every worker is done with its sender
    for status in rx {
        if let Some(bar) = bars.get(status.worker_id) {
            bar.set_style(bar_style(&status.color));
            bar.set_message(format!("{:0>5}", status.run_number));
            bar.set_position((status.progress * 100.0) as u64);
        }
    }

    for worker in workers {
        match worker.join() {
            Ok(result) => match result {
                Ok(_) => log::info!("Worker finished successfully."),
                Err(e) => log::error!("Worker failed with error: {e}"),
            },
            Err(_) => log::error!("Failed to join a worker!"),
        }
    }
    for bar in bars.iter() {
        bar.finish();
    }

    log::info!("Done.");
}
