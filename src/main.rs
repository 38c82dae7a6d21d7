/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use env_logger::Env;
use log::info;
use std::io;
use std::path::PathBuf;

/* Custom libraries */
use dispatcher::Dispatcher;
use shared::ConfigError;
use shell::Shell;

/* Modules */
mod config;
mod dispatcher;
mod elevator;
mod shared;
mod shell;

/// Interactive simulator for a bank of elevators.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[clap(long, short, default_value = "config.toml")]
    config: PathBuf,

    /// Number of elevators, overrides the configuration file
    #[clap(long, short)]
    elevators: Option<i64>,

    /// Milliseconds between automatic steps, 0 disables auto stepping
    #[clap(long)]
    auto_step: Option<u64>,

    /// Print status reports as JSON
    #[clap(long)]
    json: bool,
}

/* Main */
fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Load the configuration and apply command line overrides
    let mut config = unwrap_or_exit!(config::load_config(&args.config), "Failed to load configuration");
    if let Some(n_elevators) = args.elevators {
        config.dispatcher.n_elevators = n_elevators;
    }
    if let Some(interval) = args.auto_step {
        config.shell.auto_step_interval = interval;
    }
    if args.json {
        config.shell.json_status = true;
    }

    let dispatcher = unwrap_or_exit!(
        Dispatcher::from_config(&config.dispatcher).map_err(ConfigError::from),
        "Invalid configuration"
    );
    info!(
        "Starting simulation with {} elevators",
        dispatcher.elevators().len()
    );

    // Start the input reader
    let (line_tx, line_rx) = cbc::unbounded::<String>();
    shell::spawn_stdin_reader(line_tx)?;

    let mut shell = Shell::new(dispatcher, config.shell, line_rx, io::stdout());
    shell.run()
}
