// tagbridge/src/bin/tagbridged.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use tagbridge::config::{LayeredConfig, Settings};
use tagbridge::delivery::HomeAssistantSink;
use tagbridge::device::Reader;
use tagbridge::monitor::{Monitor, MonitorConfig};
use tagbridge::utils::pause;

/// Wait before reopening the port after a fatal transport error
const RECONNECT_DELAY_MS: u64 = 5_000;

#[derive(Parser, Debug)]
#[command(name = "tagbridged", version, about = "PN532 tag reader -> Home Assistant tag_scanned events")]
struct Args {
    /// TOML config file; environment variables override its values
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Cmd {
    /// Poll the reader and fire events (default)
    Run,
    /// Check the Home Assistant API connection and exit
    Health,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let result = load_settings(&args).and_then(|settings| match args.command.unwrap_or(Cmd::Run) {
        Cmd::Run => run(&settings),
        Cmd::Health => health(&settings),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_settings(args: &Args) -> tagbridge::Result<Settings> {
    let source = LayeredConfig::from_file_and_env(&args.config)?;
    Settings::from_source(&source)
}

fn health(settings: &Settings) -> tagbridge::Result<()> {
    HomeAssistantSink::from_settings(&settings.home_assistant)?.check_connection()
}

fn run(settings: &Settings) -> tagbridge::Result<()> {
    let mut sink = HomeAssistantSink::from_settings(&settings.home_assistant)?;
    sink.check_connection()?;

    let port = settings.reader.require_port()?.to_string();
    let timing = settings.reader.session_timing();
    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        log::info!("shutdown signal received");
        flag.store(true, Ordering::SeqCst);
    }) {
        log::warn!("cannot install signal handler: {}", e);
    }

    log::info!(
        "reader {} on {} ({} baud, payload {})",
        settings.reader.reader_id,
        port,
        settings.reader.baudrate,
        settings.reader.payload_mode
    );

    while !stop.load(Ordering::SeqCst) {
        let session = Reader::open(&port, settings.reader.baudrate, timing).and_then(Reader::handshake);
        let reader = match session {
            Ok(reader) => reader,
            Err(e) => {
                log::error!("cannot open reader on {}: {}; retrying", port, e);
                pause(RECONNECT_DELAY_MS);
                continue;
            }
        };
        log::info!("PN532 ready for tag detection");

        let mut monitor = Monitor::new(reader, sink, MonitorConfig::from_settings(settings));
        let outcome = monitor.run(&stop);
        sink = monitor.into_sink();

        match outcome {
            Ok(()) => break,
            Err(e) => {
                log::error!("reader session ended: {}; reconnecting", e);
                pause(RECONNECT_DELAY_MS);
            }
        }
    }
    log::info!("tagbridged stopped");
    Ok(())
}
