//! CLI entry point for lineweave.

mod cli;

use std::io::{self, Write};

use clap::Parser;
use lineweave::config::{load_config, validate_config, Config};
use lineweave::error::InputError;
use lineweave::payload::{outgoing_envelope, Payload};
use lineweave::tui::{
    read_logical_message, read_single_line, StderrSink, StdinLineSource, TerminalSink,
};
use tracing::{debug, warn};

/// Exit status used when the user interrupts a read.
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let args = cli::Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    args.apply_to(&mut config);
    if let Err(e) = validate_config(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    std::process::exit(compose_loop(&config).await);
}

/// Read turns until input closes, emitting one JSON envelope per turn.
async fn compose_loop(config: &Config) -> i32 {
    let options = config.session_options();
    let mut source = StdinLineSource::new();
    let mut sink = StderrSink::new();
    debug!(
        interactivity = ?sink.interactivity(),
        multiline = config.editor.multiline,
        "editor ready"
    );

    loop {
        let read = async {
            if config.editor.multiline {
                read_logical_message(&options, &mut source, &mut sink).await
            } else {
                read_single_line(&options, &mut source, &mut sink).await
            }
        };
        let outcome = tokio::select! {
            outcome = read => outcome,
            _ = tokio::signal::ctrl_c() => {
                // The in-flight message is abandoned, never emitted.
                eprintln!();
                return EXIT_INTERRUPTED;
            }
        };

        match outcome {
            Ok(message) => {
                if let Err(e) = emit(&message, &config.payload.sender) {
                    eprintln!("error: failed to write envelope: {e}");
                    return 1;
                }
            }
            Err(InputError::StreamClosed) => {
                debug!("input closed; exiting");
                return 0;
            }
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
    }
}

/// Classify one message and print its envelope as a JSON line on stdout.
fn emit(message: &str, sender: &str) -> io::Result<()> {
    let payload = Payload::classify(message);
    debug!(structured = payload.is_structured(), "payload classified");
    let Some(envelope) = outgoing_envelope(payload, sender) else {
        warn!("dropping JSON payload that is not an object");
        return Ok(());
    };
    let line = serde_json::to_string(&envelope).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()
}

fn log_filter() -> tracing_subscriber::EnvFilter {
    let level = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var("LINEWEAVE_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
}
