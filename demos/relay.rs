//! Startup phase of the relay: validate the command line, then hand off.
//!
//! ```text
//! cargo run --example relay -- --url=http://hub.local:39501 --log=3
//! RUST_LOG=tempest_args=debug cargo run --example relay -- -tdf 9
//! ```
use std::process::ExitCode;

use tempest_args::{command_line, usage, Command, LogLevel};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let invoked = command_line(&std::env::args_os().collect::<Vec<_>>());
    // `--log` isn't known yet, so only RUST_LOG applies while parsing.
    let startup = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let command = tracing::subscriber::with_default(startup, Command::from_env);

    let log = match &command {
        Command::Start(it) => it.log,
        Command::Trace(it) => it.log,
        _ => LogLevel::default(),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder().with_default_directive(log.filter().into()).from_env_lossy(),
        )
        .init();

    info!(%invoked, canonical = command.canonical().as_deref(), "starting");

    match command {
        Command::Start(start) => {
            info!(
                url = %start.url,
                format = %start.format,
                interval = start.interval,
                daemon = start.daemon,
                "relaying"
            );
        }
        Command::Trace(trace) => {
            info!(format = %trace.format, interval = trace.interval, "tracing to stdout");
        }
        Command::Stop => info!("asking the running relay to stop"),
        Command::Version => println!("{} {}", tempest_args::PROGRAM, env!("CARGO_PKG_VERSION")),
        Command::Help | Command::Empty => print!("{}", usage()),
        Command::Invalid => {
            eprint!("{}", usage());
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
