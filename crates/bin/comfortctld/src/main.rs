//! # comfortctld — comfort control daemon
//!
//! Composition root that wires the virtual home to the comfort service and
//! drives it from the command line.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the virtual home and actuator bank (adapters)
//! - Construct the comfort service, injecting adapters via port traits
//! - Run a single command from argv, or a line-oriented loop on stdin
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use tokio::io::AsyncBufReadExt;

use comfortctl_adapter_virtual::{VirtualActuator, VirtualHome};
use comfortctl_app::comfort_service::ComfortService;
use comfortctl_app::ports::{CommandPublisher, TemperatureSource};
use comfortctl_app::request::ComfortRequest;
use comfortctl_domain::engine::EngineConfig;
use comfortctl_domain::error::ComfortError;
use comfortctl_domain::room::RoomId;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let mut readings = Vec::with_capacity(config.rooms.len());
    for room in &config.rooms {
        readings.push((RoomId::from_user_number(room.number)?, room.temperature));
    }
    let rooms: Vec<RoomId> = readings.iter().map(|(room, _)| *room).collect();
    let home = VirtualHome::new(&readings);
    let actuator = VirtualActuator::new(&rooms);

    // Service
    let engine = EngineConfig::with_policy(config.out_of_range_policy());
    let service = ComfortService::new(engine, home, actuator);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_loop(&service).await,
        _ => {
            let request = parse_command(&args.iter().map(String::as_str).collect::<Vec<_>>())?;
            let reply = service.handle(request).await?;
            println!("{}", reply.speech);
            Ok(())
        }
    }
}

/// Read command lines from stdin until EOF, without blocking the runtime.
async fn run_loop<T, P>(service: &ComfortService<T, P>) -> Result<(), Box<dyn std::error::Error>>
where
    T: TemperatureSource,
    P: CommandPublisher,
{
    tracing::info!("reading commands from stdin; 'set <room> <level>', 'nudge <room> <up|down>' or 'get <room>'");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(speech) = execute_line(service, &line).await {
            println!("{speech}");
        }
    }
    Ok(())
}

/// Parse and dispatch one command line. Failures are logged, not fatal.
async fn execute_line<T, P>(service: &ComfortService<T, P>, line: &str) -> Option<String>
where
    T: TemperatureSource,
    P: CommandPublisher,
{
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    match parse_command(&words) {
        Ok(request) => match service.handle(request).await {
            Ok(reply) => Some(reply.speech),
            Err(err) => {
                tracing::error!(%err, "command failed");
                None
            }
        },
        Err(err) => {
            tracing::error!(%err, "could not parse command");
            None
        }
    }
}

fn parse_command(words: &[&str]) -> Result<ComfortRequest, CommandError> {
    match words {
        ["set", room, level] => Ok(ComfortRequest::set_from_slots(room, level)?),
        ["nudge", room, direction] => Ok(ComfortRequest::nudge_from_slots(room, direction)?),
        ["get", room] => Ok(ComfortRequest::get_from_slots(room)?),
        _ => Err(CommandError::Usage),
    }
}

/// Command-line parsing errors.
#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error(
        "usage: comfortctld [set <room> <cold|cool|comfortable|warm|hot> | nudge <room> <up|down> | get <room>]"
    )]
    Usage,
    #[error(transparent)]
    Comfort(#[from] ComfortError),
}
