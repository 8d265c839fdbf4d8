//! Forward a single request from the command line and print the reply envelope.
//!
//! Useful for checking a destination without deploying behind a gateway.

use clap::Parser;

use gateway_forwarder::config::{DestinationConfig, ObservabilityConfig};
use gateway_forwarder::http::{forward, InboundRequest};
use gateway_forwarder::observability::logging;

#[derive(Parser)]
#[command(name = "forward-cli")]
#[command(about = "Forward one request to a destination the way the gateway function would", long_about = None)]
struct Cli {
    /// Destination base URL
    #[arg(long, env = "DEST_DOMAIN")]
    destination: String,

    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Request header as NAME:VALUE (repeatable; later values win)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Request body
    #[arg(short = 'd', long, default_value = "")]
    data: String,

    /// Emit the diagnostic trace
    #[arg(long)]
    debug: bool,

    /// Remainder path appended to the destination
    #[arg(default_value = "")]
    path: String,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got {:?}", raw))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&ObservabilityConfig::default());

    let destination = DestinationConfig::new(cli.destination).with_debug_logging(cli.debug);

    let mut inbound = InboundRequest::new(cli.method)
        .with_path(format!("/{}", cli.path))
        .with_remainder_path(cli.path)
        .with_body(cli.data);
    inbound.headers = cli.headers;

    let reply = forward(&inbound, &destination).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
