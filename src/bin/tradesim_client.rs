use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use tradesim_client::config::{ClientConfig, Endpoint};
use tradesim_client::http::tradesim::tradesim_client::Client;
use tradesim_client::logging;
use tradesim_client::session::{self, Probes};

#[derive(Debug, Parser)]
#[command(about = "Places a random order against the trading simulation and checks it")]
struct Args {
    /// Use the alternate simulation host
    #[arg(long)]
    alt: bool,

    /// Overrides both hosted endpoints
    #[arg(long, env = "TRADESIM_BASE_URL")]
    base_url: Option<String>,

    #[arg(long)]
    order_depth: bool,

    #[arg(long)]
    last_traded_prices: bool,

    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

/// An explicit base url wins over `--alt`.
fn config(args: &Args) -> Result<ClientConfig> {
    let mut config = match &args.base_url {
        Some(url) => ClientConfig::new(url.as_str())?,
        None if args.alt => ClientConfig::from_endpoint(Endpoint::Alternate),
        None => ClientConfig::from_endpoint(Endpoint::Primary),
    };
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

fn probes(args: &Args) -> Probes {
    Probes {
        order_depth: args.order_depth,
        last_traded_prices: args.last_traded_prices,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let client = Client::new(config(&args)?)?;
    session::run(&client, &probes(&args))?;
    Ok(())
}
