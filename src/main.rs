use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use exchange_fixtures::core::config::TimeWindow;
use exchange_fixtures::generators::{order_ids, random_timestamps, transfer_ids};
use exchange_fixtures::utils::fixture_rng;
use exchange_fixtures::{ClosedOrderGenerator, FixtureError, GeneratorConfig};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "exchange-fixtures")]
#[command(about = "Print synthetic exchange ids, timestamps and closed orders")]
struct Args {
    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML file overriding the closed order generator settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Order ids like OQCLML-BW3P3-BUCMWZ
    OrderIds {
        #[arg(long, default_value = "10")]
        count: usize,
    },

    /// Transfer ids like FTQcuak-V6Za8qrWnhzTx67yYHz8Tg
    TransferIds {
        #[arg(long, default_value = "10")]
        count: usize,
    },

    /// Unix timestamps in fractional seconds
    Timestamps {
        #[arg(long, default_value = "11")]
        count: usize,

        /// RFC 3339, defaults to the config window start (2020-01-01T00:00:00Z)
        #[arg(long)]
        start: Option<DateTime<Utc>>,

        /// RFC 3339, defaults to the config window end (2024-01-01T00:00:00Z)
        #[arg(long)]
        end: Option<DateTime<Utc>>,
    },

    /// Closed orders as pretty JSON keyed by order id
    ClosedOrders {
        #[arg(long, default_value = "3")]
        count: usize,

        /// Wrap the orders in {"closed": ..., "count": n}
        #[arg(long)]
        envelope: bool,
    },
}

impl Args {
    /// Only the subcommands that read the config load it.
    fn load_config(&self) -> Result<GeneratorConfig, FixtureError> {
        match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading generator config");
                GeneratorConfig::load(path)
            }
            None => Ok(GeneratorConfig::default()),
        }
    }
}

fn resolve_window(
    config: &GeneratorConfig,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> TimeWindow {
    TimeWindow {
        start: start.unwrap_or(config.window.start),
        end: end.unwrap_or(config.window.end),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("exchange_fixtures=info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("Failed to generate fixtures: {}", e);
        return Err(e.into());
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), FixtureError> {
    let mut rng = fixture_rng(args.seed);

    match &args.command {
        Commands::OrderIds { count } => {
            for id in order_ids(&mut rng, *count) {
                println!("{}", id);
            }
        }
        Commands::TransferIds { count } => {
            for id in transfer_ids(&mut rng, *count) {
                println!("{}", id);
            }
        }
        Commands::Timestamps { count, start, end } => {
            let config = args.load_config()?;
            let window = resolve_window(&config, *start, *end);
            for ts in random_timestamps(&mut rng, window.start, window.end, *count)? {
                println!("{}", ts);
            }
        }
        Commands::ClosedOrders { count, envelope } => {
            let generator = ClosedOrderGenerator::new(args.load_config()?)?;
            let orders = generator.generate_many(&mut rng, *count);
            let json = if *envelope {
                serde_json::to_string_pretty(&orders)?
            } else {
                serde_json::to_string_pretty(&orders.closed)?
            };
            println!("{}", json);
        }
    }

    info!(seed = ?args.seed, "fixtures generated");
    Ok(())
}
