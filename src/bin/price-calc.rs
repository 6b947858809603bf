use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use greeter::config::{load_config, ServiceConfig};
use greeter::observability::logging;
use greeter::pricing::{PriceSession, SessionInputs};

#[derive(Parser)]
#[command(name = "price-calc")]
#[command(about = "Apply a discount and then tax to a price", long_about = None)]
struct Cli {
    /// Original price (prompted for when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    price: Option<String>,

    /// Discount percentage, 0-100 (prompted for when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    discount: Option<String>,

    /// Tax rate, e.g. 0.05 for 5% (prompted for when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    tax: Option<String>,

    /// Currency symbol for printed amounts
    #[arg(long)]
    currency: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init_logging(&quiet_level(&config));

    let symbol = cli.currency.unwrap_or(config.pricing.currency_symbol);
    let inputs = SessionInputs {
        price: cli.price,
        discount: cli.discount,
        tax: cli.tax,
    };

    let stdin = io::stdin();
    let mut session = PriceSession::new(stdin.lock(), io::stdout(), io::stderr(), symbol);
    if session.run_and_report(inputs) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Keep info-level chatter out of the interactive prompts.
fn quiet_level(config: &ServiceConfig) -> String {
    match config.observability.log_level.to_ascii_lowercase().as_str() {
        level @ ("trace" | "debug") => level.to_string(),
        _ => "warn".to_string(),
    }
}
