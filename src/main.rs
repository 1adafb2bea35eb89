use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use phone_set::{
    config::{SetConfig, SetConfigBuilder, TrieStrategy},
    loader::{load_concurrently, parse_lines},
    observability::logging::{init_logging, LoggingConfig},
    PhoneNumber, TrieFactory,
};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "phone-set", about = "Load phone numbers into a concurrent set and query it")]
struct CliArgs {
    /// Files with one phone number per line. Reads stdin when empty.
    files: Vec<PathBuf>,

    #[arg(long, value_parser = ["fine_grained", "coarse_grained"])]
    strategy: Option<String>,

    /// Threads used to insert numbers
    #[arg(long)]
    workers: Option<usize>,

    /// Report whether this number is in the set; repeatable
    #[arg(long)]
    check: Vec<String>,

    /// JSON config file; command line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "warn", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,

    #[arg(long, default_value_t = false)]
    log_json: bool,
}

impl CliArgs {
    fn to_set_config(&self) -> Result<SetConfig> {
        let base = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                SetConfig::from_json_str(&json)?
            }
            None => SetConfig::default(),
        };

        let mut builder = SetConfigBuilder::from_config(base).maybe_workers(self.workers);
        if let Some(strategy) = &self.strategy {
            builder = builder.strategy(strategy.parse::<TrieStrategy>()?);
        }
        Ok(builder.build()?)
    }

    fn to_logging_config(&self) -> LoggingConfig {
        let level = match self.log_level.as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        };
        LoggingConfig {
            level,
            json_format: self.log_json,
            ..Default::default()
        }
    }
}

fn read_numbers(files: &[PathBuf]) -> Result<Vec<PhoneNumber>> {
    if files.is_empty() {
        return parse_lines(io::stdin().lock()).context("failed to parse stdin");
    }

    let mut numbers = Vec::new();
    for path in files {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let parsed = parse_lines(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))?;
        numbers.extend(parsed);
    }
    Ok(numbers)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.to_logging_config());

    let config = args.to_set_config()?;
    info!(strategy = %config.strategy, workers = config.workers, "Starting phone-set");

    let checks = args
        .check
        .iter()
        .map(|raw| PhoneNumber::new(raw))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --check value")?;

    let numbers = read_numbers(&args.files)?;
    let set = TrieFactory::create_from_config(&config);
    let report = load_concurrently(&*set, &numbers, config.workers);

    println!("size={}", report.distinct);
    for number in &checks {
        let state = if set.contains(number) {
            "present"
        } else {
            "absent"
        };
        println!("{} {}", number, state);
    }

    Ok(())
}
