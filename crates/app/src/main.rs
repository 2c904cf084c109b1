//! Learning path recommender server binary.
//!
//! Loads the course/question dataset (falling back to the embedded defaults),
//! wires up the services, and serves the web flow.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use services::{CompressionService, Dataset, RecommenderService};
use tracing::{Level, info};
use web::AppState;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAddr { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAddr { raw } => write!(f, "invalid --addr value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, PartialEq)]
struct Args {
    addr: SocketAddr,
    data_dir: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, ArgsError> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--addr" => {
                let raw = require_value(&mut args, "--addr")?;
                parsed.addr = raw
                    .parse()
                    .map_err(|_| ArgsError::InvalidAddr { raw })?;
            }
            "--data-dir" => {
                parsed.data_dir = PathBuf::from(require_value(&mut args, "--data-dir")?);
            }
            other => return Err(ArgsError::UnknownArg(other.to_string())),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args = parse_args(std::env::args().skip(1))?;

    let dataset = Dataset::load(&args.data_dir);
    info!(
        courses = dataset.courses().len(),
        courses_source = ?dataset.courses_source(),
        questions_source = ?dataset.questions_source(),
        "dataset ready"
    );

    let recommender = RecommenderService::new(Arc::new(dataset));
    let compression = CompressionService::from_env();
    if !compression.enabled() {
        info!("SCALEDOWN_API_KEY not set, roadmap hints will use the fallback text");
    }

    web::run(args.addr, AppState::new(recommender, compression)).await
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
