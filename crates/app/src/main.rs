mod config;
mod dataset;
mod terminal;

use std::fmt;
use std::io;
use std::path::PathBuf;

use services::QuizSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use dataset::Dataset;
use terminal::{Outcome, Terminal};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  trivia [--data <dataset.json>] [--config <trivia.toml>] [--seed <u64>]");
    eprintln!();
    eprintln!("Without --data the bundled sample dataset is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_DATA, TRIVIA_CONFIG, TRIVIA_SEED, RUST_LOG");
}

#[derive(Debug, Default)]
struct Args {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    seed: Option<u64>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut parsed = Self {
            data: std::env::var_os("TRIVIA_DATA").map(PathBuf::from),
            config: std::env::var_os("TRIVIA_CONFIG").map(PathBuf::from),
            seed: match std::env::var("TRIVIA_SEED") {
                Ok(raw) => Some(parse_seed(raw)?),
                Err(_) => None,
            },
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => parsed.data = Some(require_value(args, "--data")?.into()),
                "--config" => parsed.config = Some(require_value(args, "--config")?.into()),
                "--seed" => parsed.seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(parsed))
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn init_tracing() {
    // stdout belongs to the quiz; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<Outcome, Box<dyn std::error::Error>> {
    let config = AppConfig::load(args.config.as_deref())?;
    let dataset = Dataset::load(args.data.as_deref())?;
    info!(
        subjects = dataset.subjects.len(),
        locations = dataset.locations.len(),
        seed = ?args.seed,
        "dataset loaded"
    );

    let mut session = match args.seed {
        Some(seed) => QuizSession::seeded(config.settings.clone(), seed),
        None => QuizSession::new(config.settings.clone()),
    };
    session.start(dataset.subjects, dataset.locations)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Terminal::new(stdin.lock(), stdout.lock(), &config).run(&mut session)?;
    Ok(outcome)
}

fn main() {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let args = match Args::parse(&mut argv) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    match run(args) {
        Ok(outcome) => info!(?outcome, "session ended"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
