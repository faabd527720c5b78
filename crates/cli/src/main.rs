//! fibseq CLI
//!
//! Prints the first N Fibonacci numbers, asking for N on stdin unless it is
//! given as an argument.
//!
//! Exit codes:
//!   0  every requested term was printed
//!   1  printing stopped early on arithmetic overflow
//!   2  fatal error (bad arguments or config, end of input, I/O failure)

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use fibseq::{Config, Count, ExitStatus, InputError, Width};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter used when RUST_LOG is unset or invalid
const DEFAULT_LOG_FILTER: &str = "fibseq=warn";

/// Exit code for errors that stop the program before or during a run
const EXIT_FATAL: i32 = 2;

#[derive(ClapParser, Debug)]
#[command(name = "fibseq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the Fibonacci sequence with overflow detection", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of terms to print (prompts on stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    count: Option<String>,

    /// Integer width to compute terms in: u8, u16, u32, u64 or u128
    #[arg(short, long, value_parser = parse_width)]
    width: Option<Width>,

    /// Prompt text shown before reading the count
    #[arg(short, long)]
    prompt: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_width(s: &str) -> Result<Width, String> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Some(Commands::Completions { shell }) = cli.command {
        run_completions(shell);
        return;
    }

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    };

    let count = match cli.count.as_deref().map(parse_count_arg).transpose() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    };

    match run(&config, count) {
        Ok(status) => process::exit(status.code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fibseq", &mut io::stdout());
}

/// Defaults, then the config file, then flags.
fn build_config(cli: &Cli) -> Result<Config, fibseq::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    if let Some(width) = cli.width {
        config = config.with_width(width);
    }
    if let Some(prompt) = &cli.prompt {
        config = config.with_prompt(prompt.clone());
    }

    Ok(config)
}

/// A count given on the command line is not re-prompted, so anything other
/// than a positive integer is an error.
fn parse_count_arg(text: &str) -> Result<Count, String> {
    let value = fibseq::parse_count(text).map_err(|e| e.to_string())?;
    Count::from_i32(value)
        .ok_or_else(|| format!("count must be a positive integer, got {}", value))
}

fn run(config: &Config, count: Option<Count>) -> Result<ExitStatus, InputError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let status = match count {
        Some(count) => fibseq::emit_sequence_with(config.width, count, &mut out)?,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            fibseq::run(config, &mut input, &mut out)?
        }
    };

    out.flush()?;
    Ok(status)
}
