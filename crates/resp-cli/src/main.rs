/// RESP command-line tool — inspect, validate and summarise captured RESP
/// streams (for example a `redis-cli --pipe` input file or a traffic dump).
///
/// # Command overview
///
/// ```text
/// resp <COMMAND> [OPTIONS] <INPUT>
///
/// Commands:
///   inspect    List every object in the stream
///   validate   Check that the stream is a sequence of complete objects
///   stats      Print per-kind counts and sizes
///   help       Print help information
///
/// Global options:
///   --buffer-size <BYTES>  Reader buffer capacity [default: 8192]
///   --max-depth <N>        Maximum nesting of non-empty arrays [default: 512]
///   -v, --verbose          Log reader activity to stderr
///   -h, --help             Print help
///   -V, --version          Print version
/// ```
///
/// `<INPUT>` is a file path, or `-` for stdin.
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, malformed stream, etc.)  |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resp_reader::{DEFAULT_BUFFER_SIZE, ReaderConfig, RespReader};
use resp_wire::DEFAULT_MAX_DEPTH;
use tracing_subscriber::EnvFilter;

mod cmd_inspect;
mod cmd_stats;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "resp", version, about = "RESP stream inspection tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reader buffer capacity in bytes. Objects larger than this fail.
    #[arg(long, global = true, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Maximum nesting of non-empty arrays.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log reader activity (fills, objects, failures) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// List every object in a RESP stream.
    Inspect(InspectArgs),
    /// Check that a RESP stream is a sequence of complete, valid objects.
    Validate(ValidateArgs),
    /// Print per-kind object counts and sizes.
    Stats(StatsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `resp inspect`.
///
/// ```text
/// ┌────────────┬───────────────────────────────────────────────────────┐
/// │ Flag       │ Effect                                                │
/// ├────────────┼───────────────────────────────────────────────────────┤
/// │ --show-hex │ 16-byte-per-line hex dump of each object              │
/// │ --json     │ One JSON record per object instead of text            │
/// │ --limit N  │ Stop after N objects                                  │
/// └────────────┴───────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Input file, or `-` for stdin.
    pub input: PathBuf,

    /// Show a hex dump of each object.
    #[arg(long)]
    pub show_hex: bool,

    /// Emit one JSON record per line.
    #[arg(long, conflicts_with = "show_hex")]
    pub json: bool,

    /// Stop after this many objects.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for `resp validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Input file, or `-` for stdin.
    pub input: PathBuf,
}

/// Arguments for `resp stats`.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Input file, or `-` for stdin.
    pub input: PathBuf,
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Open `path` (or stdin for `-`) as a RESP reader.
pub(crate) fn open_reader(
    path: &Path,
    config: ReaderConfig,
) -> Result<RespReader<Box<dyn Read>>> {
    let source: Box<dyn Read> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        Box::new(file)
    };
    Ok(RespReader::with_config(source, config))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ReaderConfig::default()
        .with_capacity(cli.buffer_size)
        .with_max_depth(cli.max_depth);

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args, config),
        Commands::Validate(args) => cmd_validate::run(&args, config),
        Commands::Stats(args) => cmd_stats::run(&args, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
