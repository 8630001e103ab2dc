/// sdlog2 command-line tool — dump, inspect, and validate PX4 sdlog2
/// binary flight logs.
///
/// # Command overview
///
/// ```text
/// sdlog2 <COMMAND> [OPTIONS]
///
/// Commands:
///   dump       Decode a log and print its contents as JSON
///   inspect    Print the message schema declared by a log
///   validate   Check a log for structural correctness
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable verbose decoder tracing on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid log, etc.)  |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_dump;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The sdlog2 command-line tool.
///
/// Dump, inspect, and validate PX4 sdlog2 binary flight logs.
#[derive(Parser)]
#[command(name = "sdlog2", version, about = "PX4 sdlog2 flight log CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose decoder tracing on stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a log and print its contents as JSON.
    Dump(DumpArgs),
    /// Print the message schema declared by a log.
    Inspect(InspectArgs),
    /// Check a log for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `sdlog2 dump`.
///
/// Decodes a log file and prints the accumulated columns as a JSON object
/// keyed by message name, each message mapping labels to value arrays.
///
/// ```text
/// ┌──────────────────┬───────────────────────────────────────────────────┐
/// │ Flag             │ Effect                                            │
/// ├──────────────────┼───────────────────────────────────────────────────┤
/// │ --time-msg NAME  │ Designate NAME as the time message; every other   │
/// │                  │ message gains a `NAME__` timestamp column         │
/// │ --correct-errors │ Skip corrupt bytes and resynchronize instead of   │
/// │                  │ failing on a bad header                           │
/// │ --filter SPEC    │ Keep only the named messages; repeatable. SPEC is │
/// │                  │ `NAME` or `NAME:label,label` for a field subset   │
/// │ --pretty         │ Pretty-print the JSON output                      │
/// │ -o / --output    │ Write to a file instead of stdout                 │
/// └──────────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DumpArgs {
    /// Path to the `.px4log` / `.bin` file to decode.
    pub file: PathBuf,

    /// Name of the time message (e.g. `TIME`).
    #[arg(long, value_name = "NAME")]
    pub time_msg: Option<String>,

    /// Resynchronize on corrupt headers instead of failing.
    #[arg(long)]
    pub correct_errors: bool,

    /// Message filter: `NAME` or `NAME:label,label`. May repeat.
    #[arg(long, value_name = "SPEC")]
    pub filter: Vec<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `sdlog2 inspect`.
///
/// Decodes only far enough to collect the schema, then prints one line per
/// declared message type with its format string and labels.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the log file to inspect.
    pub file: PathBuf,
}

/// Arguments for `sdlog2 validate`.
///
/// Attempts a full strict decode (no error correction) and reports either
/// a set of success checkmarks or a diagnostic error. The process exits
/// with code 0 on success and code 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the log file to validate.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Dump(args) => cmd_dump::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Installs the stderr tracing subscriber.
///
/// `-v` enables debug events (schema registrations, dropped trailing
/// bytes), `-vv` additionally enables per-record trace events. Without the
/// flag only warnings (resynchronization notices) are shown. `RUST_LOG`
/// overrides the flag entirely.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
