use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use spare_parts_feed::config::{
    ConvertOptions, DEFAULT_INPUT_DIR, DEFAULT_MAX_ITEMS, DEFAULT_OUTPUT_FILE, ParseErrorPolicy,
};
use spare_parts_feed::convert;
use spare_parts_feed::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;
    match cli.command {
        Command::Convert(args) => execute_convert(args),
    }
}

fn execute_convert(args: ConvertArgs) -> Result<()> {
    let mut options = ConvertOptions::new()
        .input_dir(args.input)
        .output(args.output)
        .on_parse_error(args.on_parse_error.into());
    if args.test {
        options = options.test_mode(args.max_items);
    }

    convert::folder_to_xml(&options)?;
    Ok(())
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let default_level = match verbosity {
        0 => "spare_parts_feed=info",
        1 => "spare_parts_feed=debug",
        _ => "spare_parts_feed=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build an XML shop feed from vendor spare-parts JSON files."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a folder of vehicle documents into one feed.
    Convert(ConvertArgs),
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Folder containing the vendor `.json` files.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Output XML file; overwritten if it exists.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Stop once `--max-items` distinct parts have been collected.
    #[arg(long)]
    test: bool,

    /// Item ceiling used in test mode.
    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    max_items: usize,

    /// How to handle input files that cannot be read or are not valid JSON.
    #[arg(long, value_enum, default_value_t = ParseErrorMode::Abort)]
    on_parse_error: ParseErrorMode,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ParseErrorMode {
    Abort,
    Skip,
}

impl From<ParseErrorMode> for ParseErrorPolicy {
    fn from(mode: ParseErrorMode) -> Self {
        match mode {
            ParseErrorMode::Abort => ParseErrorPolicy::Abort,
            ParseErrorMode::Skip => ParseErrorPolicy::Skip,
        }
    }
}
