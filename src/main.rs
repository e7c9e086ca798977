use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use renlint::config::Config;
use renlint::dictionary::WordListDictionary;
use renlint::scanner::{locate_search_root, Scanner};

/// renlint - spellchecker for Ren'Py visual-novel scripts
#[derive(Parser, Debug)]
#[command(name = "renlint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Flags misspelled dialogue words in Ren'Py scripts as CI annotations")]
struct Args {
    /// Project directory containing the game/ folder
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    project_dir: PathBuf,

    /// Configuration file (defaults to renlint.toml in the working directory
    /// or the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Exit non-zero when typos are found
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(&args);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(args: &Args) {
    let default_directive = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    // Logs go to stderr so the annotation stream on stdout stays clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)))
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default(),
    };

    if let Err(diagnostic) = locate_search_root(&args.project_dir) {
        eprintln!("{diagnostic}");
        return Ok(ExitCode::from(1));
    }

    let dictionary = WordListDictionary::from_config(&config.dictionary)?;

    let scanner = Scanner::new(&config, Box::new(dictionary));
    let report = scanner.scan(&args.project_dir)?;

    tracing::info!(
        "scanned {} files, flagged {} lines",
        report.files_scanned,
        report.lines_flagged
    );

    Ok(ExitCode::from(report.exit_code(args.strict)))
}
