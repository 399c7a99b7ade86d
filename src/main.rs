//! Connections Puzzle - CLI
//!
//! Word-grouping puzzle with TUI and text modes, plus tools for checking
//! word pools.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use connections_puzzle::{
    commands::{run_sampling, run_simple, validate_groups},
    config::GameConfig,
    core::WordGroup,
    game::{GridSurface, PuzzleController, QuitAction, WordSetRepository},
    interactive::Statistics,
    output::{print_sampling_result, print_session_summary, print_validation_report},
    wordlists::{GROUPS, loader::groups_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "connections",
    about = "Find the four hidden groups of four words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word pool: 'builtin' (default) or path to a pool file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Path to a TOML game configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Developer mode: quit ends the session instead of the process
    #[arg(long, global = true)]
    dev: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default, click words with the mouse)
    Play,

    /// Simple text mode (type words instead of clicking)
    Simple,

    /// Check a word pool for repeated words and identical groups
    Validate,

    /// Deal many rounds and report how evenly groups are chosen
    Sample {
        /// Number of rounds to deal
        #[arg(short = 'n', long, default_value = "100000")]
        rounds: usize,
    },
}

fn initialize_logging(level: LevelFilter, writer: BoxMakeWriter, ansi: bool) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(writer)
                .with_ansi(ansi),
        )
        .with(filter)
        .init();
}

/// Route logs to the log file if given; the TUI owns the screen otherwise
fn setup_logging(cli: &Cli, is_tui: bool) -> Result<()> {
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        initialize_logging(cli.log_level, BoxMakeWriter::new(Mutex::new(file)), false);
    } else if is_tui {
        initialize_logging(LevelFilter::OFF, BoxMakeWriter::new(std::io::stderr), false);
    } else {
        initialize_logging(cli.log_level, BoxMakeWriter::new(std::io::stderr), true);
    }
    Ok(())
}

/// Load the word pool based on the -w flag
///
/// - "builtin": the pool compiled into the binary
/// - "<path>": a pool file, one group per line
fn load_groups(wordlist: &str) -> Result<Vec<WordGroup>> {
    use connections_puzzle::wordlists::loader::load_from_file;

    match wordlist {
        "builtin" => Ok(groups_from_slice(GROUPS)),
        path => load_from_file(path)
            .with_context(|| format!("Failed to read word pool {path}")),
    }
}

fn load_config(path: Option<&Path>, dev: bool) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.dev_mode |= dev;
    Ok(config)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    setup_logging(&cli, matches!(command, Commands::Play))?;

    let groups = load_groups(&cli.wordlist)?;
    info!(groups = groups.len(), wordlist = %cli.wordlist, "Word pool loaded");

    // Get a random seed
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed);

    match command {
        Commands::Play => {
            let config = load_config(cli.config.as_deref(), cli.dev)?;
            run_play_command(groups, config, seed)
        }
        Commands::Simple => {
            let config = load_config(cli.config.as_deref(), cli.dev)?;
            run_simple_command(groups, config, seed)
        }
        Commands::Validate => run_validate_command(&groups),
        Commands::Sample { rounds } => run_sample_command(groups, rounds, seed),
    }
}

fn new_controller(
    groups: Vec<WordGroup>,
    config: GameConfig,
    seed: u64,
) -> Result<PuzzleController<GridSurface>> {
    let mut controller = PuzzleController::new(
        WordSetRepository::new(groups),
        GridSurface::new(4, 4),
        config,
        StdRng::seed_from_u64(seed),
    );
    controller
        .setup_round()
        .context("Cannot start a round with this word pool")?;
    Ok(controller)
}

fn finish_session(action: QuitAction, stats: &Statistics) {
    match action {
        QuitAction::Exit => std::process::exit(0),
        QuitAction::StopSession => print_session_summary(stats),
    }
}

fn run_play_command(groups: Vec<WordGroup>, config: GameConfig, seed: u64) -> Result<()> {
    use connections_puzzle::interactive::{App, run_tui};

    let controller = new_controller(groups, config, seed)?;
    let (action, stats) = run_tui(App::new(controller))?;
    finish_session(action, &stats);
    Ok(())
}

fn run_simple_command(groups: Vec<WordGroup>, config: GameConfig, seed: u64) -> Result<()> {
    let mut controller = new_controller(groups, config, seed)?;
    let (action, stats) = run_simple(&mut controller).map_err(|e| anyhow::anyhow!(e))?;
    finish_session(action, &stats);
    Ok(())
}

fn run_validate_command(groups: &[WordGroup]) -> Result<()> {
    let report = validate_groups(groups);
    print_validation_report(&report);
    if !report.is_valid() {
        bail!("Word pool failed validation");
    }
    Ok(())
}

fn run_sample_command(groups: Vec<WordGroup>, rounds: usize, seed: u64) -> Result<()> {
    let themes: Vec<String> = groups
        .iter()
        .map(|g| g.theme().unwrap_or_default().to_string())
        .collect();

    println!("Dealing {rounds} rounds from {} groups (seed {seed})...", groups.len());
    let repository = WordSetRepository::new(groups);
    let result = run_sampling(&repository, rounds, seed)?;
    print_sampling_result(&result, &themes);
    Ok(())
}
