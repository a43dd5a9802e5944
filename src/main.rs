//! # Ambush Main Entry Point
//!
//! Parses the command line, sets up logging, and runs either the roster
//! builder or the encounter generator against stdin/stdout.

use ambush::config::ForgeConfig;
use ambush::generation::utils::create_rng;
use ambush::{
    AmbushError, AmbushResult, Bestiary, EncounterSession, MonsterLinks, Party, PartySession,
    Prompter,
};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::io;
use std::path::PathBuf;

/// Command line arguments for the Ambush encounter builder.
#[derive(Parser, Debug)]
#[command(name = "ambush")]
#[command(about = "Builds XP-budgeted tabletop encounters for your party")]
#[command(version)]
struct Args {
    /// Random seed for encounter generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Party roster file
    #[arg(long)]
    party_file: Option<PathBuf>,

    /// Monster compendium file
    #[arg(long)]
    bestiary: Option<PathBuf>,

    /// Notes vault to link monster pages from
    #[arg(long)]
    vault: Option<PathBuf>,

    /// Directory encounter documents are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create or load the party roster and describe an encounter
    Party,
    /// Generate encounters until one is saved
    Generate,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = initialize_logging(&args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting Ambush v{}", ambush::VERSION);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> AmbushResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .map_err(|e| AmbushError::Config(e.to_string()))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .try_init()
            .map_err(|e| AmbushError::Config(e.to_string()))?;
    }

    Ok(())
}

/// Merges the config file with command line overrides.
fn resolve_config(args: &Args) -> AmbushResult<ForgeConfig> {
    let mut config = match &args.config {
        Some(path) => ForgeConfig::load(path)?,
        None => ForgeConfig::new(),
    };

    if let Some(path) = &args.party_file {
        config.party_file = path.clone();
    }
    if let Some(path) = &args.bestiary {
        config.bestiary_file = path.clone();
    }
    if let Some(path) = &args.vault {
        config.vault_path = Some(path.clone());
    }
    if let Some(path) = &args.output_dir {
        config.output_dir = path.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn run(args: Args) -> AmbushResult<()> {
    let config = resolve_config(&args)?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match args.command {
        Command::Party => {
            PartySession::new(&config.party_file).run(&mut prompter)?;
        }
        Command::Generate => {
            let party = Party::load(&config.party_file)?.ok_or_else(|| {
                AmbushError::InvalidParty(format!(
                    "no roster at {}; run `ambush party` first",
                    config.party_file.display()
                ))
            })?;
            let bestiary = Bestiary::load(&config.bestiary_file)?;
            let links = match &config.vault_path {
                Some(vault) => MonsterLinks::scan(vault)?,
                None => MonsterLinks::new(),
            };

            let seed = config.seed.unwrap_or_else(rand::random);
            info!("Generating encounters with seed: {}", seed);
            let mut rng = create_rng(seed);

            let today = chrono::Local::now().date_naive();
            let session =
                EncounterSession::new(&party, &bestiary, &links, &config.output_dir, today);
            session.run(&mut prompter, &mut rng)?;
        }
    }
    Ok(())
}
