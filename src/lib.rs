//! # Ambush Encounter Builder
//!
//! Builds tabletop roleplaying encounters sized to a party's experience budget.
//!
//! ## Architecture Overview
//!
//! The crate is organised around a small pure core surrounded by I/O helpers:
//!
//! - **Rules**: challenge ratings, difficulty tiers, and the XP reference tables
//! - **Bestiary**: monster records loaded from a compendium file
//! - **Party**: the hero roster, its persistence, and the roster builder
//! - **Generation**: budget-constrained monster selection and encounter naming
//! - **Rendering**: markdown output with links into a notes vault
//! - **Input**: interactive prompting and the generate/save loop
//!
//! All randomness is drawn from a caller-supplied RNG, so seeding a
//! `StdRng` makes every encounter reproducible.

pub mod bestiary;
pub mod generation;
pub mod input;
pub mod party;
pub mod rendering;
pub mod rules;

// Core module re-exports
pub use bestiary::*;
pub use generation::*;
pub use input::*;
pub use party::*;
pub use rendering::*;
pub use rules::*;

/// Core error type for the Ambush encounter builder.
#[derive(thiserror::Error, Debug)]
pub enum AmbushError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Party level or difficulty outside the budget tables
    #[error("Invalid budget parameters: {0}")]
    InvalidBudgetParameters(String),

    /// Party roster cannot be used for budgeting
    #[error("Invalid party: {0}")]
    InvalidParty(String),

    /// Input stream ended while a prompt was waiting for an answer
    #[error("Input closed before an answer was given")]
    InputClosed,

    /// Configuration file could not be used
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type used throughout the Ambush codebase.
pub type AmbushResult<T> = Result<T, AmbushError>;

/// Version information for the tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runtime configuration and default constants.
pub mod config {
    use crate::{AmbushError, AmbushResult};
    use serde::{Deserialize, Serialize};
    use std::path::{Path, PathBuf};

    /// Default roster file, relative to the working directory
    pub const DEFAULT_PARTY_FILE: &str = "party.json";

    /// Default monster compendium file
    pub const DEFAULT_BESTIARY_FILE: &str = "bestiary-mm.json";

    /// Share of the budget the main-quest anchor may consume, in tenths
    pub const ANCHOR_BUDGET_TENTHS: i64 = 7;

    /// Share of the budget at which the fill pass stops, in tenths
    pub const FILL_STOP_TENTHS: i64 = 9;

    /// File locations and seeding for a run of the tool.
    ///
    /// Loaded from JSON when a config file is given; every field can then be
    /// overridden from the command line.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ForgeConfig {
        /// Where the party roster is read from and saved to
        pub party_file: PathBuf,
        /// Monster compendium in `{"monster": [...]}` form
        pub bestiary_file: PathBuf,
        /// Notes vault scanned for monster pages to link
        pub vault_path: Option<PathBuf>,
        /// Directory encounter documents are written to
        pub output_dir: PathBuf,
        /// Fixed RNG seed; drawn from entropy when absent
        pub seed: Option<u64>,
    }

    impl ForgeConfig {
        /// Creates a configuration using the default file names in the
        /// current directory.
        ///
        /// # Examples
        ///
        /// ```
        /// use ambush::config::ForgeConfig;
        ///
        /// let config = ForgeConfig::new();
        /// assert!(config.seed.is_none());
        /// assert!(config.vault_path.is_none());
        /// ```
        pub fn new() -> Self {
            Self {
                party_file: PathBuf::from(DEFAULT_PARTY_FILE),
                bestiary_file: PathBuf::from(DEFAULT_BESTIARY_FILE),
                vault_path: None,
                output_dir: PathBuf::from("."),
                seed: None,
            }
        }

        /// Creates a configuration rooted in `dir` with a fixed seed.
        pub fn for_testing(dir: &Path, seed: u64) -> Self {
            Self {
                party_file: dir.join(DEFAULT_PARTY_FILE),
                bestiary_file: dir.join(DEFAULT_BESTIARY_FILE),
                vault_path: None,
                output_dir: dir.to_path_buf(),
                seed: Some(seed),
            }
        }

        /// Loads a configuration from a JSON file. Missing keys keep their
        /// defaults.
        pub fn load(path: &Path) -> AmbushResult<Self> {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str(&text)
                .map_err(|e| AmbushError::Config(format!("{}: {}", path.display(), e)))
        }
    }

    impl Default for ForgeConfig {
        fn default() -> Self {
            Self::new()
        }
    }

}
