//! Configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use marubatsu_core::{DEFAULT_SIZE, MAX_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Which frontend runs when no subcommand is given.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Frontend {
    /// Full-screen clickable grid.
    #[default]
    Tui,
    /// Line-oriented prompt on stdin/stdout.
    Line,
}

/// Glyphs used to draw marks.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Glyph for the first player.
    first: String,
    /// Glyph for the second player.
    second: String,
    /// Glyph for an empty cell.
    empty: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            first: "○".to_string(),
            second: "×".to_string(),
            empty: " ".to_string(),
        }
    }
}

/// Result texts. `{mark}` in `win` is replaced by the winner's glyph.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Text for a win.
    win: String,
    /// Text for a draw.
    draw: String,
    /// Text while the game is running.
    in_progress: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            win: "{mark} wins".to_string(),
            draw: "draw".to_string(),
            in_progress: String::new(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Board dimension N.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Frontend used when no subcommand is given.
    #[serde(default)]
    frontend: Frontend,

    /// Log file for the full-screen frontend.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Mark glyphs.
    #[serde(default)]
    glyphs: Glyphs,

    /// Result texts.
    #[serde(default)]
    labels: Labels,
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("marubatsu.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            frontend: Frontend::default(),
            log_file: default_log_file(),
            glyphs: Glyphs::default(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(board_size = config.board_size, frontend = %config.frontend, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the board size.
    #[instrument(skip(self))]
    pub fn with_board_size(mut self, board_size: usize) -> Result<Self, ConfigError> {
        self.board_size = board_size;
        self.validate()?;
        Ok(self)
    }

    /// Checks value constraints that TOML types cannot express.
    ///
    /// Glyphs must be single, distinct characters so a typed board reads
    /// back one cell per character.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between 1 and {}, got {}",
                MAX_SIZE, self.board_size
            )));
        }
        let glyphs = &self.glyphs;
        let named = [
            ("first", &glyphs.first),
            ("second", &glyphs.second),
            ("empty", &glyphs.empty),
        ];
        for (name, glyph) in named {
            if glyph.chars().count() != 1 {
                return Err(ConfigError::new(format!(
                    "{} glyph must be a single character, got {:?}",
                    name, glyph
                )));
            }
        }
        for (i, (name, glyph)) in named.iter().enumerate() {
            if let Some((other, _)) = named[i + 1..].iter().find(|(_, g)| g == glyph) {
                return Err(ConfigError::new(format!(
                    "{} and {} glyphs are both {:?}",
                    name, other, glyph
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
