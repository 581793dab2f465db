//! Command-line interface for marubatsu.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Marubatsu - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "marubatsu")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "marubatsu.toml", global = true)]
    pub config: PathBuf,

    /// Board size N (overrides the config file)
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// Subcommand to run; defaults to the frontend named in the config
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the full-screen grid (arrows, digits or mouse)
    Tui,

    /// Play by typing `row col` lines
    Line {
        /// Print a JSON snapshot after each move instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Judge a board given as text rows, e.g. `marubatsu judge ox. .o. x.o`
    Judge {
        /// Board rows; read from stdin when omitted
        rows: Vec<String>,
    },
}
