//! Marubatsu - unified CLI
//!
//! Runs one of the two frontends, or judges a board given as text.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use marubatsu::{Config, Frontend, LineFrontend, Presenter, logging, parse_board, run_tui};
use marubatsu_core::judge;
use std::io::{self, BufRead};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(size) = cli.size {
        config = config.with_board_size(size)?;
    }

    let command = cli.command.unwrap_or(match config.frontend() {
        Frontend::Tui => Command::Tui,
        Frontend::Line => Command::Line { json: false },
    });

    match command {
        Command::Tui => {
            logging::init_file(config.log_file())?;
            run_tui(Presenter::from_config(&config), *config.board_size())
        }
        Command::Line { json } => {
            logging::init_stderr();
            run_line(&config, json)
        }
        Command::Judge { rows } => {
            logging::init_stderr();
            run_judge(&config, rows)
        }
    }
}

/// Run the line frontend on stdin/stdout
#[instrument(skip(config))]
fn run_line(config: &Config, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut frontend = LineFrontend::new(
        stdin.lock(),
        stdout.lock(),
        Presenter::from_config(config),
        *config.board_size(),
        json,
    )?;
    frontend.run()
}

/// Judge a board and print the result text
#[instrument(skip(config))]
fn run_judge(config: &Config, rows: Vec<String>) -> Result<()> {
    let rows = if rows.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        rows
    };

    let presenter = Presenter::from_config(config);
    let board = parse_board(&presenter, &rows)?;
    let outcome = judge(&board);
    info!(?outcome, "Board judged");

    println!("{}", presenter.outcome_summary(outcome));
    Ok(())
}
