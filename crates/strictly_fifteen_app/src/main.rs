//! Strictly Fifteen - terminal host
//!
//! Plays the puzzle on stdin/stdout and manages the leaderboard.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_fifteen::RngSource;
use strictly_fifteen_app::{
    CONFIG_ENV_VAR, FifteenConfig, GameSession, KeyValueStorage, RecordStore, SessionError,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
    let config = FifteenConfig::load_or_default(config_path.as_deref())?;

    let storage = config.open_storage()?;
    let mut records = RecordStore::with_key(storage, config.records_key());

    match cli.command {
        Command::Play { name } => play(&config, &name, &mut records).await,
        Command::Records => {
            print_records(&records);
            Ok(())
        }
        Command::ClearRecords => {
            records.clear()?;
            println!("Records cleared.");
            Ok(())
        }
    }
}

/// Runs one interactive session until the player ends it or stdin closes.
#[instrument(skip(config, records))]
async fn play<S: KeyValueStorage>(
    config: &FifteenConfig,
    name: &str,
    records: &mut RecordStore<S>,
) -> Result<()> {
    let mut session = GameSession::new(RngSource::from_os_rng(), config.session_settings());

    match session.start_new_game(name) {
        Ok(board) => println!("{}\n", board),
        Err(SessionError::EmptyName) => {
            println!("{}", SessionError::EmptyName);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    println!("Type a tile number to slide it, 'new' to reshuffle, 'end' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        debug!(input, "Read command");

        match input {
            "" => continue,
            "end" | "quit" => break,
            "new" => {
                let board = session.start_new_game(name)?;
                println!("{}\n", board);
                continue;
            }
            _ => {}
        }

        let Some(position) = input
            .parse::<u8>()
            .ok()
            .and_then(|label| session.board().position_of(label))
        else {
            println!("'{}' is not a tile on the board.", input);
            continue;
        };

        let click = session.click_tile(position.index(), records);
        println!("{}\nTime: {}s\n", click.board, session.elapsed());

        if let Some(notice) = click.notice() {
            println!("{}", notice);
            if let Some(error) = &click.record_error {
                println!("Your time could not be saved: {}", error);
            }
            print_records(records);
            println!("Type 'new' to play again or 'end' to quit.");
        } else if !session.is_running() {
            println!("No game running. Type 'new' to start one.");
        }
    }

    session.end_game();
    info!("Session closed");
    Ok(())
}

fn print_records<S: KeyValueStorage>(records: &RecordStore<S>) {
    if records.is_empty() {
        println!("No records yet.");
        return;
    }
    for line in records.ranking_lines() {
        println!("{}", line);
    }
}
