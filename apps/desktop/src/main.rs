use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    view::{outcome_message, render},
    ClickOutcome, GameApi, GameClient, GameSession, DEFAULT_SERVER_URL,
};
use shared::domain::GameState;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Play the grid game against a remote game server")]
struct Args {
    #[arg(long, env = "GAME_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the server's board. A server running with
    /// reset-on-fetch (its default) starts a new game for this request.
    State,
    /// Place the current player's mark.
    Move { row: usize, col: usize },
    /// Start a new game.
    Reset,
    /// Interactive game on stdin (the default).
    Play,
}

#[derive(Debug, PartialEq, Eq)]
enum PlayCommand {
    Move { row: usize, col: usize },
    Reset,
    Refresh,
    Help,
    Quit,
}

const PLAY_HELP: &str =
    "commands: <row> <col> | reset | refresh (refetch; may start a new game) | help | quit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let client = GameClient::new(&args.server_url)?;
    match args.command.unwrap_or(Command::Play) {
        Command::State => {
            let state = client.fetch_state().await?;
            print_state(&state);
        }
        Command::Move { row, col } => match client.submit_move(row, col).await {
            Ok(state) => print_state(&state),
            Err(err) => match err.server_detail() {
                Some(detail) => println!("{detail}"),
                None => return Err(err.into()),
            },
        },
        Command::Reset => {
            let state = client.reset().await?;
            print_state(&state);
        }
        Command::Play => play(client).await?,
    }

    Ok(())
}

fn print_state(state: &GameState) {
    print!("{}", render(state));
    match outcome_message(state) {
        Some(outcome) => println!("{outcome}"),
        None => println!("{} to move", state.current_player),
    }
}

async fn play(client: GameClient) -> Result<()> {
    let mut session = GameSession::new(Arc::new(client));
    session.initialize().await;
    print_session(&session);
    println!("{PLAY_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_play_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            PlayCommand::Move { row, col } => {
                if session.click(row, col).await == ClickOutcome::Ignored {
                    println!("cell ({row}, {col}) is not playable");
                    continue;
                }
            }
            PlayCommand::Reset => {
                session.reset().await;
            }
            PlayCommand::Refresh => {
                session.refresh().await;
            }
            PlayCommand::Help => {
                println!("{PLAY_HELP}");
                continue;
            }
            PlayCommand::Quit => break,
        }
        print_session(&session);
    }

    Ok(())
}

fn print_session(session: &GameSession) {
    print!("{}", session.view());
    if let Some(state) = session.state() {
        if !state.is_over() {
            println!("{} to move", state.current_player);
        }
    }
    if !session.message().is_empty() {
        println!("{}", session.message());
    }
}

fn parse_play_command(line: &str) -> Result<Option<PlayCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "reset" | "r" => PlayCommand::Reset,
        "refresh" => PlayCommand::Refresh,
        "help" | "?" => PlayCommand::Help,
        "quit" | "exit" | "q" => PlayCommand::Quit,
        _ => {
            let row = parse_coordinate(first)?;
            let col = words
                .next()
                .ok_or_else(|| format!("missing column; {PLAY_HELP}"))
                .and_then(parse_coordinate)?;
            PlayCommand::Move { row, col }
        }
    };

    if words.next().is_some() {
        return Err(format!("unexpected trailing input; {PLAY_HELP}"));
    }
    Ok(Some(command))
}

fn parse_coordinate(raw: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("'{raw}' is not a board coordinate; {PLAY_HELP}"))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
