//! Terminal front end: renders the board and submits moves.

use crate::client::{ClientError, RestGameClient};
use crate::dto::GameSummary;
use anyhow::Result;
use noughts_engine::Position;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, instrument, warn};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Claim a tile.
    Move(i64),
    /// Abandon this game and start another.
    NewGame,
    /// Leave.
    Quit,
    /// Anything else.
    Unknown,
}

/// Parses a line typed at the prompt.
///
/// Tiles may be given by number or label (`5`, `center`). Numbers outside
/// 1-9 are passed through so the server can reject them.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Input::Quit,
        "n" | "new" => Input::NewGame,
        _ => {
            if let Ok(number) = line.parse::<i64>() {
                Input::Move(number)
            } else if let Some(pos) = Position::from_label_or_number(line) {
                Input::Move(i64::from(pos.number()))
            } else {
                Input::Unknown
            }
        }
    }
}

/// How the game stands, from the human's point of view.
pub fn outcome(summary: &GameSummary) -> Option<String> {
    match summary.winner {
        Some(player) => Some(format!("Player {} has won!", player)),
        None if summary.is_full() => Some("It's a draw!".to_string()),
        None => None,
    }
}

/// Renders the board followed by the outcome or a prompt.
pub fn render(summary: &GameSummary) -> String {
    let footer = outcome(summary)
        .map(|text| format!("{text}\n[n] new game  [q] quit"))
        .unwrap_or_else(|| "Your move (X), 1-9:".to_string());
    format!("\n{}\n\n{}\n", summary.tiles, footer)
}

/// Runs the interactive loop until the user quits or stdin closes.
#[instrument]
pub async fn run(server_url: String) -> Result<()> {
    let client = RestGameClient::new(server_url);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let mut summary = start(&client).await?;
    stdout.write_all(render(&summary).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let message = match parse_input(&line) {
            Input::Quit => break,
            Input::NewGame => {
                summary = start(&client).await?;
                render(&summary)
            }
            Input::Move(tile) => match client.make_move(&summary.id, tile).await {
                Ok(next) => {
                    summary = next;
                    render(&summary)
                }
                Err(ClientError::Server { message, .. }) => {
                    warn!(tile, %message, "Move rejected");
                    format!("{message}\n{}", render(&summary))
                }
                Err(e) => return Err(e.into()),
            },
            Input::Unknown => "Enter a tile number 1-9, n for a new game or q to quit.\n".to_string(),
        };
        stdout.write_all(message.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("Leaving game");
    Ok(())
}

async fn start(client: &RestGameClient) -> Result<GameSummary> {
    let game = client.new_game().await?;
    Ok(GameSummary {
        id: game.id,
        tiles: game.tiles,
        winner: None,
    })
}
