//! Widget events and the stdin command reader
//!
//! The widget reacts to a handful of external signals: the background poll
//! tick, a manual refresh, a credential update, and quit. Interactive
//! commands arrive as lines on stdin.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// External signals the main loop reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Background poll tick (silent refresh)
    Poll,
    /// Manual refresh request
    Refresh,
    /// Credential updated from the settings surface
    TokenUpdated(String),
    /// Shut the widget down
    Quit,
}

/// Parse one stdin line into an event
///
/// Commands: `refresh`/`r`, `token <token>`, `quit`/`q`.
pub fn parse_command(line: &str) -> Option<WidgetEvent> {
    let line = line.trim();
    match line {
        "refresh" | "r" => Some(WidgetEvent::Refresh),
        "quit" | "q" | "exit" => Some(WidgetEvent::Quit),
        _ => line
            .strip_prefix("token ")
            .map(|token| WidgetEvent::TokenUpdated(token.trim().to_string())),
    }
}

/// Spawn the stdin reader task
///
/// Reads lines until EOF or `quit`, forwarding parsed commands to the main
/// loop.
pub fn spawn_stdin_reader(tx: Sender<WidgetEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Ok(Some(line)) = lines.next_line().await {
            match parse_command(&line) {
                Some(event) => {
                    let quit = event == WidgetEvent::Quit;
                    if tx.send(event).await.is_err() || quit {
                        break;
                    }
                }
                None => {
                    if !line.trim().is_empty() {
                        log::warn!("Unknown command: {}", line.trim());
                    }
                }
            }
        }
    })
}
