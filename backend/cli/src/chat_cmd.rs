//! `clawchat chat`: an interactive terminal session against a running gateway.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use clawchat_client::{ChatClient, SubmitOutcome, TranscriptController};

use crate::terminal_output::{note_info, note_success, supports_color, TerminalView, DIM, RESET};

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

pub async fn run(endpoint: &str, timeout_secs: u64, transcript: Option<PathBuf>) -> Result<()> {
    let client = ChatClient::new(endpoint).with_timeout(Duration::from_secs(timeout_secs));
    let color = supports_color();
    let mut controller = TranscriptController::new(client, TerminalView::new(std::io::stdout(), color));

    note_info(&format!("Connected to {endpoint}. Type /quit to leave."));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt(color);
    while let Some(line) = lines.next_line().await? {
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }
        let mut input = line;
        let outcome = controller.submit(&mut input).await;
        if outcome != SubmitOutcome::Ignored {
            debug!(?outcome, entries = controller.transcript().len(), "Submit finished");
        }
        prompt(color);
    }

    if let Some(path) = transcript {
        tokio::fs::write(&path, controller.transcript().to_html())
            .await
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
        note_success(&format!("Transcript saved to {}", path.display()));
    }
    Ok(())
}

fn prompt(color: bool) {
    if color {
        print!("{DIM}> {RESET}");
    } else {
        print!("> ");
    }
    let _ = std::io::stdout().flush();
}
