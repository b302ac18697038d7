//! Chat Transcript Controller
//!
//! Handles one submit at a time: records the user's message, asks the
//! transport for a reply and records either the formatted reply or a visible
//! error entry. Submits take `&mut self`, so a controller never has two
//! replies in flight.

use tracing::{debug, warn};

use clawchat_core::{Message, Transcript};

use crate::transport::Transport;

/// Display surface the controller appends to.
pub trait TranscriptView {
    /// Shows a newly appended message.
    fn render(&mut self, message: &Message);

    /// Brings the newest message into view.
    fn scroll_to_latest(&mut self);
}

/// What a submit did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing appended.
    Ignored,
    /// User message and formatted reply appended.
    Replied,
    /// User message and an error entry appended.
    Failed,
}

pub struct TranscriptController<T, V> {
    transport: T,
    view: V,
    transcript: Transcript,
}

impl<T: Transport, V: TranscriptView> TranscriptController<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self {
            transport,
            view,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Submits the current input value.
    ///
    /// The input is cleared once the user message is recorded; blank input
    /// is left as it was.
    pub async fn submit(&mut self, input: &mut String) -> SubmitOutcome {
        let text = input.trim().to_string();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.append(Message::user(text.as_str()));
        input.clear();

        match self.transport.send(&text).await {
            Ok(reply) => {
                debug!(chars = reply.len(), "Reply received");
                self.append(Message::bot(markdown::format(&reply)));
                SubmitOutcome::Replied
            }
            Err(err) => {
                warn!(error = %err, "Chat request failed");
                self.append(Message::bot_error(&format!("Error: {err}")));
                SubmitOutcome::Failed
            }
        }
    }

    fn append(&mut self, message: Message) {
        let stored = self.transcript.append(message);
        self.view.render(stored);
        self.view.scroll_to_latest();
    }
}
