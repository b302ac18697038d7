//! Client side of ClawChat: the HTTP transport to `/api/chat` and the
//! controller that turns submits into transcript entries.

pub mod controller;
pub mod transport;

pub use controller::{SubmitOutcome, TranscriptController, TranscriptView};
pub use transport::{ChatClient, Transport, TransportError};
