pub mod error;
pub mod message;
pub mod traits;
pub mod transcript;
pub mod wire;

pub use error::ChatError;
pub use message::{Message, Sender};
pub use traits::{LlmProvider, LlmRequest, LlmResponse};
pub use transcript::Transcript;
pub use wire::{ChatReply, ChatRequest, ErrorBody, FormatRequest, FormatResponse};
