use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat transcript entry.
///
/// User messages carry the raw trimmed input; bot messages carry formatted
/// HTML. Fields are private so a message cannot change once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    sender: Sender,
    text: String,
    created_at: DateTime<Utc>,
}

impl Message {
    fn new(sender: Sender, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text,
            created_at: Utc::now(),
        }
    }

    /// A message typed by the user, stored as given.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text.into())
    }

    /// A bot reply; `html` must already be formatted.
    pub fn bot(html: impl Into<String>) -> Self {
        Self::new(Sender::Bot, html.into())
    }

    /// A bot entry describing a failure. The description is escaped.
    pub fn bot_error(description: &str) -> Self {
        Self::new(Sender::Bot, markdown::escape_html(description))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let user = Message::user("hi <there>");
        assert_eq!(user.sender(), Sender::User);
        assert_eq!(user.text(), "hi <there>");

        let bot = Message::bot("<strong>ok</strong>");
        assert_eq!(bot.sender(), Sender::Bot);
        assert_eq!(bot.text(), "<strong>ok</strong>");
        assert_ne!(user.id(), bot.id());
    }

    #[test]
    fn test_bot_error_is_escaped() {
        let msg = Message::bot_error("Error: <timeout>");
        assert_eq!(msg.text(), "Error: &lt;timeout&gt;");
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(Sender::User.to_string(), "user");
    }
}
