//! Append-only chat transcript.

use crate::message::{Message, Sender};

/// Ordered record of everything shown in a chat session.
///
/// Entries can only be appended; insertion order is display order.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns a reference to the stored entry.
    pub fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Renders the transcript as an HTML fragment, one `div` per message.
    ///
    /// User text is escaped; bot text is already HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"transcript\">\n");
        for message in &self.messages {
            let body = match message.sender() {
                Sender::User => markdown::escape_html(message.text()),
                Sender::Bot => message.text().to_string(),
            };
            html.push_str(&format!(
                "<div class=\"message {}\">{}</div>\n",
                message.sender(),
                body
            ));
        }
        html.push_str("</div>\n");
        html
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
