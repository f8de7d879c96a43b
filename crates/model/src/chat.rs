use serde::{Deserialize, Serialize};

use crate::ids::ChatId;

/// A labeled block of markdown-formatted text attached to a message,
/// typically agent output surfaced in the markdown modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownFragment {
    pub agent: String,
    /// Markdown-formatted body, serialized under the wire name `md`.
    #[serde(rename = "md")]
    pub body: String,
}

impl MarkdownFragment {
    pub fn new(agent: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            body: body.into(),
        }
    }
}

/// One turn in a conversation.
///
/// An earlier revision of the wire shape had no `markdown` field; the
/// `#[serde(default)]` keeps those payloads decodable as the same type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// True when the user authored this turn, false for agent output.
    pub is_user_input: bool,
    /// Raw text content, serialized under the wire name `message`.
    #[serde(rename = "message")]
    pub content: String,
    /// Label of the agent this turn belongs to.
    pub agent: String,
    #[serde(default)]
    pub markdown: Vec<MarkdownFragment>,
}

impl Message {
    /// Creates a user-authored turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            is_user_input: true,
            content: content.into(),
            agent: "user".to_string(),
            markdown: Vec::new(),
        }
    }

    /// Creates an agent-authored turn.
    pub fn agent(agent: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            is_user_input: false,
            content: content.into(),
            agent: agent.into(),
            markdown: Vec::new(),
        }
    }

    /// Attaches markdown fragments to this turn.
    pub fn with_markdown(mut self, markdown: Vec<MarkdownFragment>) -> Self {
        self.markdown = markdown;
        self
    }
}

/// A conversation session: a unique id plus its ordered turns.
///
/// Conversation order is the vector order and nothing in this workspace
/// reorders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub messages: Vec<Message>,
}

impl Chat {
    /// Creates an empty chat.
    pub fn new(id: impl Into<ChatId>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
        }
    }

    /// Appends one turn, preserving conversation order.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
