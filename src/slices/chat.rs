//! Local cache of chat threads with their messages.
//!
//! Threads are appended in arrival order and never deduplicated; lookups
//! return the first thread with a matching id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Build a locally composed message with a client-generated id.
    pub fn draft(
        conversation_id: impl Into<String>,
        sender_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.into(),
            sender_id: sender_id.into(),
            body: body.into(),
            attachment: None,
            sent_at: Utc::now(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// A chat thread with its embedded messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            participants: Vec::new(),
            messages: Vec::new(),
            updated_at: None,
        }
    }

    /// Most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Ordered list of cached conversations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSlice {
    #[serde(default)]
    conversations: Vec<Conversation>,
}

impl ChatSlice {
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Replace the whole cache, e.g. after fetching the conversation list.
    pub fn set_conversations(&mut self, conversations: Vec<Conversation>) {
        self.conversations = conversations;
    }

    /// Append a conversation. Existing entries with the same id are kept.
    pub fn add_conversation(&mut self, conversation: Conversation) {
        self.conversations.push(conversation);
    }

    /// First conversation with the given id.
    pub fn conversation_by_id(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Append a message to the first conversation with the given id.
    ///
    /// Returns `false` when no such conversation is cached.
    pub fn add_message(&mut self, conversation_id: &str, message: Message) -> bool {
        match self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            Some(conversation) => {
                conversation.updated_at = Some(message.sent_at);
                conversation.messages.push(message);
                true
            }
            None => false,
        }
    }

    /// Messages of the first conversation with the given id.
    pub fn messages_for(&self, conversation_id: &str) -> &[Message] {
        self.conversation_by_id(conversation_id)
            .map(|c| c.messages.as_slice())
            .unwrap_or_default()
    }
}
