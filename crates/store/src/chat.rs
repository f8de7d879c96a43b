//! Chat collection store.
//!
//! Single source of truth for the set of known chats and which one is
//! active. Constructed once at startup and handed to the UI layer; every
//! consumer shares the same cells through cheap handle clones.

use nimbus_model::{Chat, ChatId};

use crate::cell::Writable;

/// Reactive state for the chat collection.
///
/// The four cells are independent: nothing here keeps `current_chat` or
/// `is_chat_selected` in sync with `all_chats`. Removing the chat that
/// `current_chat` references leaves `current_chat` untouched; clearing the
/// selection is the collaborator's call.
#[derive(Clone, Default)]
pub struct ChatStore {
    /// Whether any chat is currently selected.
    pub is_chat_selected: Writable<bool>,
    /// Every known chat, in insertion order.
    pub all_chats: Writable<Vec<Chat>>,
    /// The selected chat, if any.
    pub current_chat: Writable<Option<Chat>>,
    /// Transient draft text for the input box.
    pub chat_input: Writable<String>,
}

impl ChatStore {
    /// Creates a store with no chats, no selection, and an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chat` to the end of the collection.
    ///
    /// No uniqueness check: callers are expected to mint distinct ids, and a
    /// duplicate id slips in silently if they do not.
    pub fn add_chat(&self, chat: Chat) {
        tracing::debug!(chat_id = %chat.id, "appending chat to collection");
        self.all_chats.update(|mut chats| {
            chats.push(chat);
            chats
        });
    }

    /// Drops every chat whose id equals `id`, preserving the relative order
    /// of the rest. Silently a no-op when the id is not present (subscribers
    /// are still notified, as with every replacement).
    pub fn remove_chat(&self, id: &ChatId) {
        tracing::debug!(chat_id = %id, "removing chat from collection");
        self.all_chats.update(|chats| {
            chats.into_iter().filter(|chat| chat.id != *id).collect()
        });
    }

    /// Replaces every chat whose id equals `chat.id` with `chat`, in place;
    /// all other elements keep their position. No-op when nothing matches.
    pub fn update_chat(&self, chat: Chat) {
        tracing::debug!(chat_id = %chat.id, "replacing chat in collection");
        self.all_chats.update(|chats| {
            chats
                .into_iter()
                .map(|existing| {
                    if existing.id == chat.id {
                        chat.clone()
                    } else {
                        existing
                    }
                })
                .collect()
        });
    }
}
