//! Markdown modal store.

use crate::cell::Writable;

/// Transient state for the single markdown popup.
///
/// The whole value is replaced on every change; collaborators read and write
/// it directly through the cell, there is no operation surface beyond
/// set/update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub show_modal: bool,
    pub title: String,
    /// Markdown body handed to the renderer while the modal is visible.
    pub content: String,
}

impl ModalState {
    /// The initial state: hidden, with empty title and content.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// A visible modal presenting `content` under `title`.
    pub fn markdown(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            show_modal: true,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Reactive cell holding the modal state.
pub type ModalStore = Writable<ModalState>;
