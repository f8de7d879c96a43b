//! Reactive state containers for the chat client.
//!
//! Execution model: single logical thread of control driven by UI events.
//! Every mutation replaces a cell's value wholesale and notifies subscribers
//! synchronously before returning; there is no suspension point inside any
//! operation.

pub mod cell;
pub mod chat;
pub mod modal;

pub use cell::{Subscription, Writable};
pub use chat::ChatStore;
pub use modal::{ModalState, ModalStore};

/// Everything the UI layer needs, constructed once at startup and passed
/// down by handle instead of living in module-level globals.
#[derive(Clone, Default)]
pub struct Stores {
    pub chat: ChatStore,
    pub modal: ModalStore,
}

impl Stores {
    /// Creates both stores in their initial state.
    pub fn new() -> Self {
        Self::default()
    }
}
