//! Drives the stores the way a UI shell would: construct them once, hand
//! out handles, subscribe for rendering, and mutate in response to events.
//!
//! Run with `cargo run -p nimbus-store --example chat_session`.

use nimbus_model::{Chat, ChatId, MarkdownFragment, Message};
use nimbus_store::{ModalState, Stores};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let stores = Stores::new();

    // A sidebar would re-render from this subscription.
    stores.chat.all_chats.subscribe(|chats: &Vec<Chat>| {
        let titles: Vec<&str> = chats.iter().map(|chat| chat.id.as_str()).collect();
        println!("sidebar: {titles:?}");
    });
    stores.modal.subscribe(|state: &ModalState| {
        if state.show_modal {
            println!("modal [{}]: {}", state.title, state.content);
        }
    });

    // User starts two conversations.
    let first_id = ChatId::random();
    stores.chat.add_chat(Chat::new(first_id.clone()));
    stores.chat.add_chat(Chat::new(ChatId::random()));

    // User types, submits, and an agent answers with markdown attached.
    stores.chat.chat_input.set("what changed upstream?".into());
    let mut first = Chat::new(first_id.clone());
    first.push_message(Message::user(stores.chat.chat_input.get()));
    first.push_message(
        Message::agent("researcher", "see attached summary").with_markdown(vec![
            MarkdownFragment::new("researcher", "# Upstream changes\n\n- nothing broke"),
        ]),
    );
    stores.chat.chat_input.set(String::new());
    stores.chat.update_chat(first.clone());
    stores.chat.current_chat.set(Some(first));
    stores.chat.is_chat_selected.set(true);

    // User pops the markdown fragment into the modal, then dismisses it.
    stores
        .modal
        .set(ModalState::markdown("researcher", "# Upstream changes\n\n- nothing broke"));
    stores.modal.update(|_| ModalState::hidden());

    // User deletes the second conversation.
    let second_id = stores.chat.all_chats.with(|chats| chats[1].id.clone());
    stores.chat.remove_chat(&second_id);
}
