//! Unit tests for the chat and resource caches through the store.

use homeroom::slices::{Attachment, Conversation, Message, Resource};
use homeroom::{AppStore, MemoryStorage};

fn store() -> AppStore {
    let store = AppStore::new(MemoryStorage::new(), "cache-test");
    store.hydrate(|_| {});
    store
}

#[test]
fn test_resource_add_then_lookup() {
    let store = store();
    store.add_resource(Resource::new("r1", "Bus schedule", "transport"));

    let found = store.resource_by_id("r1").expect("r1 should be cached");
    assert_eq!(found.title, "Bus schedule");
    assert!(store.resource_by_id("missing").is_none());
}

#[test]
fn test_resource_update_via_add_returns_first_copy() {
    let store = store();
    store.add_resource(Resource::new("r1", "Bus schedule", "transport"));

    let mut updated = Resource::new("r1", "Bus schedule (spring)", "transport");
    updated.url = Some("https://files.example/bus.pdf".to_string());
    store.add_resource(updated);

    assert_eq!(store.read(|s| s.resources.resources().len()), 2);
    let found = store.resource_by_id("r1").unwrap();
    assert_eq!(found.title, "Bus schedule");
    assert!(found.url.is_none());
}

#[test]
fn test_set_resources_replaces_cache() {
    let store = store();
    store.add_resource(Resource::new("r1", "Old", "misc"));
    store.update(|s| {
        s.resources
            .set_resources(vec![Resource::new("r2", "New", "misc")])
    });

    assert!(store.resource_by_id("r1").is_none());
    assert!(store.resource_by_id("r2").is_some());
}

#[test]
fn test_conversation_messages_in_order() {
    let store = store();
    store.add_conversation(Conversation::new("c1", "Ms. Rivera"));

    assert!(store.add_message("c1", Message::draft("c1", "u1", "Hi!")));
    let with_file = Message::draft("c1", "u2", "Here is the worksheet").with_attachment(Attachment {
        name: "worksheet.pdf".to_string(),
        url: "https://files.example/worksheet.pdf".to_string(),
        mime_type: Some("application/pdf".to_string()),
    });
    assert!(store.add_message("c1", with_file));

    let thread = store.conversation_by_id("c1").unwrap();
    let bodies: Vec<_> = thread.messages.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["Hi!", "Here is the worksheet"]);
    assert_eq!(
        thread.last_message().and_then(|m| m.attachment.as_ref()).map(|a| a.name.as_str()),
        Some("worksheet.pdf")
    );
}

#[test]
fn test_missing_conversation_is_absent() {
    let store = store();
    assert!(store.conversation_by_id("nope").is_none());
    assert!(!store.add_message("nope", Message::draft("nope", "u1", "hello")));
}
