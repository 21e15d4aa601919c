//! End-to-end console sessions over scripted input.

use std::sync::Arc;

use opsdesk_cli::presentation::{Renderer, Width};
use opsdesk_cli::{ConsoleContext, Dispatcher, ScriptedSource, describe, repl};
use opsdesk_core::{Collection, HostStats, HostStatsPort, UserDirectory};
use opsdesk_db::{FsRecordStore, MemoryRecordStore};
use serde_json::json;
use tempfile::TempDir;

struct NoStats;

impl HostStatsPort for NoStats {
    fn snapshot(&self) -> HostStats {
        HostStats::default()
    }
}

fn dispatcher(store: Arc<dyn opsdesk_core::RecordStore>) -> Dispatcher<Vec<u8>> {
    Dispatcher::new(ConsoleContext::new(
        Renderer::new(Vec::new(), Width::Fixed(72), false),
        UserDirectory::new(store),
        Arc::new(NoStats),
    ))
}

async fn session(store: Arc<dyn opsdesk_core::RecordStore>, lines: &[&str]) -> String {
    let mut source = ScriptedSource::new(lines.iter().copied());
    let mut dispatcher = dispatcher(store);
    repl::run(&mut source, &mut dispatcher).await.unwrap();
    String::from_utf8(dispatcher.into_context().renderer.into_inner()).unwrap()
}

fn users() -> Arc<MemoryRecordStore> {
    Arc::new(
        MemoryRecordStore::new().with_record(
            Collection::Users,
            "u1",
            json!({
                "firstName": "Grace",
                "lastName": "Hopper",
                "phone": "5551230000",
                "hashedPassword": "s3cr3t-hash",
                "orders": ["o9"]
            }),
        ),
    )
}

#[tokio::test]
async fn credential_never_reaches_output() {
    let out = session(users(), &["more user info --u1", "list users"]).await;

    assert!(out.contains("\"firstName\": \"Grace\""));
    assert!(out.contains("Name: Grace Hopper Phone: 5551230000 Orders: 1"));
    assert!(!out.contains("s3cr3t-hash"));
}

#[tokio::test]
async fn help_enumerates_registry_in_order() {
    let out = session(users(), &["HELP"]).await;

    let mut cursor = 0;
    for descriptor in describe() {
        let row = out[cursor..]
            .find(&format!("{}  ", descriptor.usage))
            .unwrap_or_else(|| panic!("missing {}", descriptor.usage));
        cursor += row + descriptor.usage.len();
    }
    for descriptor in describe() {
        assert_eq!(out.matches(descriptor.description).count(), 1);
    }
}

#[tokio::test]
async fn empty_store_lists_no_users() {
    let out = session(Arc::new(MemoryRecordStore::new()), &["list users"]).await;

    assert_eq!(
        out,
        "The CLI is running\nUnable to find any registered users at this time\n"
    );
}

#[tokio::test]
async fn whitespace_only_lines_produce_nothing() {
    let out = session(users(), &["   ", "\t", ""]).await;
    assert_eq!(out, "The CLI is running\n");
}

#[tokio::test]
async fn exit_ends_session_before_later_lines() {
    let out = session(users(), &["list orders", "exit", "list menu items"]).await;
    assert_eq!(out, "The CLI is running\nYou asked for orders\n");
}

#[tokio::test]
async fn file_store_session() {
    let dir = TempDir::new().unwrap();
    let users_dir = dir.path().join("users");
    std::fs::create_dir_all(&users_dir).unwrap();
    std::fs::write(users_dir.join(".gitkeep"), b"").unwrap();
    std::fs::write(
        users_dir.join("5550001111.json"),
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "5550001111",
            "hashedPassword": "c0ffee"
        })
        .to_string(),
    )
    .unwrap();

    let store = Arc::new(FsRecordStore::new(dir.path()));
    let out = session(
        store,
        &["list users", "more user info --5550001111", "more user info --missing"],
    )
    .await;

    assert!(out.contains("Name: Ada Lovelace Phone: 5550001111 Orders: 0"));
    assert!(out.contains("\"phone\": \"5550001111\""));
    assert!(out.contains("No user found with id missing"));
    assert!(!out.contains("c0ffee"));
    assert!(!out.contains("Unable to find any registered users"));
}
