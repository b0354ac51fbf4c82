//! Integration tests for the registry store and project builder
//!
//! These tests drive the create/remove workflows end to end against a
//! registry file in a temporary directory.

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;
use warpstart_core::{
    AppCatalog, AppTag, ConfigLoader, Error, Project, ProjectBuilder, Registry, RegistryStore,
};

/// Open a store inside a fresh temporary data directory
fn create_temp_store() -> (RegistryStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir =
        Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("Invalid UTF-8 path");
    let config = ConfigLoader::with_dir(data_dir).load().unwrap();
    let store = RegistryStore::open(config.store_path()).unwrap();
    (store, temp_dir)
}

fn read_json(store: &RegistryStore) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap()
}

#[test]
fn test_create_project_scenario() {
    let (store, _temp) = create_temp_store();
    let catalog = AppCatalog::default();
    assert_eq!(read_json(&store), serde_json::json!({}));

    let project = ProjectBuilder::new("dev", &catalog)
        .directory("/tmp/x")
        .apps([AppTag::Terminal])
        .commands_input("echo hi")
        .build()
        .unwrap();

    let mut registry = store.load().unwrap();
    registry.insert(project);
    store.save(&registry).unwrap();

    assert_eq!(
        read_json(&store),
        serde_json::json!({
            "dev": {
                "apps": ["xfce4-terminal --working-directory=/tmp/x"],
                "commands": ["echo hi"]
            }
        })
    );
}

#[test]
fn test_remove_project_scenario() {
    let (store, _temp) = create_temp_store();
    fs::write(
        store.path(),
        r#"{"dev": {"apps": ["xfce4-terminal --working-directory=/tmp/x"], "commands": ["echo hi"]}}"#,
    )
    .unwrap();

    let mut registry = store.load().unwrap();
    assert!(registry.remove("dev").is_some());
    store.save(&registry).unwrap();

    assert_eq!(read_json(&store), serde_json::json!({}));

    let mut reloaded = store.load().unwrap();
    assert!(!reloaded.contains("dev"));
    assert!(reloaded.remove("dev").is_none());
    assert!(reloaded.is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let (store, _temp) = create_temp_store();
    let catalog = AppCatalog::default();

    let web = ProjectBuilder::new("web", &catalog)
        .directory("/srv/web")
        .apps([AppTag::Browser, AppTag::Editor, AppTag::FileManager])
        .url("http://localhost:8080")
        .commands_input("docker compose up -d, npm run dev")
        .build()
        .unwrap();
    let api = ProjectBuilder::new("api", &catalog)
        .directory("/srv/api")
        .workspace("/srv/api/api.code-workspace")
        .apps([AppTag::EditorWorkspace, AppTag::ApiClient, AppTag::DatabaseGui])
        .build()
        .unwrap();

    let registry: Registry = [web, api].into_iter().collect();
    store.save(&registry).unwrap();

    assert_eq!(store.load().unwrap(), registry);
}

#[test]
fn test_create_overwrites_existing_name() {
    let (store, _temp) = create_temp_store();

    let mut first = Project::new("dev");
    first.commands.push("make".to_string());
    let mut registry = store.load().unwrap();
    registry.insert(first);
    store.save(&registry).unwrap();

    let mut second = Project::new("dev");
    second.apps.push("postman".to_string());
    let mut registry = store.load().unwrap();
    registry.insert(second.clone());
    store.save(&registry).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get("dev"), Some(&second));
}

#[test]
fn test_corrupt_store_is_reported() {
    let (store, _temp) = create_temp_store();
    fs::write(store.path(), "{\"dev\": ").unwrap();

    match store.load() {
        Err(Error::CorruptStore { path, .. }) => assert_eq!(path, store.path().as_str()),
        other => panic!("expected CorruptStore, got {:?}", other),
    }
}

#[test]
fn test_reads_file_written_by_earlier_versions() {
    let (store, _temp) = create_temp_store();
    let legacy = r#"{
    "blog": {
        "apps": [
            "firefox",
            "code /home/me/blog"
        ],
        "commands": [
            "hugo server",
            " git status"
        ]
    }
}"#;
    fs::write(store.path(), legacy).unwrap();

    let project = store.load().unwrap().get("blog").cloned().unwrap();
    assert_eq!(project.name, "blog");
    assert_eq!(project.apps, vec!["firefox", "code /home/me/blog"]);
    assert_eq!(project.commands, vec!["hugo server", " git status"]);
}
