use ajaxctl::storage::{FileStore, MemoryStore, PreferenceStore, PreferenceStoreExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct TableState {
    page_length: u32,
    search: String,
}

#[test]
fn test_memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("theme"), None);

    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);

    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.len(), 1);

    store.remove("theme").unwrap();
    assert_eq!(store.get("theme"), None);
    assert!(store.is_empty());
}

#[test]
fn test_json_helpers() {
    let store = MemoryStore::new();
    let state = TableState {
        page_length: 10,
        search: "Room".to_string(),
    };

    store.set_json("rooms.table", &state).unwrap();
    assert_eq!(store.get_json::<TableState>("rooms.table"), Some(state));
    assert_eq!(store.get_json::<TableState>("missing"), None);

    store.set("broken", "{not json").unwrap();
    assert_eq!(store.get_json::<TableState>("broken"), None);
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ajaxctl").join("preferences.json");

    {
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("theme"), None);
        assert!(!path.exists());

        store.set("theme", "dark").unwrap();
        store.set_json("sidebar.width", &30u32).unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.path(), path.as_path());
    assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    assert_eq!(reopened.get_json::<u32>("sidebar.width"), Some(30));

    reopened.remove("theme").unwrap();
    let again = FileStore::open(&path).unwrap();
    assert_eq!(again.get("theme"), None);
}

#[test]
fn test_file_store_empty_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn test_file_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(FileStore::open(&path).is_err());
}

#[test]
fn test_store_usable_through_reference() {
    fn read_theme(store: impl PreferenceStore) -> Option<String> {
        store.get("theme")
    }

    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(read_theme(&store).as_deref(), Some("dark"));
}
