// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FileStore, KeyValueStore, MemoryStore, Persistence, PersistenceError};
use std::path::PathBuf;

#[test]
fn test_memory_store_set_get_remove() {
    let mut store: MemoryStore = MemoryStore::new();
    assert!(store.is_empty());

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_file_store_creates_directory_and_files() {
    let root = tempfile::tempdir().unwrap();
    let dir: PathBuf = root.path().join("nested").join("data");

    let mut store: FileStore = FileStore::open(&dir).unwrap();
    assert!(dir.is_dir());

    store.set("shiftwise-workers", "[]").unwrap();
    let on_disk: String = std::fs::read_to_string(dir.join("shiftwise-workers.json")).unwrap();
    assert_eq!(on_disk, "[]");
    assert!(!dir.join("shiftwise-workers.json.tmp").exists());
}

#[test]
fn test_file_store_missing_key_is_none() {
    let root = tempfile::tempdir().unwrap();
    let mut store: FileStore = FileStore::open(root.path()).unwrap();

    assert_eq!(store.get("absent").unwrap(), None);
    store.remove("absent").unwrap();
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let root = tempfile::tempdir().unwrap();
    let mut store: FileStore = FileStore::open(root.path()).unwrap();

    for key in ["", "../escape", "a/b", "dot.ted"] {
        assert_eq!(
            store.set(key, "x"),
            Err(PersistenceError::InvalidKey(key.to_string()))
        );
    }
}

#[test]
fn test_file_store_open_fails_on_regular_file() {
    let root = tempfile::tempdir().unwrap();
    let file: PathBuf = root.path().join("occupied");
    std::fs::write(&file, "not a directory").unwrap();

    let result = FileStore::open(&file);
    assert!(matches!(
        result,
        Err(PersistenceError::InitializationError(_))
    ));
}

#[test]
fn test_persistence_new_with_dir_survives_reopen() {
    let root = tempfile::tempdir().unwrap();
    {
        let mut persistence = Persistence::new_with_dir(root.path()).unwrap();
        persistence.save_workers(&[crate::tests::helpers::worker("a", "Alice")]);
    }

    let mut reopened = Persistence::new_with_dir(root.path()).unwrap();
    let names: Vec<String> = reopened
        .load_workers()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, ["Alice"]);
}
