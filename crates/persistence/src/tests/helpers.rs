// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{KeyValueStore, MemoryStore, Persistence, PersistenceError};
use shiftwise::{Command, State, apply};
use shiftwise_domain::{Color, SlotRange, TimeSlot, Worker, WorkerId};

pub fn slot(id: &str) -> TimeSlot {
    id.parse().unwrap()
}

pub fn worker(id: &str, name: &str) -> Worker {
    Worker::new(WorkerId::new(id), name, Color::palette(0)).unwrap()
}

/// An adapter over a memory store seeded with the given key/value pairs.
pub fn create_seeded_persistence(entries: &[(&str, &str)]) -> Persistence<MemoryStore> {
    let mut store: MemoryStore = MemoryStore::new();
    for (key, value) in entries {
        store.set(key, value).unwrap();
    }
    Persistence::new(store)
}

/// A session with Alice (`a`) added and selected.
pub fn create_test_state() -> State {
    apply(
        &State::new(SlotRange::DEFAULT),
        Command::AddWorker {
            id: WorkerId::new("a"),
            name: String::from("Alice"),
            color: None,
        },
    )
    .unwrap()
    .new_state
}

/// A store that fails every operation.
#[derive(Debug, Default)]
pub struct BrokenStore {
    pub writes_attempted: usize,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::Storage(String::from("disk on fire")))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        self.writes_attempted += 1;
        Err(PersistenceError::Storage(String::from("disk on fire")))
    }

    fn remove(&mut self, _key: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Storage(String::from("disk on fire")))
    }
}
