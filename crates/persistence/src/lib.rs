// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the `ShiftWise` schedule store.
//!
//! State lives under two logical keys in a synchronous key-value store:
//!
//! - `shiftwise-workers`: the ordered worker list as a JSON array
//! - `shiftwise-schedule`: the weekly grid as a JSON object keyed by day
//!
//! ## Failure Model
//!
//! Loading is fail-soft. A missing key yields the empty value; a blob that
//! cannot be parsed is logged, deleted, and replaced by the empty value.
//! Schedule blobs in the older single-worker format are upgraded through
//! [`shiftwise::migrate`] on the way in. Slots stored outside the requested
//! range widen the loaded range, so a narrower range never drops stored
//! shifts. Shifts of workers missing from the worker list are removed when
//! both keys are loaded together.
//!
//! Saving is best-effort. Write failures are logged and swallowed so a broken
//! store never blocks an edit.
//!
//! ## Backends
//!
//! - [`MemoryStore`]: in-process, used by tests and throwaway sessions
//! - [`FileStore`]: one `<key>.json` file per key in a data directory

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod error;

#[cfg(test)]
mod tests;

pub use backend::{BackendStore, FileStore, KeyValueStore, MemoryStore};
pub use error::PersistenceError;

use serde_json::Value;
use shiftwise::{State, TransitionResult, migrate, remove_worker, stored_range};
use shiftwise_domain::{ScheduleData, SlotRange, Worker, WorkerId};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Key holding the worker list.
pub const WORKERS_KEY: &str = "shiftwise-workers";

/// Key holding the schedule grid.
pub const SCHEDULE_KEY: &str = "shiftwise-schedule";

/// Persistence adapter for the worker list and schedule grid.
///
/// Generic over the store so tests can hand in their own; the default is the
/// backend chosen at startup.
#[derive(Debug)]
pub struct Persistence<S: KeyValueStore = BackendStore> {
    store: S,
}

impl Persistence<BackendStore> {
    /// Creates a persistence adapter backed by an empty in-memory store.
    #[must_use]
    pub fn new_in_memory() -> Self {
        Self::new(BackendStore::Memory(MemoryStore::new()))
    }

    /// Creates a persistence adapter backed by files in `dir`.
    ///
    /// # Arguments
    ///
    /// * `dir` - The data directory; created if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new_with_dir<P: AsRef<Path>>(dir: P) -> Result<Self, PersistenceError> {
        let store: FileStore = FileStore::open(dir)?;
        info!(dir = %store.dir().display(), "Using file-backed persistence");
        Ok(Self::new(BackendStore::File(store)))
    }
}

impl<S: KeyValueStore> Persistence<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Loads the worker list.
    ///
    /// # Returns
    ///
    /// The stored workers in order, or an empty list when the key is absent,
    /// unreadable, or corrupt. A corrupt blob is removed.
    pub fn load_workers(&mut self) -> Vec<Worker> {
        let Some(raw) = self.read(WORKERS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Worker>>(&raw) {
            Ok(workers) => {
                debug!(count = workers.len(), "Loaded workers");
                workers
            }
            Err(err) => {
                warn!(key = WORKERS_KEY, error = %err, "Discarding unreadable worker list");
                self.discard(WORKERS_KEY);
                Vec::new()
            }
        }
    }

    /// Loads the schedule grid, upgrading legacy blobs.
    ///
    /// # Arguments
    ///
    /// * `range` - The slot range the grid is normalized to; widened to cover
    ///   any slot the stored grid already holds
    ///
    /// # Returns
    ///
    /// The migrated grid, or the empty grid when the key is absent,
    /// unreadable, or not valid JSON. Invalid JSON is removed.
    pub fn load_schedule(&mut self, range: SlotRange) -> ScheduleData {
        let Some(raw) = self.read(SCHEDULE_KEY) else {
            return ScheduleData::empty(range);
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => {
                let covered: SlotRange = stored_range(&value, range);
                if covered != range {
                    info!(
                        start_hour = covered.start_hour(),
                        end_hour = covered.end_hour(),
                        "Stored schedule extends past the requested hours, widening range"
                    );
                }
                debug!(key = SCHEDULE_KEY, "Loaded schedule");
                migrate(&value, covered)
            }
            Err(err) => {
                warn!(key = SCHEDULE_KEY, error = %err, "Discarding unreadable schedule");
                self.discard(SCHEDULE_KEY);
                ScheduleData::empty(range)
            }
        }
    }

    /// Loads both keys into a fresh session state with nothing selected.
    ///
    /// Grid entries naming a worker absent from the worker list (for example
    /// after a corrupt list was discarded) are removed, and the cleaned grid
    /// is written back.
    pub fn load_state(&mut self, range: SlotRange) -> State {
        let workers: Vec<Worker> = self.load_workers();
        let mut schedule: ScheduleData = self.load_schedule(range);

        let dangling: BTreeSet<WorkerId> = schedule
            .cells()
            .filter_map(|(_, _, assignment)| assignment)
            .flat_map(|assignment| assignment.workers().iter())
            .filter(|id| !workers.iter().any(|worker| &worker.id == *id))
            .cloned()
            .collect();
        if !dangling.is_empty() {
            warn!(
                count = dangling.len(),
                ids = ?dangling,
                "Removing shifts of unknown workers"
            );
            for worker_id in &dangling {
                schedule = remove_worker(&schedule, worker_id);
            }
            self.save_schedule(&schedule);
        }

        State::from_parts(workers, schedule)
    }

    /// Writes the worker list. Failures are logged, never returned.
    pub fn save_workers(&mut self, workers: &[Worker]) {
        if let Err(err) = self.write_json(WORKERS_KEY, &workers) {
            warn!(key = WORKERS_KEY, error = %err, "Failed to save workers");
        }
    }

    /// Writes the schedule grid. Failures are logged, never returned.
    pub fn save_schedule(&mut self, schedule: &ScheduleData) {
        if let Err(err) = self.write_json(SCHEDULE_KEY, schedule) {
            warn!(key = SCHEDULE_KEY, error = %err, "Failed to save schedule");
        }
    }

    /// Writes whichever keys a transition changed.
    ///
    /// # Arguments
    ///
    /// * `result` - The transition result to persist
    pub fn persist_transition(&mut self, result: &TransitionResult) {
        if !result.changes.any() {
            debug!("Transition changed nothing, skipping persistence");
            return;
        }
        if result.changes.workers {
            self.save_workers(&result.new_state.workers);
        }
        if result.changes.schedule {
            self.save_schedule(&result.new_state.schedule);
        }
        debug!(
            workers = result.changes.workers,
            schedule = result.changes.schedule,
            "Persisted transition"
        );
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key, error = %err, "Failed to read key, using empty value");
                None
            }
        }
    }

    fn discard(&mut self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            warn!(key, error = %err, "Failed to remove corrupt key");
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), PersistenceError> {
        let json: String = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }
}
