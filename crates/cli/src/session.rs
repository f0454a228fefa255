// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A loaded schedule plus the store it came from.
//!
//! Every accepted command is written back through the persistence adapter
//! before the next one runs.

use color_eyre::{Result, eyre::bail};
use shiftwise::{Changes, Command, CoreError, DragMode, DragPass, State, TransitionResult, apply};
use shiftwise_domain::{Day, SlotRange, TimeSlot, WorkerId};
use shiftwise_persistence::{BackendStore, KeyValueStore, Persistence};
use tracing::{debug, warn};

/// What a paint pass did.
#[derive(Debug, Default)]
pub struct PaintSummary {
    /// Cells that were edited.
    pub applied: usize,
    /// Cells accepted but left as they were (removing an absent worker).
    pub unchanged: usize,
    /// Cells listed more than once.
    pub repeated: usize,
    /// Cells the store refused, with the reason.
    pub rejected: Vec<(Day, TimeSlot, CoreError)>,
}

#[derive(Debug)]
pub struct Session<S: KeyValueStore = BackendStore> {
    persistence: Persistence<S>,
    state: State,
}

impl<S: KeyValueStore> Session<S> {
    /// Loads the persisted state for `range`.
    pub fn load(mut persistence: Persistence<S>, range: SlotRange) -> Self {
        let state: State = persistence.load_state(range);
        debug!(summary = %state.summary(), "Session loaded");
        Self { persistence, state }
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Finds a worker by id, or failing that by exact (trimmed) name.
    ///
    /// # Errors
    ///
    /// Fails when nothing matches or the name belongs to several workers.
    pub fn resolve_worker(&self, text: &str) -> Result<WorkerId> {
        let text: &str = text.trim();
        if let Some(worker) = self.state.workers.iter().find(|w| w.id.value() == text) {
            return Ok(worker.id.clone());
        }
        let mut matches = self.state.workers.iter().filter(|w| w.name == text);
        match (matches.next(), matches.next()) {
            (Some(worker), None) => Ok(worker.id.clone()),
            (Some(_), Some(_)) => bail!("Several workers are named '{text}'; use the id instead"),
            (None, _) => Err(CoreError::WorkerNotFound(WorkerId::new(text)).into()),
        }
    }

    /// Applies a command and persists whatever it changed.
    ///
    /// # Errors
    ///
    /// Returns the `CoreError` if the command is rejected; nothing is
    /// written in that case.
    pub fn execute(&mut self, command: Command) -> Result<Changes, CoreError> {
        let result: TransitionResult = apply(&self.state, command)?;
        self.commit(&result);
        Ok(result.changes)
    }

    /// Makes `worker_id` the selected worker, leaving it selected if it
    /// already was.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::WorkerNotFound` for an unknown id.
    pub fn select(&mut self, worker_id: &WorkerId) -> Result<(), CoreError> {
        if self.state.selected_worker.as_ref() == Some(worker_id) {
            return Ok(());
        }
        self.execute(Command::SelectWorker {
            worker_id: worker_id.clone(),
        })
        .map(|_| ())
    }

    /// Runs one drag pass for `worker_id` over `cells` in order.
    ///
    /// Rejected cells are collected and the pass carries on.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::WorkerNotFound` for an unknown id.
    pub fn paint(
        &mut self,
        worker_id: &WorkerId,
        mode: DragMode,
        cells: &[(Day, TimeSlot)],
    ) -> Result<PaintSummary, CoreError> {
        self.select(worker_id)?;
        let mut pass: DragPass = DragPass::begin(mode);
        let mut summary: PaintSummary = PaintSummary::default();
        for &(day, slot) in cells {
            match pass.enter(&self.state, day, slot) {
                Ok(Some(result)) if result.changes.any() => {
                    self.commit(&result);
                    summary.applied += 1;
                }
                Ok(Some(_)) => summary.unchanged += 1,
                Ok(None) => summary.repeated += 1,
                Err(err) => {
                    warn!(day = %day, slot = %slot, error = %err, "Cell rejected");
                    summary.rejected.push((day, slot, err));
                }
            }
        }
        debug!(
            visited = pass.visited_count(),
            applied = summary.applied,
            "Paint pass finished"
        );
        Ok(summary)
    }

    fn commit(&mut self, result: &TransitionResult) {
        self.persistence.persist_transition(result);
        self.state = result.new_state.clone();
    }
}
