// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::initialize;
use shiftwise_domain::{ScheduleData, SlotRange, Worker, WorkerId};

/// The complete state of one editing session.
///
/// The schedule and worker list are persisted; the selection is not.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Workers in insertion order.
    pub workers: Vec<Worker>,
    /// The weekly grid.
    pub schedule: ScheduleData,
    /// The worker that grid clicks assign or unassign.
    pub selected_worker: Option<WorkerId>,
}

impl State {
    /// Creates an empty session for a slot range.
    #[must_use]
    pub fn new(range: SlotRange) -> Self {
        Self {
            workers: Vec::new(),
            schedule: initialize(range),
            selected_worker: None,
        }
    }

    /// Creates a session from loaded data, with nothing selected.
    #[must_use]
    pub const fn from_parts(workers: Vec<Worker>, schedule: ScheduleData) -> Self {
        Self {
            workers,
            schedule,
            selected_worker: None,
        }
    }

    /// The slot range of the grid. The schedule owns it, so the two can
    /// never disagree.
    #[must_use]
    pub const fn slot_range(&self) -> SlotRange {
        self.schedule.range()
    }

    /// Looks up a worker by id.
    #[must_use]
    pub fn worker(&self, worker_id: &WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|worker| &worker.id == worker_id)
    }

    /// Returns the selected worker, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Worker> {
        self.selected_worker
            .as_ref()
            .and_then(|worker_id| self.worker(worker_id))
    }

    /// Returns a one-line summary, used in transition logging.
    #[must_use]
    pub fn summary(&self) -> String {
        let assigned_cells: usize = self
            .schedule
            .cells()
            .filter(|(_, _, assignment)| assignment.is_some())
            .count();
        format!(
            "workers_count={},assigned_cells={},selected={}",
            self.workers.len(),
            assigned_cells,
            self.selected_worker
                .as_ref()
                .map_or("none", WorkerId::value)
        )
    }
}

/// Which persisted parts of the state a transition touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Changes {
    /// The worker list changed.
    pub workers: bool,
    /// The schedule grid changed.
    pub schedule: bool,
}

impl Changes {
    /// Returns whether anything needs to be written back.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.workers || self.schedule
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition changed.
    pub changes: Changes,
}
