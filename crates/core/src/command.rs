// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftwise_domain::{Color, Day, TimeSlot, WorkerId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request session state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a worker to the end of the list.
    AddWorker {
        /// Identifier for the new worker, usually `WorkerId::generate()`.
        id: WorkerId,
        /// Display name; must not be blank.
        name: String,
        /// Color; the next palette color when `None`.
        color: Option<Color>,
    },
    /// Delete a worker and remove it from every slot.
    DeleteWorker {
        /// The worker to delete.
        worker_id: WorkerId,
    },
    /// Select a worker, or deselect it if it is already selected.
    SelectWorker {
        /// The worker to select.
        worker_id: WorkerId,
    },
    /// Add or remove the selected worker in one slot.
    ToggleShift {
        /// The day of the cell.
        day: Day,
        /// The slot of the cell.
        slot: TimeSlot,
    },
    /// Remove the selected worker from one slot, if present.
    RemoveShift {
        /// The day of the cell.
        day: Day,
        /// The slot of the cell.
        slot: TimeSlot,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddWorker { .. } => "AddWorker",
            Self::DeleteWorker { .. } => "DeleteWorker",
            Self::SelectWorker { .. } => "SelectWorker",
            Self::ToggleShift { .. } => "ToggleShift",
            Self::RemoveShift { .. } => "RemoveShift",
        }
    }
}
