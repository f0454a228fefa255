// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftwise_domain::{Day, DomainError, TimeSlot, WorkerId};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The referenced worker does not exist.
    WorkerNotFound(WorkerId),
    /// A shift command was issued with no worker selected.
    NoWorkerSelected,
    /// The slot is not part of the configured range.
    SlotOutOfRange {
        /// The day of the cell.
        day: Day,
        /// The rejected slot.
        slot: TimeSlot,
    },
    /// Adding the slot would push the worker past the weekly cap.
    WeeklyCapExceeded {
        /// Name of the worker, for the user-facing message.
        worker_name: String,
        /// The worker's current regular hours.
        regular_hours: f64,
        /// The cap that would be exceeded.
        cap: f64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::WorkerNotFound(worker_id) => write!(f, "Worker '{worker_id}' not found"),
            Self::NoWorkerSelected => {
                write!(f, "Select a worker before assigning or unassigning shifts")
            }
            Self::SlotOutOfRange { day, slot } => {
                write!(f, "Slot {day} {slot} is outside the schedule")
            }
            Self::WeeklyCapExceeded {
                worker_name,
                regular_hours,
                cap,
            } => {
                write!(
                    f,
                    "{worker_name} already has {regular_hours:.1} regular hours; another slot would exceed the {cap:.0}-hour weekly limit"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
