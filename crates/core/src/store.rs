// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure operations over [`ScheduleData`].
//!
//! None of these functions mutate their input. Each returns a new grid that
//! shares every untouched day with the input, so a caller holding the old
//! value can compare day handles to see what changed.

use shiftwise_domain::{Assignment, Day, ScheduleData, SlotRange, TimeSlot, WorkerId};

/// Produces the canonical empty grid for a slot range.
///
/// This is the starting state of a new schedule and the fallback whenever
/// stored data is missing or unreadable.
#[must_use]
pub fn initialize(range: SlotRange) -> ScheduleData {
    ScheduleData::empty(range)
}

/// Adds or removes a worker in one slot.
///
/// If `worker_id` is already assigned to the slot it is removed, and a slot
/// left with nobody becomes unassigned. Otherwise it is appended after the
/// workers already there.
///
/// The worker is not checked against the worker list and the weekly cap is
/// not consulted; both are the caller's concern. A slot outside the grid's
/// range returns an unchanged grid.
#[must_use]
pub fn toggle_assignment(
    schedule: &ScheduleData,
    day: Day,
    slot: TimeSlot,
    worker_id: &WorkerId,
) -> ScheduleData {
    let next: Option<Assignment> = match schedule.assignment(day, slot) {
        Some(current) if current.contains(worker_id) => current.without(worker_id),
        Some(current) => Some(current.with(worker_id.clone())),
        None => Some(Assignment::single(worker_id.clone())),
    };
    schedule.with_cell(day, slot, next)
}

/// Removes a worker from every slot of the grid.
///
/// Removing a worker that holds no slots returns an equal grid.
#[must_use]
pub fn remove_worker(schedule: &ScheduleData, worker_id: &WorkerId) -> ScheduleData {
    schedule.map_assignments(|assignment| {
        if assignment.contains(worker_id) {
            assignment.without(worker_id)
        } else {
            Some(assignment.clone())
        }
    })
}
