// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hour accounting.
//!
//! Every assigned slot is worth [`SLOT_HOURS`]. Monday through Saturday add
//! up to the regular hours, which are subject to the weekly legal cap of
//! [`WEEKLY_REGULAR_HOURS_CAP`]. Sunday hours are kept in their own tally and
//! never count toward the cap.
//!
//! The cap is advisory at this level: a grid can hold more than the cap (for
//! example after loading old data). Only the interactive toggle path consults
//! [`would_exceed_cap`] before adding a slot.

use crate::day::Day;
use crate::schedule::ScheduleData;
use crate::slot::{SLOT_HOURS, TimeSlot};
use crate::worker::{Worker, WorkerId};
use serde::Serialize;

/// Legal limit on regular (Monday to Saturday) hours per week.
pub const WEEKLY_REGULAR_HOURS_CAP: f64 = 44.0;

/// Accumulated hours of one worker.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WorkerHours {
    /// Monday through Saturday.
    pub regular_hours: f64,
    /// Sunday only.
    pub sunday_hours: f64,
}

impl WorkerHours {
    /// Regular plus Sunday hours.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.regular_hours + self.sunday_hours
    }
}

/// Computes the hours of a single worker.
///
/// # Arguments
///
/// * `schedule` - The grid to scan
/// * `worker_id` - The worker to count; it does not have to exist
#[must_use]
pub fn compute_hours(schedule: &ScheduleData, worker_id: &WorkerId) -> WorkerHours {
    schedule
        .cells()
        .filter(|(_, _, assignment)| assignment.is_some_and(|a| a.contains(worker_id)))
        .fold(WorkerHours::default(), |mut hours, (day, _, _)| {
            if day.counts_toward_cap() {
                hours.regular_hours += SLOT_HOURS;
            } else {
                hours.sunday_hours += SLOT_HOURS;
            }
            hours
        })
}

/// Computes hours for every listed worker, in list order.
///
/// Ids found in the grid that do not belong to a listed worker are ignored.
#[must_use]
pub fn compute_all_hours(schedule: &ScheduleData, workers: &[Worker]) -> Vec<(WorkerId, WorkerHours)> {
    workers
        .iter()
        .map(|worker| (worker.id.clone(), compute_hours(schedule, &worker.id)))
        .collect()
}

/// Reports whether assigning `worker_id` to a slot would break the weekly cap.
///
/// Returns `true` only when all of these hold:
/// - `day` is not Sunday
/// - the worker is not already in that slot (the toggle would add, not remove)
/// - the worker's regular hours plus one slot exceed the cap
#[must_use]
pub fn would_exceed_cap(
    schedule: &ScheduleData,
    worker_id: &WorkerId,
    day: Day,
    slot: TimeSlot,
) -> bool {
    if !day.counts_toward_cap() {
        return false;
    }
    let already_assigned: bool = schedule
        .assignment(day, slot)
        .is_some_and(|assignment| assignment.contains(worker_id));
    if already_assigned {
        return false;
    }
    compute_hours(schedule, worker_id).regular_hours + SLOT_HOURS > WEEKLY_REGULAR_HOURS_CAP
}
