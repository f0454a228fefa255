// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Assignment, Day, ScheduleData, SlotRange, TimeSlot, WorkerId};

pub fn slot(id: &str) -> TimeSlot {
    id.parse().unwrap()
}

pub fn worker(id: &str) -> WorkerId {
    WorkerId::new(id)
}

/// Builds a default-range grid with `worker_id` placed in each listed cell.
pub fn schedule_with(worker_id: &WorkerId, cells: &[(Day, &str)]) -> ScheduleData {
    cells
        .iter()
        .fold(ScheduleData::empty(SlotRange::DEFAULT), |schedule, (day, id)| {
            let cell: TimeSlot = slot(id);
            let assignment: Assignment = schedule
                .assignment(*day, cell)
                .map_or_else(|| Assignment::single(worker_id.clone()), |a| a.with(worker_id.clone()));
            schedule.with_cell(*day, cell, Some(assignment))
        })
}

/// Builds a grid where `worker_id` already holds `hours` of regular time.
///
/// Cells are filled in day order from Monday, skipping Tuesday so that every
/// Tuesday slot stays free for cap checks.
pub fn schedule_with_regular_hours(worker_id: &WorkerId, hours: f64) -> ScheduleData {
    let range: SlotRange = SlotRange::DEFAULT;
    let mut remaining: f64 = hours;
    ScheduleData::from_fn(range, |day, _| {
        if day.counts_toward_cap() && day != Day::Tue && remaining > 0.0 {
            remaining -= 0.5;
            Some(Assignment::single(worker_id.clone()))
        } else {
            None
        }
    })
}
