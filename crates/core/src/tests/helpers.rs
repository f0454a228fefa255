// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, apply, toggle_assignment};
use shiftwise_domain::{Day, ScheduleData, SlotRange, TimeSlot, WorkerId};
use std::collections::HashSet;

pub fn slot(id: &str) -> TimeSlot {
    id.parse().unwrap()
}

pub fn worker(id: &str) -> WorkerId {
    WorkerId::new(id)
}

/// A grid with a few overlapping assignments for property-style checks.
pub fn create_busy_schedule() -> ScheduleData {
    let a: WorkerId = worker("a");
    let b: WorkerId = worker("b");
    let c: WorkerId = worker("c");
    let mut schedule: ScheduleData = ScheduleData::empty(SlotRange::DEFAULT);
    for (day, id, who) in [
        (Day::Mon, "08:00", &a),
        (Day::Mon, "08:00", &b),
        (Day::Mon, "08:30", &a),
        (Day::Wed, "12:00", &c),
        (Day::Sat, "21:30", &b),
        (Day::Sun, "09:00", &a),
        (Day::Sun, "09:00", &c),
    ] {
        schedule = toggle_assignment(&schedule, day, slot(id), who);
    }
    schedule
}

/// A state with two workers, `a` (Alice) selected.
pub fn create_test_state() -> State {
    let state: State = State::new(SlotRange::DEFAULT);
    let state: State = apply(
        &state,
        Command::AddWorker {
            id: worker("a"),
            name: String::from("Alice"),
            color: None,
        },
    )
    .unwrap()
    .new_state;
    apply(
        &state,
        Command::AddWorker {
            id: worker("b"),
            name: String::from("Bob"),
            color: None,
        },
    )
    .unwrap()
    .new_state
}

/// Asserts the schedule invariants: dense grid, no duplicate ids, no empty
/// assignments.
pub fn assert_invariants(schedule: &ScheduleData) {
    let range: SlotRange = schedule.range();
    for day in Day::ALL {
        let slots = schedule.day(day).unwrap();
        assert_eq!(slots.len(), range.slot_count(), "{day} is not dense");
        for slot in range.slots() {
            assert!(slots.contains_key(&slot), "{day} {slot} missing");
        }
    }
    for (day, slot, assignment) in schedule.cells() {
        if let Some(assignment) = assignment {
            assert!(!assignment.is_empty(), "{day} {slot} holds an empty list");
            let unique: HashSet<&WorkerId> = assignment.workers().iter().collect();
            assert_eq!(unique.len(), assignment.len(), "{day} {slot} has duplicates");
        }
    }
}
