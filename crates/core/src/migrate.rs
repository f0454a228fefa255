// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading stored schedules.
//!
//! Stored schedules come in two shapes:
//!
//! ```text
//! current: { "Mon": { "08:00": ["w1", "w2"] | null, ... }, ... }
//! legacy:  { "Mon": { "08:00": "w1" | null, ... }, ... }
//! ```
//!
//! [`migrate`] accepts either, or anything else, and always returns a grid
//! that satisfies the schedule invariants. Migrating an already migrated
//! (and re-serialized) grid yields the same grid.

use serde_json::{Map, Value};
use shiftwise_domain::{Assignment, Day, ScheduleData, SlotRange, TimeSlot, WorkerId};
use tracing::{debug, warn};

/// Converts an arbitrary JSON value into a dense, normalized grid.
///
/// Per cell:
/// - a string becomes a one-worker assignment
/// - an array keeps its string elements in order, dropping repeats; if none
///   remain the cell is unassigned
/// - anything else, or a missing key, is unassigned
///
/// Days that are missing or not objects are synthesized empty. Keys outside
/// the seven days or outside `range` are dropped. A value that is not an
/// object at all yields the empty grid.
#[must_use]
pub fn migrate(raw: &Value, range: SlotRange) -> ScheduleData {
    let Some(days) = raw.as_object() else {
        warn!(
            kind = value_kind(raw),
            "Stored schedule is not an object; starting from an empty schedule"
        );
        return ScheduleData::empty(range);
    };

    let missing: Vec<&str> = Day::ALL
        .iter()
        .filter(|day| !days.get(day.as_str()).is_some_and(Value::is_object))
        .map(Day::as_str)
        .collect();
    if !missing.is_empty() {
        debug!(?missing, "Synthesizing empty days while loading schedule");
    }

    ScheduleData::from_fn(range, |day, slot| {
        days.get(day.as_str())
            .and_then(Value::as_object)
            .and_then(|slots| migrate_cell(slots, slot))
    })
}

/// Widens \`range\` so it covers every slot key stored under a known day.
///
/// Loading with the result keeps shifts that were written under a wider range
/// instead of dropping them on the next save. Keys that are not slot ids are
/// ignored.
#[must_use]
pub fn stored_range(raw: &Value, range: SlotRange) -> SlotRange {
    let Some(days) = raw.as_object() else {
        return range;
    };
    Day::ALL
        .iter()
        .filter_map(|day| days.get(day.as_str()).and_then(Value::as_object))
        .flat_map(Map::keys)
        .filter_map(|key| key.parse::<TimeSlot>().ok())
        .fold(range, |covered, slot| covered.extended_to(&slot))
}

fn migrate_cell(slots: &Map<String, Value>, slot: TimeSlot) -> Option<Assignment> {
    match slots.get(&slot.id())? {
        Value::String(worker_id) => Some(Assignment::single(WorkerId::new(worker_id))),
        Value::Array(items) => Assignment::from_workers(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(WorkerId::new),
        ),
        _ => None,
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
