// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The weekly schedule grid.
//!
//! ## Invariants
//!
//! - Dense: every day holds an entry for every slot of the configured range
//! - An assignment never lists the same worker twice
//! - An empty assignment does not exist; an unassigned slot is `None`
//!
//! The grid is immutable. Each day sits behind an [`Arc`], and every edit
//! produces a new `ScheduleData` that shares the untouched days with the old
//! one, so `Arc::ptr_eq` on a day tells a caller whether that day changed.

use crate::day::Day;
use crate::slot::{SlotRange, TimeSlot};
use crate::worker::WorkerId;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The workers assigned to one slot, in assignment order.
///
/// Order drives the stripe order when a slot is rendered; it does not affect
/// hour accounting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    workers: Vec<WorkerId>,
}

impl Assignment {
    /// An assignment holding a single worker.
    #[must_use]
    pub fn single(worker_id: WorkerId) -> Self {
        Self {
            workers: vec![worker_id],
        }
    }

    /// Builds an assignment from ids, keeping the first occurrence of each.
    ///
    /// Returns `None` when no ids remain, which is how an unassigned slot is
    /// represented.
    #[must_use]
    pub fn from_workers<I>(worker_ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = WorkerId>,
    {
        let mut workers: Vec<WorkerId> = Vec::new();
        for worker_id in worker_ids {
            if !workers.contains(&worker_id) {
                workers.push(worker_id);
            }
        }
        if workers.is_empty() {
            None
        } else {
            Some(Self { workers })
        }
    }

    #[must_use]
    pub fn workers(&self) -> &[WorkerId] {
        &self.workers
    }

    #[must_use]
    pub fn contains(&self, worker_id: &WorkerId) -> bool {
        self.workers.contains(worker_id)
    }

    /// Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Returns a copy with `worker_id` removed, or `None` if it was the last.
    #[must_use]
    pub fn without(&self, worker_id: &WorkerId) -> Option<Self> {
        Self::from_workers(self.workers.iter().filter(|id| *id != worker_id).cloned())
    }

    /// Returns a copy with `worker_id` appended, unless already present.
    #[must_use]
    pub fn with(&self, worker_id: WorkerId) -> Self {
        let mut workers: Vec<WorkerId> = self.workers.clone();
        if !workers.contains(&worker_id) {
            workers.push(worker_id);
        }
        Self { workers }
    }
}

/// One day of the grid: slot → assignment (`None` when unassigned).
pub type DaySlots = BTreeMap<TimeSlot, Option<Assignment>>;

/// The full week: every day, every slot of the configured range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleData {
    range: SlotRange,
    days: BTreeMap<Day, Arc<DaySlots>>,
}

impl ScheduleData {
    /// Creates the canonical empty grid: every slot unassigned.
    #[must_use]
    pub fn empty(range: SlotRange) -> Self {
        Self::from_fn(range, |_, _| None)
    }

    /// Builds a dense grid by asking `assignment_for` about every cell.
    ///
    /// Density holds by construction: the callback is invoked for every
    /// `(day, slot)` pair of the range and nothing else.
    pub fn from_fn<F>(range: SlotRange, mut assignment_for: F) -> Self
    where
        F: FnMut(Day, TimeSlot) -> Option<Assignment>,
    {
        let slots: Vec<TimeSlot> = range.slots();
        let days: BTreeMap<Day, Arc<DaySlots>> = Day::ALL
            .into_iter()
            .map(|day| {
                let day_slots: DaySlots = slots
                    .iter()
                    .map(|slot| (*slot, assignment_for(day, *slot)))
                    .collect();
                (day, Arc::new(day_slots))
            })
            .collect();
        Self { range, days }
    }

    #[must_use]
    pub const fn range(&self) -> SlotRange {
        self.range
    }

    /// Returns the shared handle of one day.
    #[must_use]
    pub fn day(&self, day: Day) -> Option<&Arc<DaySlots>> {
        self.days.get(&day)
    }

    /// Returns the assignment of a cell, `None` when unassigned or outside
    /// the range.
    #[must_use]
    pub fn assignment(&self, day: Day, slot: TimeSlot) -> Option<&Assignment> {
        self.days
            .get(&day)
            .and_then(|slots| slots.get(&slot))
            .and_then(Option::as_ref)
    }

    /// Returns whether `slot` is part of this grid.
    #[must_use]
    pub const fn has_slot(&self, slot: &TimeSlot) -> bool {
        self.range.contains(slot)
    }

    /// Iterates over every cell in day, then time, order.
    pub fn cells(&self) -> impl Iterator<Item = (Day, TimeSlot, Option<&Assignment>)> {
        self.days.iter().flat_map(|(day, slots)| {
            slots
                .iter()
                .map(move |(slot, assignment)| (*day, *slot, assignment.as_ref()))
        })
    }

    /// Returns a new grid with one cell replaced.
    ///
    /// Only the touched day is copied; every other day is shared with `self`.
    /// A slot outside the range leaves the grid unchanged.
    #[must_use]
    pub fn with_cell(&self, day: Day, slot: TimeSlot, assignment: Option<Assignment>) -> Self {
        let Some(current) = self.days.get(&day) else {
            return self.clone();
        };
        if !current.contains_key(&slot) {
            return self.clone();
        }
        let mut day_slots: DaySlots = current.as_ref().clone();
        day_slots.insert(slot, assignment);

        let mut days: BTreeMap<Day, Arc<DaySlots>> = self.days.clone();
        days.insert(day, Arc::new(day_slots));
        Self {
            range: self.range,
            days,
        }
    }

    /// Returns a new grid with `rewrite` applied to every assigned cell.
    ///
    /// Days in which no cell changed keep their shared handle.
    #[must_use]
    pub fn map_assignments<F>(&self, mut rewrite: F) -> Self
    where
        F: FnMut(&Assignment) -> Option<Assignment>,
    {
        let days: BTreeMap<Day, Arc<DaySlots>> = self
            .days
            .iter()
            .map(|(day, slots)| {
                let rewritten: DaySlots = slots
                    .iter()
                    .map(|(slot, assignment)| (*slot, assignment.as_ref().and_then(&mut rewrite)))
                    .collect();
                if rewritten == **slots {
                    (*day, Arc::clone(slots))
                } else {
                    (*day, Arc::new(rewritten))
                }
            })
            .collect();
        Self {
            range: self.range,
            days,
        }
    }
}

impl Serialize for ScheduleData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, slots) in &self.days {
            map.serialize_entry(day, slots.as_ref())?;
        }
        map.end()
    }
}
