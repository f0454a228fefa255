// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod day;
mod error;
mod hours;
mod schedule;
mod slot;
mod validation;
mod worker;

#[cfg(test)]
mod tests;

// Re-export public types
pub use day::Day;
pub use error::DomainError;
pub use hours::{
    WEEKLY_REGULAR_HOURS_CAP, WorkerHours, compute_all_hours, compute_hours, would_exceed_cap,
};
pub use schedule::{Assignment, DaySlots, ScheduleData};
pub use slot::{SLOT_HOURS, SlotRange, TimeSlot};
pub use validation::{validate_worker_name, validate_worker_unique};
pub use worker::{Color, DEFAULT_WORKER_COLORS, Worker, WorkerId};
