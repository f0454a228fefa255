// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::worker::WorkerId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Worker name is empty or invalid.
    InvalidName(String),
    /// Color is not an `#rrggbb` or `#rgb` hex value.
    InvalidColor(String),
    /// Day label is not one of the seven week days.
    InvalidDay(String),
    /// Time slot is not a valid half-hour start time.
    InvalidTimeSlot(String),
    /// Slot range does not satisfy `start_hour < end_hour <= 24`.
    InvalidSlotRange {
        /// The requested first hour.
        start_hour: u8,
        /// The requested end hour (exclusive).
        end_hour: u8,
    },
    /// A worker with this id already exists.
    DuplicateWorker(WorkerId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidColor(value) => {
                write!(f, "Invalid color '{value}': expected #rrggbb or #rgb")
            }
            Self::InvalidDay(value) => {
                write!(f, "Invalid day '{value}': expected one of Mon..Sun")
            }
            Self::InvalidTimeSlot(msg) => write!(f, "Invalid time slot: {msg}"),
            Self::InvalidSlotRange {
                start_hour,
                end_hour,
            } => {
                write!(
                    f,
                    "Invalid slot range {start_hour}..{end_hour}: start must be before end and end at most 24"
                )
            }
            Self::DuplicateWorker(worker_id) => {
                write!(f, "Worker '{worker_id}' already exists")
            }
        }
    }
}

impl std::error::Error for DomainError {}
