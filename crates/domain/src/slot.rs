// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-hour time slots and the configured range they are drawn from.
//!
//! A slot is identified by its start time on the 24-hour clock (`"14:30"`).
//! That identifier is the persistence key for the slot, so it is derived
//! deterministically from the configured [`SlotRange`] and never from
//! display formatting.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Length of a single slot, in hours.
pub const SLOT_HOURS: f64 = 0.5;

/// Slot identifiers are strict `HH:MM`.
const SLOT_ID_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// A half-hour interval starting on the hour or the half hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    start: Time,
}

impl TimeSlot {
    /// Creates a slot starting at `hour:minute`.
    ///
    /// # Arguments
    ///
    /// * `hour` - Hour of day, 0 through 23
    /// * `minute` - Either 0 or 30
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if the hour is out of range or
    /// the minute is not on a half-hour boundary.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if minute != 0 && minute != 30 {
            return Err(DomainError::InvalidTimeSlot(format!(
                "{hour:02}:{minute:02} does not start on a half hour"
            )));
        }
        let start: Time = Time::from_hms(hour, minute, 0)
            .map_err(|err| DomainError::InvalidTimeSlot(format!("{hour:02}:{minute:02}: {err}")))?;
        Ok(Self { start })
    }

    /// Returns the hour this slot starts in.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.start.hour()
    }

    /// Returns the minute this slot starts at (0 or 30).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.start.minute()
    }

    /// Returns the start time of this slot.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the stable storage identifier, e.g. `"14:30"`.
    #[must_use]
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Returns the 12-hour display range, e.g. `"2:30-3:00"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        let (next_hour, next_minute): (u8, u8) = if self.minute() == 30 {
            ((self.hour() + 1) % 24, 0)
        } else {
            (self.hour(), 30)
        };
        format!(
            "{}:{:02}-{}:{:02}",
            twelve_hour(self.hour()),
            self.minute(),
            twelve_hour(next_hour),
            next_minute
        )
    }
}

const fn twelve_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Time = Time::parse(s.trim(), SLOT_ID_FORMAT)
            .map_err(|err| DomainError::InvalidTimeSlot(format!("'{s}': {err}")))?;
        Self::new(parsed.hour(), parsed.minute())
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id: String = self
            .start
            .format(SLOT_ID_FORMAT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&id)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The configured span of the scheduling day.
///
/// Slots run from `start_hour:00` up to, but not including, `end_hour:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRange {
    start_hour: u8,
    end_hour: u8,
}

impl SlotRange {
    /// The default scheduling day, 08:00 to 22:00.
    pub const DEFAULT: Self = Self {
        start_hour: 8,
        end_hour: 22,
    };

    /// Creates a slot range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlotRange` unless
    /// `start_hour < end_hour <= 24`.
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, DomainError> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(DomainError::InvalidSlotRange {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    #[must_use]
    pub const fn start_hour(&self) -> u8 {
        self.start_hour
    }

    #[must_use]
    pub const fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Number of slots in a day.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        usize::from(self.end_hour - self.start_hour) * 2
    }

    /// Returns whether `slot` falls inside this range.
    #[must_use]
    pub const fn contains(&self, slot: &TimeSlot) -> bool {
        slot.hour() >= self.start_hour && slot.hour() < self.end_hour
    }

    /// Returns the smallest range covering both `self` and `slot`.
    #[must_use]
    pub const fn extended_to(self, slot: &TimeSlot) -> Self {
        let hour: u8 = slot.hour();
        Self {
            start_hour: if hour < self.start_hour {
                hour
            } else {
                self.start_hour
            },
            end_hour: if hour >= self.end_hour {
                hour + 1
            } else {
                self.end_hour
            },
        }
    }

    /// Returns every slot in the range, in time order.
    #[must_use]
    pub fn slots(&self) -> Vec<TimeSlot> {
        (self.start_hour..self.end_hour)
            .flat_map(|hour| [(hour, 0), (hour, 30)])
            .filter_map(|(hour, minute)| TimeSlot::new(hour, minute).ok())
            .collect()
    }
}

impl Default for SlotRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
