// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_worker_name;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Palette handed out to new workers that were not given a color.
pub const DEFAULT_WORKER_COLORS: [&str; 12] = [
    "#FFADAD", // light red
    "#FFD6A5", // light orange
    "#FDFFB6", // light yellow
    "#CAFFBF", // light green
    "#9BF6FF", // light cyan
    "#A0C4FF", // light blue
    "#BDB2FF", // light purple
    "#FFC6FF", // light pink
    "#FF6B6B",
    "#4ECDC4",
    "#45B7D1",
    "#FED766",
];

/// Opaque identifier of a worker.
///
/// Identifiers are compared byte-for-byte. Newly created workers get a random
/// UUID, but any string read back from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An RGB color in `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    hex: String,
}

impl Color {
    /// Returns the normalized `#rrggbb` string.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Returns the red, green and blue components.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| -> u8 {
            self.hex
                .get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    /// Returns the palette color for the `index`-th worker, wrapping around.
    #[must_use]
    pub fn palette(index: usize) -> Self {
        let hex: &str = DEFAULT_WORKER_COLORS[index % DEFAULT_WORKER_COLORS.len()];
        Self {
            hex: hex.to_ascii_lowercase(),
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    /// Accepts `#rrggbb` or the `#rgb` shorthand, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: &str = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| DomainError::InvalidColor(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidColor(s.to_string()));
        }
        let expanded: String = match digits.len() {
            6 => digits.to_ascii_lowercase(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase(),
            _ => return Err(DomainError::InvalidColor(s.to_string())),
        };
        Ok(Self {
            hex: format!("#{expanded}"),
        })
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex)
    }
}

/// A person who can be assigned to slots.
///
/// Workers are immutable once created; the only lifecycle event after
/// creation is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub color: Color,
}

impl Worker {
    /// Creates a worker, trimming the name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is blank.
    pub fn new(id: WorkerId, name: &str, color: Color) -> Result<Self, DomainError> {
        validate_worker_name(name)?;
        Ok(Self {
            id,
            name: name.trim().to_string(),
            color,
        })
    }
}
