// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drag-to-paint over the grid.
//!
//! A drag pass starts when the pointer goes down on a cell and ends when it
//! is released. Every cell the pointer enters during the pass is edited at
//! most once, no matter how often the pointer wanders back over it.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use shiftwise_domain::{Day, TimeSlot};
use std::collections::HashSet;

/// What a drag pass does to the cells it crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Add or remove the selected worker in each cell.
    #[default]
    Toggle,
    /// Only remove the selected worker (modifier key held).
    ForceRemove,
}

/// One pointer-down to pointer-up gesture.
#[derive(Debug, Clone, Default)]
pub struct DragPass {
    mode: DragMode,
    visited: HashSet<(Day, TimeSlot)>,
}

impl DragPass {
    /// Starts a new pass with an empty visited set.
    #[must_use]
    pub fn begin(mode: DragMode) -> Self {
        Self {
            mode,
            visited: HashSet::new(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> DragMode {
        self.mode
    }

    /// Number of distinct cells entered so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Handles the pointer entering a cell.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if the cell was already handled in this pass
    /// * `Ok(Some(TransitionResult))` with the edit applied to `state`
    ///
    /// # Errors
    ///
    /// Returns the `CoreError` of the underlying command. A rejected cell
    /// (for example one that would break the weekly cap) still counts as
    /// visited, so it is not retried during the same pass.
    pub fn enter(
        &mut self,
        state: &State,
        day: Day,
        slot: TimeSlot,
    ) -> Result<Option<TransitionResult>, CoreError> {
        if !self.visited.insert((day, slot)) {
            return Ok(None);
        }
        let command: Command = match self.mode {
            DragMode::Toggle => Command::ToggleShift { day, slot },
            DragMode::ForceRemove => Command::RemoveShift { day, slot },
        };
        apply(state, command).map(Some)
    }
}
