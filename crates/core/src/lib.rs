// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `ShiftWise` schedule store and editing session.
//!
//! The store functions ([`initialize`], [`toggle_assignment`],
//! [`remove_worker`], [`migrate`]) are pure transformations of a
//! [`ScheduleData`](shiftwise_domain::ScheduleData) value. The session
//! layer ([`State`], [`Command`], [`apply`]) wraps them with the rules an
//! interactive front end needs: a selected worker, input validation and the
//! weekly hours cap.

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

mod apply;
mod command;
mod drag;
mod error;
mod migrate;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use drag::{DragMode, DragPass};
pub use error::CoreError;
pub use migrate::{migrate, stored_range};
pub use state::{Changes, State, TransitionResult};
pub use store::{initialize, remove_worker, toggle_assignment};
