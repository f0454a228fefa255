// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::worker::{Worker, WorkerId};

/// Validates that a worker name is usable.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty or whitespace only.
pub fn validate_worker_name(name: &str) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Worker name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a worker id is not already taken.
///
/// # Arguments
///
/// * `worker_id` - The id of the worker about to be added
/// * `existing_workers` - The current worker list
///
/// # Errors
///
/// Returns `DomainError::DuplicateWorker` if a worker with that id exists.
pub fn validate_worker_unique(
    worker_id: &WorkerId,
    existing_workers: &[Worker],
) -> Result<(), DomainError> {
    if existing_workers.iter().any(|worker| &worker.id == worker_id) {
        return Err(DomainError::DuplicateWorker(worker_id.clone()));
    }
    Ok(())
}
