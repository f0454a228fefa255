// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Color, DomainError, Worker, WorkerId, validate_worker_name, validate_worker_unique,
};

#[test]
fn test_validate_worker_name_accepts_name() {
    assert!(validate_worker_name("Jane").is_ok());
}

#[test]
fn test_validate_worker_name_rejects_empty() {
    let result: Result<(), DomainError> = validate_worker_name("");
    assert_eq!(
        result,
        Err(DomainError::InvalidName(String::from(
            "Worker name cannot be empty"
        )))
    );
}

#[test]
fn test_validate_worker_name_rejects_whitespace() {
    assert!(matches!(
        validate_worker_name(" \t "),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_worker_unique() {
    let existing: Vec<Worker> =
        vec![Worker::new(WorkerId::new("w1"), "Jane", Color::palette(0)).unwrap()];

    assert!(validate_worker_unique(&WorkerId::new("w2"), &existing).is_ok());
    assert_eq!(
        validate_worker_unique(&WorkerId::new("w1"), &existing),
        Err(DomainError::DuplicateWorker(WorkerId::new("w1")))
    );
}

#[test]
fn test_error_messages_are_user_facing() {
    let err: DomainError = DomainError::InvalidName(String::from("Worker name cannot be empty"));
    assert_eq!(err.to_string(), "Invalid name: Worker name cannot be empty");

    let err: DomainError = DomainError::InvalidSlotRange {
        start_hour: 9,
        end_hour: 8,
    };
    assert!(err.to_string().contains("9..8"));
}
