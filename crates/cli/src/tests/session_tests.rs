// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::session::{PaintSummary, Session};
use crate::tests::helpers::{create_empty_session, create_test_session, slot, whole_day};
use shiftwise::{Command, CoreError, DragMode};
use shiftwise_domain::{Day, SlotRange, TimeSlot, WorkerId, compute_hours};
use shiftwise_persistence::Persistence;

#[test]
fn test_resolve_worker_by_id_then_name() {
    let session = create_test_session();

    assert_eq!(session.resolve_worker("b").unwrap(), WorkerId::new("b"));
    assert_eq!(session.resolve_worker(" Alice ").unwrap(), WorkerId::new("a"));
    assert!(session.resolve_worker("alice").is_err());
}

#[test]
fn test_resolve_worker_rejects_ambiguous_name() {
    let mut session = create_test_session();
    session
        .execute(Command::AddWorker {
            id: WorkerId::new("c"),
            name: String::from("Alice"),
            color: None,
        })
        .unwrap();

    let err = session.resolve_worker("Alice").unwrap_err();
    assert!(err.to_string().contains("Several workers"));
    assert_eq!(session.resolve_worker("c").unwrap(), WorkerId::new("c"));
}

#[test]
fn test_select_keeps_existing_selection() {
    let mut session = create_test_session();
    assert_eq!(session.state().selected_worker, Some(WorkerId::new("a")));

    session.select(&WorkerId::new("a")).unwrap();
    assert_eq!(session.state().selected_worker, Some(WorkerId::new("a")));

    session.select(&WorkerId::new("b")).unwrap();
    assert_eq!(session.state().selected_worker, Some(WorkerId::new("b")));
}

#[test]
fn test_paint_counts_repeats() {
    let mut session = create_test_session();
    let cells: Vec<(Day, TimeSlot)> = vec![
        (Day::Mon, slot("08:00")),
        (Day::Mon, slot("08:30")),
        (Day::Mon, slot("08:00")),
    ];

    let summary: PaintSummary = session
        .paint(&WorkerId::new("b"), DragMode::Toggle, &cells)
        .unwrap();

    assert_eq!(summary.applied, 2);
    assert_eq!(summary.repeated, 1);
    assert!(summary.rejected.is_empty());
    let hours = compute_hours(&session.state().schedule, &WorkerId::new("b"));
    assert!((hours.regular_hours - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_paint_continues_past_cap_rejection() {
    let mut session = create_test_session();
    let mut cells: Vec<(Day, TimeSlot)> = Vec::new();
    for day in [Day::Mon, Day::Wed, Day::Thu] {
        cells.extend(whole_day(day));
    }
    for id in ["08:00", "08:30", "09:00", "09:30"] {
        cells.push((Day::Fri, slot(id)));
    }
    cells.push((Day::Fri, slot("10:00")));
    cells.push((Day::Sun, slot("10:00")));

    let summary: PaintSummary = session
        .paint(&WorkerId::new("a"), DragMode::Toggle, &cells)
        .unwrap();

    assert_eq!(summary.applied, 89);
    assert_eq!(summary.rejected.len(), 1);
    let (day, rejected_slot, err) = &summary.rejected[0];
    assert_eq!((*day, *rejected_slot), (Day::Fri, slot("10:00")));
    assert!(matches!(err, CoreError::WeeklyCapExceeded { .. }));

    let hours = compute_hours(&session.state().schedule, &WorkerId::new("a"));
    assert!((hours.regular_hours - 44.0).abs() < f64::EPSILON);
    assert!((hours.sunday_hours - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_paint_remove_only_clears() {
    let mut session = create_test_session();
    session
        .paint(
            &WorkerId::new("a"),
            DragMode::Toggle,
            &[(Day::Tue, slot("12:00"))],
        )
        .unwrap();

    let summary: PaintSummary = session
        .paint(
            &WorkerId::new("a"),
            DragMode::ForceRemove,
            &[(Day::Tue, slot("12:00")), (Day::Tue, slot("12:30"))],
        )
        .unwrap();

    assert_eq!(summary.applied, 1);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(session.state().schedule.assignment(Day::Tue, slot("12:00")), None);
    assert_eq!(session.state().schedule.assignment(Day::Tue, slot("12:30")), None);
}

#[test]
fn test_paint_unknown_worker_fails() {
    let mut session = create_empty_session();
    let result = session.paint(
        &WorkerId::new("ghost"),
        DragMode::Toggle,
        &[(Day::Mon, slot("08:00"))],
    );
    assert!(matches!(result, Err(CoreError::WorkerNotFound(_))));
}

#[test]
fn test_changes_survive_reload() {
    let root = tempfile::tempdir().unwrap();
    {
        let persistence = Persistence::new_with_dir(root.path()).unwrap();
        let mut session = Session::load(persistence, SlotRange::DEFAULT);
        session
            .execute(Command::AddWorker {
                id: WorkerId::new("a"),
                name: String::from("Alice"),
                color: None,
            })
            .unwrap();
        session
            .paint(
                &WorkerId::new("a"),
                DragMode::Toggle,
                &[(Day::Sat, slot("21:30"))],
            )
            .unwrap();
    }

    let persistence = Persistence::new_with_dir(root.path()).unwrap();
    let session = Session::load(persistence, SlotRange::DEFAULT);
    assert_eq!(session.state().workers.len(), 1);
    assert_eq!(session.state().selected_worker, None);
    assert!(
        session
            .state()
            .schedule
            .assignment(Day::Sat, slot("21:30"))
            .is_some_and(|a| a.contains(&WorkerId::new("a")))
    );
}
