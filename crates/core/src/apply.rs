// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Changes, State, TransitionResult};
use crate::store::{remove_worker, toggle_assignment};
use shiftwise_domain::{
    Color, Day, ScheduleData, TimeSlot, WEEKLY_REGULAR_HOURS_CAP, Worker, WorkerId, compute_hours,
    validate_worker_unique, would_exceed_cap,
};
use tracing::debug;

/// Applies a command to the current state, producing a new state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if:
/// - A new worker's name is blank or its id is taken
/// - The referenced worker does not exist
/// - A shift command is issued with no worker selected
/// - The slot lies outside the configured range
/// - Adding the slot would exceed the weekly regular-hours cap
pub fn apply(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();
    let result: TransitionResult = match command {
        Command::AddWorker { id, name, color } => add_worker(state, id, &name, color)?,
        Command::DeleteWorker { worker_id } => delete_worker(state, &worker_id)?,
        Command::SelectWorker { worker_id } => select_worker(state, worker_id)?,
        Command::ToggleShift { day, slot } => toggle_shift(state, day, slot)?,
        Command::RemoveShift { day, slot } => remove_shift(state, day, slot)?,
    };
    debug!(
        command = command_name,
        before = %state.summary(),
        after = %result.new_state.summary(),
        "Applied command"
    );
    Ok(result)
}

fn add_worker(
    state: &State,
    id: WorkerId,
    name: &str,
    color: Option<Color>,
) -> Result<TransitionResult, CoreError> {
    validate_worker_unique(&id, &state.workers)?;
    let color: Color = color.unwrap_or_else(|| Color::palette(state.workers.len()));
    let worker: Worker = Worker::new(id, name, color)?;

    let mut new_state: State = state.clone();
    // The first worker ever added is selected so the grid is usable at once.
    if new_state.selected_worker.is_none() && new_state.workers.is_empty() {
        new_state.selected_worker = Some(worker.id.clone());
    }
    new_state.workers.push(worker);

    Ok(TransitionResult {
        new_state,
        changes: Changes {
            workers: true,
            schedule: false,
        },
    })
}

fn delete_worker(state: &State, worker_id: &WorkerId) -> Result<TransitionResult, CoreError> {
    if state.worker(worker_id).is_none() {
        return Err(CoreError::WorkerNotFound(worker_id.clone()));
    }

    let schedule: ScheduleData = remove_worker(&state.schedule, worker_id);
    let schedule_changed: bool = schedule != state.schedule;
    let new_state: State = State {
        workers: state
            .workers
            .iter()
            .filter(|worker| &worker.id != worker_id)
            .cloned()
            .collect(),
        schedule,
        selected_worker: state
            .selected_worker
            .clone()
            .filter(|selected| selected != worker_id),
    };

    Ok(TransitionResult {
        new_state,
        changes: Changes {
            workers: true,
            schedule: schedule_changed,
        },
    })
}

fn select_worker(state: &State, worker_id: WorkerId) -> Result<TransitionResult, CoreError> {
    if state.worker(&worker_id).is_none() {
        return Err(CoreError::WorkerNotFound(worker_id));
    }

    let mut new_state: State = state.clone();
    new_state.selected_worker = if state.selected_worker.as_ref() == Some(&worker_id) {
        None
    } else {
        Some(worker_id)
    };

    Ok(TransitionResult {
        new_state,
        changes: Changes::default(),
    })
}

/// Resolves the selected worker and checks the cell is on the grid.
fn shift_target<'a>(
    state: &'a State,
    day: Day,
    slot: TimeSlot,
) -> Result<&'a Worker, CoreError> {
    let worker: &Worker = state.selected().ok_or(CoreError::NoWorkerSelected)?;
    if !state.schedule.has_slot(&slot) {
        return Err(CoreError::SlotOutOfRange { day, slot });
    }
    Ok(worker)
}

fn toggle_shift(state: &State, day: Day, slot: TimeSlot) -> Result<TransitionResult, CoreError> {
    let worker: &Worker = shift_target(state, day, slot)?;

    // Rule: the weekly cap vetoes additions, never removals
    if would_exceed_cap(&state.schedule, &worker.id, day, slot) {
        return Err(CoreError::WeeklyCapExceeded {
            worker_name: worker.name.clone(),
            regular_hours: compute_hours(&state.schedule, &worker.id).regular_hours,
            cap: WEEKLY_REGULAR_HOURS_CAP,
        });
    }

    let mut new_state: State = state.clone();
    new_state.schedule = toggle_assignment(&state.schedule, day, slot, &worker.id);

    Ok(TransitionResult {
        new_state,
        changes: Changes {
            workers: false,
            schedule: true,
        },
    })
}

fn remove_shift(state: &State, day: Day, slot: TimeSlot) -> Result<TransitionResult, CoreError> {
    let worker: &Worker = shift_target(state, day, slot)?;

    let assigned: bool = state
        .schedule
        .assignment(day, slot)
        .is_some_and(|assignment| assignment.contains(&worker.id));
    if !assigned {
        return Ok(TransitionResult {
            new_state: state.clone(),
            changes: Changes::default(),
        });
    }

    let mut new_state: State = state.clone();
    new_state.schedule = toggle_assignment(&state.schedule, day, slot, &worker.id);

    Ok(TransitionResult {
        new_state,
        changes: Changes {
            workers: false,
            schedule: true,
        },
    })
}
