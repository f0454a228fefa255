// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text and CSV views of a session.

use shiftwise::State;
use shiftwise_domain::{
    Assignment, Day, WEEKLY_REGULAR_HOURS_CAP, Worker, WorkerHours, WorkerId, compute_all_hours,
    compute_hours,
};
use std::io;

const EMPTY_CELL: &str = "-";

/// Joins the names of the workers in a cell; unknown ids print as-is.
fn cell_text(state: &State, assignment: Option<&Assignment>) -> String {
    assignment.map_or_else(
        || EMPTY_CELL.to_string(),
        |assignment| {
            assignment
                .workers()
                .iter()
                .map(|id| state.worker(id).map_or(id.value(), |w| w.name.as_str()))
                .collect::<Vec<&str>>()
                .join(", ")
        },
    )
}

fn hours_line(worker: &Worker, hours: WorkerHours) -> String {
    let flag: &str = if hours.regular_hours >= WEEKLY_REGULAR_HOURS_CAP {
        " (at limit)"
    } else {
        ""
    };
    format!(
        "{}: {:.1}h / {:.0}h regular, {:.1}h Sunday{flag}",
        worker.name, hours.regular_hours, WEEKLY_REGULAR_HOURS_CAP, hours.sunday_hours
    )
}

/// One line per worker: id, name, color and hours.
#[must_use]
pub fn render_workers(state: &State) -> String {
    if state.workers.is_empty() {
        return String::from("No workers yet.\n");
    }
    state
        .workers
        .iter()
        .zip(compute_all_hours(&state.schedule, &state.workers))
        .map(|(worker, (_, hours))| {
            format!(
                "{}  {}  {}\n",
                worker.id,
                worker.color,
                hours_line(worker, hours)
            )
        })
        .collect()
}

/// Hours for one worker, or for everybody when `worker_id` is `None`.
#[must_use]
pub fn render_hours(state: &State, worker_id: Option<&WorkerId>) -> String {
    state
        .workers
        .iter()
        .filter(|w| worker_id.is_none_or(|id| &w.id == id))
        .map(|worker| {
            let mut line: String =
                hours_line(worker, compute_hours(&state.schedule, &worker.id));
            line.push('\n');
            line
        })
        .collect()
}

/// Rows of the grid: a header, then one row per slot with a label and seven cells.
fn grid_rows(state: &State) -> Vec<Vec<String>> {
    let mut header: Vec<String> = vec![String::from("Time")];
    header.extend(Day::ALL.iter().map(|day| day.as_str().to_string()));

    let mut rows: Vec<Vec<String>> = vec![header];
    for slot in state.schedule.range().slots() {
        let mut row: Vec<String> = vec![slot.display_label()];
        row.extend(
            Day::ALL
                .iter()
                .map(|&day| cell_text(state, state.schedule.assignment(day, slot))),
        );
        rows.push(row);
    }
    rows
}

/// The weekly grid as an aligned text table.
#[must_use]
pub fn render_grid(state: &State) -> String {
    let rows: Vec<Vec<String>> = grid_rows(state);
    let widths: Vec<usize> = (0..=Day::ALL.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(text, &width)| format!("{text:<width$}"))
                .collect();
            format!("{}\n", cells.join(" | ").trim_end())
        })
        .collect()
}

/// Writes the weekly grid as CSV, one record per slot.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_csv<W: io::Write>(state: &State, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in grid_rows(state) {
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
