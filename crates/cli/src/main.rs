// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `shiftwise`: edit and inspect a weekly shift roster from the terminal.
//!
//! State is kept in a data directory (`--data-dir`, default `shiftwise-data`)
//! as two JSON files, one for the worker list and one for the schedule grid.
//! Each invocation loads them, applies one command, and writes back only what
//! changed.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod render;
mod session;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use session::{PaintSummary, Session};
use shiftwise::{Command as StoreCommand, DragMode};
use shiftwise_domain::{Color, Day, SlotRange, TimeSlot, WorkerId};
use shiftwise_persistence::{KeyValueStore, Persistence};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// `ShiftWise` - weekly shift scheduling
#[derive(Debug, Parser)]
#[command(name = "shiftwise", author, version, about, long_about = None)]
struct Args {
    /// Directory holding the persisted worker list and schedule
    #[arg(long, global = true, default_value = "shiftwise-data")]
    data_dir: PathBuf,

    /// First hour shown on the grid
    #[arg(long, global = true, default_value_t = 8)]
    start_hour: u8,

    /// Hour the last slot ends at
    #[arg(long, global = true, default_value_t = 22)]
    end_hour: u8,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        let range: SlotRange = SlotRange::new(self.start_hour, self.end_hour)?;
        let persistence = Persistence::new_with_dir(&self.data_dir)
            .wrap_err_with(|| format!("cannot use data directory {}", self.data_dir.display()))?;
        let mut session = Session::load(persistence, range);
        let stdout = io::stdout();
        self.command.run(&mut session, &mut stdout.lock())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    /// Aligned text table
    #[default]
    Text,
    /// Comma-separated values, one row per slot
    Csv,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Add a worker
    #[command(visible_alias = "add")]
    AddWorker {
        /// Display name
        name: String,
        /// Color as #rrggbb or #rgb; defaults to the next palette color
        #[arg(long)]
        color: Option<Color>,
    },

    /// Delete a worker and all of their shifts
    #[command(visible_alias = "rm")]
    DeleteWorker {
        /// Worker id or exact name
        worker: String,
    },

    /// List workers with their hours
    #[command(visible_alias = "ls")]
    Workers,

    /// Add or remove a worker in one slot
    #[command(visible_alias = "t")]
    Toggle {
        /// Worker id or exact name
        worker: String,
        /// Day, e.g. Mon
        day: Day,
        /// Slot start, e.g. 08:30
        slot: TimeSlot,
    },

    /// Toggle (or with --remove, clear) a worker across several cells in one pass
    #[command(visible_alias = "p")]
    Paint {
        /// Worker id or exact name
        worker: String,
        /// Only remove the worker, never add
        #[arg(long)]
        remove: bool,
        /// Cells as DAY@HH:MM, e.g. Mon@08:00
        #[arg(required = true, value_parser = parse_cell)]
        cells: Vec<(Day, TimeSlot)>,
    },

    /// Show regular and Sunday hours
    #[command(visible_alias = "h")]
    Hours {
        /// Worker id or exact name; all workers when omitted
        worker: Option<String>,
    },

    /// Print the weekly grid
    #[command(visible_alias = "s")]
    Show,

    /// Export the weekly grid
    #[command(visible_alias = "x")]
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Parses `DAY@HH:MM`.
fn parse_cell(text: &str) -> Result<(Day, TimeSlot), String> {
    let (day, slot) = text
        .split_once('@')
        .ok_or_else(|| format!("expected DAY@HH:MM, got '{text}'"))?;
    let day: Day = day.parse().map_err(|err| format!("{err}"))?;
    let slot: TimeSlot = slot.parse().map_err(|err| format!("{err}"))?;
    Ok((day, slot))
}

impl Command {
    fn run<S: KeyValueStore, W: Write>(self, session: &mut Session<S>, out: &mut W) -> Result<()> {
        match self {
            Self::AddWorker { name, color } => {
                let id: WorkerId = WorkerId::generate();
                session.execute(StoreCommand::AddWorker {
                    id: id.clone(),
                    name,
                    color,
                })?;
                if let Some(worker) = session.state().worker(&id) {
                    info!(id = %worker.id, name = %worker.name, "Added worker");
                    writeln!(out, "{}  {}  {}", worker.id, worker.color, worker.name)?;
                }
            }
            Self::DeleteWorker { worker } => {
                let worker_id: WorkerId = session.resolve_worker(&worker)?;
                session.execute(StoreCommand::DeleteWorker {
                    worker_id: worker_id.clone(),
                })?;
                info!(id = %worker_id, "Deleted worker");
                writeln!(out, "Deleted {worker_id}")?;
            }
            Self::Workers => write!(out, "{}", render::render_workers(session.state()))?,
            Self::Toggle { worker, day, slot } => {
                let worker_id: WorkerId = session.resolve_worker(&worker)?;
                session.select(&worker_id)?;
                session.execute(StoreCommand::ToggleShift { day, slot })?;
                let assigned: bool = session
                    .state()
                    .schedule
                    .assignment(day, slot)
                    .is_some_and(|a| a.contains(&worker_id));
                let verb: &str = if assigned { "Assigned" } else { "Unassigned" };
                writeln!(out, "{verb} {day} {}", slot.display_label())?;
                write!(out, "{}", render::render_hours(session.state(), Some(&worker_id)))?;
            }
            Self::Paint {
                worker,
                remove,
                cells,
            } => {
                let worker_id: WorkerId = session.resolve_worker(&worker)?;
                let mode: DragMode = if remove {
                    DragMode::ForceRemove
                } else {
                    DragMode::Toggle
                };
                let summary: PaintSummary = session.paint(&worker_id, mode, &cells)?;
                for (day, slot, err) in &summary.rejected {
                    writeln!(out, "Skipped {day} {}: {err}", slot.display_label())?;
                }
                writeln!(
                    out,
                    "Changed {} cell(s), {} unchanged, {} repeated, {} skipped",
                    summary.applied,
                    summary.unchanged,
                    summary.repeated,
                    summary.rejected.len()
                )?;
                write!(out, "{}", render::render_hours(session.state(), Some(&worker_id)))?;
            }
            Self::Hours { worker } => {
                let worker_id: Option<WorkerId> =
                    worker.map(|w| session.resolve_worker(&w)).transpose()?;
                write!(out, "{}", render::render_hours(session.state(), worker_id.as_ref()))?;
            }
            Self::Show => write!(out, "{}", render::render_grid(session.state()))?,
            Self::Export { format, output } => match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .wrap_err_with(|| format!("cannot create {}", path.display()))?;
                    export(session, format, io::BufWriter::new(file))?;
                    info!(path = %path.display(), "Exported schedule");
                }
                None => export(session, format, out)?,
            },
        }
        Ok(())
    }
}

fn export<S: KeyValueStore, W: Write>(
    session: &Session<S>,
    format: ExportFormat,
    mut out: W,
) -> Result<()> {
    match format {
        ExportFormat::Text => {
            out.write_all(render::render_grid(session.state()).as_bytes())?;
            out.flush()?;
        }
        ExportFormat::Csv => render::write_csv(session.state(), out)?,
    }
    Ok(())
}
