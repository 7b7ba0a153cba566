//! `seatplan`: edit seating plan files from the command line.
//!
//! Every command loads the plan file, runs one or more actions through the
//! same history/reducer the browser editor uses, and writes the file back if
//! the plan changed.


use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use planner::action::Action;
use planner::camera::Point;
use planner::config::{ConfigError, EditorConfig};
use planner::doc::{SeatingPlan, Table, TablePatch, chair_id, parse_chair_id};
use planner::geometry::{self, Frame, Handle};
use planner::history::History;
use planner::plan_file::{self, PlanFileError};
use planner::print;
use planner::roster::{self, RosterError};
use planner::template::{self, Template};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read script from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error(transparent)]
    PlanFile(#[from] PlanFileError),
    #[error("roster: {0}")]
    Roster(#[from] RosterError),
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{} already exists; pass --force to overwrite", .0.display())]
    AlreadyExists(PathBuf),
    #[error("no participant matches `{0}`")]
    UnknownParticipant(String),
    #[error("`{0}` matches more than one participant; use the id")]
    AmbiguousParticipant(String),
    #[error("no table matches `{0}`")]
    UnknownTable(String),
    #[error("`{0}` matches more than one table; use the id")]
    AmbiguousTable(String),
    #[error("unknown template `{name}` (available: {available})")]
    UnknownTemplate { name: String, available: String },
    #[error("table `{table}` has no seat {seat} (it has {chairs})")]
    NoSuchSeat { table: String, seat: u32, chairs: u32 },
    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("plan has {0} dangling assignment(s)")]
    Dangling(usize),
    #[error("viewport must have a positive size")]
    EmptyViewport,
}

#[derive(Parser, Debug)]
#[command(name = "seatplan", about = "Edit seating plan files")]
struct Cli {
    /// Plan file to read and write.
    #[arg(long, short, env = "SEATPLAN_FILE", default_value = "seating-plan.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a plan file, empty or from a built-in template.
    New {
        #[arg(long)]
        template: Option<String>,
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print the tables, who sits where, and who has no seat.
    Show {
        /// Print the plan file JSON instead.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    AddParticipant {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove a participant (by id or name) and free their chair.
    RemoveParticipant { participant: String },
    /// Add a table with the default size and position. Prints its id.
    AddTable {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        chairs: Option<u32>,
    },
    /// Remove a table (by id or name) and every assignment to its chairs.
    RemoveTable { table: String },
    /// Move, rotate, resize, or rename one table.
    Table(TableCommand),
    /// Seat a participant, swapping with whoever sits there.
    Assign {
        participant: String,
        table: String,
        seat: u32,
    },
    Unassign { participant: String },
    /// Add participants from a CSV roster (first row is a header, first column the name).
    ImportRoster { csv: PathBuf },
    /// Write the Name/Table/Seat roster as CSV, to a file or stdout.
    ExportRoster {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace the tables with a built-in venue layout, keeping participants.
    Template { name: String },
    /// Apply actions from a file of JSON lines (`-` for stdin).
    Apply {
        #[arg(default_value = "-")]
        script: String,
    },
    /// Check that every assignment points at a real table, seat, and participant.
    Validate,
    /// Print the PDF page layout for a viewport size.
    PrintLayout { width: f64, height: f64 },
    /// Clear the plan.
    Reset,
}

#[derive(Args, Debug)]
struct TableCommand {
    /// Table id or name.
    table: String,

    #[command(subcommand)]
    edit: TableEdit,
}

#[derive(Subcommand, Debug)]
enum TableEdit {
    /// Put the top-left corner at (x, y).
    Move {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Shift the table by (dx, dy).
    Nudge {
        #[arg(allow_negative_numbers = true)]
        dx: f64,
        #[arg(allow_negative_numbers = true)]
        dy: f64,
    },
    /// Set the rotation in degrees.
    Rotate {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Turn the table to face the canvas point (x, y).
    Face {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Drag a corner handle to (x, y); the opposite corner stays where it is.
    Resize {
        #[arg(value_enum)]
        handle: HandleArg,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Rename the table or change its chair count.
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        chairs: Option<u32>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum HandleArg {
    Tl,
    Tr,
    Bl,
    Br,
}

impl From<HandleArg> for Handle {
    fn from(arg: HandleArg) -> Self {
        match arg {
            HandleArg::Tl => Handle::Tl,
            HandleArg::Tr => Handle::Tr,
            HandleArg::Bl => Handle::Bl,
            HandleArg::Br => Handle::Br,
        }
    }
}

/// What a command printed and whether the plan needs saving.
#[derive(Debug, Default)]
struct Outcome {
    output: String,
    changed: bool,
}

impl Outcome {
    fn printed(output: String) -> Self {
        Self { output, changed: false }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EditorConfig::from_env()?;

    if let Command::New { template, force } = &cli.command {
        return create_plan(&cli.file, template.as_deref(), *force);
    }

    let mut history = History::with_plan(load_plan(&cli.file)?);
    let outcome = execute(&mut history, cli.command, &config)?;
    if outcome.changed {
        save_plan(&cli.file, history.present())?;
        info!(path = %cli.file.display(), "saved plan");
    }
    print!("{}", outcome.output);
    Ok(())
}

fn execute(history: &mut History, command: Command, config: &EditorConfig) -> Result<Outcome, CliError> {
    match command {
        Command::New { .. } => Ok(Outcome::default()),
        Command::Show { json } => {
            let plan = history.present();
            let output = if json { plan_file::to_json(plan)? + "\n" } else { describe_plan(plan) };
            Ok(Outcome::printed(output))
        }
        Command::AddParticipant { names } => {
            let mut changed = false;
            for name in names {
                changed |= history.dispatch(&Action::AddParticipant { name });
            }
            Ok(Outcome { changed, ..Outcome::default() })
        }
        Command::RemoveParticipant { participant } => {
            let id = resolve_participant(history.present(), &participant)?;
            Ok(edit(history, Action::DeleteParticipant { id }))
        }
        Command::AddTable { name, chairs } => Ok(add_table(history, name, chairs)),
        Command::RemoveTable { table } => {
            let id = resolve_table(history.present(), &table)?.id.clone();
            Ok(edit(history, Action::DeleteTable { id }))
        }
        Command::Table(TableCommand { table, edit: change }) => {
            let table = resolve_table(history.present(), &table)?;
            let patch = table_edit_patch(table, change, config);
            Ok(edit(history, Action::UpdateTable { table: patch }))
        }
        Command::Assign { participant, table, seat } => {
            let plan = history.present();
            let participant_id = resolve_participant(plan, &participant)?;
            let table = resolve_table(plan, &table)?;
            if !table.has_seat(seat) {
                return Err(CliError::NoSuchSeat { table: table.name.clone(), seat, chairs: table.chair_count });
            }
            let table_id = table.id.clone();
            Ok(edit(history, Action::AssignSeat { participant_id, table_id, seat_number: seat }))
        }
        Command::Unassign { participant } => {
            let participant_id = resolve_participant(history.present(), &participant)?;
            Ok(edit(history, Action::UnassignSeat { participant_id }))
        }
        Command::ImportRoster { csv } => {
            let rows = roster::read_csv(&read_file(&csv)?)?;
            Ok(import_rows(history, &rows))
        }
        Command::ExportRoster { output } => {
            let csv = roster::write_csv(&roster::export_rows(history.present()));
            match output {
                Some(path) => {
                    write_file(&path, &csv)?;
                    info!(path = %path.display(), "exported roster");
                    Ok(Outcome::default())
                }
                None => Ok(Outcome::printed(csv)),
            }
        }
        Command::Template { name } => {
            let template = find_template(&name)?;
            Ok(edit(history, Action::LoadTemplate { template }))
        }
        Command::Apply { script } => {
            let text = if script == "-" { read_stdin()? } else { read_file(Path::new(&script))? };
            apply_script(history, &text)
        }
        Command::Validate => {
            let problems = dangling_assignments(history.present());
            for (chair, reason) in &problems {
                warn!(%chair, reason, "dangling assignment");
            }
            if problems.is_empty() { Ok(Outcome::printed("ok\n".to_owned())) } else { Err(CliError::Dangling(problems.len())) }
        }
        Command::PrintLayout { width, height } => {
            let layout = print::layout(width, height, config.print_scale).ok_or(CliError::EmptyViewport)?;
            Ok(Outcome::printed(serde_json::to_string_pretty(&layout)? + "\n"))
        }
        Command::Reset => Ok(edit(history, Action::Reset)),
    }
}

/// Dispatch one action, logging when it turns out to be a no-op.
fn edit(history: &mut History, action: Action) -> Outcome {
    let changed = history.dispatch(&action);
    if !changed {
        info!(action = action.kind(), "nothing to change");
    }
    Outcome { changed, ..Outcome::default() }
}

fn add_table(history: &mut History, name: Option<String>, chairs: Option<u32>) -> Outcome {
    history.dispatch(&Action::AddTable);
    let Some(id) = history.present().tables.last().map(|t| t.id.clone()) else {
        return Outcome::default();
    };
    if name.is_some() || chairs.is_some() {
        let patch = TablePatch { name, chair_count: chairs, ..TablePatch::new(id.clone()) };
        history.dispatch(&Action::UpdateTable { table: patch });
    }
    Outcome { output: format!("{id}\n"), changed: true }
}

fn import_rows(history: &mut History, rows: &[Vec<String>]) -> Outcome {
    let participants = roster::participants_from_rows(rows);
    let before = history.present().participants.len();
    let changed = !participants.is_empty() && history.dispatch(&Action::ImportParticipants { participants });
    let added = history.present().participants.len() - before;
    Outcome { output: format!("imported {added} participant(s)\n"), changed }
}

/// Run each JSON line of `text` as an action. Blank lines and `#` comments are skipped.
fn apply_script(history: &mut History, text: &str) -> Result<Outcome, CliError> {
    let original = history.present().clone();
    let (mut applied, mut unchanged) = (0usize, 0usize);

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action: Action =
            serde_json::from_str(line).map_err(|source| CliError::Script { line: index + 1, source })?;
        if history.dispatch(&action) {
            applied += 1;
        } else {
            unchanged += 1;
        }
    }

    Ok(Outcome {
        output: format!("applied {applied} action(s), {unchanged} without effect\n"),
        changed: history.present() != &original,
    })
}

/// The patch a table edit produces.
fn table_edit_patch(table: &Table, change: TableEdit, config: &EditorConfig) -> TablePatch {
    let base = TablePatch::new(table.id.clone());
    match change {
        TableEdit::Move { x, y } => TablePatch { x: Some(x), y: Some(y), ..base },
        TableEdit::Nudge { dx, dy } => TablePatch { x: Some(table.x + dx), y: Some(table.y + dy), ..base },
        TableEdit::Rotate { degrees } => TablePatch { rotation: Some(degrees), ..base },
        TableEdit::Face { x, y } => {
            let rotation = geometry::rotation_toward(Frame::of(table).center, Point::new(x, y));
            TablePatch { rotation: Some(rotation), ..base }
        }
        TableEdit::Resize { handle, x, y } => {
            let b = geometry::resize(&Frame::of(table), handle.into(), Point::new(x, y), config.min_table_size);
            TablePatch { x: Some(b.x), y: Some(b.y), width: Some(b.width), height: Some(b.height), ..base }
        }
        TableEdit::Set { name, chairs } => TablePatch { name, chair_count: chairs, ..base },
    }
}

/// Find a participant by id, or else by exact name.
fn resolve_participant(plan: &SeatingPlan, key: &str) -> Result<String, CliError> {
    if plan.participant(key).is_some() {
        return Ok(key.to_owned());
    }
    let mut named = plan.participants.iter().filter(|p| p.name == key);
    match (named.next(), named.next()) {
        (Some(p), None) => Ok(p.id.clone()),
        (Some(_), Some(_)) => Err(CliError::AmbiguousParticipant(key.to_owned())),
        _ => Err(CliError::UnknownParticipant(key.to_owned())),
    }
}

/// Find a table by id, or else by exact name.
fn resolve_table<'a>(plan: &'a SeatingPlan, key: &str) -> Result<&'a Table, CliError> {
    if let Some(table) = plan.table(key) {
        return Ok(table);
    }
    let mut named = plan.tables.iter().filter(|t| t.name == key);
    match (named.next(), named.next()) {
        (Some(t), None) => Ok(t),
        (Some(_), Some(_)) => Err(CliError::AmbiguousTable(key.to_owned())),
        _ => Err(CliError::UnknownTable(key.to_owned())),
    }
}

fn find_template(name: &str) -> Result<Template, CliError> {
    template::builtin(name).ok_or_else(|| CliError::UnknownTemplate {
        name: name.to_owned(),
        available: template::builtin_names().join(", "),
    })
}

/// Occupied chairs whose id, table, seat, or participant doesn't resolve.
fn dangling_assignments(plan: &SeatingPlan) -> Vec<(String, &'static str)> {
    plan.assignments
        .iter()
        .filter_map(|(chair, occupant)| {
            let participant_id = occupant.as_deref()?;
            let reason = match parse_chair_id(chair) {
                None => "malformed chair id",
                Some((table_id, seat)) => match plan.table(table_id) {
                    None => "table does not exist",
                    Some(table) if !table.has_seat(seat) => "seat beyond the table's chairs",
                    Some(_) if plan.participant(participant_id).is_none() => "participant does not exist",
                    Some(_) => return None,
                },
            };
            Some((chair.clone(), reason))
        })
        .collect()
}

/// Human-readable summary of a plan.
fn describe_plan(plan: &SeatingPlan) -> String {
    let mut out = String::new();
    if let Some(floorplan) = &plan.floorplan {
        out.push_str(&format!("Floorplan: {floorplan}\n"));
    }

    out.push_str(&format!("Tables ({}):\n", plan.tables.len()));
    for table in &plan.tables {
        out.push_str(&format!(
            "  {} [{}] at ({}, {}), {}x{}, {}°, {} chairs\n",
            table.name, table.id, table.x, table.y, table.width, table.height, table.rotation, table.chair_count
        ));
        for seat in 1..=table.chair_count {
            let name = plan
                .occupant(&chair_id(&table.id, seat))
                .and_then(|pid| plan.participant(pid))
                .map_or("-", |p| p.name.as_str());
            out.push_str(&format!("    {seat}: {name}\n"));
        }
    }

    let unseated: Vec<&str> = plan.unseated().iter().map(|p| p.name.as_str()).collect();
    out.push_str(&format!("Unseated ({}): {}\n", unseated.len(), unseated.join(", ")));
    out
}

fn create_plan(path: &Path, template_name: Option<&str>, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }
    let mut history = History::new();
    if let Some(name) = template_name {
        history.dispatch(&Action::LoadTemplate { template: find_template(name)? });
    }
    save_plan(path, history.present())?;
    info!(path = %path.display(), tables = history.present().tables.len(), "created plan");
    Ok(())
}

fn load_plan(path: &Path) -> Result<SeatingPlan, CliError> {
    Ok(plan_file::from_json(&read_file(path)?)?)
}

fn save_plan(path: &Path, plan: &SeatingPlan) -> Result<(), CliError> {
    write_file(path, &(plan_file::to_json(plan)? + "\n"))
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Io { path: path.to_path_buf(), source })
}

fn read_stdin() -> Result<String, CliError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).map_err(CliError::Stdin)?;
    Ok(text)
}
