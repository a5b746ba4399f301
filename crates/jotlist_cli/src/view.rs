//! Line-oriented terminal view over a `NoteStore`.
//!
//! # Responsibility
//! - Parse one user command per input line.
//! - Bind row numbers to note ids of the currently visible list.
//! - Re-render the filter bar, input line and rows after every command.
//!
//! # Invariants
//! - Rows are 1-based positions in `visible_notes()` at bind time.
//! - A rejected command is reported and leaves the store untouched.

use jotlist_core::{Command, Filter, FilterParseError, InputMode, NoteId, NoteStore};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const HELP_TEXT: &str = "\
commands:
  type <text>      set the input field
  submit           add (composing) or update (editing) from the input field
  add <text>       add a note directly
  edit <row>       load a row into the input field for editing
  toggle <row>     flip completed on a row
  delete <row>     remove a row
  filter <all|active|completed>
  help | quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Type(String),
    Submit,
    Add(String),
    Edit(usize),
    Toggle(usize),
    Delete(usize),
    Filter(Filter),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    BadRow(String),
    NoSuchRow(usize),
    BadFilter(FilterParseError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::BadRow(raw) => write!(f, "row must be a positive number, got `{raw}`"),
            Self::NoSuchRow(row) => write!(f, "no visible row {row}"),
            Self::BadFilter(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ViewError {}

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ViewCommand>, ViewError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "type" => ViewCommand::Type(rest.to_string()),
        "submit" => ViewCommand::Submit,
        "add" => ViewCommand::Add(rest.to_string()),
        "edit" => ViewCommand::Edit(parse_row(rest)?),
        "toggle" => ViewCommand::Toggle(parse_row(rest)?),
        "delete" | "rm" => ViewCommand::Delete(parse_row(rest)?),
        "filter" => {
            if rest.is_empty() {
                return Err(ViewError::MissingArgument("filter"));
            }
            ViewCommand::Filter(rest.parse().map_err(ViewError::BadFilter)?)
        }
        "help" | "?" => ViewCommand::Help,
        "quit" | "exit" => ViewCommand::Quit,
        other => return Err(ViewError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_row(raw: &str) -> Result<usize, ViewError> {
    if raw.is_empty() {
        return Err(ViewError::MissingArgument("row"));
    }
    match raw.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(ViewError::BadRow(raw.to_string())),
    }
}

/// Resolves a 1-based visible row to its note id.
pub fn row_id(store: &NoteStore, row: usize) -> Result<NoteId, ViewError> {
    row.checked_sub(1)
        .and_then(|index| store.visible_notes().nth(index))
        .map(|note| note.id)
        .ok_or(ViewError::NoSuchRow(row))
}

/// Binds a view command to a store command. `Help` and `Quit` have no
/// store counterpart and yield `None`.
pub fn bind(store: &NoteStore, command: ViewCommand) -> Result<Option<Command>, ViewError> {
    let bound = match command {
        ViewCommand::Type(text) => Command::SetDraft(text),
        ViewCommand::Submit => Command::Submit,
        ViewCommand::Add(text) => Command::Add(text),
        ViewCommand::Edit(row) => Command::StartEdit(row_id(store, row)?),
        ViewCommand::Toggle(row) => Command::Toggle(row_id(store, row)?),
        ViewCommand::Delete(row) => Command::Delete(row_id(store, row)?),
        ViewCommand::Filter(filter) => Command::SetFilter(filter),
        ViewCommand::Help | ViewCommand::Quit => return Ok(None),
    };
    Ok(Some(bound))
}

/// Draws one frame.
pub fn render(store: &NoteStore, out: &mut impl Write) -> io::Result<()> {
    let counts = store.counts();
    let bar = Filter::VARIANTS
        .iter()
        .map(|filter| {
            if *filter == store.filter() {
                format!("[{}]", filter.label())
            } else {
                filter.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "{bar}   ({} total, {} active, {} completed)",
        counts.all, counts.active, counts.completed
    )?;

    let mode = store.input_mode();
    let input = if store.draft().is_empty() {
        mode.placeholder()
    } else {
        store.draft()
    };
    writeln!(out, "> {input}   [{}]", mode.commit_label())?;

    let editing = match mode {
        InputMode::Editing(id) => Some(id),
        InputMode::Composing => None,
    };
    for (index, note) in store.visible_notes().enumerate() {
        let mark = if note.completed { "x" } else { " " };
        let suffix = if editing == Some(note.id) {
            "   (editing)"
        } else {
            ""
        };
        writeln!(out, "{:>3}. [{mark}] {}{suffix}", index + 1, note.text)?;
    }
    Ok(())
}

/// Reads commands until EOF or `quit`, rendering after each applied line.
pub fn run(store: &mut NoteStore, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    render(store, out)?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "! {err}")?;
                continue;
            }
        };
        match command {
            ViewCommand::Quit => break,
            ViewCommand::Help => {
                writeln!(out, "{HELP_TEXT}")?;
                continue;
            }
            _ => {}
        }

        match bind(store, command) {
            Ok(Some(bound)) => {
                if let Err(err) = store.dispatch(bound) {
                    writeln!(out, "! {err}")?;
                }
            }
            Ok(None) => {}
            Err(err) => writeln!(out, "! {err}")?,
        }
        render(store, out)?;
    }
    out.flush()
}
