// File: ./src/model/parser.rs
// Turns a raw command line into a Command or a structured error
use crate::model::Task;
use chrono::NaiveDate;
use thiserror::Error;

/// A parsed, not-yet-applied instruction against the task list.
///
/// Parsing is pure: index payloads are carried through unchecked and
/// range-validated by whoever applies the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(Task),
    MarkDone(i64),
    Delete(i64),
    Bye,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The noun carries its article: "a todo", "a deadline", "an event".
    #[error("☹ OOPS!!! The description of {0} cannot be empty.")]
    EmptyDescription(&'static str),

    #[error("☹ OOPS!!! The time of {0} cannot be empty.")]
    EmptyTime(&'static str),

    #[error("The time format is invalid. Please use the format YYYY-MM-DD")]
    BadDate,

    /// The role is "done" or "to be deleted".
    #[error("☹ OOPS!!! The index of a task {0} must be an integer.")]
    BadIndex(&'static str),

    #[error("☹ OOPS!!! I'm sorry, but I don't know what that means :-(")]
    Unknown,
}

/// Interprets one raw input line.
///
/// The action is the text before the first space (the whole line if
/// there is none); everything after it is handed to the action's own
/// tokenizer. Trailing text after `list` is ignored; `bye` must be the
/// entire line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    if line == "bye" {
        return Ok(Command::Bye);
    }
    match line.split(' ').next().unwrap_or_default() {
        "list" => Ok(Command::List),
        "todo" => parse_todo(line),
        "deadline" => {
            let (description, by) = split_dated(line, "deadline ", " /by ", "a deadline")?;
            Ok(Command::Add(Task::deadline(description, by)))
        }
        "event" => {
            let (description, at) = split_dated(line, "event ", " /at ", "an event")?;
            Ok(Command::Add(Task::event(description, at)))
        }
        "done" => parse_index(line, "done").map(Command::MarkDone),
        "delete" => parse_index(line, "to be deleted").map(Command::Delete),
        _ => Err(ParseError::Unknown),
    }
}

/// Everything after the first space, trimmed. `None` when the line has
/// no payload at all.
fn remainder(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(' ')?;
    let rest = rest.trim();
    if rest.is_empty() { None } else { Some(rest) }
}

/// Splits a `deadline`/`event` line on its literal marker.
///
/// The marker must be surrounded by spaces, so a description merely
/// containing "by" or "at" is never misparsed. Checks run in the order
/// marker, date, description: a line missing the marker reports the
/// missing time, and an unparsable date wins over a missing
/// description.
fn split_dated(
    line: &str,
    keyword: &str,
    marker: &str,
    noun: &'static str,
) -> Result<(String, NaiveDate), ParseError> {
    let (head, date) = line.split_once(marker).ok_or(ParseError::EmptyTime(noun))?;
    let date = parse_date(date.trim())?;
    let description = head
        .strip_prefix(keyword)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or(ParseError::EmptyDescription(noun))?;
    Ok((description.to_string(), date))
}

fn parse_todo(line: &str) -> Result<Command, ParseError> {
    let description = remainder(line).ok_or(ParseError::EmptyDescription("a todo"))?;
    Ok(Command::Add(Task::todo(description)))
}

/// Strict calendar date, `YYYY-MM-DD`. Never coerced.
fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::BadDate)
}

/// Index argument of `done`/`delete`: the keyword's remainder, trimmed,
/// parsed as a whole integer. Range checking happens at apply time.
fn parse_index(line: &str, role: &'static str) -> Result<i64, ParseError> {
    remainder(line)
        .and_then(|s| s.parse().ok())
        .ok_or(ParseError::BadIndex(role))
}
