// File: ./src/model/item.rs
// The task variants and their shared status/render contract
use chrono::NaiveDate;
use std::fmt;

/// Human-facing date format ("Dec 2 2021"), distinct from the
/// machine-readable storage format.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d %Y").to_string()
}

/// The closed set of task variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { at: NaiveDate },
}

/// A single entry in the task list.
///
/// The description is fixed at creation and must be non-empty; both
/// gates that create tasks (the command parser and the storage codec)
/// reject empty descriptions. Completion is one-way: `mark_done` never
/// unsets the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, at: NaiveDate) -> Self {
        Self::new(description, TaskKind::Event { at })
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Idempotent: marking an already-finished task again is a no-op.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }

    /// One-letter tag, shared between rendering and the storage records.
    pub(crate) fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_date(*by)),
            TaskKind::Event { at } => write!(f, " (at: {})", format_date(*at)),
        }
    }
}
