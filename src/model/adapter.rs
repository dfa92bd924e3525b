// File: ./src/model/adapter.rs
// Handles storage record serialization/deserialization
use crate::model::item::{Task, TaskKind};
use chrono::{Local, NaiveDate};
use thiserror::Error;

const FIELD_SEPARATOR: &str = " | ";
const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Data-integrity failure while decoding a stored record.
///
/// Any of these aborts the whole load; the codec never returns a
/// partial task. Per-field date corruption is handled separately by the
/// tolerant fallback in [`stored_date`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unrecognized task type {tag:?} in record {record:?}")]
    UnknownTag { tag: String, record: String },

    #[error("malformed record {0:?}")]
    Malformed(String),

    #[error("done flag must be 0 or 1 in record {0:?}")]
    DoneFlag(String),
}

impl Task {
    /// One pipe-delimited storage line, without a trailing newline:
    /// type tag, done flag, description, and the date for dated kinds.
    pub fn to_record(&self) -> String {
        let done = if self.is_done() { '1' } else { '0' };
        let mut record = format!(
            "{}{sep}{}{sep}{}",
            self.type_tag(),
            done,
            self.description(),
            sep = FIELD_SEPARATOR
        );
        match self.kind() {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                record.push_str(FIELD_SEPARATOR);
                record.push_str(&by.format(STORAGE_DATE_FORMAT).to_string());
            }
            TaskKind::Event { at } => {
                record.push_str(FIELD_SEPARATOR);
                record.push_str(&at.format(STORAGE_DATE_FORMAT).to_string());
            }
        }
        record
    }

    /// Reconstructs a task from one storage line.
    pub fn from_record(line: &str) -> Result<Task, DecodeError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 3 || fields[2].is_empty() {
            return Err(DecodeError::Malformed(line.to_string()));
        }
        let description = fields[2];

        let mut task = match fields[0] {
            "T" => Task::todo(description),
            "D" => Task::deadline(description, dated_field(&fields, line)?),
            "E" => Task::event(description, dated_field(&fields, line)?),
            tag => {
                return Err(DecodeError::UnknownTag {
                    tag: tag.to_string(),
                    record: line.to_string(),
                });
            }
        };

        match fields[1] {
            "0" => {}
            "1" => task.mark_done(),
            _ => return Err(DecodeError::DoneFlag(line.to_string())),
        }
        Ok(task)
    }
}

fn dated_field(fields: &[&str], line: &str) -> Result<NaiveDate, DecodeError> {
    let field = fields
        .get(3)
        .ok_or_else(|| DecodeError::Malformed(line.to_string()))?;
    Ok(stored_date(field, line))
}

/// A stored date that no longer parses falls back to the current date
/// so a partially corrupt file still loads. The drift is logged, not
/// silent.
fn stored_date(field: &str, line: &str) -> NaiveDate {
    NaiveDate::parse_from_str(field, STORAGE_DATE_FORMAT).unwrap_or_else(|_| {
        let today = Local::now().date_naive();
        log::warn!("unparsable date {field:?} in record {line:?}, substituting {today}");
        today
    })
}
