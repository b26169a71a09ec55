//! # Todo CSV Codec
//!
//! Row layout, no header line:
//!
//! ```csv
//! 1,Buy milk,Two litres,false
//! 2,"Call Bob, Alice",About the trip,true
//! ```
//!
//! Fields containing the delimiter, quotes or line breaks are quoted the
//! standard CSV way.

use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::warn;

use crate::domain::models::todo::Todo;
use crate::storage::error::{StorageError, StorageResult};

/// Number of fields in every todo row
pub const FIELD_COUNT: usize = 4;

/// CSV record structure for todos; `completed` stays raw so that decoding
/// it can be lenient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: String,
}

impl From<&Todo> for TodoRecord {
    fn from(todo: &Todo) -> Self {
        TodoRecord {
            id: todo.id.clone(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed.to_string(),
        }
    }
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        let completed = parse_completed(&record.id, &record.completed);
        Todo {
            id: record.id,
            title: record.title,
            description: record.description,
            completed,
        }
    }
}

impl TodoRecord {
    /// Take a raw CSV row apart. Rows with the wrong field count are rejected.
    pub fn from_csv(row: &StringRecord) -> StorageResult<Self> {
        if row.len() != FIELD_COUNT {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            return Err(StorageError::Decode(format!(
                "line {}: expected {} fields, found {}",
                line,
                FIELD_COUNT,
                row.len()
            )));
        }

        Ok(row.deserialize(None)?)
    }
}

/// Lenient boolean parsing: anything unrecognised reads as `false`.
fn parse_completed(id: &str, value: &str) -> bool {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => true,
        "0" | "f" | "F" | "false" | "FALSE" | "False" => false,
        other => {
            warn!("Todo {} has unreadable completed flag '{}', treating as false", id, other);
            false
        }
    }
}

/// CSV writer configured for the todo layout
pub fn writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new().has_headers(false).from_writer(inner)
}

/// Encode one todo as a row
pub fn write_todo<W: Write>(csv_writer: &mut Writer<W>, todo: &Todo) -> StorageResult<()> {
    let record = TodoRecord::from(todo);
    csv_writer.serialize(record)?;
    Ok(())
}

/// Decode every row of `input`. The first malformed row fails the whole read.
pub fn read_todos<R: Read>(input: R) -> StorageResult<Vec<Todo>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut todos = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        todos.push(Todo::from(TodoRecord::from_csv(&row)?));
    }

    Ok(todos)
}
