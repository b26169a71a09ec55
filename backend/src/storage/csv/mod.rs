//! # CSV Storage
//!
//! File-backed todo storage: a single flat CSV file, one todo per line.

pub mod connection;
pub mod todo_record;
pub mod todo_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use todo_repository::CsvTodoRepository;
