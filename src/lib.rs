//! A personal to-do checklist kept in a single JSON file.
//!
//! [`infrastructure::json_repo::JsonTodoRepository`] owns the whole list in
//! memory and rewrites the file after every change. It is meant for one user
//! and one process at a time; concurrent runs against the same file can lose
//! updates.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
