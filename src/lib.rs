//! Stockroom: a desktop inventory form over a local SQLite file.

pub mod domain;
pub mod infra;
pub mod ui;
