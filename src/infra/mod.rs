//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy pieces: SQLite storage and the on-disk
//! configuration file.

pub mod app_config;
pub mod db;
