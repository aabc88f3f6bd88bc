//! I/O helpers for the application.

pub mod config;
pub mod file_reader;
