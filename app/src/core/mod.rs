//! Deterministic, pure logic.
//!
//! Core modules must be free of I/O side effects so they can be exercised
//! directly from unit tests.

pub mod greeting;
