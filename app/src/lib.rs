//! Template application: greets a name and reads text files with classified
//! failures.
//!
//! The crate keeps the same split as any larger tool built from it:
//!
//! - **[`core`]**: Pure logic (name validation and greeting formatting).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (file reading, config loading).
//!
//! [`app`] wires both together behind the CLI defined in [`cli`], and maps
//! outcomes to the codes in [`exit_codes`].

pub mod app;
pub mod cancel;
pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
