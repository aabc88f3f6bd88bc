//! Cancellation driven by Ctrl-C.
//!
//! Inside a cooperative section the handler only flips a flag, and
//! [`crate::app::run`] reports the cancelled run itself. Outside one (for
//! example while a config file read is blocked), or on a repeated Ctrl-C, the
//! handler logs the cancellation and exits the process with
//! [`exit_codes::OK`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tracing::info;

use crate::exit_codes;

#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
    cooperative: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Run `f` with signals recorded in the flag instead of ending the process.
    pub fn cooperative<T>(&self, f: impl FnOnce() -> T) -> T {
        self.cooperative.store(true, Ordering::SeqCst);
        let out = f();
        self.cooperative.store(false, Ordering::SeqCst);
        out
    }

    /// Record a signal; returns true when the process should exit right away.
    pub fn on_signal(&self) -> bool {
        let repeated = self.cancelled.swap(true, Ordering::SeqCst);
        repeated || !self.cooperative.load(Ordering::SeqCst)
    }

    /// Route Ctrl-C through [`Cancellation::on_signal`]. May only succeed once per process.
    pub fn install_ctrlc_handler(&self) -> Result<()> {
        let flag = self.clone();
        ctrlc::set_handler(move || {
            if flag.on_signal() {
                info!("Operation cancelled by user");
                std::process::exit(exit_codes::OK);
            }
        })
        .context("install Ctrl-C handler")
    }
}
