//! Template application CLI.
//!
//! Greets `--name` (default "World") and logs the result. Exit codes live in
//! [`template_app::exit_codes`].

use clap::Parser;
use template_app::app::{self, DefaultGreeter};
use template_app::cancel::Cancellation;
use template_app::cli::Cli;
use template_app::logging;
use tracing::warn;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let cancel = Cancellation::new();
    if let Err(err) = cancel.install_ctrlc_handler() {
        warn!("{err:#}");
    }

    std::process::exit(app::run(&cli, &DefaultGreeter, &cancel));
}
