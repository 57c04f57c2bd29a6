use colored::*;

use crate::logging;

/// Progress surface injected into the exporter. Console output is a
/// choice of the caller; the file log records a run either way.
pub trait Reporter: Send + Sync {
    fn progress(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Quiet mode: nothing on the console.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn progress(&self, message: &str) {
        logging::log_debug(message);
    }

    fn warn(&self, message: &str) {
        logging::log_error(message);
    }
}

pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn progress(&self, message: &str) {
        println!("{}", message);
        logging::log_info(message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
        logging::log_error(message);
    }
}
