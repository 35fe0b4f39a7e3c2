//! User interface module - terminal output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing them to stdout/stderr

pub mod formatter;

use crate::git::GitCommand;
use crate::release::{ReleasePlan, ReleaseReport};
use crate::warning::ReleaseWarning;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", formatter::format_error(message));
}

pub fn display_success(message: &str) {
    println!("{}", formatter::format_success(message));
}

pub fn display_status(message: &str) {
    println!("{}", formatter::format_status(message));
}

/// Print a preflight warning to stderr.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{}", formatter::format_warning(warning));
}

pub fn display_command(command: &GitCommand) {
    println!("{}", formatter::format_command(command));
}

pub fn display_plan(plan: &ReleasePlan, dry_run: bool) {
    println!("{}", formatter::format_plan(plan, dry_run));
}

pub fn display_report(report: &ReleaseReport) {
    println!("{}", formatter::format_report(report));
}

