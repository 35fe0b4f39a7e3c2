//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing happens in the parent module.

use console::style;

use crate::git::GitCommand;
use crate::release::{ReleasePlan, ReleaseReport};
use crate::warning::ReleaseWarning;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_warning(warning: &ReleaseWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// A command as it would be typed, for dry runs.
pub fn format_command(command: &GitCommand) -> String {
    format!("  {} {}", style("$").dim(), style(command).cyan())
}

/// Summary of what a release is about to do.
///
/// # Arguments
/// * `plan` - The derived release plan
/// * `dry_run` - Whether commands will only be printed
pub fn format_plan(plan: &ReleasePlan, dry_run: bool) -> String {
    let title = if dry_run {
        "Release plan (dry run)"
    } else {
        "Release plan"
    };

    let rows = [
        ("Package", plan.package.to_string()),
        ("Version", plan.version.to_string()),
        ("Directory", plan.subdirectory.clone()),
        ("Branch", plan.branch.clone()),
        (
            "Monorepo tag",
            format!("{} → {}", plan.monorepo_tag, plan.main_remote),
        ),
        ("Package repo", plan.package_remote_url.clone()),
        ("Package tag", plan.package_tag.clone()),
    ];

    let mut out = format!("\n{}\n", style(title).bold());
    for (label, value) in rows {
        out.push_str(&format!("  {:<13} {}\n", format!("{}:", label), style(value).green()));
    }
    out
}

/// Final line after every step succeeded.
pub fn format_report(report: &ReleaseReport) -> String {
    format!(
        "\n{} Released {} and {} to {}\n",
        style("✓").green(),
        style(&report.monorepo_tag).bold(),
        style(&report.package_tag).bold(),
        report.package_remote_url
    )
}
