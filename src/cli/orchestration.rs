//! Main workflow orchestration logic
//!
//! Kept apart from main.rs so the whole release can be driven
//! programmatically, with any executor and inspector, without clap.

use crate::config::Config;
use crate::error::{ReleaseError, Result};
use crate::git::{CommandExecutor, RepositoryInspector};
use crate::preflight;
use crate::release::{ReleaseDriver, ReleasePlan, ReleaseReport};
use crate::ui;
use crate::warning::ReleaseWarning;

/// Arguments for the release workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Package directory name under the packages directory
    pub package: String,

    /// Version to tag, digits and dots only
    pub version: String,

    /// Print commands instead of running them
    pub dry_run: bool,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub report: ReleaseReport,

    /// Preflight warnings that were shown before running
    pub warnings: Vec<ReleaseWarning>,
}

/// Main release workflow
///
/// 1. Validate the package name, then the version
/// 2. Derive the release plan from the configuration
/// 3. Run the preflight checks and show their warnings
/// 4. Run every release step through `executor`, stopping at the first failure
///
/// # Arguments
///
/// * `args` - Package, version and dry-run flag
/// * `config` - Loaded configuration
/// * `executor` - Runs the git commands
/// * `inspector` - Repository to inspect, or the error that kept it from opening
pub fn run_release_workflow(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    executor: &dyn CommandExecutor,
    inspector: std::result::Result<&dyn RepositoryInspector, &ReleaseError>,
) -> Result<WorkflowResult> {
    let plan = ReleasePlan::new(&args.package, &args.version, config)?;
    log::debug!("Release plan: {:?}", plan);

    ui::display_plan(&plan, args.dry_run);

    let mut warnings = preflight::check_inputs(&plan);
    match inspector {
        Ok(repo) => warnings.extend(preflight::inspect_repository(repo, &plan)),
        Err(e) => warnings.push(ReleaseWarning::RepositoryUnavailable {
            reason: e.to_string(),
        }),
    }
    for warning in &warnings {
        log::debug!("Preflight: {:?}", warning);
        ui::display_warning(warning);
    }

    let report = ReleaseDriver::new(executor, &plan).run()?;

    Ok(WorkflowResult { report, warnings })
}
