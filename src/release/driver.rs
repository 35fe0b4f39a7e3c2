use crate::error::{ReleaseError, Result};
use crate::git::CommandExecutor;
use crate::release::{ReleasePlan, ReleaseStep};
use crate::ui;

/// Result of a completed release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub monorepo_tag: String,
    pub package_tag: String,
    pub package_remote_url: String,
    /// Steps that ran successfully, in order
    pub completed: Vec<ReleaseStep>,
}

/// Runs the release steps one after another through a [CommandExecutor].
///
/// The first step whose command fails, or cannot be started, ends the run
/// with [ReleaseError::StepFailed]. Later steps, including the cleanup ones,
/// are not attempted: the repository is left as the failure found it.
pub struct ReleaseDriver<'a, E: CommandExecutor + ?Sized> {
    executor: &'a E,
    plan: &'a ReleasePlan,
}

impl<'a, E: CommandExecutor + ?Sized> ReleaseDriver<'a, E> {
    pub fn new(executor: &'a E, plan: &'a ReleasePlan) -> Self {
        ReleaseDriver { executor, plan }
    }

    pub fn run(&self) -> Result<ReleaseReport> {
        let mut completed = Vec::with_capacity(ReleaseStep::ALL.len());

        for step in ReleaseStep::ALL {
            self.run_step(step)?;
            completed.push(step);
        }

        Ok(ReleaseReport {
            monorepo_tag: self.plan.monorepo_tag.clone(),
            package_tag: self.plan.package_tag.clone(),
            package_remote_url: self.plan.package_remote_url.clone(),
            completed,
        })
    }

    fn run_step(&self, step: ReleaseStep) -> Result<()> {
        let command = step.command(self.plan);
        ui::display_status(step.summary());
        log::debug!("Running `{}`", command);

        let status = match self.executor.run(&command) {
            Ok(status) => status,
            Err(e) => {
                log::debug!("`{}` could not be started: {}", command, e);
                return Err(ReleaseError::step_failed(
                    step,
                    command.to_string(),
                    format!("could not be started: {}", e),
                ));
            }
        };

        if !status.success() {
            log::debug!("`{}` {}", command, status);
            if step.leaves_repository_modified() {
                log::warn!(
                    "Stopping without cleanup; branch '{}' and remote '{}' may need manual attention (original tip at {})",
                    self.plan.branch,
                    self.plan.package_remote,
                    self.plan.original_ref()
                );
            }
            return Err(ReleaseError::step_failed(
                step,
                command.to_string(),
                status.to_string(),
            ));
        }

        log::info!("{} ({})", step.summary(), command);
        Ok(())
    }
}
