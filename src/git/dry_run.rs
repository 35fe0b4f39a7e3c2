use crate::error::Result;
use crate::git::{CommandExecutor, CommandStatus, GitCommand};
use crate::ui;

/// Prints each command instead of running it and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunExecutor;

impl CommandExecutor for DryRunExecutor {
    fn run(&self, command: &GitCommand) -> Result<CommandStatus> {
        ui::display_command(command);
        Ok(CommandStatus::succeeded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_always_succeeds() {
        let status = DryRunExecutor
            .run(&GitCommand::new(["push", "package", "master", "--force"]))
            .unwrap();
        assert!(status.success());
    }
}
