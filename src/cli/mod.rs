//! Command-line glue between parsed arguments and the release sequence

pub mod orchestration;

pub use orchestration::{run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};
