use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use release_package::cli::{run_release_workflow, ReleaseWorkflowArgs};
use release_package::config;
use release_package::git::{
    CommandExecutor, DryRunExecutor, Git2Repository, RepositoryInspector, SystemExecutor,
};
use release_package::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-package",
    version,
    about = "Split a package out of the monorepo, tag it and push it to its own repository"
)]
struct Args {
    #[arg(help = "Package name, the directory under packages/ (letters, digits and dashes)")]
    package: String,

    #[arg(value_name = "VERSION", help = "Version to tag (digits and dots, e.g. 1.2.3)")]
    tag_version: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, help = "Run against the repository at this path")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Print the git commands without running them")]
    dry_run: bool,

    #[arg(short, long, help = "Show debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let repo_path = args.repo.clone().unwrap_or_else(|| PathBuf::from("."));
    let repository = Git2Repository::open(&repo_path);

    // git must run from the top level; filter-branch refuses a subdirectory
    let work_dir = match &repository {
        Ok(repo) => repo
            .workdir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| repo_path.clone()),
        Err(e) => {
            log::debug!("Cannot open repository at {}: {}", repo_path.display(), e);
            repo_path.clone()
        }
    };
    log::debug!("Running git in {}", work_dir.display());

    let executor: Box<dyn CommandExecutor> = if args.dry_run {
        Box::new(DryRunExecutor)
    } else {
        Box::new(SystemExecutor::in_dir(&work_dir))
    };

    let workflow_args = ReleaseWorkflowArgs {
        package: args.package,
        version: args.tag_version,
        dry_run: args.dry_run,
    };

    let result = run_release_workflow(
        &workflow_args,
        &config,
        executor.as_ref(),
        repository
            .as_ref()
            .map(|repo| repo as &dyn RepositoryInspector),
    )?;

    if args.dry_run {
        ui::display_success("Dry run finished; no commands were run");
    } else {
        ui::display_report(&result.report);
    }

    Ok(())
}
