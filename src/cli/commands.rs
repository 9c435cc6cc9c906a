//! Command dispatch

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::services::UpdateSummary;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the invocation described by `cli`.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    let settings = Settings::load(&project_dir)?;
    debug!(?settings, "settings loaded");

    if cli.show_config {
        output::header("# skilltree effective configuration");
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let container = ServiceContainer::new(settings);
    update_tree(&container)?;
    Ok(())
}

/// Regenerate the tree in the configured document.
#[instrument(skip(container))]
pub fn update_tree(container: &ServiceContainer) -> CliResult<UpdateSummary> {
    let summary = container.tree_update_service().run()?;
    Ok(summary)
}

fn resolve_project_dir(project_dir: Option<&Path>) -> CliResult<PathBuf> {
    match project_dir {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(CliError::Usage(format!(
            "project directory does not exist: {}",
            dir.display()
        ))),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("determine current directory", e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_missing_project_dir_when_resolving_then_usage_error() {
        let err = resolve_project_dir(Some(Path::new("/definitely/not/here"))).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn given_no_project_dir_when_resolving_then_uses_cwd() {
        let dir = resolve_project_dir(None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }
}
