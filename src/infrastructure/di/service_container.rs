//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::TreeUpdateService;
use crate::config::Settings;
use crate::infrastructure::traits::{ConsoleReporter, FileSystem, RealFileSystem, Reporter};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// User-facing output
    pub reporter: Arc<dyn Reporter>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(ConsoleReporter),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            reporter,
        }
    }

    /// Service updating the references tree.
    pub fn tree_update_service(&self) -> TreeUpdateService {
        TreeUpdateService::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.reporter),
            Arc::clone(&self.settings),
        )
    }
}
