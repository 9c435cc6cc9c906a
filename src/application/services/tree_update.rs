//! References tree update service
//!
//! Scans the references directory, describes each file, renders the tree and
//! splices it into the target document.

use std::path::PathBuf;
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    extract_description, render_tree, splice, DescribedEntry, Description, DescriptionSource,
    SourceFile, TreeBlock,
};
use crate::infrastructure::traits::{FileSystem, Reporter};
use crate::util::path::PathExt;

/// Counts reported after a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Files listed in the tree
    pub files: usize,
    /// Files described by a blockquote or heading
    pub described: usize,
    /// Files without a blockquote or heading
    pub fallbacks: usize,
    /// Files that could not be read
    pub unreadable: usize,
    /// Document that was rewritten
    pub document: PathBuf,
}

/// Service keeping the references tree in the target document current.
pub struct TreeUpdateService {
    fs: Arc<dyn FileSystem>,
    reporter: Arc<dyn Reporter>,
    settings: Arc<Settings>,
}

impl TreeUpdateService {
    /// Create a new tree update service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        reporter: Arc<dyn Reporter>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            reporter,
            settings,
        }
    }

    /// Run the full update: scan, describe, render, patch.
    #[instrument(skip(self), fields(document = %self.settings.document.display()))]
    pub fn run(&self) -> ApplicationResult<UpdateSummary> {
        let document_name = self.settings.document_name();
        self.reporter
            .status(&format!("Updating {document_name} file tree..."));

        self.reporter.status(&format!(
            "Scanning: {}",
            self.settings.display_path(&self.settings.references_dir)
        ));
        let sources = self.scan()?;
        self.reporter
            .status(&format!("Found {} markdown files", sources.len()));
        if sources.is_empty() {
            self.reporter.status(&format!(
                "No markdown files found in {}",
                self.settings.label()
            ));
        }

        self.reporter.status("Generating file tree...");
        let described: Vec<(SourceFile, Description)> = sources
            .into_iter()
            .map(|source| {
                let description = self.describe(&source);
                (source, description)
            })
            .collect();
        let entries: Vec<DescribedEntry> = described
            .iter()
            .map(|(source, d)| DescribedEntry::new(&source.name, &d.text))
            .collect();
        let block = self.render(&entries);

        self.reporter.status(&format!("Updating {document_name}..."));
        self.patch_document(&block)?;

        let summary = UpdateSummary {
            files: entries.len(),
            described: described.iter().filter(|(_, d)| !d.is_fallback()).count(),
            fallbacks: described
                .iter()
                .filter(|(_, d)| d.source == DescriptionSource::Fallback)
                .count(),
            unreadable: described
                .iter()
                .filter(|(_, d)| d.source == DescriptionSource::Unreadable)
                .count(),
            document: self.settings.document.clone(),
        };
        debug!(?summary, "update complete");

        self.reporter
            .success(&format!("{document_name} updated successfully!"));
        let defaulted = summary.files - summary.described;
        if defaulted > 0 {
            self.reporter.status(&format!(
                "{} of {} files use the default description",
                defaulted, summary.files
            ));
        }
        self.reporter.hint(&format!(
            "Run \"git diff {}\" to see changes",
            self.settings.display_path(&self.settings.document)
        ));

        Ok(summary)
    }

    /// List the source files, sorted by name.
    ///
    /// Fails if the references directory does not exist.
    pub fn scan(&self) -> ApplicationResult<Vec<SourceFile>> {
        let dir = &self.settings.references_dir;
        if !self.fs.is_dir(dir) {
            return Err(ApplicationError::SourceDirNotFound(dir.clone()));
        }

        let files = self
            .fs
            .list_files(dir)
            .with_path_context("list references directory", dir)?;
        debug!("scan: {} entries in {}", files.len(), dir.display());

        let sources: Vec<SourceFile> = files
            .into_iter()
            .filter(|path| path.has_extension(&self.settings.extension))
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                Some(SourceFile { name, path })
            })
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();

        Ok(sources)
    }

    /// Describe a single file. Never fails: problems are reported and the
    /// fallback description is used.
    pub fn describe(&self, source: &SourceFile) -> Description {
        let content = match self.fs.read_to_string(&source.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("describe: cannot read {}: {}", source.path.display(), e);
                self.reporter.error(&format!(
                    "Error reading {} ({}): {}",
                    source.name,
                    source.path.display(),
                    e
                ));
                return self.fallback(DescriptionSource::Unreadable);
            }
        };

        match extract_description(&content) {
            Some((origin, text)) => {
                debug!("describe: {} -> {:?}", source.name, origin);
                Description {
                    text: text.to_string(),
                    source: origin,
                }
            }
            None => {
                self.reporter.warning(&format!(
                    "No description found for {}, using generic text",
                    source.name
                ));
                self.fallback(DescriptionSource::Fallback)
            }
        }
    }

    /// Render the tree block for already sorted entries.
    pub fn render(&self, entries: &[DescribedEntry]) -> TreeBlock {
        render_tree(&self.settings.label(), entries, self.settings.name_width)
    }

    /// Splice `block` into the target document and write it back.
    ///
    /// Nothing is written when the document lacks a marker.
    pub fn patch_document(&self, block: &TreeBlock) -> ApplicationResult<()> {
        let document = &self.settings.document;
        if !self.fs.is_file(document) {
            return Err(ApplicationError::DocumentNotFound(document.clone()));
        }

        let content = self
            .fs
            .read_to_string(document)
            .with_path_context("read document", document)?;
        let updated = splice(&content, &self.settings.markers(), &block.to_string())?;
        if updated == content {
            debug!("patch_document: {} already up to date", document.display());
        }

        self.fs
            .write(document, &updated)
            .with_path_context("write document", document)?;
        Ok(())
    }

    fn fallback(&self, source: DescriptionSource) -> Description {
        Description {
            text: self.settings.fallback_description.clone(),
            source,
        }
    }
}
