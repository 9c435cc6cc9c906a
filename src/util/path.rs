//! Path helpers shared by config loading and the update service.

use std::ffi::OsStr;
use std::path::Path;

pub trait PathExt {
    /// True if the file extension equals `ext` (given without the dot).
    fn has_extension(&self, ext: &str) -> bool;

    /// Render the path relative to `base`, falling back to the path as given.
    fn relative_to(&self, base: &Path) -> String;
}

impl PathExt for Path {
    fn has_extension(&self, ext: &str) -> bool {
        self.extension() == Some(OsStr::new(ext))
    }

    fn relative_to(&self, base: &Path) -> String {
        if base.as_os_str().is_empty() {
            return self.display().to_string();
        }
        match pathdiff::diff_paths(self, base) {
            Some(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
            _ => self.display().to_string(),
        }
    }
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input untouched.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
