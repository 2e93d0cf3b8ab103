//! Input settings for configuration assembly.
//!
//! Constructed once at process start from flags and environment, then passed
//! to the assembler. Nothing reads process-global state after this point.

use crate::mode::{Mode, DEFAULT_API_PORT};
use crate::paths;
use crate::rules::DEFAULT_EXCLUDE_DIR;
use std::path::{Path, PathBuf};

/// Everything the assembler needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Project root all relative paths anchor to.
    pub root: PathBuf,
    /// Selected build mode.
    pub mode: Mode,
    /// Backend API port for the dev-server proxy.
    pub api_port: u16,
    /// Typed-language project file, relative to `root`.
    pub entry: PathBuf,
    /// Bundle output directory, relative to `root`.
    pub output_dir: PathBuf,
    /// Public URL prefix the bundle is served under.
    pub public_path: String,
    /// Bundle filename.
    pub filename: String,
    /// Static asset root for the dev server, relative to `root`.
    pub content_base: PathBuf,
    /// Vendored-dependency directory skipped by the script rule.
    pub exclude_dir: String,
}

impl Settings {
    /// Defaults for a project rooted at `root`: development mode, default
    /// API port, conventional entry and output locations.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mode: Mode::Development,
            api_port: DEFAULT_API_PORT,
            entry: PathBuf::from("App.fsproj"),
            output_dir: PathBuf::from("public/js"),
            public_path: "/js".to_string(),
            filename: "bundle.js".to_string(),
            content_base: PathBuf::from("public"),
            exclude_dir: DEFAULT_EXCLUDE_DIR.to_string(),
        }
    }

    /// Set the build mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the backend API port.
    #[must_use]
    pub fn with_api_port(mut self, api_port: u16) -> Self {
        self.api_port = api_port;
        self
    }

    /// Set the entry project file.
    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<PathBuf>) -> Self {
        self.entry = entry.into();
        self
    }

    /// Set the vendored-dependency directory name.
    #[must_use]
    pub fn with_exclude_dir(mut self, exclude_dir: impl Into<String>) -> Self {
        self.exclude_dir = exclude_dir.into();
        self
    }

    /// Resolve a path relative to the project root.
    #[must_use]
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        paths::anchored(&self.root, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new("/project");
        assert_eq!(settings.mode, Mode::Development);
        assert_eq!(settings.api_port, DEFAULT_API_PORT);
        assert_eq!(settings.entry, PathBuf::from("App.fsproj"));
        assert_eq!(settings.public_path, "/js");
        assert_eq!(settings.filename, "bundle.js");
        assert_eq!(settings.exclude_dir, DEFAULT_EXCLUDE_DIR);
    }

    #[test]
    fn test_builders() {
        let settings = Settings::new("/project")
            .with_mode(Mode::Production)
            .with_api_port(9090)
            .with_entry("Client.fsproj")
            .with_exclude_dir("vendor");
        assert_eq!(settings.mode, Mode::Production);
        assert_eq!(settings.api_port, 9090);
        assert_eq!(settings.entry, PathBuf::from("Client.fsproj"));
        assert_eq!(settings.exclude_dir, "vendor");
    }

    #[test]
    fn test_resolve_anchors_to_root() {
        let settings = Settings::new("/project");
        assert_eq!(
            settings.resolve("public/js"),
            PathBuf::from("/project/public/js")
        );
    }
}
