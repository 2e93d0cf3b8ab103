//! Module rules: which loader handles which files.
//!
//! The bundler tries rules in order per file. The two rules assembled here
//! are mutually exclusive by extension, so ordering is not load-bearing.

use crate::transpile::TranspileOptions;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::Path;

/// Extensions handled by the typed-language compiler loader.
pub const COMPILER_EXTENSIONS: &[&str] = &["fs", "fsx", "fsproj"];

/// Extensions handled by the plain transpiler rule.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js"];

/// Default name of the vendored-dependency directory skipped by the script rule.
pub const DEFAULT_EXCLUDE_DIR: &str = "node_modules";

/// The loader invoked for files matching a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Loader {
    /// The typed-language compiler; its JS output is then transpiled.
    Compiler {
        transpile: TranspileOptions,
        /// Conditional-compilation symbols passed to the compiler.
        define: Vec<String>,
    },
    /// The transpiler alone, for handwritten scripts.
    Transpiler { transpile: TranspileOptions },
}

/// One (file test, loader) pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// File extensions (without the dot) this rule applies to.
    pub extensions: Vec<String>,
    /// Directory name whose contents the rule skips, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_dir: Option<String>,
    /// The loader invoked for matching files.
    pub loader: Loader,
}

impl ModuleRule {
    /// Rule routing typed-language sources through the compiler loader.
    #[must_use]
    pub fn compiler(transpile: TranspileOptions, define: Vec<String>) -> Self {
        Self {
            extensions: COMPILER_EXTENSIONS.iter().map(ToString::to_string).collect(),
            exclude_dir: None,
            loader: Loader::Compiler { transpile, define },
        }
    }

    /// Rule routing plain scripts outside `exclude_dir` through the transpiler.
    #[must_use]
    pub fn scripts(transpile: TranspileOptions, exclude_dir: impl Into<String>) -> Self {
        Self {
            extensions: SCRIPT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            exclude_dir: Some(exclude_dir.into()),
            loader: Loader::Transpiler { transpile },
        }
    }

    /// Whether this rule applies to `path`.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(OsStr::to_str) else {
            return false;
        };
        if !self.extensions.iter().any(|e| e == ext) {
            return false;
        }
        match &self.exclude_dir {
            Some(dir) => !path.components().any(|c| c.as_os_str() == OsStr::new(dir)),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_compiler_rule_matches_typed_sources() {
        let rule = ModuleRule::compiler(TranspileOptions::default(), Vec::new());
        assert!(rule.matches(Path::new("src/App.fs")));
        assert!(rule.matches(Path::new("src/Helpers.fsx")));
        assert!(rule.matches(Path::new("App.fsproj")));
        assert!(!rule.matches(Path::new("src/index.js")));
        assert!(!rule.matches(Path::new("README")));
    }

    #[test]
    fn test_script_rule_skips_vendored_dir() {
        let rule = ModuleRule::scripts(TranspileOptions::default(), DEFAULT_EXCLUDE_DIR);
        assert!(rule.matches(Path::new("src/interop.js")));
        assert!(!rule.matches(Path::new("node_modules/react/index.js")));
        assert!(!rule.matches(Path::new("src/App.fs")));
    }

    #[test]
    fn test_script_rule_exclusion_is_configurable() {
        let rule = ModuleRule::scripts(TranspileOptions::default(), "vendor");
        assert!(rule.matches(PathBuf::from("node_modules/left-pad/index.js").as_path()));
        assert!(!rule.matches(Path::new("vendor/lib.js")));
    }

    #[test]
    fn test_rules_are_mutually_exclusive() {
        let compiler = ModuleRule::compiler(TranspileOptions::default(), Vec::new());
        let scripts = ModuleRule::scripts(TranspileOptions::default(), DEFAULT_EXCLUDE_DIR);
        for path in ["src/App.fs", "src/interop.js", "App.fsproj"] {
            let both = compiler.matches(Path::new(path)) && scripts.matches(Path::new(path));
            assert!(!both, "{path} matched both rules");
        }
    }
}
