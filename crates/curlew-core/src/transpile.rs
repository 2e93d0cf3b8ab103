//! Shared transpiler options.
//!
//! Both module rules hand the same options to the transpiler: the browser
//! target list and how module syntax is handled. Module syntax is preserved
//! by default so the bundler owns the module graph.

use serde::{Deserialize, Serialize};

/// Module output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// ES Modules (import/export).
    #[serde(alias = "es")]
    Esm,
    /// CommonJS (require/module.exports).
    #[serde(alias = "cjs")]
    CommonJs,
    /// Preserve original module syntax for the bundler.
    #[default]
    Preserve,
}

impl ModuleKind {
    /// Get the string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esm => "esm",
            Self::CommonJs => "commonjs",
            Self::Preserve => "preserve",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source map generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapKind {
    /// No source map.
    None,
    /// Inline source map as data URL.
    Inline,
    /// External .map file beside the bundle.
    #[default]
    External,
}

impl SourceMapKind {
    /// Get the string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Inline => "inline",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for SourceMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transpiler options shared by all module rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileOptions {
    /// Browser target list, browserslist syntax.
    pub browsers: Vec<String>,
    /// Module syntax handling.
    #[serde(default)]
    pub module: ModuleKind,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            browsers: vec!["last 2 versions".to_string()],
            module: ModuleKind::Preserve,
        }
    }
}

impl TranspileOptions {
    /// Set the browser target list.
    #[must_use]
    pub fn with_browsers(mut self, browsers: Vec<String>) -> Self {
        self.browsers = browsers;
        self
    }

    /// Set the module syntax handling.
    #[must_use]
    pub fn with_module(mut self, module: ModuleKind) -> Self {
        self.module = module;
        self
    }
}
