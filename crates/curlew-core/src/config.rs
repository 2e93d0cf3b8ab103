//! Configuration assembly.
//!
//! [`BuildConfig::assemble`] is a pure function of [`Settings`]: every flag
//! and environment read happened when the settings were built. The result is
//! the declarative document the external build engine consumes; it is never
//! mutated after assembly.

use crate::error::Error;
use crate::mode::Mode;
use crate::plugins::{plugins_for, Plugin};
use crate::rules::ModuleRule;
use crate::server::{DevServerConfig, ProxyRule, DEV_SERVER_PORT};
use crate::settings::Settings;
use crate::transpile::{SourceMapKind, TranspileOptions};
use crate::version::CONFIG_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conditional-compilation symbol set in development builds.
pub const DEBUG_DEFINE: &str = "DEBUG";

/// Where the bundle lands and how it is addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, absolute after assembly.
    pub path: PathBuf,
    /// Public URL prefix the bundle is served under.
    pub public_path: String,
    /// Bundle filename.
    pub filename: String,
}

impl OutputConfig {
    /// Path of the source map emitted beside the bundle.
    #[must_use]
    pub fn source_map_path(&self) -> PathBuf {
        self.path.join(format!("{}.map", self.filename))
    }

    /// Public URL of the bundle itself.
    #[must_use]
    pub fn public_url(&self) -> String {
        format!("{}/{}", self.public_path.trim_end_matches('/'), self.filename)
    }
}

/// The assembled build configuration.
///
/// Constructed once at process start, read-only thereafter, discarded at
/// process exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Schema version of this document.
    pub schema_version: u32,
    /// Selected build mode.
    pub mode: Mode,
    /// Source map generation mode.
    pub source_maps: SourceMapKind,
    /// Entry project file, absolute after assembly.
    pub entry: PathBuf,
    /// Output artifact contract.
    pub output: OutputConfig,
    /// Development server contract.
    pub dev_server: DevServerConfig,
    /// Module rules, tried in order per file.
    pub rules: Vec<ModuleRule>,
    /// Bundler plugins, populated only outside production.
    pub plugins: Vec<Plugin>,
}

impl BuildConfig {
    /// Assemble the full configuration from resolved settings.
    #[must_use]
    pub fn assemble(settings: &Settings) -> Self {
        let transpile = TranspileOptions::default();
        let define = if settings.mode.is_production() {
            Vec::new()
        } else {
            vec![DEBUG_DEFINE.to_string()]
        };

        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            mode: settings.mode,
            source_maps: SourceMapKind::External,
            entry: settings.resolve(&settings.entry),
            output: OutputConfig {
                path: settings.resolve(&settings.output_dir),
                public_path: settings.public_path.clone(),
                filename: settings.filename.clone(),
            },
            dev_server: DevServerConfig {
                port: DEV_SERVER_PORT,
                proxy: vec![ProxyRule::api(settings.api_port)],
                history_api_fallback: true,
                content_base: settings.resolve(&settings.content_base),
                hot: true,
                inline: true,
            },
            rules: vec![
                ModuleRule::compiler(transpile.clone(), define),
                ModuleRule::scripts(transpile, settings.exclude_dir.clone()),
            ],
            plugins: plugins_for(settings.mode),
        }
    }

    /// Encode as the JSON document the build engine consumes.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON document to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), Error> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
