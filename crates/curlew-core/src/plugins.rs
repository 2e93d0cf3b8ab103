//! Mode-conditional bundler plugins.

use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// Plugins injected into the bundler pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Plugin {
    /// Swap changed modules into the running page without a full reload.
    HotModuleReplacement,
    /// Readable module names instead of numeric ids in dev output.
    NamedModules,
}

impl Plugin {
    /// Get the string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HotModuleReplacement => "hot-module-replacement",
            Self::NamedModules => "named-modules",
        }
    }
}

impl std::fmt::Display for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plugin list for the given mode. Dev tooling never ships in production bundles.
#[must_use]
pub fn plugins_for(mode: Mode) -> Vec<Plugin> {
    match mode {
        Mode::Production => Vec::new(),
        Mode::Development => vec![Plugin::HotModuleReplacement, Plugin::NamedModules],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_has_no_plugins() {
        assert!(plugins_for(Mode::Production).is_empty());
    }

    #[test]
    fn test_development_has_exactly_two_plugins() {
        let plugins = plugins_for(Mode::Development);
        assert_eq!(
            plugins,
            vec![Plugin::HotModuleReplacement, Plugin::NamedModules]
        );
    }

    #[test]
    fn test_plugin_names() {
        assert_eq!(Plugin::HotModuleReplacement.as_str(), "hot-module-replacement");
        assert_eq!(Plugin::NamedModules.to_string(), "named-modules");
    }
}
