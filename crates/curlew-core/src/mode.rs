//! Build mode selection and environment detection.
//!
//! The mode is determined once at startup from a command-line flag and is
//! immutable thereafter. The backend API port comes from an environment
//! variable with a literal fallback; missing, empty, or malformed values
//! silently use the default rather than erroring.

use serde::{Deserialize, Serialize};
use std::io::Write;

/// Environment variable supplying the backend API port.
pub const API_PORT_ENV: &str = "CURLEW_API_PORT";

/// Fallback backend API port when [`API_PORT_ENV`] is unset or empty.
pub const DEFAULT_API_PORT: u16 = 8085;

/// Build mode, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Development bundle: hot reload, debug defines, readable module names.
    #[default]
    Development,
    /// Production bundle: no dev plugins, no debug defines.
    Production,
}

impl Mode {
    /// Map the presence of the production flag to a mode.
    #[must_use]
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Get the string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the backend API port from the process environment.
///
/// Returns the parsed value of [`API_PORT_ENV`] when present and non-empty,
/// else [`DEFAULT_API_PORT`]. Unparsable values also fall back to the default.
#[must_use]
pub fn api_port_from_env() -> u16 {
    match std::env::var(API_PORT_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            value.trim().parse().unwrap_or(DEFAULT_API_PORT)
        }
        _ => DEFAULT_API_PORT,
    }
}

/// Write the single startup status line announcing the selected mode.
pub fn announce(mode: Mode, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Bundling for {mode}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(Mode::from_production_flag(true), Mode::Production);
        assert_eq!(Mode::from_production_flag(false), Mode::Development);
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(Mode::Production.as_str(), "production");
        assert_eq!(Mode::Development.as_str(), "development");
        assert!(Mode::Production.is_production());
        assert!(!Mode::Development.is_production());
    }

    #[test]
    #[serial]
    fn test_api_port_unset_uses_default() {
        std::env::remove_var(API_PORT_ENV);
        assert_eq!(api_port_from_env(), DEFAULT_API_PORT);
    }

    #[test]
    #[serial]
    fn test_api_port_empty_uses_default() {
        std::env::set_var(API_PORT_ENV, "");
        assert_eq!(api_port_from_env(), DEFAULT_API_PORT);
        std::env::remove_var(API_PORT_ENV);
    }

    #[test]
    #[serial]
    fn test_api_port_set_is_parsed() {
        std::env::set_var(API_PORT_ENV, "9090");
        assert_eq!(api_port_from_env(), 9090);
        std::env::remove_var(API_PORT_ENV);
    }

    #[test]
    #[serial]
    fn test_api_port_malformed_uses_default() {
        std::env::set_var(API_PORT_ENV, "not-a-port");
        assert_eq!(api_port_from_env(), DEFAULT_API_PORT);
        std::env::remove_var(API_PORT_ENV);
    }

    #[test]
    fn test_announce_writes_one_line() {
        let mut out = Vec::new();
        announce(Mode::Production, &mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert_eq!(line, "Bundling for production...\n");
        assert_eq!(line.lines().count(), 1);
    }
}
