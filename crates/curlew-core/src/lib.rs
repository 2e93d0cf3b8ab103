#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Core types for curlew: typed build settings, mode detection, and
//! configuration assembly for the external build engine.
//!
//! Everything here is computed once at process start and read-only
//! thereafter. The assembler is pure: flag and environment reads happen
//! up front, when [`Settings`] is constructed.

pub mod config;
pub mod error;
pub mod mode;
pub mod paths;
pub mod plugins;
pub mod rules;
pub mod server;
pub mod settings;
pub mod transpile;
pub mod version;

pub use config::{BuildConfig, OutputConfig, DEBUG_DEFINE};
pub use error::Error;
pub use mode::{announce, api_port_from_env, Mode, API_PORT_ENV, DEFAULT_API_PORT};
pub use plugins::{plugins_for, Plugin};
pub use rules::{Loader, ModuleRule, DEFAULT_EXCLUDE_DIR};
pub use server::{proxy_target, DevServerConfig, ProxyRule, API_PREFIX, DEV_SERVER_PORT};
pub use settings::Settings;
pub use transpile::{ModuleKind, SourceMapKind, TranspileOptions};
pub use version::VERSION;
