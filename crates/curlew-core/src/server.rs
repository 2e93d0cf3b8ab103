//! Development server contract handed to the external engine.
//!
//! This crate only describes the server: port, API proxying, SPA fallback,
//! static asset root, and hot reload. The engine that runs the server owns
//! binding, request handling, and error reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Fixed port the development server listens on.
pub const DEV_SERVER_PORT: u16 = 8086;

/// Path prefix proxied to the backend API.
pub const API_PREFIX: &str = "/api/";

/// Build the backend proxy target for the resolved API port.
#[must_use]
pub fn proxy_target(api_port: u16) -> Url {
    Url::parse(&format!("http://localhost:{api_port}")).expect("proxy target URL is valid")
}

/// One proxy mapping: requests under `context` are forwarded to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    /// Request path prefix this rule captures.
    pub context: String,
    /// Backend the captured requests are forwarded to.
    pub target: Url,
    /// Rewrite the request's origin header to match the target.
    pub change_origin: bool,
}

impl ProxyRule {
    /// Proxy everything under [`API_PREFIX`] to the backend on `api_port`.
    #[must_use]
    pub fn api(api_port: u16) -> Self {
        Self {
            context: API_PREFIX.to_string(),
            target: proxy_target(api_port),
            change_origin: true,
        }
    }

    /// Whether a request path is routed through this rule.
    #[must_use]
    pub fn applies_to(&self, request_path: &str) -> bool {
        request_path.starts_with(&self.context)
    }
}

/// Development server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Proxy rules, tried in order.
    pub proxy: Vec<ProxyRule>,
    /// Serve the entry document for unmatched routes (SPA routing).
    pub history_api_fallback: bool,
    /// Static asset root.
    pub content_base: PathBuf,
    /// Swap changed modules into the running page without a full reload.
    pub hot: bool,
    /// Inline live-reload client.
    pub inline: bool,
}
