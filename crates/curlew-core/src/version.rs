/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Schema version of the emitted configuration document.
/// Bump this when changing the JSON shape in a way consumers must detect.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Returns the formatted version string.
#[must_use]
pub fn version_string() -> String {
    format!("curlew {VERSION}")
}
