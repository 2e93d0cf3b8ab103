//! `curlew config` command implementation.
//!
//! Resolves the typed settings once (flags, environment, project root),
//! announces the selected mode, assembles the configuration, and emits it
//! for the external build engine: a JSON document under `--json`/`--out`,
//! or a human-readable summary otherwise.

use curlew_core::{announce, api_port_from_env, paths, BuildConfig, Mode, Settings};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

/// Config command action.
#[derive(Debug, Clone)]
pub struct ConfigAction {
    /// Directory the root search starts from.
    pub cwd: PathBuf,
    /// Assemble for a production bundle.
    pub production: bool,
    /// Backend API port override (beats the environment variable).
    pub api_port: Option<u16>,
    /// Vendored-dependency directory skipped by the script rule.
    pub exclude_dir: String,
    /// Write the JSON document to a file instead of stdout.
    pub out: Option<PathBuf>,
    /// Emit the JSON document on stdout.
    pub json: bool,
}

pub fn run(action: &ConfigAction) -> Result<()> {
    // No project markers found is not an error: anchor at cwd instead.
    let root = paths::project_root(&action.cwd).unwrap_or_else(|| action.cwd.clone());
    tracing::debug!(root = %root.display(), "anchoring configuration");

    let api_port = action.api_port.unwrap_or_else(api_port_from_env);
    let settings = Settings::new(&root)
        .with_mode(Mode::from_production_flag(action.production))
        .with_api_port(api_port)
        .with_exclude_dir(&action.exclude_dir);

    // One status line on stdout; stderr when stdout carries the JSON document.
    if action.json && action.out.is_none() {
        tracing::info!(mode = %settings.mode, "bundling");
    } else {
        announce(settings.mode, &mut std::io::stdout()).into_diagnostic()?;
    }

    let config = BuildConfig::assemble(&settings);

    match &action.out {
        Some(path) => {
            config.write_json(path).into_diagnostic()?;
            tracing::debug!(path = %path.display(), "wrote configuration");
        }
        None if action.json => println!("{}", config.to_json().into_diagnostic()?),
        None => print_summary(&config),
    }

    Ok(())
}

fn print_summary(config: &BuildConfig) {
    println!("  entry         {}", config.entry.display());
    println!(
        "  output        {} ({})",
        config.output.path.display(),
        config.output.public_url()
    );
    println!("  source maps   {}", config.source_maps);
    println!(
        "  dev server    :{} (proxy {} -> {})",
        config.dev_server.port,
        config.dev_server.proxy[0].context,
        config.dev_server.proxy[0].target
    );
    for rule in &config.rules {
        println!("  rule          .{}", rule.extensions.join(" ."));
    }
    for plugin in &config.plugins {
        println!("  plugin        {plugin}");
    }
}
