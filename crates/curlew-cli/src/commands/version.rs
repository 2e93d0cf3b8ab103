//! `curlew version` command implementation.

use curlew_core::version::{version_string, VERSION};
use miette::Result;

pub fn run(json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({ "name": "curlew", "version": VERSION })
        );
    } else {
        println!("{}", version_string());
    }
    Ok(())
}
