//! CLI command implementations

pub mod account;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod payments;
pub mod seller;
pub mod vouchers;

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse a `--data` argument: inline JSON, or `@path` to a JSON file
pub fn parse_data(data: &str) -> Result<Value> {
    match data.strip_prefix('@') {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path}"))?;
            serde_json::from_str(&content).with_context(|| format!("{path} is not valid JSON"))
        }
        None => serde_json::from_str(data).context("--data is not valid JSON"),
    }
}
