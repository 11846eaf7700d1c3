//! Terminal output for response bodies

use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::Value;

/// Print a response body under a heading (text) or on its own (json)
pub fn print_body(title: &str, body: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(body)?),
        OutputFormat::Text => {
            println!();
            println!("  {}", title.blue().bold());
            println!("  {}", "─".repeat(title.chars().count()).dimmed());
            if body.is_null() {
                println!("  {}", "(no content)".dimmed());
            } else {
                println!("{}", serde_json::to_string_pretty(body)?);
            }
            println!();
        }
    }
    Ok(())
}

/// Print a one-line confirmation
pub fn success(message: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({ "ok": true, "message": message });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => println!("{} {}", "✓".green(), message),
    }
    Ok(())
}
