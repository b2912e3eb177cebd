//! Report rendering
//!
//! Console output is informational, not a stable contract; the JSON
//! renderer exists for scripting against the same report model.

mod json;
mod text;

use crate::models::AttributionReport;
use anyhow::{bail, Result};

/// Render a report in the requested format (`text` or `json`).
pub fn render(report: &AttributionReport, format: &str) -> Result<String> {
    match format {
        "text" => text::render(report),
        "json" => json::render(report),
        other => bail!("unknown output format: {}", other),
    }
}
