//! JSON reporter for scripting

use crate::models::AttributionReport;
use anyhow::{Context, Result};

/// Render the report as pretty-printed JSON.
pub fn render(report: &AttributionReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}
