//! Rendering of search results

use crate::config::OutputFormat;
use anyhow::Result;
use cfnfind_common::Stack;
use cfnfind_common::defaults::NO_RESULTS_MESSAGE;

/// One line per stack, or a "no results" message when there are none
pub fn render_text(stacks: &[Stack]) -> String {
    if stacks.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }
    stacks
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON array; an empty result is `[]`
pub fn render_json(stacks: &[Stack]) -> Result<String> {
    Ok(serde_json::to_string_pretty(stacks)?)
}

pub fn render(stacks: &[Stack], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(stacks)),
        OutputFormat::Json => render_json(stacks),
    }
}
