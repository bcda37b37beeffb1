//! Loading selections from JSON files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use jewelcraft_core::DesignSelection;

/// Read a selection from `path`, or from stdin when no path is given.
pub fn read_selection(path: Option<&Path>) -> anyhow::Result<DesignSelection> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading selection from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading selection from stdin")?;
            buf
        }
    };
    parse_selection(&raw)
}

/// Fallback selection for extraction: the file if given, else the reset design.
pub fn fallback_selection(path: Option<&Path>) -> anyhow::Result<DesignSelection> {
    match path {
        Some(_) => read_selection(path),
        None => Ok(DesignSelection::default()),
    }
}

/// Parse selection JSON. Blank input is the default selection; missing keys
/// take their defaults.
pub fn parse_selection(raw: &str) -> anyhow::Result<DesignSelection> {
    if raw.trim().is_empty() {
        return Ok(DesignSelection::default());
    }
    let selection: DesignSelection =
        serde_json::from_str(raw).context("parsing selection JSON")?;
    Ok(selection.clamped())
}
