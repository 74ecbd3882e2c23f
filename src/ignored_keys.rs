use std::path::Path;

use akbm_xsd::IgnoreSet;
use anyhow::Context;

/// Reads an ignore file: one key per line, blank lines and `#` comments skipped. A missing file
/// is an empty set.
pub fn read(path: &Path) -> anyhow::Result<IgnoreSet> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no ignore file");
        return Ok(IgnoreSet::new());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ignore file {}", path.display()))?;
    Ok(parse(&text))
}

pub fn parse(text: &str) -> IgnoreSet {
    IgnoreSet::from_raw(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}
