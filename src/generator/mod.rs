//! Output artifacts: pseudo-schema files, PlantUML mindmaps and their PDF rendering.

pub mod plantuml;

use std::path::{Path, PathBuf};

use anyhow::Context;

const INDENT_WIDTH: usize = 2;

/// Writes `<root_name>.schema.txt` into `dir`, creating it if needed.
pub fn write_schema(dir: &Path, root_name: &str, text: &str) -> anyhow::Result<PathBuf> {
    write_artifact(dir, &format!("{root_name}.schema.txt"), text)
}

/// Converts pseudo-schema text into a PlantUML mindmap: every non-blank line becomes a node whose
/// depth follows the line's indentation.
pub fn schema_to_mindmap(schema: &str, title: Option<&str>) -> String {
    let mut lines = vec!["@startmindmap".to_owned()];
    if let Some(title) = title {
        lines.push(format!("title {title}"));
    }

    for raw in schema.lines().filter(|line| !line.trim().is_empty()) {
        let indent = raw.len() - raw.trim_start_matches(' ').len();
        let stars = "*".repeat(indent / INDENT_WIDTH + 1);
        lines.push(format!("{stars} {}", raw.trim()));
    }

    lines.push("@endmindmap".to_owned());
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Writes the mindmap of `schema` as `<root>.puml` into `dir`, titled `<root> mindmap`.
pub fn write_mindmap(dir: &Path, root: &str, schema: &str) -> anyhow::Result<PathBuf> {
    let mindmap = schema_to_mindmap(schema, Some(&format!("{root} mindmap")));
    write_artifact(dir, &format!("{root}.puml"), &mindmap)
}

fn write_artifact(dir: &Path, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    let path = dir.join(file_name);
    std::fs::write(&path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote artifact");
    Ok(path)
}
