// src/utils.rs
use anyhow::{Context, Result};

use crate::types::Project;

/// Download name for an exported resume: whitespace runs become a single
/// hyphen, leading/trailing whitespace is dropped. Path separators and
/// control characters become hyphens and dot-only segments are dropped, so
/// the result is always a single file name.
pub fn export_filename(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '\\' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect::<String>();
    let stem = stem
        .split('-')
        .filter(|segment| segment.is_empty() || !segment.chars().all(|c| c == '.'))
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-resume.pdf", stem)
}

/// Parse `Title::Description::tech1,tech2`. Description and technologies
/// may be omitted; `\n` in the description becomes a line break.
pub fn parse_project_spec(spec: &str) -> Result<Project> {
    let mut parts = spec.splitn(3, "::");
    let title = parts
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .with_context(|| format!("Project spec has no title: {:?}", spec))?;
    let description = parts.next().unwrap_or("").trim().replace("\\n", "\n");
    let technologies = parts
        .next()
        .map(|techs| {
            techs
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Project {
        title: title.to_string(),
        description,
        technologies,
    })
}
