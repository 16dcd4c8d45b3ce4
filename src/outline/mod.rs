//! @acp:module "Outline Reader"
//! @acp:summary "Parse outline Markdown files into frontmatter, title and H2 sections"
//! @acp:domain generation
//! @acp:layer service

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{BlogError, Result};

/// One `## heading` and the lines under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSection {
    pub heading: String,
    pub body_lines: Vec<String>,
}

/// Parsed outline file. Always holds at least one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineDocument {
    pub path: PathBuf,
    pub frontmatter: BTreeMap<String, String>,
    pub title: Option<String>,
    pub sections: Vec<OutlineSection>,
}

impl OutlineDocument {
    /// 1-based section lookup
    pub fn section(&self, index: usize) -> Result<&OutlineSection> {
        if index < 1 || index > self.sections.len() {
            return Err(BlogError::OutlineParse(format!(
                "Section out of range: {} (1-{})",
                index,
                self.sections.len()
            )));
        }
        Ok(&self.sections[index - 1])
    }

    /// Topic from frontmatter, falling back to the H1 title
    pub fn topic(&self) -> Option<&str> {
        self.frontmatter
            .get("topic")
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
            .or(self.title.as_deref())
    }
}

/// Read and parse an outline file
pub fn parse_outline_file<P: AsRef<Path>>(path: P) -> Result<OutlineDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BlogError::OutlineParse(format!(
            "File not found: {}",
            path.display()
        )));
    }
    let text = std::fs::read_to_string(path)?;
    parse_outline(&text, path)
}

/// Parse outline text; `path` is recorded on the document
pub fn parse_outline(text: &str, path: &Path) -> Result<OutlineDocument> {
    let lines: Vec<&str> = text.lines().collect();
    let (frontmatter, start) = parse_frontmatter(&lines)?;

    let mut title = None;
    let mut sections = Vec::new();
    let mut current: Option<OutlineSection> = None;

    for line in &lines[start..] {
        if let Some(rest) = line.strip_prefix("# ") {
            if title.is_none() {
                title = Some(rest.trim().to_string());
            }
            continue;
        }
        if let Some(rest) = line.strip_prefix("## ") {
            sections.extend(current.take());
            current = Some(OutlineSection {
                heading: rest.trim().to_string(),
                body_lines: Vec::new(),
            });
            continue;
        }
        if let Some(section) = current.as_mut() {
            section.body_lines.push(line.to_string());
        }
    }
    sections.extend(current);

    if sections.is_empty() {
        return Err(BlogError::OutlineParse("No H2 sections found".to_string()));
    }

    Ok(OutlineDocument {
        path: path.to_path_buf(),
        frontmatter,
        title,
        sections,
    })
}

/// Parse a leading `---` block. Returns the map and the index of the first body line.
fn parse_frontmatter(lines: &[&str]) -> Result<(BTreeMap<String, String>, usize)> {
    if lines.first().map(|l| l.trim()) != Some("---") {
        return Ok((BTreeMap::new(), 0));
    }
    let end = lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == "---")
        .map(|p| p + 1)
        .ok_or_else(|| BlogError::OutlineParse("Frontmatter started but not closed".to_string()))?;

    let mut map = BTreeMap::new();
    for line in &lines[1..end] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        let value = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            serde_json::from_str::<String>(value).unwrap_or_else(|_| value.to_string())
        } else {
            value.to_string()
        };
        map.insert(key.trim().to_string(), value);
    }
    Ok((map, end + 1))
}
