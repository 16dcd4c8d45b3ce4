//! Frontmatter block for generated Markdown files

use chrono::{Local, NaiveDate};

use crate::synth::ContentKind;

/// Metadata written ahead of every generated body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub slug: String,
    pub meta_description: String,
    /// Defaults to today (local time) when `None`
    pub date: Option<NaiveDate>,
    pub topic: String,
    pub word_count_target: u32,
    pub kind: Option<ContentKind>,
    pub provider: Option<String>,
    pub dry_run: Option<bool>,
}

/// Render the `---` block. String values are JSON-quoted, which YAML reads
/// as double-quoted scalars.
pub fn build_frontmatter(fm: &FrontMatter) -> String {
    let date = fm
        .date
        .unwrap_or_else(|| Local::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();

    let mut lines = vec![
        "---".to_string(),
        format!("title: {}", quote(&fm.title)),
        format!("slug: {}", quote(&fm.slug)),
        format!("meta_description: {}", quote(&fm.meta_description)),
        format!("date: {}", quote(&date)),
        format!("topic: {}", quote(&fm.topic)),
        format!("word_count_target: {}", fm.word_count_target),
    ];
    if let Some(kind) = fm.kind {
        lines.push(format!("kind: {}", quote(kind.as_str())));
    }
    if let Some(provider) = &fm.provider {
        lines.push(format!("provider: {}", quote(provider)));
    }
    if let Some(dry_run) = fm.dry_run {
        lines.push(format!("dry_run: {}", dry_run));
    }
    lines.push("---".to_string());
    lines.join("\n")
}

fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
