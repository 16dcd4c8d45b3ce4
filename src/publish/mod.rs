//! @acp:module "Publishing"
//! @acp:summary "Slugs, meta trimming, frontmatter and Markdown file output"
//! @acp:domain generation
//! @acp:layer output

mod frontmatter;
mod slug;

pub use frontmatter::{build_frontmatter, FrontMatter};
pub use slug::slugify;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Meta descriptions longer than this are trimmed
pub const META_MAX_LEN: usize = 155;

/// Collapse whitespace and cut to `max_len` chars at a word boundary.
///
/// Trailing punctuation left by the cut (` -:;,.`) is dropped. If nothing
/// survives, the hard cut is returned instead.
pub fn trim_meta(meta: &str, max_len: usize) -> String {
    let clean = meta.split_whitespace().collect::<Vec<_>>().join(" ");
    if clean.chars().count() <= max_len {
        return clean;
    }

    let hard_cut: String = clean.chars().take(max_len).collect();
    let mut trimmed = hard_cut.as_str();
    if let Some(idx) = trimmed.rfind(' ') {
        trimmed = &trimmed[..idx];
    }
    let trimmed = trimmed.trim_end_matches(|c: char| " -:;,.\n\t".contains(c));
    if trimmed.is_empty() {
        return hard_cut.trim_end().to_string();
    }
    trimmed.to_string()
}

/// Create the output directory (and parents) if needed
pub fn ensure_out_dir<P: AsRef<Path>>(out_dir: P) -> Result<PathBuf> {
    let path = out_dir.as_ref();
    std::fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

/// Frontmatter, blank line, trimmed body, single trailing newline
pub fn render_markdown(frontmatter: &str, body: &str) -> String {
    format!("{}\n\n{}\n", frontmatter, body.trim())
}

pub fn write_markdown<P: AsRef<Path>>(path: P, frontmatter: &str, body: &str) -> Result<()> {
    std::fs::write(path.as_ref(), render_markdown(frontmatter, body))?;
    tracing::info!(path = %path.as_ref().display(), "wrote markdown");
    Ok(())
}

/// Strip a leading `---` frontmatter block, returning the body
pub fn strip_frontmatter(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("---\n") else {
        return content;
    };
    match rest.find("\n---\n") {
        Some(end) => rest[end + 5..].trim_start_matches('\n'),
        None => match rest.strip_suffix("\n---") {
            Some(_) => "",
            None => content,
        },
    }
}
