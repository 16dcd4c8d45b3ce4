//! @acp:module "Output Parser"
//! @acp:summary "Split a provider response into title, meta description and body"
//! @acp:domain generation
//! @acp:layer service
//!
//! Wire format expected from the provider prompt:
//!
//! ```text
//! TITLE: <single line>
//! META: <single line>
//! BODY:
//! <markdown body>
//! ```
//!
//! TITLE and META must precede BODY; nothing after the BODY marker is
//! inspected for markers.

use serde::{Deserialize, Serialize};

use crate::error::{BlogError, Result};

const TITLE_MARKER: &str = "TITLE:";
const META_MARKER: &str = "META:";
const BODY_MARKER: &str = "BODY:";

/// Title, meta description and Markdown body of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedOutput {
    pub title: String,
    pub meta_description: String,
    pub body: String,
}

/// Parse a raw provider response.
///
/// Returns [`BlogError::Format`] when TITLE, META or BODY is missing, or when
/// the title or meta line is empty.
pub fn parse_model_output(raw: &str) -> Result<ParsedOutput> {
    let mut title: Option<String> = None;
    let mut meta: Option<String> = None;
    let mut body: Option<String> = None;

    let lines: Vec<&str> = raw.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if title.is_none() {
            if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
                title = Some(rest.trim().to_string());
                continue;
            }
        }
        if meta.is_none() {
            if let Some(rest) = line.strip_prefix(META_MARKER) {
                meta = Some(rest.trim().to_string());
                continue;
            }
        }
        if let Some(rest) = line.strip_prefix(BODY_MARKER) {
            let mut body_lines: Vec<&str> = Vec::new();
            let first = rest.trim_start();
            if !first.is_empty() {
                body_lines.push(first);
            }
            body_lines.extend_from_slice(&lines[i + 1..]);
            body = Some(body_lines.join("\n").trim_start_matches('\n').to_string());
            break;
        }
    }

    match (title, meta, body) {
        (Some(title), Some(meta), Some(body)) if !title.is_empty() && !meta.is_empty() => {
            Ok(ParsedOutput {
                title,
                meta_description: meta,
                body,
            })
        }
        _ => Err(BlogError::Format),
    }
}
