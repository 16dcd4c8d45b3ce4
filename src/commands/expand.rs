//! @acp:module "Expand Command"
//! @acp:summary "Expand outline sections into standalone Markdown files"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::{build_generator, print_saved, RunFlags};
use crate::config::Config;
use crate::outline::parse_outline_file;
use crate::synth::ContentKind;

/// Options for the expand command
#[derive(Debug, Clone)]
pub struct ExpandOptions {
    /// Outline Markdown file
    pub outline: PathBuf,
    /// 1-based section number; every section when `None`
    pub section: Option<usize>,
    /// Overrides the outline's own topic
    pub topic: Option<String>,
    pub flags: RunFlags,
}

/// Execute the expand command
pub fn execute_expand(options: ExpandOptions, config: &Config) -> Result<()> {
    let doc = parse_outline_file(&options.outline)?;
    let topic = options
        .topic
        .clone()
        .or_else(|| doc.topic().map(str::to_string))
        .ok_or_else(|| {
            anyhow!(
                "No topic in {}; add a `topic` frontmatter field or pass --topic",
                doc.path.display()
            )
        })?;

    let targets = match options.section {
        Some(index) => vec![(index, doc.section(index)?)],
        None => doc.sections.iter().enumerate().map(|(i, s)| (i + 1, s)).collect(),
    };

    let generator = build_generator(&options.flags, config)?;
    let request = options.flags.request(config, &topic, ContentKind::Section);

    for (index, section) in targets {
        tracing::debug!(index, heading = %section.heading, "expanding section");
        let article = generator.write_section(&request, index, section)?;
        print_saved(&article);
    }
    Ok(())
}
