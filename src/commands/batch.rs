//! @acp:module "Batch Command"
//! @acp:summary "Generate one article per line of a topics file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::{build_generator, RunFlags};
use crate::config::Config;
use crate::synth::ContentKind;

/// Options for the batch command
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Topics file, one topic per line
    pub topics: PathBuf,
    pub flags: RunFlags,
}

/// Trimmed topics, skipping blank lines and `#` comments
pub fn read_topics<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("Topics file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read topics file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Execute the batch command.
///
/// Topics run sequentially. Auth, rate-limit and regression errors stop the
/// run; any other failure is reported and the next topic continues.
pub fn execute_batch(options: BatchOptions, config: &Config) -> Result<()> {
    let topics = read_topics(&options.topics)?;
    if topics.is_empty() {
        bail!("No topics found in file: {}", options.topics.display());
    }

    let generator = build_generator(&options.flags, config)?;

    let bar = ProgressBar::new(topics.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut saved = 0usize;
    let mut failed = 0usize;
    for topic in &topics {
        bar.set_message(topic.clone());
        let request = options.flags.request(config, topic, ContentKind::Article);

        match generator.generate_article(&request) {
            Ok(article) => {
                saved += 1;
                bar.println(format!(
                    "{} {}",
                    style("Saved:").green(),
                    article.path.display()
                ));
            }
            Err(err) if err.is_fatal_for_batch() => {
                bar.abandon_with_message(format!("stopped at {}", topic));
                return Err(err.into());
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(topic = %topic, error = %err, "topic failed");
                bar.println(format!("{} {} ({})", style("Failed:").red(), topic, err));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "{} {} saved, {} failed",
        style("Batch complete:").bold(),
        saved,
        failed
    );
    Ok(())
}
