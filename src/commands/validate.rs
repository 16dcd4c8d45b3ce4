//! @acp:module "Validate Command"
//! @acp:summary "Check a Markdown file against the article or outline structure"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::publish::strip_frontmatter;
use crate::validate::{validate, ValidationIssue, ValidationMode};

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// File to validate
    pub file: PathBuf,
    pub mode: ValidationMode,
}

/// Issues found in a Markdown file, frontmatter ignored
pub fn validate_file(options: &ValidateOptions) -> Result<Vec<ValidationIssue>> {
    let content = std::fs::read_to_string(&options.file)
        .with_context(|| format!("Failed to read {}", options.file.display()))?;
    Ok(validate(strip_frontmatter(&content), options.mode))
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let issues = validate_file(&options)?;

    if issues.is_empty() {
        let kind = match options.mode {
            ValidationMode::Article => "article",
            ValidationMode::Outline => "outline",
        };
        println!(
            "{} {} is a valid {}",
            style("✓").green(),
            options.file.display(),
            kind
        );
        return Ok(());
    }

    eprintln!(
        "{} {} has {} issue(s):",
        style("✗").red(),
        options.file.display(),
        issues.len()
    );
    for issue in &issues {
        eprintln!("  - {}", issue);
    }
    std::process::exit(1);
}
