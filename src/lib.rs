#![forbid(unsafe_code)]

//! @acp:module "ai-blog Library"
//! @acp:summary "Markdown article, outline and section generation with structural validation"
//! @acp:domain generation
//! @acp:layer api
//! @acp:stability stable
//!
//! # ai-blog
//!
//! Generates long-form Markdown from a topic, either through an
//! OpenAI-compatible provider or from a deterministic placeholder
//! synthesizer used for dry runs and tests.
//!
//! ## Features
//!
//! - **Deterministic placeholders**: the same request always yields the same bytes
//! - **Structural validation**: heading, bullet and FAQ rules for articles and outlines
//! - **Single repair round**: live output that fails validation gets one fix attempt
//! - **Outline expansion**: turn outline sections into standalone Markdown files
//!
//! ## Example
//!
//! ```rust,no_run
//! use ai_blog::{ContentKind, GenerationRequest, Generator, GeneratorSettings};
//!
//! fn main() -> ai_blog::Result<()> {
//!     let settings = GeneratorSettings {
//!         dry_run: true,
//!         ..GeneratorSettings::default()
//!     };
//!     let generator = Generator::new(settings)?;
//!
//!     let request = GenerationRequest::new("best earbuds under 5000", ContentKind::Article);
//!     let article = generator.generate_article(&request)?;
//!     println!("{}", article.path.display());
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod keywords;
pub mod outline;
pub mod parse;
pub mod prompts;
pub mod provider;
pub mod publish;
pub mod repair;
pub mod seed;
pub mod synth;
pub mod validate;

// Re-exports
pub use config::Config;
pub use error::{BlogError, Result};
pub use generator::{resolve_model, Article, Generator, GeneratorSettings, DEFAULT_MODEL};
pub use keywords::extract_keywords;
pub use outline::{parse_outline, parse_outline_file, OutlineDocument, OutlineSection};
pub use parse::{parse_model_output, ParsedOutput};
pub use prompts::PromptBuilder;
pub use provider::{OpenAiProvider, ProviderError, ProviderKind, ScriptedProvider, TextProvider};
pub use publish::{build_frontmatter, slugify, trim_meta, FrontMatter};
pub use repair::{ensure_valid, repair_body, RepairStrategy};
pub use seed::{derive_seed, SeededStream};
pub use synth::{assemble, ContentKind, GenerationRequest, RunMode};
pub use validate::{validate, ValidationIssue, ValidationMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
