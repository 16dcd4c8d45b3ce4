//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule. Shared run flags resolve against the
//! loaded [`Config`] here.

pub mod batch;
pub mod expand;
pub mod generate;
pub mod outline;
pub mod validate;

pub use batch::{execute_batch, read_topics, BatchOptions};
pub use expand::{execute_expand, ExpandOptions};
pub use generate::{execute_generate, GenerateOptions};
pub use outline::{execute_outline, OutlineOptions};
pub use validate::{execute_validate, ValidateOptions};

use std::path::PathBuf;

use console::style;

use crate::config::Config;
use crate::generator::{resolve_model, Article, Generator, GeneratorSettings};
use crate::provider::{OpenAiProvider, ProviderKind};
use crate::synth::{ContentKind, GenerationRequest};

/// Flags shared by every generating command. `None` falls back to config.
#[derive(Debug, Clone, Default)]
pub struct RunFlags {
    pub words: Option<u32>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub country: Option<String>,
    pub out: Option<PathBuf>,
    pub model: Option<String>,
    pub provider: Option<ProviderKind>,
    pub dry_run: bool,
}

impl RunFlags {
    pub fn request(&self, config: &Config, topic: &str, kind: ContentKind) -> GenerationRequest {
        let mut request = config.request(topic, kind);
        if let Some(words) = self.words {
            request = request.with_words(words);
        }
        if let Some(tone) = &self.tone {
            request = request.with_tone(tone.clone());
        }
        if let Some(audience) = &self.audience {
            request = request.with_audience(audience.clone());
        }
        if let Some(country) = &self.country {
            request = request.with_country(country.clone());
        }
        request
    }

    pub fn settings(&self, config: &Config) -> GeneratorSettings {
        GeneratorSettings {
            out_dir: self.out.clone().unwrap_or_else(|| config.out_dir.clone()),
            model: resolve_model(self.model.as_deref(), config.model.as_deref(), |key| {
                std::env::var(key).ok()
            }),
            provider: self.provider.unwrap_or(config.provider),
            dry_run: self.dry_run,
        }
    }
}

/// Generator for these flags, with a live client only when one is needed
pub fn build_generator(flags: &RunFlags, config: &Config) -> crate::Result<Generator<'static>> {
    let settings = flags.settings(config);
    let needs_client = settings.needs_client();
    tracing::debug!(
        provider = %settings.provider,
        dry_run = settings.dry_run,
        model = %settings.model,
        "resolved run settings"
    );

    let generator = Generator::new(settings)?;
    if !needs_client {
        return Ok(generator);
    }

    let client = OpenAiProvider::from_env()?
        .with_base_url(config.openai.base_url.as_str())
        .with_timeout(config.openai.timeout());
    Ok(generator.with_client(client))
}

pub(crate) fn print_saved(article: &Article) {
    println!("{} {}", style("Saved:").green(), article.path.display());
}
