//! @acp:module "Generator"
//! @acp:summary "Article, outline and section pipelines from request to Markdown file"
//! @acp:domain generation
//! @acp:layer service
//!
//! Each pipeline picks the placeholder path (dry run or mock provider) or the
//! live path (provider call + output parser), validates the body, and writes
//! the result with frontmatter.

use std::path::PathBuf;

use crate::error::{BlogError, Result};
use crate::outline::OutlineSection;
use crate::parse::{parse_model_output, ParsedOutput};
use crate::prompts::{PromptBuilder, SYSTEM_MESSAGE};
use crate::provider::{ProviderKind, TextProvider};
use crate::publish::{
    build_frontmatter, ensure_out_dir, slugify, trim_meta, write_markdown, FrontMatter,
    META_MAX_LEN,
};
use crate::repair::{ensure_valid, RepairStrategy};
use crate::synth::{self, ContentKind, GenerationRequest, RunMode};
use crate::validate::ValidationMode;

/// Model used when nothing else selects one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Slug used when nothing in a topic transliterates to a letter or digit
const FALLBACK_SLUG: &str = "untitled";

/// A written Markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub meta_description: String,
    pub body: String,
    pub slug: String,
    pub path: PathBuf,
}

/// Resolved run settings shared by every pipeline call
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub out_dir: PathBuf,
    pub model: String,
    pub provider: ProviderKind,
    pub dry_run: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("./out"),
            model: DEFAULT_MODEL.to_string(),
            provider: ProviderKind::OpenAi,
            dry_run: false,
        }
    }
}

impl GeneratorSettings {
    /// `Some` when the placeholder synthesizer replaces the provider
    pub fn placeholder_mode(&self) -> Option<RunMode> {
        if self.dry_run {
            Some(RunMode::DryRun)
        } else if self.provider == ProviderKind::Mock {
            Some(RunMode::Mock)
        } else {
            None
        }
    }

    /// True when an `OPENAI_API_KEY` is needed
    pub fn needs_client(&self) -> bool {
        self.placeholder_mode().is_none()
    }
}

pub struct Generator<'a> {
    settings: GeneratorSettings,
    client: Option<Box<dyn TextProvider + 'a>>,
    prompts: PromptBuilder,
}

impl<'a> Generator<'a> {
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        Ok(Self {
            settings,
            client: None,
            prompts: PromptBuilder::new()?,
        })
    }

    pub fn with_client(mut self, client: impl TextProvider + 'a) -> Self {
        self.client = Some(Box::new(client));
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate, validate and write `{out}/{slug}.md`
    pub fn generate_article(&self, request: &GenerationRequest) -> Result<Article> {
        let parsed = match self.settings.placeholder_mode() {
            Some(mode) => synth::article::build(request, mode),
            None => {
                let user = self.prompts.article(request)?;
                self.call_parsed(&user)?
            }
        };

        let body = ensure_valid(parsed.body, ValidationMode::Article, self.strategy(request))?;
        let output = ParsedOutput { body, ..parsed };
        let slug = slug_for(&request.topic);
        self.publish(request, output, slug, request.words, ContentKind::Article)
    }

    /// Generate, validate and write `{out}/{slug}-outline.md`
    pub fn generate_outline(&self, request: &GenerationRequest) -> Result<Article> {
        let parsed = match self.settings.placeholder_mode() {
            Some(_) => synth::outline::build(request),
            None => {
                let user = self.prompts.outline(request)?;
                self.call_parsed(&user)?
            }
        };

        let body = ensure_valid(parsed.body, ValidationMode::Outline, self.strategy(request))?;
        let output = ParsedOutput { body, ..parsed };
        let slug = format!("{}-outline", slug_for(&request.topic));
        self.publish(request, output, slug, 0, ContentKind::Outline)
    }

    /// Expand one outline section into Markdown starting with `## {heading}`
    pub fn expand_section(
        &self,
        request: &GenerationRequest,
        section: &OutlineSection,
    ) -> Result<String> {
        if self.settings.placeholder_mode().is_some() {
            return Ok(synth::section::build(request, &section.heading, &section.body_lines).body);
        }

        let user = self.prompts.section(request, &section.heading, &section.body_lines)?;
        let raw = self.call(&user)?;
        let text = raw.trim();
        if text.starts_with("## ") {
            Ok(text.to_string())
        } else {
            Ok(format!("## {}\n\n{}", section.heading, text))
        }
    }

    /// Expand section `index` (1-based) and write `{out}/{NN}-{heading-slug}.md`
    pub fn write_section(
        &self,
        request: &GenerationRequest,
        index: usize,
        section: &OutlineSection,
    ) -> Result<Article> {
        let output = ParsedOutput {
            title: section.heading.clone(),
            meta_description: format!(
                "{} for {} in {}.",
                section.heading, request.topic, request.country
            ),
            body: self.expand_section(request, section)?,
        };
        let slug = format!("{:02}-{}", index, slug_for(&section.heading));
        self.publish(request, output, slug, request.words, ContentKind::Section)
    }

    fn strategy<'s>(&'s self, request: &'s GenerationRequest) -> RepairStrategy<'s> {
        match (self.settings.placeholder_mode(), &self.client) {
            (None, Some(client)) => RepairStrategy::Live {
                provider: &**client,
                prompts: &self.prompts,
                model: &self.settings.model,
                request,
            },
            _ => RepairStrategy::FailFast,
        }
    }

    fn call(&self, user: &str) -> Result<String> {
        let client = self.client.as_ref().ok_or(BlogError::NoClient)?;
        tracing::debug!(model = %self.settings.model, "calling provider");
        Ok(client.send(&self.settings.model, SYSTEM_MESSAGE, user)?)
    }

    fn call_parsed(&self, user: &str) -> Result<ParsedOutput> {
        let raw = self.call(user)?;
        parse_model_output(&raw)
    }

    fn publish(
        &self,
        request: &GenerationRequest,
        output: ParsedOutput,
        slug: String,
        word_count_target: u32,
        kind: ContentKind,
    ) -> Result<Article> {
        let ParsedOutput {
            title,
            meta_description,
            body,
        } = output;
        let meta_description = trim_meta(&meta_description, META_MAX_LEN);
        let frontmatter = build_frontmatter(&FrontMatter {
            title: title.clone(),
            slug: slug.clone(),
            meta_description: meta_description.clone(),
            date: None,
            topic: request.topic.clone(),
            word_count_target,
            kind: Some(kind),
            provider: Some(self.settings.provider.to_string()),
            dry_run: Some(self.settings.dry_run),
        });

        let path = ensure_out_dir(&self.settings.out_dir)?.join(format!("{}.md", slug));
        write_markdown(&path, &frontmatter, &body)?;

        Ok(Article {
            title,
            meta_description,
            body,
            slug,
            path,
        })
    }
}

fn slug_for(text: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Model precedence: explicit > `AI_BLOG_MODEL` > `OPENAI_MODEL` > configured > default
pub fn resolve_model<F>(cli_model: Option<&str>, configured: Option<&str>, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |s: &str| !s.trim().is_empty();
    cli_model
        .filter(|m| non_empty(m))
        .map(str::to_string)
        .or_else(|| env("AI_BLOG_MODEL").filter(|m| non_empty(m)))
        .or_else(|| env("OPENAI_MODEL").filter(|m| non_empty(m)))
        .or_else(|| configured.filter(|m| non_empty(m)).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
