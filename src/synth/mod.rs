//! @acp:module "Placeholder Synthesizer"
//! @acp:summary "Deterministic article, outline and section assembly without a provider"
//! @acp:domain generation
//! @acp:layer service
//!
//! Builds structurally complete Markdown from a [`GenerationRequest`] using a
//! single [`SeededStream`] per document. Identical requests produce
//! byte-identical output.

pub mod article;
pub mod outline;
pub mod pools;
pub mod section;

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::keywords::extract_keywords;
use crate::parse::ParsedOutput;
use crate::seed::SeededStream;

/// Home-market country always named in region-aware sentences
pub const REFERENCE_COUNTRY: &str = "India";

/// Template placeholder, e.g. `{topic}`
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(topic|country|audience|india|word)\}").unwrap());

/// What a generation call produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Article,
    Outline,
    Section,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Outline => "outline",
            ContentKind::Section => "section",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which placeholder path produced the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Mock,
    DryRun,
}

impl RunMode {
    pub fn label(&self) -> &'static str {
        match self {
            RunMode::Mock => "MOCK",
            RunMode::DryRun => "DRY RUN",
        }
    }
}

/// Inputs of a single generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub words: u32,
    pub tone: String,
    pub audience: String,
    pub country: String,
    pub kind: ContentKind,
}

impl GenerationRequest {
    /// Request with the stock defaults (1200 words, friendly, beginners, India)
    pub fn new(topic: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            topic: topic.into(),
            words: 1200,
            tone: "friendly".to_string(),
            audience: "beginners".to_string(),
            country: REFERENCE_COUNTRY.to_string(),
            kind,
        }
    }

    pub fn with_words(mut self, words: u32) -> Self {
        self.words = words;
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Semantic seed parts shared by every variant
    pub fn seed_parts(&self) -> [&str; 4] {
        [
            self.topic.as_str(),
            self.country.as_str(),
            self.tone.as_str(),
            self.audience.as_str(),
        ]
    }

    /// "India" or "India and {country}"
    pub fn region(&self) -> String {
        if self.country.trim().eq_ignore_ascii_case(REFERENCE_COUNTRY) {
            REFERENCE_COUNTRY.to_string()
        } else {
            format!("{} and {}", REFERENCE_COUNTRY, self.country)
        }
    }
}

/// Assemble placeholder content for the request's kind.
///
/// Section requests expand a heading named after the topic with no outline
/// notes; use [`section::build`] to pass real notes.
pub fn assemble(request: &GenerationRequest, mode: RunMode) -> ParsedOutput {
    match request.kind {
        ContentKind::Article => article::build(request, mode),
        ContentKind::Outline => outline::build(request),
        ContentKind::Section => section::build(request, &request.topic, &[]),
    }
}

/// Line buffer plus the seeded stream for one document
pub(crate) struct Composer<'a> {
    request: &'a GenerationRequest,
    keywords: Vec<String>,
    pub(crate) stream: SeededStream,
    lines: Vec<String>,
}

impl<'a> Composer<'a> {
    pub(crate) fn new(request: &'a GenerationRequest, seed_parts: &[&str]) -> Self {
        let stream = SeededStream::from_parts(seed_parts);
        tracing::debug!(seed = stream.seed(), topic = %request.topic, "seeded placeholder stream");
        Self {
            request,
            keywords: extract_keywords(&request.topic),
            stream,
            lines: Vec::new(),
        }
    }

    /// Keyword for slot `i`, round-robin
    pub(crate) fn keyword(&self, i: usize) -> &str {
        &self.keywords[i % self.keywords.len()]
    }

    /// Substitute template placeholders in one pass; substituted text is not rescanned
    pub(crate) fn fill(&self, template: &str, word: &str) -> String {
        PLACEHOLDER_PATTERN
            .replace_all(template, |caps: &Captures| match &caps[1] {
                "topic" => self.request.topic.clone(),
                "country" => self.request.country.clone(),
                "audience" => self.request.audience.clone(),
                "india" => REFERENCE_COUNTRY.to_string(),
                _ => word.to_string(),
            })
            .into_owned()
    }

    pub(crate) fn intro_sentence(&self, label: &str) -> String {
        format!(
            "For {} in {}, {} choices around {} should stay practical and value-focused.",
            self.request.audience,
            self.request.region(),
            self.request.topic,
            label.to_lowercase()
        )
    }

    /// Shuffle a copy of the pool, then take 3-5 items with keywords filled in
    pub(crate) fn pick_bullets(&mut self, pool: &[&str]) -> Vec<String> {
        let mut options = pool.to_vec();
        self.stream.shuffle(&mut options);
        let count = 3 + self.stream.randint(0, 2);
        (0..count)
            .map(|i| self.fill(options[i % options.len()], self.keyword(i)))
            .collect()
    }

    pub(crate) fn tip(&mut self) -> String {
        self.stream
            .choice(pools::TIPS)
            .copied()
            .unwrap_or_default()
            .to_string()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub(crate) fn bullets(&mut self, items: Vec<String>) {
        for item in items {
            self.lines.push(format!("- {}", item));
        }
    }

    /// `## heading`, intro sentence, 3-5 bullets and a tip
    pub(crate) fn bullet_section(&mut self, heading: &str, pool: &[&str]) {
        self.push(format!("## {}", heading));
        self.blank();
        let intro = self.intro_sentence(heading);
        self.push(intro);
        self.blank();
        let bullets = self.pick_bullets(pool);
        self.bullets(bullets);
        self.blank();
        let tip = self.tip();
        self.push(format!("Tip: {}", tip));
        self.blank();
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}
