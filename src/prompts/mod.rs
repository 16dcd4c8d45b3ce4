//! @acp:module "Prompts"
//! @acp:summary "System and user prompts for generation and repair"
//! @acp:domain generation
//! @acp:layer service
//!
//! Templates are rendered with handlebars in strict mode with HTML escaping
//! disabled, so topic text reaches the provider verbatim.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{BlogError, Result};
use crate::synth::GenerationRequest;
use crate::validate::{ValidationIssue, ValidationMode};

pub const SYSTEM_MESSAGE: &str = "You are an expert SEO writer and editor. \
You write clear, factual, and helpful blog posts in Markdown. \
Follow structure requirements exactly.";

const ARTICLE_TEMPLATE: &str = r#"Write a complete SEO-friendly blog post in Markdown.

Topic: {{topic}}
Target words: {{words}}
Tone: {{tone}}
Audience: {{audience}}
Country: {{country}}

OUTPUT REQUIREMENTS (STRICT ORDER):
1) H1 title
2) Short intro (2-4 paragraphs)
3) H2 section titled "Quick answer" with bullet points
4) 5-8 H2 sections, each with useful content
5) H2 section titled "Decision checklist" with bullet points
6) H2 section titled "FAQs" with 5-8 Q/A pairs in this format:
   Q: ...
   A: ...
7) H2 section titled "Conclusion" with a CTA in the last paragraph

Return EXACTLY in this format:
TITLE: <title>
META: <meta description, 155 chars max>
BODY:
<markdown body>

Ensure the body contains at least 5 H2 headings and FAQs have at least 5 Q/A pairs."#;

const OUTLINE_TEMPLATE: &str = r#"Create a concise blog outline in Markdown for the topic below.

Topic: {{topic}}
Tone: {{tone}}
Audience: {{audience}}
Country: {{country}}

Output a Markdown outline with:
- H1 title
- At least 8 H2 headings, each followed by 3-6 bullet points
- An H2 titled exactly "FAQs" listing 5-8 questions as bullet points

Return EXACTLY in this format:
TITLE: <title>
META: <meta description, 155 chars max>
BODY:
<markdown outline>"#;

const SECTION_TEMPLATE: &str = r###"Expand one section of a blog outline into finished Markdown.

Topic: {{topic}}
Target words for this section: {{words}}
Tone: {{tone}}
Audience: {{audience}}
Country: {{country}}

Section heading: {{heading}}
Outline notes:
{{notes}}

Rules:
- Start with the line "## {{heading}}".
- Cover every outline note.
- Do not include frontmatter, an H1 title, or a meta description.

Return ONLY the Markdown for this section."###;

const REPAIR_TEMPLATE: &str = r#"Fix the Markdown body to resolve the formatting issues below.

Topic: {{topic}}
Target words: {{words}}
Tone: {{tone}}
Audience: {{audience}}
Country: {{country}}

Issues:
{{issues}}

Rules:
- Keep existing content where possible.
{{rules}}
- Do not include frontmatter, title line, or meta description.

Return ONLY the corrected Markdown body (no extra labels).

BODY TO FIX:
{{body}}"#;

const ARTICLE_RULES: &str = "- Ensure at least 5 H2 headings.\n\
- Ensure the FAQs section has 5-8 Q/A pairs in Q:/A: format.";

const OUTLINE_RULES: &str = "- Ensure at least 8 H2 headings.\n\
- Give every H2 section 3-6 bullet points.\n\
- Ensure the \"FAQs\" section lists 5-8 questions as bullet points.";

#[derive(Serialize)]
struct RequestContext<'a> {
    topic: &'a str,
    words: u32,
    tone: &'a str,
    audience: &'a str,
    country: &'a str,
}

impl<'a> From<&'a GenerationRequest> for RequestContext<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            topic: &request.topic,
            words: request.words,
            tone: &request.tone,
            audience: &request.audience,
            country: &request.country,
        }
    }
}

#[derive(Serialize)]
struct SectionContext<'a> {
    #[serde(flatten)]
    request: RequestContext<'a>,
    heading: &'a str,
    notes: String,
}

#[derive(Serialize)]
struct RepairContext<'a> {
    #[serde(flatten)]
    request: RequestContext<'a>,
    issues: String,
    rules: &'a str,
    body: &'a str,
}

/// Registered prompt templates
pub struct PromptBuilder {
    handlebars: Handlebars<'static>,
}

impl PromptBuilder {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, template) in [
            ("article", ARTICLE_TEMPLATE),
            ("outline", OUTLINE_TEMPLATE),
            ("section", SECTION_TEMPLATE),
            ("repair", REPAIR_TEMPLATE),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| BlogError::Prompt(e.to_string()))?;
        }

        Ok(Self { handlebars })
    }

    pub fn article(&self, request: &GenerationRequest) -> Result<String> {
        self.render("article", &RequestContext::from(request))
    }

    pub fn outline(&self, request: &GenerationRequest) -> Result<String> {
        self.render("outline", &RequestContext::from(request))
    }

    pub fn section(
        &self,
        request: &GenerationRequest,
        heading: &str,
        body_lines: &[String],
    ) -> Result<String> {
        let notes: Vec<&str> = body_lines
            .iter()
            .map(|l| l.trim_end())
            .filter(|l| !l.trim().is_empty())
            .collect();
        let notes = if notes.is_empty() {
            "- (no notes; use your judgement)".to_string()
        } else {
            notes.join("\n")
        };
        self.render(
            "section",
            &SectionContext {
                request: RequestContext::from(request),
                heading,
                notes,
            },
        )
    }

    /// Repair prompt naming each unmet rule
    pub fn repair(
        &self,
        request: &GenerationRequest,
        mode: ValidationMode,
        issues: &[ValidationIssue],
        body: &str,
    ) -> Result<String> {
        let issues = issues
            .iter()
            .map(|i| format!("- {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let rules = match mode {
            ValidationMode::Article => ARTICLE_RULES,
            ValidationMode::Outline => OUTLINE_RULES,
        };
        self.render(
            "repair",
            &RepairContext {
                request: RequestContext::from(request),
                issues,
                rules,
                body,
            },
        )
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map(|s| s.trim().to_string())
            .map_err(|e| BlogError::Prompt(e.to_string()))
    }
}
