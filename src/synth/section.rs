//! @acp:module "Section Synthesizer"
//! @acp:summary "Placeholder expansion of a single outline section"
//! @acp:domain generation
//! @acp:layer service

use super::pools;
use super::{Composer, GenerationRequest};
use crate::parse::ParsedOutput;

/// Seed discriminator for section expansions
pub const SECTION_SEED_TOKEN: &str = "expand";

/// Expand one outline section. The body always starts with `## {heading}`.
pub fn build(request: &GenerationRequest, heading: &str, body_lines: &[String]) -> ParsedOutput {
    let [topic, country, tone, audience] = request.seed_parts();
    let mut composer = Composer::new(
        request,
        &[topic, country, tone, audience, SECTION_SEED_TOKEN, heading],
    );

    let mut notes = outline_notes(body_lines);
    if notes.is_empty() {
        notes = composer.pick_bullets(pools::OUTLINE_POINTS);
    }

    composer.push(format!("## {}", heading));
    composer.blank();
    let intro = composer.intro_sentence(heading);
    composer.push(intro);
    composer.blank();

    for (i, note) in notes.iter().enumerate() {
        let follow_on = composer
            .stream
            .choice(pools::ELABORATIONS)
            .copied()
            .unwrap_or_default();
        let follow_on = composer.fill(follow_on, composer.keyword(i));
        composer.push(format!("**{}** {}", note, follow_on));
        composer.blank();
    }

    let bullets = composer.pick_bullets(pools::MAIN_POINTS);
    composer.bullets(bullets);
    composer.blank();
    let tip = composer.tip();
    composer.push(format!("Tip: {}", tip));

    ParsedOutput {
        title: heading.to_string(),
        meta_description: format!("Expanded notes on {} for {} in {}.", heading, topic, country),
        body: composer.finish(),
    }
}

/// Bullet text and non-empty prose lines from an outline section
fn outline_notes(body_lines: &[String]) -> Vec<String> {
    body_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.strip_prefix("- ")
                .or_else(|| line.strip_prefix("* "))
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .filter(|note| !note.is_empty())
        .collect()
}
