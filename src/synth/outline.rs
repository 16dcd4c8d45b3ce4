//! @acp:module "Outline Synthesizer"
//! @acp:summary "Placeholder outline: generic headings with talking points plus FAQ questions"
//! @acp:domain generation
//! @acp:layer service

use super::pools;
use super::{Composer, GenerationRequest};
use crate::keywords::title_case;
use crate::parse::ParsedOutput;

/// Seed discriminator so outlines differ from articles on the same topic
pub const OUTLINE_SEED_TOKEN: &str = "outline";

/// Generic headings per outline
pub const OUTLINE_SECTIONS: usize = 5;

/// Fixed framing sections around the generic headings
pub const OPENING_SECTION: &str = "Quick answer";
pub const CLOSING_SECTIONS: [&str; 2] = ["Decision checklist", "Conclusion"];

pub(crate) fn build(request: &GenerationRequest) -> ParsedOutput {
    let [topic, country, tone, audience] = request.seed_parts();
    let mut composer =
        Composer::new(request, &[topic, country, tone, audience, OUTLINE_SEED_TOKEN]);

    let title = format!("{} in {}: Outline", title_case(topic), country);
    let meta = format!(
        "Outline for {} in {}, covering key sections, checklist, and FAQs.",
        topic, country
    );

    let mut heading_pool = pools::OUTLINE_HEADINGS.to_vec();
    composer.stream.shuffle(&mut heading_pool);
    let headings: Vec<String> = (0..OUTLINE_SECTIONS)
        .map(|i| composer.fill(heading_pool[i], composer.keyword(i)))
        .collect();

    composer.push(format!("# {}", title));
    composer.blank();

    outline_section(&mut composer, OPENING_SECTION, pools::QUICK_ANSWERS);
    for heading in &headings {
        outline_section(&mut composer, heading, pools::OUTLINE_POINTS);
    }
    outline_section(&mut composer, CLOSING_SECTIONS[0], pools::CHECKLIST);

    composer.push("## FAQs");
    composer.blank();
    let questions: Vec<String> = pools::OUTLINE_QUESTIONS
        .iter()
        .map(|q| composer.fill(q, ""))
        .collect();
    composer.bullets(questions);
    composer.blank();

    outline_section(&mut composer, CLOSING_SECTIONS[1], pools::MAIN_POINTS);

    ParsedOutput {
        title,
        meta_description: meta,
        body: composer.finish(),
    }
}

/// Heading followed by 3-5 talking points, no prose
fn outline_section(composer: &mut Composer<'_>, heading: &str, pool: &[&str]) {
    composer.push(format!("## {}", heading));
    composer.blank();
    let points = composer.pick_bullets(pool);
    composer.bullets(points);
    composer.blank();
}
