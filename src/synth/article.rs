//! @acp:module "Article Synthesizer"
//! @acp:summary "Placeholder long-form article with the full section grammar"
//! @acp:domain generation
//! @acp:layer service
//!
//! Section order: H1, intro paragraphs, Quick answer, 5-6 generic sections,
//! Decision checklist, FAQs (with Q:/A: pairs), Conclusion.

use super::pools;
use super::{Composer, GenerationRequest, RunMode};
use crate::keywords::{capitalize_words, title_case};
use crate::parse::ParsedOutput;

/// Number of Q/A pairs in the FAQs section
pub const FAQ_PAIRS: usize = 5;

pub(crate) fn build(request: &GenerationRequest, mode: RunMode) -> ParsedOutput {
    let mut composer = Composer::new(request, &request.seed_parts());
    let topic = request.topic.as_str();
    let country = request.country.as_str();

    let title = format!(
        "{} in {}: A {} Guide",
        title_case(topic),
        country,
        capitalize_words(&request.audience)
    );
    let meta = format!(
        "Learn how to choose {} in {} with a quick checklist, key features, and FAQs for {}.",
        topic, country, request.audience
    );

    let variation = composer.stream.seed_bit();
    let section_count = 5 + variation;

    // Draw order: heading pool, FAQ pool, then per-section bullets and tips.
    let mut heading_pool = pools::ARTICLE_HEADINGS.to_vec();
    composer.stream.shuffle(&mut heading_pool);
    let headings: Vec<String> = (0..section_count)
        .map(|i| {
            composer
                .fill(heading_pool[i % heading_pool.len()], composer.keyword(i))
                .replace("  ", " ")
        })
        .collect();

    let mut faq_pool = pools::FAQ_QUESTIONS.to_vec();
    composer.stream.shuffle(&mut faq_pool);
    let answer = composer.fill(pools::FAQ_ANSWER, "");
    let faqs: Vec<(String, String)> = faq_pool
        .iter()
        .take(FAQ_PAIRS)
        .map(|q| (composer.fill(q, ""), answer.clone()))
        .collect();

    let intros = [
        format!(
            "{} OUTPUT: Deterministic placeholder content for \"{}\" in {}.",
            mode.label(),
            topic,
            country
        ),
        format!(
            "This article demonstrates the required structure for a post about {} in {}.",
            topic, country
        ),
        format!(
            "It is written for {} in a {} tone and uses deterministic placeholders for stable tests.",
            request.audience, request.tone
        ),
        "Use it as a scaffold before generating a real article with live data.".to_string(),
    ];

    composer.push(format!("# {}", title));
    composer.blank();
    for paragraph in intros.iter().take(2 + variation) {
        composer.push(paragraph.as_str());
        composer.blank();
    }

    composer.bullet_section("Quick answer", pools::QUICK_ANSWERS);
    for heading in &headings {
        composer.bullet_section(heading, pools::MAIN_POINTS);
    }
    composer.bullet_section("Decision checklist", pools::CHECKLIST);

    composer.bullet_section("FAQs", pools::MAIN_POINTS);
    for (question, answer) in faqs {
        composer.push(format!("Q: {}", question));
        composer.push(format!("A: {}", answer));
        composer.blank();
    }

    composer.bullet_section("Conclusion", pools::MAIN_POINTS);
    composer.push(format!(
        "This {} output shows the full structure for {} in {}.",
        mode.label().to_lowercase(),
        topic,
        country
    ));
    composer.blank();
    composer.push(format!(
        "If you want a tailored recommendation for {}, share your budget and priorities and we can refine the shortlist.",
        topic
    ));

    ParsedOutput {
        title,
        meta_description: meta,
        body: composer.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::ContentKind;
    use crate::validate::{count_faqs, count_h1, count_h2, validate, ValidationMode};

    fn earbuds() -> GenerationRequest {
        GenerationRequest::new("best earbuds under 5000 in india", ContentKind::Article)
    }

    #[test]
    fn test_article_is_deterministic() {
        let first = build(&earbuds(), RunMode::Mock);
        let second = build(&earbuds(), RunMode::Mock);
        assert_eq!(first, second);
    }

    #[test]
    fn test_article_structure() {
        let article = build(&earbuds(), RunMode::Mock);
        assert_eq!(count_h1(&article.body), 1);
        assert!(count_h2(&article.body) >= 9);
        assert_eq!(count_faqs(&article.body), FAQ_PAIRS);
        assert!(validate(&article.body, ValidationMode::Article).is_empty());
    }

    #[test]
    fn test_article_title_and_banner() {
        let article = build(&earbuds(), RunMode::DryRun);
        assert_eq!(
            article.title,
            "Best Earbuds Under 5000 In India in India: A Beginners Guide"
        );
        assert!(article.body.contains("DRY RUN OUTPUT: Deterministic placeholder content"));
        assert!(article.body.contains("This dry run output shows the full structure"));
    }

    #[test]
    fn test_article_mentions_both_regions_abroad() {
        let request = earbuds().with_country("Nepal");
        let article = build(&request, RunMode::Mock);
        assert!(article.body.contains("in India and Nepal,"));
    }

    #[test]
    fn test_article_has_no_unfilled_placeholders() {
        let article = build(&earbuds(), RunMode::Mock);
        assert!(!article.body.contains('{'));
        assert!(!article.body.contains("  "));
    }

    #[test]
    fn test_content_free_topic_still_builds() {
        let request = GenerationRequest::new("the best", ContentKind::Article);
        let article = build(&request, RunMode::Mock);
        assert!(validate(&article.body, ValidationMode::Article).is_empty());
        assert!(article.body.contains("quality"));
    }
}
