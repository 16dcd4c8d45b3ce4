//! End-to-end generation tests
//!
//! Article, outline and section pipelines on the placeholder path, plus the
//! live path driven by a scripted provider.

use std::path::Path;


use ai_blog::outline::parse_outline_file;
use ai_blog::validate::{count_faqs, count_h1, count_h2, section_bullet_counts};
use ai_blog::{
    BlogError, ContentKind, GenerationRequest, Generator, GeneratorSettings, ProviderError,
    ProviderKind, ScriptedProvider, ValidationMode,
};

fn settings(out: &Path, provider: ProviderKind, dry_run: bool) -> GeneratorSettings {
    GeneratorSettings {
        out_dir: out.to_path_buf(),
        model: "gpt-test".to_string(),
        provider,
        dry_run,
    }
}

fn mock_generator(out: &Path) -> Generator<'static> {
    Generator::new(settings(out, ProviderKind::Mock, false)).unwrap()
}

fn valid_article_body() -> String {
    let mut body = String::from("# Green Tea Guide\n\nIntro.\n\n");
    for heading in ["Quick answer", "Types", "Brewing", "Decision checklist"] {
        body.push_str(&format!("## {}\n\nSome text.\n\n", heading));
    }
    body.push_str("## FAQs\n\n");
    for i in 1..=5 {
        body.push_str(&format!("Q: Question {}?\nA: Answer {}.\n\n", i, i));
    }
    body.push_str("## Conclusion\n\nBrew a cup today.");
    body
}

fn valid_outline_body() -> String {
    let mut body = String::from("# Green Tea Outline\n\n");
    for i in 1..=7 {
        body.push_str(&format!("## Section {}\n- point a\n- point b\n- point c\n\n", i));
    }
    body.push_str("## FAQs\n");
    for i in 1..=5 {
        body.push_str(&format!("- Question {}?\n", i));
    }
    body.trim_end().to_string()
}

fn raw_response(body: &str) -> String {
    format!("TITLE: Green Tea Guide\nMETA: All about green tea.\nBODY:\n{}", body)
}

// =============================================================================
// Placeholder articles
// =============================================================================

mod article_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EARBUDS: &str = "best earbuds under 5000 in india";

    #[test]
    fn test_earbuds_mock_article() {
        let dir = tempfile::tempdir().unwrap();
        let generator = mock_generator(dir.path());
        let request = GenerationRequest::new(EARBUDS, ContentKind::Article);

        let article = generator.generate_article(&request).unwrap();

        assert_eq!(article.slug, "best-earbuds-under-5000-in-india");
        assert_eq!(article.path, dir.path().join("best-earbuds-under-5000-in-india.md"));
        assert_eq!(count_h1(&article.body), 1);
        assert!(count_h2(&article.body) >= 5);
        assert!(count_faqs(&article.body) >= 5);
        assert!(article.body.contains("MOCK OUTPUT: Deterministic placeholder content"));
    }

    #[test]
    fn test_mock_article_is_byte_identical() {
        let first_dir = tempfile::tempdir().unwrap();
        let second_dir = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new(EARBUDS, ContentKind::Article);

        let first = mock_generator(first_dir.path()).generate_article(&request).unwrap();
        let second = mock_generator(second_dir.path()).generate_article(&request).unwrap();

        assert_eq!(first.body, second.body);
        assert_eq!(first.title, second.title);
        assert_eq!(first.meta_description, second.meta_description);
    }

    #[test]
    fn test_dry_run_banner_and_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            Generator::new(settings(dir.path(), ProviderKind::OpenAi, true)).unwrap();
        let request = GenerationRequest::new("green tea", ContentKind::Article).with_words(900);

        let article = generator.generate_article(&request).unwrap();
        assert!(article.body.contains("DRY RUN OUTPUT:"));

        let written = std::fs::read_to_string(&article.path).unwrap();
        assert!(written.starts_with("---\ntitle: \"Green Tea in India: A Beginners Guide\"\n"));
        assert!(written.contains("\nslug: \"green-tea\"\n"));
        assert!(written.contains("\ntopic: \"green tea\"\n"));
        assert!(written.contains("\nword_count_target: 900\n"));
        assert!(written.contains("\nkind: \"article\"\n"));
        assert!(written.contains("\nprovider: \"openai\"\n"));
        assert!(written.contains("\ndry_run: true\n---\n\n# Green Tea"));
        assert!(written.ends_with('\n') && !written.ends_with("\n\n"));
    }

    #[test]
    fn test_other_country_changes_output() {
        let dir = tempfile::tempdir().unwrap();
        let generator = mock_generator(dir.path());
        let india = GenerationRequest::new("green tea", ContentKind::Article);
        let nepal = india.clone().with_country("Nepal");

        let india = generator.generate_article(&india).unwrap();
        let nepal = generator.generate_article(&nepal).unwrap();

        assert_ne!(india.body, nepal.body);
        assert!(nepal.body.contains("in India and Nepal,"));
    }

    #[test]
    fn test_unsluggable_topic_uses_fallback_name() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new("!!!", ContentKind::Article);

        let article = mock_generator(dir.path()).generate_article(&request).unwrap();
        assert_eq!(article.slug, "untitled");
        assert!(article.path.exists());
    }

    #[test]
    fn test_thousands_separator_is_joined_in_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let request =
            GenerationRequest::new("best earbuds under 5,000 in india", ContentKind::Article);

        let article = mock_generator(dir.path()).generate_article(&request).unwrap();
        assert_eq!(article.path, dir.path().join("best-earbuds-under-5000-in-india.md"));
    }

    #[test]
    fn test_devanagari_topics_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let generator = mock_generator(dir.path());
        let earbuds = GenerationRequest::new("सबसे अच्छे ईयरबड्स", ContentKind::Article);
        let phones = GenerationRequest::new("सस्ते मोबाइल फोन", ContentKind::Article);

        let first = generator.generate_article(&earbuds).unwrap();
        let second = generator.generate_article(&phones).unwrap();

        assert_ne!(first.slug, "untitled");
        assert_ne!(second.slug, "untitled");
        assert_ne!(first.path, second.path);
        assert!(first.path.exists());
        assert!(second.path.exists());
    }
}

// =============================================================================
// Placeholder outlines
// =============================================================================

mod outline_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FRAMING: [&str; 4] = ["Quick answer", "Decision checklist", "FAQs", "Conclusion"];

    #[test]
    fn test_test_topic_outline_structure() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new("test topic", ContentKind::Outline);

        let outline = mock_generator(dir.path()).generate_outline(&request).unwrap();
        let counts = section_bullet_counts(&outline.body);

        let generic: Vec<_> = counts
            .iter()
            .filter(|(heading, _)| !FRAMING.contains(&heading.as_str()))
            .collect();
        assert_eq!(generic.len(), 5);

        let faqs: Vec<_> = counts.iter().filter(|(h, _)| h == "FAQs").collect();
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].1, 5);

        for (heading, bullets) in counts.iter().filter(|(h, _)| h != "FAQs") {
            assert!((3..=6).contains(bullets), "{} has {} bullets", heading, bullets);
        }
        assert!(ai_blog::validate(&outline.body, ValidationMode::Outline).is_empty());
    }

    #[test]
    fn test_outline_file_name_and_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new("test topic", ContentKind::Outline);

        let outline = mock_generator(dir.path()).generate_outline(&request).unwrap();
        assert_eq!(outline.slug, "test-topic-outline");
        assert_eq!(outline.title, "Test Topic in India: Outline");

        let written = std::fs::read_to_string(&outline.path).unwrap();
        assert!(written.contains("\nword_count_target: 0\n"));
        assert!(written.contains("\nkind: \"outline\"\n"));
    }

    #[test]
    fn test_outline_round_trips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new("test topic", ContentKind::Outline);
        let outline = mock_generator(dir.path()).generate_outline(&request).unwrap();

        let doc = parse_outline_file(&outline.path).unwrap();
        assert_eq!(doc.topic(), Some("test topic"));
        assert_eq!(doc.title.as_deref(), Some("Test Topic in India: Outline"));
        assert_eq!(doc.sections.len(), 9);
        assert_eq!(doc.sections[0].heading, "Quick answer");
    }
}

// =============================================================================
// Section expansion
// =============================================================================

mod expand_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const OUTLINE: &str = "---\ntitle: \"Test Outline\"\ntopic: \"test topic\"\n---\n\
# Test Outline\n\n## First Section\n- bullet one\n- bullet two\n\n\
## FAQs\n- Q1?\n- Q2?\n- Q3?\n- Q4?\n- Q5?\n";

    #[test]
    fn test_mock_expand_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.md");
        std::fs::write(&path, OUTLINE).unwrap();

        let doc = parse_outline_file(&path).unwrap();
        let section = doc.section(1).unwrap();
        let request = GenerationRequest::new(doc.topic().unwrap(), ContentKind::Section);
        let generator = mock_generator(dir.path());

        let first = generator.expand_section(&request, section).unwrap();
        let second = generator.expand_section(&request, section).unwrap();

        assert!(first.starts_with("## First Section"));
        assert_eq!(first, second);
        assert!(first.contains("**bullet one**"));
        assert!(first.contains("**bullet two**"));
    }

    #[test]
    fn test_expand_output_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.md");
        std::fs::write(&path, OUTLINE).unwrap();

        let doc = parse_outline_file(&path).unwrap();
        let request = GenerationRequest::new("test topic", ContentKind::Section);
        let out = dir.path().join("expanded");
        let generator = mock_generator(&out);

        let written = generator
            .write_section(&request, 1, doc.section(1).unwrap())
            .unwrap();
        assert_eq!(written.path, out.join("01-first-section.md"));

        let content = std::fs::read_to_string(&written.path).unwrap();
        assert!(content.contains("\nkind: \"section\"\n"));
        assert!(content.contains("\n---\n\n## First Section\n"));
    }
}

// =============================================================================
// Live path with a scripted provider
// =============================================================================

mod repair_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn live<'a>(out: &Path, provider: &'a ScriptedProvider) -> Generator<'a> {
        Generator::new(settings(out, ProviderKind::OpenAi, false))
            .unwrap()
            .with_client(provider)
    }

    #[test]
    fn test_valid_response_needs_no_repair() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new().reply(raw_response(&valid_article_body()));
        let request = GenerationRequest::new("green tea", ContentKind::Article);

        let article = live(dir.path(), &provider).generate_article(&request).unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(article.title, "Green Tea Guide");
        assert_eq!(article.meta_description, "All about green tea.");
        assert_eq!(article.body, valid_article_body());
        assert_eq!(provider.calls()[0].model, "gpt-test");
    }

    #[test]
    fn test_one_repair_round_fixes_body() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new()
            .reply(raw_response("# Green Tea Guide\n\n## Only section"))
            .reply(format!("{}\n\n", valid_article_body()));
        let request = GenerationRequest::new("green tea", ContentKind::Article);

        let article = live(dir.path(), &provider).generate_article(&request).unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(article.body, valid_article_body());
        let repair_prompt = &provider.calls()[1].user;
        assert!(repair_prompt.contains("- Needs at least 5 H2 headings"));
        assert!(repair_prompt.contains("- FAQs must include at least 5 Q/A pairs"));
        assert!(repair_prompt.ends_with("## Only section"));
    }

    #[test]
    fn test_second_failure_is_repair_exhausted() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new()
            .reply(raw_response("# Broken"))
            .reply("# Still broken\n\n## One");
        let request = GenerationRequest::new("green tea", ContentKind::Article);

        let err = live(dir.path(), &provider)
            .generate_article(&request)
            .unwrap_err();

        assert!(matches!(err, BlogError::RepairExhausted(_)));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(provider.call_count(), 2);
        assert!(!dir.path().join("green-tea.md").exists());
    }

    #[test]
    fn test_malformed_response_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new().reply("Just some prose, no markers.");
        let request = GenerationRequest::new("green tea", ContentKind::Article);

        let err = live(dir.path(), &provider)
            .generate_article(&request)
            .unwrap_err();
        assert!(matches!(err, BlogError::Format));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_auth_and_rate_limit_surface_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new("green tea", ContentKind::Article);

        let provider = ScriptedProvider::new().fail(ProviderError::Auth("HTTP 401".into()));
        let err = live(dir.path(), &provider)
            .generate_article(&request)
            .unwrap_err();
        assert!(matches!(err, BlogError::Auth(_)));
        assert_eq!(err.exit_code(), 2);

        let provider =
            ScriptedProvider::new().fail(ProviderError::RateLimited("HTTP 429".into()));
        let err = live(dir.path(), &provider)
            .generate_outline(&request)
            .unwrap_err();
        assert!(matches!(err, BlogError::RateLimited(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_outline_repair_round_fixes_body() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new()
            .reply(raw_response("# Green Tea Outline\n\n## Only\n- a"))
            .reply(format!("\n{}\n", valid_outline_body()));
        let request = GenerationRequest::new("green tea", ContentKind::Outline);

        let outline = live(dir.path(), &provider).generate_outline(&request).unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(outline.body, valid_outline_body());
        assert_eq!(outline.path, dir.path().join("green-tea-outline.md"));
        let repair_prompt = &provider.calls()[1].user;
        assert!(repair_prompt.contains("- Needs at least 8 H2 headings"));
        assert!(repair_prompt.contains("- Outline must include an H2 \"FAQs\" section"));
        assert!(repair_prompt.contains("- Ensure at least 8 H2 headings."));
    }

    #[test]
    fn test_outline_second_failure_is_repair_exhausted() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new()
            .reply(raw_response("# Green Tea Outline\n\n## Only\n- a"))
            .reply("# Green Tea Outline\n\n## Still one\n- a\n- b\n- c");
        let request = GenerationRequest::new("green tea", ContentKind::Outline);

        let err = live(dir.path(), &provider)
            .generate_outline(&request)
            .unwrap_err();

        assert!(matches!(err, BlogError::RepairExhausted(_)));
        assert_eq!(provider.call_count(), 2);
        assert!(!dir.path().join("green-tea-outline.md").exists());
    }

    #[test]
    fn test_mock_path_never_calls_provider() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new();
        let generator = Generator::new(settings(dir.path(), ProviderKind::Mock, false))
            .unwrap()
            .with_client(&provider);
        let request = GenerationRequest::new("green tea", ContentKind::Article);

        generator.generate_article(&request).unwrap();
        generator.generate_outline(&request).unwrap();
        assert_eq!(provider.call_count(), 0);
    }
}
