//! Template pools for placeholder content.
//!
//! Placeholders: `{topic}`, `{country}`, `{audience}`, `{india}`, `{word}`.
//! Pools are shuffled per document, so reordering entries changes output.

/// Generic article section headings
pub const ARTICLE_HEADINGS: &[&str] = &[
    "Key {word} features for {topic}",
    "How {word} affects day-to-day use",
    "Comparing {word} options in {country}",
    "Balancing {word} with budget",
    "Common mistakes with {word} and how to avoid them",
    "Choosing {word} for long-term value",
];

/// Generic outline section headings
pub const OUTLINE_HEADINGS: &[&str] = &[
    "Overview: {topic}",
    "Priorities for {word} and {audience}",
    "Budget and value factors in {country}",
    "Common mistakes to avoid",
    "How to compare options",
    "Long-term ownership and support",
];

pub const QUICK_ANSWERS: &[&str] = &[
    "Set a clear budget before comparing {topic} in {india}.",
    "Focus on comfort and {word} performance for {audience}.",
    "Prioritize reliable calls and day-to-day usability.",
    "Choose brands with proven service support in {india}.",
    "Shortlist 2-3 options and compare real-world reviews.",
];

pub const MAIN_POINTS: &[&str] = &[
    "Define a budget cap before comparing {topic} in {india}.",
    "Prioritize {word} comfort and fit for {audience}.",
    "Check battery life claims against real-world use.",
    "Compare mic clarity and call quality for daily use.",
    "Look for dependable warranty and service coverage in {india}.",
    "Avoid overpaying for features you won't use.",
    "Shortlist 2-3 options and compare value per feature.",
];

pub const CHECKLIST: &[&str] = &[
    "Budget fits your range and value expectations",
    "Comfortable fit for {audience} daily use",
    "Balanced performance for {topic}",
    "Warranty and service coverage in {india}",
    "Return or replacement policy you trust",
];

/// Talking points listed under outline headings
pub const OUTLINE_POINTS: &[&str] = &[
    "What {audience} should know about {word}",
    "Key trade-offs for {topic} in {india}",
    "Questions to ask before committing to {word}",
    "Real-world examples worth comparing",
    "Red flags and how to spot them",
    "Where {word} fits in your budget",
];

pub const TIPS: &[&str] = &[
    "If two options look similar, choose the one with better comfort and service support in India.",
    "Compare real reviews for call quality and durability before you decide.",
    "Prioritize everyday usability over flashy marketing specs.",
    "Keep your top two picks and check warranty terms in India.",
];

pub const FAQ_QUESTIONS: &[&str] = &[
    "What should I prioritize when choosing {topic} in {country}?",
    "How do I compare {topic} options fairly?",
    "Is it okay to choose the cheapest {topic} available?",
    "What features matter most for {audience}?",
    "How long should I expect {topic} to last?",
    "Are warranties important for {topic} in {country}?",
];

pub const FAQ_ANSWER: &str =
    "For {topic} in {country}, focus on the basics first: comfort, reliability, and value for your budget.";

/// Outline FAQ bullets, listed in this order without answers
pub const OUTLINE_QUESTIONS: &[&str] = &[
    "What should I look for when choosing {topic} in {country}?",
    "How do I compare {topic} options quickly?",
    "Which {topic} features matter most for {audience}?",
    "Is the cheapest {topic} a good idea?",
    "How long should {topic} typically last?",
];

/// Follow-on sentences for expanded outline notes
pub const ELABORATIONS: &[&str] = &[
    "Start with what {audience} actually need and work back to {word}.",
    "Compare at least two options side by side before settling on {word}.",
    "Check how this plays out for {topic} buyers in {india} specifically.",
    "Keep notes on price, support and {word} so the trade-offs stay visible.",
    "Revisit this point after reading a few long-term reviews.",
];
