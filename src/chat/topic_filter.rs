//! Topical gate for follow-up questions
//!
//! A question is on-topic when its lowercase form contains any keyword as a
//! substring. "dry" matches "laundry", and "How do I apply it?" matches
//! nothing; both are accepted behavior.

const BEAUTY_KEYWORDS: &[&str] = &[
    "skin",
    "skincare",
    "face",
    "routine",
    "product",
    "makeup",
    "hair",
    "haircare",
    "beauty",
    "cleanser",
    "moisturizer",
    "serum",
    "cream",
    "lotion",
    "shampoo",
    "conditioner",
    "treatment",
    "mask",
    "fragrance",
    "perfume",
    "sunscreen",
    "foundation",
    "lipstick",
    "eyeshadow",
    "mascara",
    "blush",
    "concealer",
    "acne",
    "wrinkles",
    "dry",
    "oily",
    "sensitive",
    "aging",
    "pores",
    "breakout",
    "glow",
    "hydration",
    "exfoliate",
    "cleanse",
    "tone",
    "protect",
    "nourish",
];

#[derive(Debug, Clone)]
pub struct TopicFilter {
    /// Lowercased, built-in keywords first
    keywords: Vec<String>,
}

impl Default for TopicFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicFilter {
    pub fn new() -> Self {
        Self {
            keywords: BEAUTY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Built-in vocabulary plus extra keywords (blank entries are skipped)
    pub fn with_extra_keywords<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::new();
        for keyword in extra {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !filter.keywords.contains(&keyword) {
                filter.keywords.push(keyword);
            }
        }
        filter
    }

    pub fn is_on_topic(&self, question: &str) -> bool {
        let lower = question.to_lowercase();
        self.keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
#[path = "topic_filter_tests.rs"]
mod topic_filter_tests;
