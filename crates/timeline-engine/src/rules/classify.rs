// Event classification: base category scoring and specific type refinement
use crate::config::EngineConfig;
use crate::patterns::{
    category_keywords, contains_any, contains_term, DEFAULT_TYPE_RULES, FALLBACK_EVENT_TYPE,
};
use crate::rules::noise::looks_like_header;
use serde::{Deserialize, Serialize};
use shared_types::EventCategory;

/// One step of the event-type cascade.
///
/// Fires when every group in `all_of` has at least one term present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRule {
    pub event_type: String,
    pub all_of: Vec<Vec<String>>,
}

impl TypeRule {
    pub fn new(event_type: &str, all_of: &[&[&str]]) -> Self {
        Self {
            event_type: event_type.to_string(),
            all_of: all_of
                .iter()
                .map(|group| group.iter().map(|term| term.to_lowercase()).collect())
                .collect(),
        }
    }

    /// Check the rule against already-lowercased text
    pub fn matches(&self, text_lower: &str) -> bool {
        !self.all_of.is_empty() && self.all_of.iter().all(|group| contains_any(text_lower, group))
    }
}

/// Result of classifying one context window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: EventCategory,
    pub event_type: String,
}

impl Classification {
    fn fallback() -> Self {
        Self {
            category: EventCategory::Other,
            event_type: FALLBACK_EVENT_TYPE.to_string(),
        }
    }
}

/// Keyword-driven event classifier.
///
/// Holds read-only tables built once from the defaults plus configuration.
#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: Vec<(EventCategory, Vec<String>)>,
    rules: Vec<TypeRule>,
}

impl Classifier {
    pub fn new(config: &EngineConfig) -> Self {
        let keywords = EventCategory::SCORED
            .iter()
            .map(|&category| {
                let phrases = category_keywords(category)
                    .iter()
                    .map(|kw| kw.to_string())
                    .chain(
                        config
                            .keywords
                            .extra(category)
                            .iter()
                            .map(|kw| kw.trim().to_lowercase()),
                    )
                    .collect();
                (category, phrases)
            })
            .collect();

        let rules = config
            .type_rules
            .iter()
            .map(|rule| TypeRule {
                event_type: rule.event_type.trim().to_string(),
                all_of: rule
                    .all_of
                    .iter()
                    .map(|group| group.iter().map(|t| t.trim().to_lowercase()).collect())
                    .collect(),
            })
            .chain(
                DEFAULT_TYPE_RULES
                    .iter()
                    .map(|(event_type, groups)| TypeRule::new(event_type, groups)),
            )
            .collect();

        Self { keywords, rules }
    }

    /// Classify a context window into a base category and a specific event type
    pub fn classify(&self, context: &str) -> Classification {
        if looks_like_header(context) {
            tracing::debug!("header-only context, using fallback type");
            return Classification::fallback();
        }

        let text_lower = context.to_lowercase();
        Classification {
            category: self.score_category(&text_lower),
            event_type: self.refine_type(&text_lower),
        }
    }

    /// Highest-scoring category; ties go to the first declared, no hits to `Other`.
    ///
    /// Each matched phrase scores its word count, so "final judgment" outweighs "order".
    pub fn score_category(&self, text_lower: &str) -> EventCategory {
        let mut best = (EventCategory::Other, 0usize);
        for (category, phrases) in &self.keywords {
            let score: usize = phrases
                .iter()
                .filter(|phrase| contains_term(text_lower, phrase))
                .map(|phrase| phrase.split_whitespace().count())
                .sum();
            if score > best.1 {
                best = (*category, score);
            }
        }
        best.0
    }

    /// First type rule in the cascade that fires
    pub fn refine_type(&self, text_lower: &str) -> String {
        self.rules
            .iter()
            .find(|rule| rule.matches(text_lower))
            .map(|rule| rule.event_type.clone())
            .unwrap_or_else(|| FALLBACK_EVENT_TYPE.to_string())
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
