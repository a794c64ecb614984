//! Engine configuration loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! built-in behaviour. Example:
//!
//! ```toml
//! [scan]
//! dedupe_spans = true
//! context_window = 4
//!
//! [keywords]
//! hearing = ["cause list"]
//!
//! [[type_rules]]
//! event_type = "Consumer Forum Order"
//! all_of = [["consumer forum"], ["order", "directed"]]
//! ```

use crate::context::{DEFAULT_MAX_CHARS, DEFAULT_WINDOW};
use crate::error::{EngineError, Result};
use crate::rules::classify::TypeRule;
use serde::{Deserialize, Serialize};
use shared_types::EventCategory;
use std::fs;
use std::path::Path;

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scanner and context window settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Extra keyword phrases appended to the built-in category tables
    #[serde(default)]
    pub keywords: KeywordConfig,
    /// Custom type rules evaluated before the built-in cascade
    #[serde(default)]
    pub type_rules: Vec<TypeRule>,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_context_chars == 0 {
            return Err(EngineError::InvalidConfig(
                "scan.max_context_chars must be greater than zero".to_string(),
            ));
        }
        if self.scan.loose_snippet_radius == 0 {
            return Err(EngineError::InvalidConfig(
                "scan.loose_snippet_radius must be greater than zero".to_string(),
            ));
        }

        for category in EventCategory::SCORED {
            if self
                .keywords
                .extra(category)
                .iter()
                .any(|phrase| phrase.trim().is_empty())
            {
                return Err(EngineError::InvalidConfig(format!(
                    "keywords.{} contains an empty phrase",
                    category.name()
                )));
            }
        }

        for (i, rule) in self.type_rules.iter().enumerate() {
            if rule.event_type.trim().is_empty() {
                return Err(EngineError::InvalidConfig(format!(
                    "type_rules[{}] has an empty event_type",
                    i
                )));
            }
            if rule.all_of.is_empty() {
                return Err(EngineError::InvalidConfig(format!(
                    "type_rules[{}] ({}) needs at least one term group",
                    i, rule.event_type
                )));
            }
            let has_blank_group = rule
                .all_of
                .iter()
                .any(|group| group.iter().all(|term| term.trim().is_empty()));
            if has_blank_group {
                return Err(EngineError::InvalidConfig(format!(
                    "type_rules[{}] ({}) has a term group without terms",
                    i, rule.event_type
                )));
            }
        }

        Ok(())
    }
}

/// Scanner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Emit a span once, for the first registry kind that parses it (default: true)
    #[serde(default = "default_dedupe_spans")]
    pub dedupe_spans: bool,
    /// Lines taken on each side of a matched line (default: 4)
    #[serde(default = "default_context_window")]
    pub context_window: usize,
    /// Maximum context window length in characters (default: 1000)
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,
    /// Characters kept on each side of a loose-scan match (default: 60)
    #[serde(default = "default_loose_snippet_radius")]
    pub loose_snippet_radius: usize,
    /// Date loose "Month YYYY" mentions to the 1st of the month (default: false)
    #[serde(default)]
    pub month_year_dates: bool,
}

fn default_dedupe_spans() -> bool {
    true
}

fn default_context_window() -> usize {
    DEFAULT_WINDOW
}

fn default_max_context_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_loose_snippet_radius() -> usize {
    60
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dedupe_spans: default_dedupe_spans(),
            context_window: default_context_window(),
            max_context_chars: default_max_context_chars(),
            loose_snippet_radius: default_loose_snippet_radius(),
            month_year_dates: false,
        }
    }
}

/// Extra keyword phrases per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub filing: Vec<String>,
    #[serde(default)]
    pub hearing: Vec<String>,
    #[serde(default)]
    pub judgment: Vec<String>,
    #[serde(default)]
    pub appeal: Vec<String>,
    #[serde(default)]
    pub settlement: Vec<String>,
    #[serde(default)]
    pub dismissal: Vec<String>,
    #[serde(default)]
    pub interim: Vec<String>,
    #[serde(default)]
    pub adjournment: Vec<String>,
}

impl KeywordConfig {
    /// Extra phrases configured for `category`
    pub fn extra(&self, category: EventCategory) -> &[String] {
        match category {
            EventCategory::Filing => &self.filing,
            EventCategory::Hearing => &self.hearing,
            EventCategory::Judgment => &self.judgment,
            EventCategory::Appeal => &self.appeal,
            EventCategory::Settlement => &self.settlement,
            EventCategory::Dismissal => &self.dismissal,
            EventCategory::Interim => &self.interim,
            EventCategory::Adjournment => &self.adjournment,
            EventCategory::Other => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.scan.dedupe_spans);
        assert_eq!(config.scan.context_window, 4);
        assert_eq!(config.scan.max_context_chars, 1000);
        assert_eq!(config.scan.loose_snippet_radius, 60);
        assert!(!config.scan.month_year_dates);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [scan]
            dedupe_spans = false
            context_window = 2
            month_year_dates = true

            [keywords]
            hearing = ["cause list"]

            [[type_rules]]
            event_type = "Consumer Forum Order"
            all_of = [["consumer forum"], ["order", "directed"]]
        "#;
        let config = EngineConfig::from_str(toml).unwrap();
        assert!(!config.scan.dedupe_spans);
        assert_eq!(config.scan.context_window, 2);
        assert!(config.scan.month_year_dates);
        assert_eq!(config.scan.max_context_chars, 1000);
        assert_eq!(config.keywords.extra(EventCategory::Hearing), ["cause list"]);
        assert!(config.keywords.extra(EventCategory::Filing).is_empty());
        assert_eq!(config.type_rules.len(), 1);
        assert_eq!(config.type_rules[0].all_of[1], vec!["order", "directed"]);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = EngineConfig::default();
        config.keywords.appeal.push("leave to appeal".to_string());
        config.type_rules.push(TypeRule::new(
            "Arbitral Award",
            &[&["arbitral", "arbitrator"], &["award"]],
        ));
        let text = toml::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let cases = [
            "[scan]\nmax_context_chars = 0",
            "[scan]\nloose_snippet_radius = 0",
            "[keywords]\nfiling = [\"  \"]",
            "[[type_rules]]\nevent_type = \"\"\nall_of = [[\"x\"]]",
            "[[type_rules]]\nevent_type = \"X\"\nall_of = []",
            "[[type_rules]]\nevent_type = \"X\"\nall_of = [[\"\"]]",
        ];
        for case in cases {
            assert!(
                matches!(EngineConfig::from_str(case), Err(EngineError::InvalidConfig(_))),
                "{}",
                case
            );
        }
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            EngineConfig::from_str("[scan\n"),
            Err(EngineError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\ncontext_window = 1").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scan.context_window, 1);

        let missing = EngineConfig::from_file("/nonexistent/timeline.toml");
        assert!(matches!(missing, Err(EngineError::ConfigRead { .. })));
    }
}
