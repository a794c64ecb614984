//! Deterministic legal-event timeline extraction
//!
//! Scans document text for dates in many calendar formats, drops document
//! noise, classifies each date's surrounding text into a legal event and
//! writes a short summary for it without any generative model. The same input
//! text always yields the same events, order and IDs.

pub mod calendar;
pub mod config;
pub mod context;
pub mod error;
pub mod extractors;
pub mod patterns;
pub mod rules;
pub mod summary;
pub mod timeline;

pub use config::EngineConfig;
pub use error::EngineError;
pub use timeline::Candidate;

use chrono::NaiveDate;
use context::ContextBuilder;
use extractors::dates::DateScanner;
use rules::classify::Classifier;
use rules::noise::{is_noise_line, looks_like_header};
use shared_types::{join_pages, Page, TimelineResult};
use std::collections::HashSet;
use summary::SummaryTemplater;

/// TimelineEngine entry point
///
/// Holds only read-only tables, so one engine can serve many documents,
/// including from several threads at once.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    config: EngineConfig,
    scanner: DateScanner,
    context: ContextBuilder,
    classifier: Classifier,
    templater: SummaryTemplater,
}

impl TimelineEngine {
    pub fn new(config: EngineConfig) -> Self {
        let scan = &config.scan;
        Self {
            scanner: DateScanner::new(scan.dedupe_spans)
                .with_month_year_dates(scan.month_year_dates),
            context: ContextBuilder::new(scan.context_window, scan.max_context_chars),
            classifier: Classifier::new(&config),
            templater: SummaryTemplater::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract the full timeline from one document string
    pub fn analyze(&self, text: &str) -> TimelineResult {
        let candidates = self.extract_candidates(text);
        let found = candidates.len();
        let result = timeline::assemble(candidates, &self.classifier, &self.templater);
        tracing::info!(
            candidates = found,
            events = result.summary.total_events,
            "timeline extracted"
        );
        result
    }

    /// Extract the timeline from loader pages, joined with page-break markers
    pub fn analyze_pages(&self, pages: &[Page]) -> TimelineResult {
        self.analyze(&join_pages(pages))
    }

    /// Dated context windows found in `text`, before classification.
    ///
    /// Runs the strict line scan first; the loose whole-text scan only runs
    /// when the strict scan finds nothing.
    pub fn extract_candidates(&self, text: &str) -> Vec<Candidate> {
        let lines: Vec<&str> = text.lines().collect();
        let mut seen: HashSet<(NaiveDate, String)> = HashSet::new();
        let mut candidates = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let line_number = i + 1;
            if is_noise_line(line) {
                tracing::debug!(line = line_number, "skipped noise line");
                continue;
            }
            for found in self.scanner.scan_line(line, line_number) {
                let context = self.context.expand(&lines, line_number);
                if seen.insert((found.date, context.clone())) {
                    candidates.push(Candidate::new(found.date, context, line_number));
                } else {
                    tracing::debug!(date = %found.date, line = line_number, "dropped duplicate date");
                }
            }
        }

        if candidates.is_empty() {
            let loose = self
                .scanner
                .scan_loose(text, self.config.scan.loose_snippet_radius);
            tracing::debug!(matches = loose.len(), "strict scan empty, used loose scan");
            for found in loose {
                // Loose snippets ignore line structure, so recheck them for noise
                if is_noise_line(&found.context) || looks_like_header(&found.context) {
                    tracing::debug!(date = %found.date, "skipped noisy loose snippet");
                    continue;
                }
                if seen.insert((found.date, found.context.clone())) {
                    candidates.push(Candidate::new(found.date, found.context, 0));
                }
            }
        }

        candidates
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::EventCategory;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decided_on_scenario() {
        let engine = TimelineEngine::default();
        let text = "Decided On: 04.11.2020\nAppellants: Rajnesh\nVs.\nRespondent: Neha";
        let result = engine.analyze(text);

        assert_eq!(result.events.len(), 1);
        let event = &result.events[0];
        assert_eq!(event.id, "2020-11-04_1");
        assert_eq!(event.date, ymd(2020, 11, 4));
        assert_eq!(event.line_number, 1);
        assert_eq!(event.event_type, "Court Judgment");
        assert_eq!(event.category, EventCategory::Judgment);
        assert!(!event.summary.contains("04.11.2020"));
    }

    #[test]
    fn test_same_date_on_two_lines() {
        let engine = TimelineEngine::default();
        let text = "Hearing held on 2021-03-01.\n\n\n\n\n\n\n\n\n\n\nOrder dated 2021-03-01 was passed.";
        let result = engine.analyze(text);

        let ids: Vec<&str> = result.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2021-03-01_1", "2021-03-01_2"]);
        assert!(result.events[1].event_name.ends_with(" (2)"));
        assert!(result.events[0].line_number < result.events[1].line_number);
    }

    #[test]
    fn test_noise_lines_are_skipped() {
        let engine = TimelineEngine::default();
        let text = "MANU/SC/0833/2020 04.11.2020\nPage 1 of 20 12.01.2021";
        assert!(engine.extract_candidates(text).is_empty());
    }

    #[test]
    fn test_loose_fallback_uses_line_zero() {
        let engine = TimelineEngine::default();
        let text = "The order of 15 January\n2024 was challenged before the High Court.";
        let candidates = engine.extract_candidates(text);
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.line_number == 0));
        assert!(candidates.iter().any(|c| c.date == ymd(2024, 1, 15)));
    }

    #[test]
    fn test_loose_snippets_in_noise_are_skipped() {
        let engine = TimelineEngine::default();
        for text in [
            "Page 4 of 20 04/11/2020 www.example.com",
            "Page 1 of 5 www.manupatra.com 12 March 2021",
            "MANU/SC/0833/2020 Page 2 of 9 2020-11-04",
        ] {
            assert!(engine.extract_candidates(text).is_empty(), "{}", text);
            assert!(engine.analyze(text).events.is_empty(), "{}", text);
        }
    }

    #[test]
    fn test_bare_date_lines_become_events() {
        let result = TimelineEngine::default().analyze("12.01.2021\n15.03.2021");
        let ids: Vec<&str> = result.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2021-01-12_1", "2021-03-15_1"]);
        assert!(result.events.iter().all(|e| e.event_type == "Legal Event"));
    }

    #[test]
    fn test_month_year_without_day_is_not_an_event() {
        let text = "The rent was revised in March 2021 by\nmutual consent";
        assert!(TimelineEngine::default().analyze(text).events.is_empty());

        let mut config = EngineConfig::default();
        config.scan.month_year_dates = true;
        let dates: Vec<NaiveDate> = TimelineEngine::new(config)
            .analyze(text)
            .events
            .iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, vec![ymd(2021, 3, 1)]);
    }

    #[test]
    fn test_shared_span_reads_once() {
        let engine = TimelineEngine::default();
        // Both kinds parse 11/04/2020 differently, but the span is claimed once
        let result = engine.analyze("Order dated 11/04/2020 was passed by the court.");
        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].date, ymd(2020, 11, 4));
    }

    #[test]
    fn test_analyze_pages_joins_with_markers() {
        let engine = TimelineEngine::default();
        let pages = vec![
            Page::new(0, "The petition was filed on 2019-02-01."),
            Page::new(1, "The matter was heard on 2019-06-10."),
        ];
        let result = engine.analyze_pages(&pages);
        assert_eq!(result.summary.total_events, 2);
        assert_eq!(result.summary.date_range.start, Some(ymd(2019, 2, 1)));
        assert_eq!(result.summary.date_range.end, Some(ymd(2019, 6, 10)));
    }

    #[test]
    fn test_empty_document() {
        let result = TimelineEngine::default().analyze("");
        assert_eq!(result, TimelineResult::empty());
    }
}
