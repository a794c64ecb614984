//! Timeline assembly: ordering, per-date numbering and aggregate statistics

use crate::rules::classify::Classifier;
use crate::rules::noise::is_filler_context;
use crate::summary::SummaryTemplater;
use chrono::NaiveDate;
use shared_types::{DateRange, Event, TimelineResult, TimelineSummary};
use std::collections::BTreeMap;

/// A dated context window waiting to become an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub date: NaiveDate,
    pub context: String,
    pub line_number: usize, // 0 for loose-fallback matches
}

impl Candidate {
    pub fn new(date: NaiveDate, context: impl Into<String>, line_number: usize) -> Self {
        Self {
            date,
            context: context.into(),
            line_number,
        }
    }
}

/// Turn candidates into the final ordered, numbered and summarized timeline.
///
/// Filler contexts are dropped, the rest are stably sorted by
/// `(date, line_number)` and numbered from 1 within each date.
pub fn assemble(
    candidates: Vec<Candidate>,
    classifier: &Classifier,
    templater: &SummaryTemplater,
) -> TimelineResult {
    let mut kept: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| {
            let filler = is_filler_context(&c.context);
            if filler {
                tracing::debug!(date = %c.date, line = c.line_number, "dropped filler context");
            }
            !filler
        })
        .collect();
    kept.sort_by_key(|c| (c.date, c.line_number));

    let mut events = Vec::with_capacity(kept.len());
    let mut current: Option<NaiveDate> = None;
    let mut ordinal = 0usize;

    for candidate in kept {
        if current != Some(candidate.date) {
            current = Some(candidate.date);
            ordinal = 0;
        }
        ordinal += 1;
        events.push(build_event(candidate, ordinal, classifier, templater));
    }

    TimelineResult {
        summary: summarize_events(&events),
        events,
        success: true,
    }
}

fn build_event(
    candidate: Candidate,
    ordinal: usize,
    classifier: &Classifier,
    templater: &SummaryTemplater,
) -> Event {
    let classification = classifier.classify(&candidate.context);
    let summary = templater.summarize(candidate.date, &candidate.context, &classification);
    let event_name = if ordinal > 1 {
        format!("{} ({})", classification.event_type, ordinal)
    } else {
        classification.event_type.clone()
    };

    Event {
        id: format!("{}_{}", candidate.date.format("%Y-%m-%d"), ordinal),
        event_name,
        date: candidate.date,
        event_type: classification.event_type,
        context: candidate.context,
        summary,
        line_number: candidate.line_number,
        category: classification.category,
    }
}

/// Aggregate statistics over an already ordered event list
pub fn summarize_events(events: &[Event]) -> TimelineSummary {
    let mut event_types: BTreeMap<String, usize> = BTreeMap::new();
    for event in events {
        *event_types.entry(event.event_type.clone()).or_insert(0) += 1;
    }

    let first_event = events.first().cloned();
    let last_event = events.last().cloned();

    TimelineSummary {
        total_events: events.len(),
        event_types,
        date_range: DateRange {
            start: first_event.as_ref().map(|e| e.date),
            end: last_event.as_ref().map(|e| e.date),
        },
        first_event,
        last_event,
    }
}
