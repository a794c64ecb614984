use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Base legal-event categories, in declaration order.
///
/// Declaration order matters: the category scorer breaks ties in favour of
/// the variant declared first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Filing,
    Hearing,
    Judgment,
    Appeal,
    Settlement,
    Dismissal,
    Interim,
    Adjournment,
    #[default]
    Other,
}

impl EventCategory {
    /// The eight scored categories (everything except `Other`)
    pub const SCORED: [EventCategory; 8] = [
        EventCategory::Filing,
        EventCategory::Hearing,
        EventCategory::Judgment,
        EventCategory::Appeal,
        EventCategory::Settlement,
        EventCategory::Dismissal,
        EventCategory::Interim,
        EventCategory::Adjournment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventCategory::Filing => "filing",
            EventCategory::Hearing => "hearing",
            EventCategory::Judgment => "judgment",
            EventCategory::Appeal => "appeal",
            EventCategory::Settlement => "settlement",
            EventCategory::Dismissal => "dismissal",
            EventCategory::Interim => "interim",
            EventCategory::Adjournment => "adjournment",
            EventCategory::Other => "other",
        }
    }
}

/// One extracted, classified and summarized occurrence of a date.
///
/// JSON field names are part of the CLI contract and must not change.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String, // e.g. "2020-11-04_2"
    pub event_name: String,
    pub date: NaiveDate,
    pub event_type: String,
    pub context: String,
    pub summary: String,   // 2-4 sentences joined with '\n'
    pub line_number: usize, // 0 for loose-fallback matches
    #[serde(skip)]
    pub category: EventCategory,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Aggregate statistics over the final event list
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineSummary {
    pub total_events: usize,
    pub event_types: BTreeMap<String, usize>,
    pub date_range: DateRange,
    pub first_event: Option<Event>,
    pub last_event: Option<Event>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineResult {
    pub events: Vec<Event>,
    pub summary: TimelineSummary,
    pub success: bool,
}

impl TimelineResult {
    /// A successful result with no events and zeroed statistics
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            summary: TimelineSummary::default(),
            success: true,
        }
    }
}

/// Failure payload emitted by the CLI boundary instead of a `TimelineResult`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub events: Vec<Event>,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            events: Vec::new(),
            success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_event() -> Event {
        Event {
            id: "2020-11-04_1".to_string(),
            event_name: "Court Judgment".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 11, 4).unwrap(),
            event_type: "Court Judgment".to_string(),
            context: "Decided On: 04.11.2020".to_string(),
            summary: "The Court delivered a judgment.\nThis action was part of the ongoing legal proceedings in the case.".to_string(),
            line_number: 1,
            category: EventCategory::Judgment,
        }
    }

    #[test]
    fn test_event_json_field_names() {
        let json = serde_json::to_value(sample_event()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "context",
                "date",
                "eventName",
                "eventType",
                "id",
                "lineNumber",
                "summary"
            ]
        );
        assert_eq!(json["date"], "2020-11-04");
        assert_eq!(json["lineNumber"], 1);
    }

    #[test]
    fn test_category_is_not_serialized() {
        let json = serde_json::to_string(&sample_event()).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, EventCategory::Other);
        assert_eq!(parsed.id, "2020-11-04_1");
    }

    #[test]
    fn test_empty_result_has_null_range() {
        let json = serde_json::to_value(TimelineResult::empty()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["summary"]["total_events"], 0);
        assert!(json["summary"]["date_range"]["start"].is_null());
        assert!(json["summary"]["first_event"].is_null());
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Document not found")).unwrap();
        assert_eq!(json["error"], "Document not found");
        assert_eq!(json["events"].as_array().unwrap().len(), 0);
        assert_eq!(json["success"], false);
    }

    #[test]
    fn test_category_names_match_serde() {
        for category in EventCategory::SCORED {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.name());
        }
    }
}
