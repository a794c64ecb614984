//! Keyword tables and term-matching helpers for legal-event detection
//!
//! The tables here are the built-in defaults. `EngineConfig` can append to
//! the category keywords and prepend extra type rules at runtime.

use shared_types::EventCategory;

/// Filing keywords
pub const FILING_KEYWORDS: &[&str] = &[
    "appeal was filed",
    "petition filed",
    "complaint filed",
    "application filed",
    "suit filed",
    "case filed",
    "filed on",
    "filing",
    "submitted",
    "lodged",
    "registered",
    "date of filing",
    "filing date",
    "instituted",
    "commenced",
    "initiated",
    "presented",
    "preferred",
    "petition instituted",
    "case instituted",
];

/// Hearing keywords
pub const HEARING_KEYWORDS: &[&str] = &[
    "matter was heard",
    "case heard",
    "heard on",
    "hearing",
    "trial",
    "oral argument",
    "hearing date",
    "trial date",
    "scheduled",
    "appearing before",
    "date of hearing",
    "court hearing",
    "proceedings",
    "before the court",
    "listed",
    "matter listed",
    "court proceedings",
    "arguments heard",
    "submissions heard",
];

/// Judgment keywords
pub const JUDGMENT_KEYWORDS: &[&str] = &[
    "judgment delivered",
    "judgment was delivered",
    "final judgment",
    "decided on",
    "judgment",
    "verdict",
    "decision",
    "order",
    "decreed",
    "decided",
    "pronounced",
    "rendered",
    "delivered",
    "date of judgment",
    "judgment pronounced",
    "final order",
    "disposed",
    "disposed of",
    "final disposal",
    "court ordered",
    "court directed",
    "directions issued",
    "judgment passed",
    "order passed",
];

/// Appeal keywords
pub const APPEAL_KEYWORDS: &[&str] = &[
    "appeal",
    "appellate",
    "appealed",
    "appeal filed",
    "appeal period",
    "date of appeal",
    "revision",
    "review",
    "writ petition",
    "special leave petition",
    "slp filed",
    "review petition",
    "appellate proceedings",
    "second appeal",
    "regular appeal",
    "criminal appeal",
    "civil appeal",
    "letters patent appeal",
    "lpa filed",
];

/// Settlement keywords
pub const SETTLEMENT_KEYWORDS: &[&str] = &[
    "settlement",
    "settled",
    "compromise",
    "agreed",
    "agreement date",
    "settlement date",
    "mutual agreement",
    "resolved",
    "amicably settled",
    "mediation",
    "conciliation",
    "parties settled",
    "matter settled",
    "settlement deed",
    "compromise deed",
    "terms of settlement",
    "mutual consent",
];

/// Dismissal keywords
pub const DISMISSAL_KEYWORDS: &[&str] = &[
    "dismissed",
    "dismissal",
    "withdrawn",
    "withdrawn case",
    "struck off",
    "quashed",
    "canceled",
    "cancellation",
    "petition dismissed",
    "suit dismissed",
    "case dismissed",
    "appeal dismissed",
    "review dismissed",
    "revision dismissed",
    "disposed as withdrawn",
    "withdrawn by petitioner",
];

/// Interim relief keywords
pub const INTERIM_KEYWORDS: &[&str] = &[
    "interim order",
    "stay",
    "injunction",
    "restraining order",
    "temporary",
    "preliminary",
    "interlocutory",
    "interim relief",
    "ad-interim",
    "interim stay",
    "interim protection",
    "temporary injunction",
    "status quo",
    "ex-parte",
    "interim arrangement",
    "interim measures",
    "interim directions",
];

/// Adjournment keywords
pub const ADJOURNMENT_KEYWORDS: &[&str] = &[
    "adjourned",
    "postponed",
    "deferred",
    "adjournment date",
    "next date",
    "date of adjournment",
    "matter adjourned",
    "hearing adjourned",
    "stands over",
    "next hearing",
    "further hearing",
    "listed for",
    "to come up on",
    "put up on",
    "posted to",
];

/// Default keyword table for a scored category
pub fn category_keywords(category: EventCategory) -> &'static [&'static str] {
    match category {
        EventCategory::Filing => FILING_KEYWORDS,
        EventCategory::Hearing => HEARING_KEYWORDS,
        EventCategory::Judgment => JUDGMENT_KEYWORDS,
        EventCategory::Appeal => APPEAL_KEYWORDS,
        EventCategory::Settlement => SETTLEMENT_KEYWORDS,
        EventCategory::Dismissal => DISMISSAL_KEYWORDS,
        EventCategory::Interim => INTERIM_KEYWORDS,
        EventCategory::Adjournment => ADJOURNMENT_KEYWORDS,
        EventCategory::Other => &[],
    }
}

const SUPREME_COURT: &[&str] = &["supreme court", "sc"];
const HIGH_COURT: &[&str] = &["high court", "hc"];
const AMENDMENT: &[&str] = &["amendment", "amended", "inserted", "w.e.f", "with effect"];

/// Built-in event-type cascade, evaluated top to bottom.
///
/// Each rule is `(event_type, groups)`; it fires when every group has at
/// least one term present in the context.
pub const DEFAULT_TYPE_RULES: &[(&str, &[&[&str]])] = &[
    (
        "Supreme Court Judgment",
        &[SUPREME_COURT, &["judgment", "decided", "order", "affirmed"]],
    ),
    ("Supreme Court Order", &[SUPREME_COURT]),
    (
        "High Court Judgment",
        &[HIGH_COURT, &["judgment", "decided", "order", "affirmed", "dismissed"]],
    ),
    ("High Court Order", &[HIGH_COURT]),
    (
        "Family Court Order",
        &[&["family court"], &["order", "awarded", "directed", "maintenance"]],
    ),
    (
        "District Court Order",
        &[
            &["district court", "sessions court"],
            &["order", "judgment", "decided", "decree", "awarded", "directed"],
        ],
    ),
    (
        "Tribunal Order",
        &[&["tribunal"], &["order", "award", "directed", "decided", "judgment"]],
    ),
    (
        "Magistrate Order",
        &[&["magistrate"], &["order", "directed", "awarded", "decided"]],
    ),
    ("Interim Maintenance Order", &[&["maintenance"], &["interim"]]),
    ("Maintenance Order", &[&["maintenance"]]),
    ("Legislative Amendment", &[AMENDMENT, &["section"]]),
    ("Statutory Amendment", &[AMENDMENT]),
    ("Criminal Appeal", &[&["criminal appeal"]]),
    ("Civil Appeal", &[&["civil appeal"]]),
    ("Appeal Filing", &[&["appeal", "appealed", "appellate"]]),
    (
        "Writ Petition",
        &[&["writ petition", "special leave petition", "slp"]],
    ),
    ("Revision Petition", &[&["revision", "crl. rev"]]),
    ("Court Judgment", &[&["judgment", "decided", "pronounced"]]),
    (
        "Court Order",
        &[&["order dated", "ordered", "directed", "awarded"]],
    ),
    (
        "Filing",
        &[&["filed", "application filed", "petition filed"]],
    ),
    ("Payment/Arrears", &[&["arrears", "payment"]]),
    ("Compliance Filing", &[&["compliance", "affidavit"]]),
    ("Hearing", &[&["hearing", "heard", "trial"]]),
    ("Settlement", &[&["settlement", "settled", "mediation"]]),
    ("Case Dismissal", &[&["dismissed", "withdrawn", "quashed"]]),
    ("Interim Order", &[&["interim"]]),
    ("Statutory Reference", &[&["section"]]),
    ("Court Proceeding", &[&["court"]]),
];

/// Type assigned when no rule in the cascade fires
pub const FALLBACK_EVENT_TYPE: &str = "Legal Event";

/// Courts and authorities in priority order, with the label used in summaries
pub const AUTHORITY_PHRASES: &[(&str, &str)] = &[
    ("supreme court", "the Supreme Court"),
    ("high court", "the High Court"),
    ("district court", "the District Court"),
    ("family court", "the Family Court"),
    ("sessions court", "the Sessions Court"),
    ("magistrate", "the Magistrate"),
    ("tribunal", "the Tribunal"),
    ("this court", "the Court"),
    ("court", "the Court"),
];

/// Words that carry no event information on their own
pub const BOILERPLATE_WORDS: &[&str] = &[
    "page",
    "of",
    "www",
    "com",
    "in",
    "org",
    "library",
    "copyright",
    "all",
    "rights",
    "reserved",
    "citation",
    "citations",
    "reference",
    "references",
    "annexure",
    "appendix",
    "http",
    "https",
    "manu",
    "manupatra",
    "printed",
    "for",
    "the",
    "by",
    "source",
];

/// Check whether `term` occurs in already-lowercased `text`.
///
/// Short alphanumeric terms ("sc", "hc", "slp") must stand alone as words;
/// longer terms match anywhere, so "order" also hits "ordered".
pub fn contains_term(text_lower: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return false;
    }
    let whole_word = term.len() <= 3 && term.chars().all(|c| c.is_ascii_alphanumeric());
    if !whole_word {
        return text_lower.contains(term);
    }

    text_lower.match_indices(term).any(|(start, _)| {
        let before = text_lower[..start].chars().next_back();
        let after = text_lower[start + term.len()..].chars().next();
        !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
    })
}

/// Check whether any of `terms` occurs in already-lowercased `text`
pub fn contains_any<S: AsRef<str>>(text_lower: &str, terms: &[S]) -> bool {
    terms.iter().any(|t| contains_term(text_lower, t.as_ref()))
}

/// Find the summary label of the first authority mentioned, by priority
pub fn find_authority(text_lower: &str) -> Option<&'static str> {
    AUTHORITY_PHRASES
        .iter()
        .find(|(phrase, _)| text_lower.contains(phrase))
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_terms_need_word_boundaries() {
        assert!(contains_term("manu/sc/0833/2020", "sc"));
        assert!(contains_term("the sc held", "sc"));
        assert!(!contains_term("the matter was discussed", "sc"));
        assert!(!contains_term("scheduled for hearing", "sc"));
        assert!(contains_term("slp (crl.) no. 9503", "slp"));
    }

    #[test]
    fn test_long_terms_match_substrings() {
        assert!(contains_term("the court ordered payment", "order"));
        assert!(contains_term("appeal filed on", "appeal"));
        assert!(!contains_term("appellants: rajnesh", "appeal"));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("interim maintenance", &["stay", "interim"]));
        assert!(!contains_any("final order", &["stay", "interim"]));
        assert!(!contains_any("anything", &[""]));
    }

    #[test]
    fn test_authority_priority() {
        assert_eq!(
            find_authority("the high court and the supreme court"),
            Some("the Supreme Court")
        );
        assert_eq!(find_authority("before this court"), Some("the Court"));
        assert_eq!(find_authority("ld. magistrate directed"), Some("the Magistrate"));
        assert_eq!(find_authority("no authority here"), None);
    }

    #[test]
    fn test_every_category_has_keywords() {
        for category in EventCategory::SCORED {
            assert!(!category_keywords(category).is_empty(), "{:?}", category);
        }
        assert!(category_keywords(EventCategory::Other).is_empty());
    }

    #[test]
    fn test_cascade_ends_with_generic_rules() {
        let names: Vec<_> = DEFAULT_TYPE_RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.first(), Some(&"Supreme Court Judgment"));
        assert_eq!(names.last(), Some(&"Court Proceeding"));
        assert!(DEFAULT_TYPE_RULES.iter().all(|(_, groups)| !groups.is_empty()));
    }
}
