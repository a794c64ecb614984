//! Date pattern registry and normalizer
//!
//! Every supported surface form is compiled once into [`DATE_PATTERNS`] and
//! evaluated in registry order. A match only survives if it normalizes to a
//! real calendar date between 1900 and 2100.

use crate::calendar::LegalCalendar;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

const MONTHS_LONG: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";
const MONTHS_SHORT: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec";

/// Surface encodings recognized by the strict line scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKind {
    /// 2020-11-04
    Iso,
    /// 11/4/2020
    UsSlash,
    /// 11-4-2020
    UsDash,
    /// 4/11/2020
    EuSlash,
    /// 4-11-2020
    EuDash,
    /// 04.11.2020
    IndianDot,
    /// November 4, 2020
    WrittenLong,
    /// Nov. 4, 2020
    WrittenShort,
    /// 4 November 2020
    WrittenEu,
    /// 4th November 2020
    WrittenOrdinal,
}

/// Order in which the captured fields appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    YearMonthDay,
    MonthDayYear,
    DayMonthYear,
    MonthNameDayYear,
    DayMonthNameYear,
}

impl DateKind {
    /// Registry order; earlier kinds win when two kinds claim the same span
    pub const ALL: [DateKind; 10] = [
        DateKind::Iso,
        DateKind::UsSlash,
        DateKind::UsDash,
        DateKind::EuSlash,
        DateKind::EuDash,
        DateKind::IndianDot,
        DateKind::WrittenLong,
        DateKind::WrittenShort,
        DateKind::WrittenEu,
        DateKind::WrittenOrdinal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DateKind::Iso => "iso",
            DateKind::UsSlash => "us_slash",
            DateKind::UsDash => "us_dash",
            DateKind::EuSlash => "eu_slash",
            DateKind::EuDash => "eu_dash",
            DateKind::IndianDot => "indian_dot",
            DateKind::WrittenLong => "written_long",
            DateKind::WrittenShort => "written_short",
            DateKind::WrittenEu => "written_eu",
            DateKind::WrittenOrdinal => "written_ordinal",
        }
    }

    fn pattern(&self) -> String {
        match self {
            DateKind::Iso => r"\b(\d{4})-(\d{2})-(\d{2})\b".to_string(),
            DateKind::UsSlash => r"\b([01]?\d)/([0-3]?\d)/(\d{4})\b".to_string(),
            DateKind::UsDash => r"\b([01]?\d)-([0-3]?\d)-(\d{4})\b".to_string(),
            DateKind::EuSlash => r"\b([0-3]?\d)/([01]\d)/(\d{4})\b".to_string(),
            DateKind::EuDash => r"\b([0-3]?\d)-([01]\d)-(\d{4})\b".to_string(),
            DateKind::IndianDot => r"\b([0-3]?\d)\.([01]?\d)\.(\d{4})\b".to_string(),
            DateKind::WrittenLong => format!(r"\b({})\s+(\d{{1,2}}),?\s+(\d{{4}})\b", MONTHS_LONG),
            DateKind::WrittenShort => {
                format!(r"\b({})\.*\s+(\d{{1,2}}),?\s+(\d{{4}})\b", MONTHS_SHORT)
            }
            DateKind::WrittenEu => format!(
                r"\b(\d{{1,2}})\s+({}|{})\.*\s+(\d{{4}})\b",
                MONTHS_LONG, MONTHS_SHORT
            ),
            DateKind::WrittenOrdinal => format!(
                r"\b(\d{{1,2}})(?:st|nd|rd|th)\s+({}|{})\.*\s+(\d{{4}})\b",
                MONTHS_LONG, MONTHS_SHORT
            ),
        }
    }

    fn field_order(&self) -> FieldOrder {
        match self {
            DateKind::Iso => FieldOrder::YearMonthDay,
            DateKind::UsSlash | DateKind::UsDash => FieldOrder::MonthDayYear,
            DateKind::EuSlash | DateKind::EuDash | DateKind::IndianDot => FieldOrder::DayMonthYear,
            DateKind::WrittenLong | DateKind::WrittenShort => FieldOrder::MonthNameDayYear,
            DateKind::WrittenEu | DateKind::WrittenOrdinal => FieldOrder::DayMonthNameYear,
        }
    }

    /// Compiled pattern for this kind
    pub fn regex(&self) -> &'static Regex {
        &DATE_PATTERNS[*self as usize].1
    }
}

lazy_static! {
    /// Compiled strict patterns, indexed by `DateKind as usize`
    static ref DATE_PATTERNS: Vec<(DateKind, Regex)> = DateKind::ALL
        .iter()
        .map(|kind| (*kind, Regex::new(&format!("(?i){}", kind.pattern())).unwrap()))
        .collect();

    /// Broader patterns for the whole-document fallback pass
    static ref LOOSE_PATTERNS: Vec<(LooseShape, Regex)> = vec![
        (
            LooseShape::FullDate,
            Regex::new(&format!(r"(?i)(?:{})\s+\d{{1,2}},?\s+\d{{4}}", MONTHS_LONG)).unwrap(),
        ),
        (
            LooseShape::FullDate,
            Regex::new(&format!(r"(?i)(?:{})\.?\s+\d{{1,2}},?\s+\d{{4}}", MONTHS_SHORT)).unwrap(),
        ),
        (
            LooseShape::FullDate,
            Regex::new(&format!(
                r"(?i)\d{{1,2}}\s+(?:{}|{})\.?\s+\d{{4}}",
                MONTHS_LONG, MONTHS_SHORT
            ))
            .unwrap(),
        ),
        (
            LooseShape::FullDate,
            Regex::new(&format!(
                r"(?i)\d{{1,2}}(?:st|nd|rd|th)\s+(?:{}|{})\.?\s+\d{{4}}",
                MONTHS_LONG, MONTHS_SHORT
            ))
            .unwrap(),
        ),
        (LooseShape::FullDate, Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap()),
        (LooseShape::FullDate, Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{4}\b").unwrap()),
        (
            LooseShape::MonthYear,
            Regex::new(&format!(r"(?i)\b({})\s+(\d{{4}})\b", MONTHS_LONG)).unwrap(),
        ),
    ];

    static ref ORDINAL_SUFFIX: Regex = Regex::new(r"(?i)(\d{1,2})(?:st|nd|rd|th)\b").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LooseShape {
    FullDate,
    MonthYear,
}

/// A validated date match from the strict line scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub kind: DateKind,
    pub date: NaiveDate,
    pub text: String,
    pub start: usize, // byte offset in the line
    pub end: usize,
    pub line_number: usize, // 1-based
}

/// A validated date found by the loose fallback pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseMatch {
    pub date: NaiveDate,
    pub text: String,
    pub context: String,
}

fn parse_captures(kind: DateKind, caps: &Captures) -> Option<NaiveDate> {
    let field = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");
    match kind.field_order() {
        FieldOrder::YearMonthDay => LegalCalendar::from_fields(field(1), field(2), field(3)),
        FieldOrder::MonthDayYear => LegalCalendar::from_fields(field(3), field(1), field(2)),
        FieldOrder::DayMonthYear => LegalCalendar::from_fields(field(3), field(2), field(1)),
        FieldOrder::MonthNameDayYear => {
            let month = LegalCalendar::month_from_name(field(1))?;
            LegalCalendar::from_fields(field(3), &month.to_string(), field(2))
        }
        FieldOrder::DayMonthNameYear => {
            let month = LegalCalendar::month_from_name(field(2))?;
            LegalCalendar::from_fields(field(3), &month.to_string(), field(1))
        }
    }
}

/// Normalize a candidate string as the given kind.
///
/// Returns `None` when the kind does not match or the fields do not form a
/// valid date inside the accepted year window.
pub fn normalize(kind: DateKind, candidate: &str) -> Option<NaiveDate> {
    let caps = kind.regex().captures(candidate)?;
    parse_captures(kind, &caps)
}

/// Replace "15th" with "15" so ordinal dates parse as plain day numbers
pub fn strip_ordinals(text: &str) -> String {
    ORDINAL_SUFFIX.replace_all(text, "$1").into_owned()
}

/// Blank out every date-like substring, strict or loose
pub fn strip_dates(text: &str) -> String {
    let strict = DATE_PATTERNS.iter().map(|(_, re)| re);
    let loose = LOOSE_PATTERNS.iter().map(|(_, re)| re);
    strict.chain(loose).fold(text.to_string(), |acc, re| {
        re.replace_all(&acc, " ").into_owned()
    })
}

fn overlaps(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| start < e && s < end)
}

/// Byte range of `radius` characters either side of `[start, end)`
pub(crate) fn char_window(text: &str, start: usize, end: usize, radius: usize) -> (usize, usize) {
    let lo = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .take(radius)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(start)
    };
    let hi = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    (lo, hi)
}

/// Scans text for dates using the precompiled registry
#[derive(Debug, Clone, Copy)]
pub struct DateScanner {
    dedupe_spans: bool,
    month_year_dates: bool,
}

impl DateScanner {
    /// `dedupe_spans` controls whether a later kind may re-emit a span that an
    /// earlier kind already matched (e.g. `11/04/2020` as both US and EU).
    pub fn new(dedupe_spans: bool) -> Self {
        Self {
            dedupe_spans,
            month_year_dates: false,
        }
    }

    /// Let the loose pass accept month+year mentions, dated to the 1st.
    ///
    /// Off by default: "March 2021" names no day, so it fails validation.
    pub fn with_month_year_dates(mut self, enabled: bool) -> Self {
        self.month_year_dates = enabled;
        self
    }

    /// Find every valid date on one line
    pub fn scan_line(&self, line: &str, line_number: usize) -> Vec<RawMatch> {
        let mut matches = Vec::new();
        let mut claimed: Vec<(usize, usize)> = Vec::new();

        for (kind, regex) in DATE_PATTERNS.iter() {
            for caps in regex.captures_iter(line) {
                let whole = match caps.get(0) {
                    Some(m) => m,
                    None => continue,
                };
                let Some(date) = parse_captures(*kind, &caps) else {
                    tracing::trace!(kind = kind.name(), text = whole.as_str(), "dropped invalid date");
                    continue;
                };
                let span = (whole.start(), whole.end());
                if self.dedupe_spans && claimed.contains(&span) {
                    continue;
                }
                claimed.push(span);
                matches.push(RawMatch {
                    kind: *kind,
                    date,
                    text: whole.as_str().to_string(),
                    start: span.0,
                    end: span.1,
                    line_number,
                });
            }
        }

        matches
    }

    /// Whole-document fallback scan that ignores line structure.
    ///
    /// Each hit gets a `radius`-character snippet as its context. Month+year
    /// mentions resolve to the first day of the month and never override a
    /// fuller date covering the same text.
    pub fn scan_loose(&self, text: &str, radius: usize) -> Vec<LooseMatch> {
        let mut results: Vec<LooseMatch> = Vec::new();
        let mut accepted: Vec<(usize, usize)> = Vec::new();
        let mut seen: Vec<(NaiveDate, String)> = Vec::new();

        for (shape, regex) in LOOSE_PATTERNS.iter() {
            for m in regex.find_iter(text) {
                let candidate = m.as_str();
                let date = match shape {
                    LooseShape::FullDate => Self::normalize_any(candidate),
                    LooseShape::MonthYear if self.month_year_dates => {
                        Self::normalize_month_year(candidate)
                    }
                    LooseShape::MonthYear => {
                        tracing::trace!(text = candidate, "dropped month+year without day");
                        None
                    }
                };
                let Some(date) = date else {
                    continue;
                };

                let suppress = match shape {
                    LooseShape::MonthYear => true,
                    LooseShape::FullDate => self.dedupe_spans,
                };
                if suppress && overlaps(&accepted, m.start(), m.end()) {
                    continue;
                }

                let (lo, hi) = char_window(text, m.start(), m.end(), radius);
                let context = text[lo..hi].split_whitespace().collect::<Vec<_>>().join(" ");
                let key: String = context.chars().take(120).collect();
                if seen.iter().any(|(d, k)| *d == date && *k == key) {
                    continue;
                }
                seen.push((date, key));
                accepted.push((m.start(), m.end()));
                results.push(LooseMatch {
                    date,
                    text: candidate.to_string(),
                    context,
                });
            }
        }

        results
    }

    /// Try every strict kind in registry order, first as written and then
    /// with ordinal suffixes removed
    fn normalize_any(candidate: &str) -> Option<NaiveDate> {
        let stripped = strip_ordinals(candidate);
        DateKind::ALL.iter().find_map(|kind| {
            normalize(*kind, candidate).or_else(|| normalize(*kind, &stripped))
        })
    }

    fn normalize_month_year(candidate: &str) -> Option<NaiveDate> {
        let mut parts = candidate.split_whitespace();
        let month = LegalCalendar::month_from_name(parts.next()?)?;
        let year = parts.next()?.parse::<i32>().ok()?;
        LegalCalendar::make_date(year, month, 1)
    }
}

impl Default for DateScanner {
    fn default() -> Self {
        Self::new(true)
    }
}
