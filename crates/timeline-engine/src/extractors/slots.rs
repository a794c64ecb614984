// Slot extraction for event summaries: amounts, parties, statutes and actions
use crate::extractors::dates::{char_window, normalize, DateKind};
use crate::patterns::find_authority;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Characters searched on each side of an amount for the receiving party
pub const PARTY_RADIUS: usize = 120;
/// Maximum distance in bytes between a section number and its Act or Code
const STATUTE_RADIUS: usize = 120;

lazy_static! {
    static ref AMOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bRs\.\s*[0-9][0-9,]*(?:\.[0-9]+)?").unwrap(),
        Regex::new(r"\$\s*[0-9][0-9,]*(?:\.[0-9]+)?").unwrap(),
        Regex::new(r"(?i)\b[0-9][0-9,]*(?:\.[0-9]+)?\s*(?:rupees|dollars)\b").unwrap(),
    ];

    /// Role mentions in priority order, with the label used in summaries
    static ref PARTY_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\bwife\b").unwrap(), "the wife"),
        (Regex::new(r"(?i)\bhusband\b").unwrap(), "the husband"),
        (Regex::new(r"(?i)\b(?:son|daughter|child|children|minor)\b").unwrap(), "the child"),
        (Regex::new(r"(?i)\bpetitioner\b").unwrap(), "the petitioner"),
        (Regex::new(r"(?i)\brespondent\b").unwrap(), "the respondent"),
        (Regex::new(r"(?i)\bappellant\b").unwrap(), "the appellant"),
        (Regex::new(r"(?i)\bapplicant\b").unwrap(), "the applicant"),
        (Regex::new(r"(?i)\bdefendant\b").unwrap(), "the defendant"),
        (Regex::new(r"(?i)\bplaintiff\b").unwrap(), "the plaintiff"),
    ];

    static ref NUMBERED_PARTY: Regex = Regex::new(
        r"(?i)\b(petitioner|respondent|appellant|applicant|defendant|plaintiff)\s+no\.?\s*(\d+)"
    )
    .unwrap();

    /// Boundaries between clauses of one sentence
    static ref CLAUSE_BREAK: Regex = Regex::new(r"[;.]\s|,\s|\b(?:and|while|whereas)\b").unwrap();

    static ref SECTION: Regex = Regex::new(r"(?i)\bsection\s+(\d+[A-Za-z]?)").unwrap();

    static ref STATUTE_NAMES: Vec<Regex> = vec![
        Regex::new(r"(?i)\bCode\s+of\s+(?:Criminal|Civil)\s+Procedure").unwrap(),
        Regex::new(r"\b(?:[A-Z][A-Za-z.]*\s+){1,4}(?:Act|Code)\b").unwrap(),
    ];

    static ref APPEAL_NUMBER: Regex =
        Regex::new(r"(?i)\b(criminal|civil)\s+appeal\s+(?:no\.?\s*)?(\d+(?:/\d+)?)").unwrap();

    static ref EFFECTIVE_FROM: Regex = Regex::new(
        r"(?i)(?:\bfrom|\bsince|\bw\.e\.f\.?|\bwith\s+effect\s+from)\s+(\d{1,2}\.\d{1,2}\.\d{4})"
    )
    .unwrap();
}

/// Words stripped from the front of a captured statute name
const STATUTE_LEADING_WORDS: &[&str] = &["the", "under", "of", "in", "and", "by", "per", "vide"];

/// Action verbs in priority order, with the words that trigger them
const ACTIONS: &[(&str, &[&str])] = &[
    ("awarded", &["awarded", "award"]),
    ("directed", &["directed", "direction"]),
    ("ordered", &["ordered", "order"]),
    ("amended", &["amended", "amendment"]),
    ("filed", &["filed", "filing"]),
    ("decided", &["decided", "decision"]),
    ("dismissed", &["dismissed"]),
];

/// What an award or order was about, most specific first
const SUBJECTS: &[&str] = &[
    "interim maintenance",
    "maintenance",
    "compensation",
    "damages",
    "alimony",
    "relief",
];

/// A monetary amount as written in the context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// An amount paired with the party it is payable to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub amount: String,
    pub party: String,
}

/// A criminal or civil appeal reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppealRef {
    /// "Criminal" or "Civil"
    pub kind: &'static str,
    pub number: Option<String>,
}

/// An "effective from" clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveDate {
    pub text: String,
    pub date: NaiveDate,
}

/// Facts pulled from one context window for the summary templater
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    pub amounts: Vec<Amount>,
    pub payments: Vec<Payment>,
    pub statute: Option<String>,
    pub authority: Option<&'static str>,
    pub action: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub frequency: Option<&'static str>,
    pub appeal: Option<AppealRef>,
    pub effective_from: Option<EffectiveDate>,
}

impl Slots {
    /// Extract slots from the raw context and its cleaned form.
    ///
    /// Amounts, parties, appeal numbers and effective dates are read from the
    /// raw text; statute, authority, action and subject from the cleaned text.
    pub fn extract(raw: &str, clean: &str) -> Self {
        let clean_lower = clean.to_lowercase();
        let raw_lower = raw.to_lowercase();

        let amounts = extract_amounts(raw);
        let payments = amounts
            .iter()
            .filter_map(|amount| {
                closest_party(raw, amount).map(|party| Payment {
                    amount: amount.text.clone(),
                    party,
                })
            })
            .collect();

        Self {
            amounts,
            payments,
            statute: extract_statute(clean),
            authority: find_authority(&clean_lower),
            action: ACTIONS
                .iter()
                .find(|(_, triggers)| triggers.iter().any(|t| clean_lower.contains(t)))
                .map(|(action, _)| *action),
            subject: SUBJECTS.iter().copied().find(|s| clean_lower.contains(s)),
            frequency: extract_frequency(&raw_lower),
            appeal: extract_appeal(raw),
            effective_from: extract_effective_date(raw),
        }
    }

    /// Text of the first amount, if any
    pub fn first_amount(&self) -> Option<&str> {
        self.amounts.first().map(|a| a.text.as_str())
    }

    /// Frequency suffix such as " per month", or an empty string
    pub fn frequency_suffix(&self) -> String {
        self.frequency.map(|f| format!(" {}", f)).unwrap_or_default()
    }
}

/// Monetary amounts in position order with overlapping matches removed
pub fn extract_amounts(text: &str) -> Vec<Amount> {
    let mut found: Vec<Amount> = AMOUNT_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| {
            let trimmed = m.as_str().trim_end_matches(&[',', ' '][..]);
            Amount {
                text: trimmed.to_string(),
                start: m.start(),
                end: m.start() + trimmed.len(),
            }
        })
        .collect();
    found.sort_by_key(|a| (a.start, std::cmp::Reverse(a.end)));

    let mut amounts: Vec<Amount> = Vec::new();
    for amount in found {
        let overlapping = amounts
            .last()
            .map_or(false, |prev| amount.start < prev.end);
        if !overlapping {
            amounts.push(amount);
        }
    }
    amounts
}

/// The role mention closest to `amount` within [`PARTY_RADIUS`] characters.
///
/// Mentions inside the amount's own clause are preferred, so in "Rs. 500 to
/// the wife and Rs. 300 to the son" each amount keeps its own party. Ties on
/// distance go to the higher-priority role; numbered parties
/// ("Respondent No. 2") outrank everything else.
pub fn closest_party(text: &str, amount: &Amount) -> Option<String> {
    let (lo, hi) = char_window(text, amount.start, amount.end, PARTY_RADIUS);
    let window = &text[lo..hi];
    let amount_start = amount.start - lo;
    let amount_end = amount.end - lo;

    let distance = |start: usize, end: usize| -> usize {
        if end <= amount_start {
            amount_start - end
        } else if start >= amount_end {
            start - amount_end
        } else {
            0
        }
    };

    let numbered = NUMBERED_PARTY.captures_iter(window).filter_map(|caps| {
        let whole = caps.get(0)?;
        let role = caps.get(1)?.as_str().to_lowercase();
        let number = caps.get(2)?.as_str();
        Some((
            distance(whole.start(), whole.end()),
            0usize,
            whole.start(),
            format!("the {} No. {}", role, number),
        ))
    });

    let plain = PARTY_PATTERNS
        .iter()
        .enumerate()
        .flat_map(|(priority, (re, label))| {
            re.find_iter(window)
                .map(move |m| (m.start(), m.end(), priority + 1, *label))
        })
        .map(|(start, end, priority, label)| {
            (distance(start, end), priority, start, label.to_string())
        });

    let clause_start = CLAUSE_BREAK
        .find_iter(&window[..amount_start])
        .last()
        .map_or(0, |m| m.end());
    let clause_end = CLAUSE_BREAK
        .find(&window[amount_end..])
        .map_or(window.len(), |m| amount_end + m.start());

    let candidates: Vec<(usize, usize, usize, String)> = numbered.chain(plain).collect();
    let in_clause = candidates
        .iter()
        .filter(|(_, _, start, _)| (clause_start..clause_end).contains(start))
        .min_by_key(|(distance, priority, _, _)| (*distance, *priority));

    in_clause
        .or_else(|| {
            candidates
                .iter()
                .min_by_key(|(distance, priority, _, _)| (*distance, *priority))
        })
        .map(|(_, _, _, label)| label.clone())
}

/// "Section N" plus the nearest Act or Code name, if one is close enough
pub fn extract_statute(text: &str) -> Option<String> {
    let caps = SECTION.captures(text)?;
    let whole = caps.get(0)?;
    let number = caps.get(1)?.as_str();
    let section = format!("Section {}", number);

    let nearest = STATUTE_NAMES
        .iter()
        .flat_map(|re| re.find_iter(text))
        .filter_map(|m| {
            let gap = if m.start() >= whole.end() {
                m.start() - whole.end()
            } else if m.end() <= whole.start() {
                whole.start() - m.end()
            } else {
                0
            };
            let name = clean_statute_name(m.as_str())?;
            (gap <= STATUTE_RADIUS).then_some((gap, name))
        })
        .min_by_key(|(gap, _)| *gap);

    Some(match nearest {
        Some((_, name)) => format!("{} of the {}", section, name),
        None => section,
    })
}

fn clean_statute_name(raw: &str) -> Option<String> {
    let mut words: Vec<&str> = raw.split_whitespace().collect();
    while let Some(first) = words.first() {
        if STATUTE_LEADING_WORDS.contains(&first.to_lowercase().as_str()) {
            words.remove(0);
        } else {
            break;
        }
    }
    // A bare "Act" or "Code" names nothing
    (words.len() > 1).then(|| words.join(" "))
}

fn extract_frequency(text_lower: &str) -> Option<&'static str> {
    if text_lower.contains("per month") || text_lower.contains("p.m.") {
        Some("per month")
    } else if text_lower.contains("per year") || text_lower.contains("per annum") {
        Some("per year")
    } else {
        None
    }
}

/// Criminal or civil appeal reference, with its number when one is given
pub fn extract_appeal(text: &str) -> Option<AppealRef> {
    let kind_of = |s: &str| {
        if s.eq_ignore_ascii_case("criminal") {
            "Criminal"
        } else {
            "Civil"
        }
    };

    if let Some(caps) = APPEAL_NUMBER.captures(text) {
        return Some(AppealRef {
            kind: kind_of(caps.get(1)?.as_str()),
            number: caps.get(2).map(|m| m.as_str().to_string()),
        });
    }

    let lower = text.to_lowercase();
    if lower.contains("criminal appeal") {
        Some(AppealRef {
            kind: "Criminal",
            number: None,
        })
    } else if lower.contains("civil appeal") {
        Some(AppealRef {
            kind: "Civil",
            number: None,
        })
    } else {
        None
    }
}

fn extract_effective_date(text: &str) -> Option<EffectiveDate> {
    let caps = EFFECTIVE_FROM.captures(text)?;
    let raw = caps.get(1)?.as_str();
    let date = normalize(DateKind::IndianDot, raw)?;
    Some(EffectiveDate {
        text: raw.to_string(),
        date,
    })
}
