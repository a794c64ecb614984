//! Summary templater
//!
//! Builds a short natural-language summary for an event from its context
//! window alone. The output is 2 to 4 sentences joined by `\n`, each ending in
//! terminal punctuation. Captured text is quoted whole or not at all.

use crate::context::normalize_whitespace;
use crate::extractors::dates::strip_dates;
use crate::extractors::slots::Slots;
use crate::rules::classify::Classification;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::EventCategory;

/// Detail sentences kept after the primary sentence
pub const MAX_DETAILS: usize = 3;
/// Longest captured phrase ("held that ...") quoted in a summary
const MAX_CAPTURE_CHARS: usize = 160;

lazy_static! {
    static ref CLEANUP_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"-*\s*PAGE BREAK\s*-*").unwrap(),
        Regex::new(r"(?i)\bMANU/\S+").unwrap(),
        Regex::new(r"(?i)https?://\S+|\bwww\.\S+").unwrap(),
        Regex::new(r"(?i)\d+\s+Decided\s+by.*?High\s+Court").unwrap(),
        Regex::new(r"(?i)\bDecided\s+On\s*:?").unwrap(),
        Regex::new(r"(?i)\bdecided\s+vide.*?\d{4}").unwrap(),
    ];

    static ref HELD_THAT: Regex = Regex::new(r"(?i)\bheld\s+that\s+([^.]+)").unwrap();
    static ref CHALLENGE: Regex =
        Regex::new(r"(?i)\bchalleng(?:ed|ing)\s+(?:the\s+)?([^.]+)").unwrap();
    static ref CASE_NAME: Regex =
        Regex::new(r"\b([A-Z][a-z]+\s+(?:v|vs|Vs|V)\.?\s+[A-Z][^.]{10,40}\b)").unwrap();
    static ref ARTICLE: Regex = Regex::new(r"(?i)\barticle\s+(\d+[A-Za-z]?)").unwrap();
}

/// Remove page-break markers, citations, URLs, decision stamps and dates
pub fn clean_context(context: &str) -> String {
    let without_noise = CLEANUP_PATTERNS
        .iter()
        .fold(context.to_string(), |acc, re| re.replace_all(&acc, " ").into_owned());
    let without_dates = strip_dates(&without_noise);
    normalize_whitespace(std::iter::once(without_dates.as_str()))
}

/// Capitalize the first letter and make sure the sentence ends in `. ! ?`
pub fn finish_sentence(sentence: &str) -> String {
    let trimmed = sentence
        .trim()
        .trim_end_matches(|c: char| c == ',' || c == ';' || c == ':' || c.is_whitespace());
    let mut chars = trimmed.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };
    if !out.ends_with(&['.', '!', '?'][..]) {
        out.push('.');
    }
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds event summaries from context windows
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryTemplater;

impl SummaryTemplater {
    pub fn new() -> Self {
        Self
    }

    /// Summarize the event dated `date` found in `context`.
    ///
    /// The event's own date is never quoted back.
    pub fn summarize(
        &self,
        date: NaiveDate,
        context: &str,
        classification: &Classification,
    ) -> String {
        let raw = normalize_whitespace(std::iter::once(context));
        let clean = clean_context(&raw);
        let slots = Slots::extract(&raw, &clean);
        let draft = Draft {
            clean: &clean,
            lower: clean.to_lowercase(),
            slots: &slots,
            event_type: &classification.event_type,
            category: classification.category,
            date,
        };

        let primary = finish_sentence(&draft.primary());
        let mut details = draft.details(&primary);
        if details.is_empty() {
            details = draft.closing(&primary);
        }

        let mut lines = vec![primary];
        for detail in details {
            let detail = finish_sentence(&detail);
            if detail.is_empty() || lines.contains(&detail) {
                continue;
            }
            if lines.len() > MAX_DETAILS {
                break;
            }
            lines.push(detail);
        }
        if lines.len() < 2 {
            lines.push(finish_sentence(category_closing(draft.category)));
        }

        lines.join("\n")
    }
}

/// Per-event working state for the templater
struct Draft<'a> {
    clean: &'a str,
    lower: String,
    slots: &'a Slots,
    event_type: &'a str,
    category: EventCategory,
    date: NaiveDate,
}

impl Draft<'_> {
    fn has(&self, term: &str) -> bool {
        self.lower.contains(term)
    }

    fn has_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.has(t))
    }

    /// Authority for sentence bodies, "the Court" when none is named
    fn authority(&self) -> &'static str {
        self.slots.authority.unwrap_or("the Court")
    }

    /// Authority at the start of a sentence
    fn subject(&self) -> String {
        capitalize(self.authority())
    }

    fn first_amount(&self) -> Option<&str> {
        self.slots.first_amount()
    }

    /// Party named in the context, for "X was directed to ..." sentences
    fn named_party(&self, include_husband: bool) -> &'static str {
        if self.has("appellant") || (include_husband && self.has("husband")) {
            "the appellant"
        } else if self.has("petitioner") {
            "the petitioner"
        } else if self.has("respondent") {
            "the respondent"
        } else {
            "the party"
        }
    }

    /// Quote a captured phrase only when it fits whole
    fn capture(&self, re: &Regex) -> Option<String> {
        let text = re.captures(self.clean)?.get(1)?.as_str().trim();
        let fits = !text.is_empty() && text.chars().count() <= MAX_CAPTURE_CHARS;
        fits.then(|| text.to_string())
    }

    fn mentions_statute_in(&self, sentence: &str) -> bool {
        self.slots
            .statute
            .as_ref()
            .map_or(false, |s| sentence.to_lowercase().contains(&s.to_lowercase()))
    }

    fn primary(&self) -> String {
        let (sentence, vague) = self.primary_from_action();
        if vague {
            self.fallback_ladder()
        } else {
            sentence
        }
    }

    /// Primary sentence from the main action; the flag marks sentences too
    /// vague to stand on their own
    fn primary_from_action(&self) -> (String, bool) {
        let s = self.slots;
        match (s.action, s.authority) {
            (Some("awarded"), Some(a)) => match s.subject {
                Some(subject) => (self.award_sentence(a, subject), false),
                None => (format!("{} passed an award", a), false),
            },
            (Some("awarded"), None) => ("An award was made".to_string(), false),
            (Some("directed"), Some(a)) => (self.directed_sentence(a), false),
            (Some("directed"), None) => ("Directions were issued".to_string(), false),
            (Some("ordered"), Some(a)) => (self.ordered_sentence(a), false),
            (Some("ordered"), None) => ("An order was issued".to_string(), true),
            (Some("amended"), _) => match &s.statute {
                Some(statute) => (format!("{} was amended", statute), false),
                None => ("A statutory amendment was made".to_string(), false),
            },
            (Some("filed"), _) => {
                let sentence = if self.has("affidavit") {
                    "An affidavit was filed"
                } else if self.has("application") {
                    "An application was filed"
                } else {
                    "A filing was made"
                };
                (sentence.to_string(), false)
            }
            (Some("decided"), Some(a)) => (format!("{} delivered a judgment", a), false),
            (Some("decided"), None) => ("A judgment was delivered".to_string(), true),
            (Some("dismissed"), Some(a)) => (format!("{} dismissed the case", a), false),
            (Some("dismissed"), None) => ("The case was dismissed".to_string(), false),
            (_, Some(a)) => (format!("{} took action", a), true),
            (_, None) => ("Legal action was taken".to_string(), true),
        }
    }

    fn award_sentence(&self, authority: &str, subject: &str) -> String {
        let s = self.slots;
        let freq = s.frequency_suffix();
        match s.payments.as_slice() {
            [only] => format!(
                "{} awarded {} of {}{} to {}",
                authority, subject, only.amount, freq, only.party
            ),
            [first, second, ..] => format!(
                "{} awarded {} of {}{} to {} and {}{} to {}",
                authority, subject, first.amount, freq, first.party, second.amount, freq, second.party
            ),
            [] => match s.amounts.as_slice() {
                [] => format!("{} awarded {}", authority, subject),
                [only] => format!("{} awarded {} of {}{}", authority, subject, only.text, freq),
                [first, second, ..] => format!(
                    "{} awarded {} of {} and {}{}",
                    authority, subject, first.text, second.text, freq
                ),
            },
        }
    }

    fn directed_sentence(&self, authority: &str) -> String {
        let s = self.slots;
        if self.has("pay") || !s.amounts.is_empty() {
            if let Some(payment) = s.payments.first() {
                format!(
                    "{} directed payment of {} to {}",
                    authority, payment.amount, payment.party
                )
            } else if let Some(amount) = self.first_amount() {
                format!("{} directed payment of {}", authority, amount)
            } else {
                format!("{} directed payment", authority)
            }
        } else if self.has_any(&["file", "filing"]) {
            let object = if self.has("affidavit") {
                "an affidavit"
            } else if self.has_any(&["return", "tax"]) {
                "tax returns"
            } else if self.has("application") {
                "an application"
            } else {
                "documents"
            };
            format!("{} directed filing of {}", authority, object)
        } else {
            format!("{} issued directions", authority)
        }
    }

    fn ordered_sentence(&self, authority: &str) -> String {
        let s = self.slots;
        if self.has("arrears") {
            match self.first_amount() {
                Some(amount) => format!(
                    "{} ordered payment of arrears amounting to {}",
                    authority, amount
                ),
                None => format!("{} ordered payment of arrears", authority),
            }
        } else if self.has("maintenance") {
            let freq = s.frequency_suffix();
            if let Some(payment) = s.payments.first() {
                format!(
                    "{} ordered maintenance of {}{} to {}",
                    authority, payment.amount, freq, payment.party
                )
            } else if let Some(amount) = self.first_amount() {
                format!("{} ordered maintenance of {}{}", authority, amount, freq)
            } else {
                format!("{} ordered maintenance", authority)
            }
        } else if self.has_any(&["compliance", "affidavit"]) {
            format!("{} ordered filing of a compliance affidavit", authority)
        } else {
            format!("{} issued an order", authority)
        }
    }

    /// Replacement for a vague primary sentence, keyed on amendment, writ,
    /// appeal, judgment and order cues, then on the event type
    fn fallback_ladder(&self) -> String {
        if self.has_any(&["amendment", "amended", "inserted"]) {
            return self.amendment_sentence();
        }
        if self.has("writ petition") || (self.has("writ") && self.has("petition")) {
            return self.writ_sentence();
        }
        if self.has("appeal") {
            return self.appeal_sentence();
        }
        if self.has_any(&["judgment", "decided"]) {
            return self.judgment_sentence();
        }
        if self.has("order") {
            return self.order_sentence();
        }
        self.event_type_sentence()
    }

    fn amendment_sentence(&self) -> String {
        let Some(statute) = &self.slots.statute else {
            return "A statutory amendment was made".to_string();
        };
        if self.has_any(&["60 days", "disposal"]) {
            let applications = if self.has("maintenance") {
                "maintenance applications"
            } else if self.has("petition") {
                "petitions"
            } else {
                "applications"
            };
            format!(
                "{} was amended to insert provisions requiring disposal of {} within 60 days",
                statute, applications
            )
        } else if self.has("proviso") {
            let proceedings = if self.has("maintenance") {
                "maintenance proceedings"
            } else if self.has("criminal") {
                "criminal proceedings"
            } else if self.has("civil") {
                "civil proceedings"
            } else {
                "proceedings"
            };
            format!(
                "{} was amended by inserting a proviso regarding {}",
                statute, proceedings
            )
        } else {
            format!("{} was amended by inserting new provisions", statute)
        }
    }

    fn writ_sentence(&self) -> String {
        if self.has_any(&["dismissed", "rejected"]) {
            format!("{} dismissed the writ petition", self.subject())
        } else if self.has_any(&["filed", "instituted"]) {
            format!("A writ petition was filed before {}", self.authority())
        } else if self.has_any(&["allowed", "granted"]) {
            format!("{} allowed the writ petition", self.subject())
        } else {
            format!("{} dealt with a writ petition", self.subject())
        }
    }

    fn appeal_sentence(&self) -> String {
        let who = self.subject();
        let appeal = self.slots.appeal.as_ref();
        let kind = appeal.map(|a| a.kind);
        let numbered = appeal.and_then(|a| a.number.as_deref().map(|n| (a.kind, n)));

        if self.has("affirmed") {
            let affirmed = if self.has("family court") {
                "the Family Court order"
            } else if self.has("high court") && self.slots.authority != Some("the High Court") {
                "the High Court order"
            } else {
                "the lower court order"
            };
            match (numbered, kind) {
                (Some((kind, number)), _) => format!(
                    "{} affirmed {} while deciding {} Appeal No. {}",
                    who, affirmed, kind, number
                ),
                (None, Some(kind)) => format!(
                    "{} affirmed the lower court's order while deciding a {} appeal",
                    who,
                    kind.to_lowercase()
                ),
                (None, None) => format!("{} affirmed the judgment of the lower court in an appeal", who),
            }
        } else if self.has("dismissed") {
            match kind {
                Some(kind) => format!(
                    "{} dismissed the {} appeal and upheld the lower court's order",
                    who,
                    kind.to_lowercase()
                ),
                None => format!("{} dismissed the appeal and maintained the original order", who),
            }
        } else if self.has("decided") {
            match (self.first_amount(), kind) {
                (Some(amount), _) => format!(
                    "{} decided an appeal concerning payment of {}",
                    who, amount
                ),
                (None, Some(kind)) => format!(
                    "{} decided a {} appeal challenging the lower court's order",
                    who,
                    kind.to_lowercase()
                ),
                (None, None) => format!("{} decided an appeal in the matter", who),
            }
        } else {
            match (numbered, kind) {
                (Some((kind, number)), _) => {
                    format!("{} took up {} Appeal No. {}", who, kind, number)
                }
                (None, Some(kind)) => format!("{} took up a {} appeal", who, kind.to_lowercase()),
                (None, None) => format!("{} took up an appeal in the matter", who),
            }
        }
    }

    /// What a judgment was about, when the context says so
    fn judgment_topic(&self) -> Option<String> {
        if self.has("passport") && self.has("impound") {
            return Some(match &self.slots.statute {
                Some(statute) => format!("passport impounding under {}", statute),
                None => "passport impounding".to_string(),
            });
        }
        if let Some(caps) = ARTICLE.captures(self.clean) {
            return Some(format!("constitutional rights under Article {}", &caps[1]));
        }
        if self.has("constitution") {
            return Some("constitutional rights and fundamental freedoms".to_string());
        }
        if self.has_any(&["natural justice", "audi alteram"]) {
            return Some("the principles of natural justice".to_string());
        }
        if self.has_any(&["writ", "petition"]) {
            return Some("a writ petition challenging administrative action".to_string());
        }
        None
    }

    fn judgment_sentence(&self) -> String {
        let who = self.subject();
        let topic = self.judgment_topic();
        let outcome = if self.has_any(&["affirmed", "upheld"]) {
            Some("affirmed")
        } else if self.has_any(&["reversed", "set aside", "quashed"]) {
            Some("reversed")
        } else if self.has_any(&["modified", "varied"]) {
            Some("modified")
        } else {
            None
        };

        if let Some(outcome) = outcome {
            return match topic {
                Some(topic) => format!(
                    "{} {} the lower court's judgment regarding {}",
                    who, outcome, topic
                ),
                None => format!("{} {} the judgment of the lower court", who, outcome),
            };
        }
        if let Some(amount) = self.first_amount() {
            return format!(
                "{} delivered a judgment confirming payment of {}",
                who, amount
            );
        }
        if self.has("guidelines") {
            return format!("{} delivered a judgment framing guidelines for similar cases", who);
        }
        if let Some(topic) = topic {
            return format!("{} delivered a judgment on {}", who, topic);
        }
        if let Some(caps) = CASE_NAME.captures(self.clean) {
            return format!("{} delivered a judgment in {}", who, caps[1].trim());
        }
        match &self.slots.statute {
            Some(statute) => format!("{} delivered a judgment interpreting {}", who, statute),
            None => format!("{} delivered a judgment in the matter", who),
        }
    }

    fn order_sentence(&self) -> String {
        let who = self.subject();
        if self.has_any(&["compliance", "affidavit"]) {
            if self.has_any(&["disclosure", "assets"]) {
                format!(
                    "{} ordered filing of an affidavit disclosing assets and liabilities",
                    who
                )
            } else {
                format!("{} ordered filing of a compliance affidavit", who)
            }
        } else if let Some(amount) = self.first_amount() {
            if self.has_any(&["arrears", "outstanding"]) {
                format!("{} ordered payment of arrears amounting to {}", who, amount)
            } else {
                format!("{} issued an order regarding payment of {}", who, amount)
            }
        } else if self.has("guidelines") {
            format!("{} issued an order seeking suggestions for framing guidelines", who)
        } else if self.has_any(&["tax", "returns"]) {
            format!(
                "{} directed {} to file income tax returns",
                who,
                self.named_party(true)
            )
        } else if self.has("stay") {
            format!("{} issued a stay order", who)
        } else if self.has("injunction") {
            format!("{} issued an injunction order", who)
        } else {
            format!("{} issued an order in the matter", who)
        }
    }

    fn event_type_sentence(&self) -> String {
        let who = self.subject();
        let event_type = self.event_type.to_lowercase();
        let statute = self.slots.statute.as_ref();

        if let Some(amount) = self.first_amount() {
            format!(
                "{} dealt with the {} matter concerning payment of {}",
                who, event_type, amount
            )
        } else if event_type.contains("amendment") {
            match statute {
                Some(statute) => format!("A statutory amendment was made to {}", statute),
                None => "A statutory amendment was made".to_string(),
            }
        } else if event_type.contains("proceeding") || self.has("proceeding") {
            if self.has("writ") {
                format!("{} conducted proceedings on a writ petition", who)
            } else {
                format!("{} conducted proceedings in the matter", who)
            }
        } else if event_type.contains("judgment") {
            match statute {
                Some(statute) => format!("{} delivered a judgment interpreting {}", who, statute),
                None => format!("{} delivered a judgment in the matter", who),
            }
        } else {
            match statute {
                Some(statute) => format!(
                    "{} dealt with the {} matter under {}",
                    who, event_type, statute
                ),
                None => format!("{} dealt with the {} matter", who, event_type),
            }
        }
    }

    /// Supporting sentences drawn from the context, at most [`MAX_DETAILS`]
    fn details(&self, primary: &str) -> Vec<String> {
        let s = self.slots;
        let mut details = Vec::new();

        if let Some(effective) = &s.effective_from {
            if effective.date != self.date {
                details.push(format!("The order was effective from {}", effective.text));
            }
        }

        if self.has_any(&["directed", "ordered"]) {
            if self.has_any(&["income tax", "tax returns"]) {
                details.push(format!(
                    "{} was directed to file income tax returns and assessment orders",
                    capitalize(self.named_party(false))
                ));
            }
            if self.has("passport") {
                details.push(format!(
                    "{} was directed to provide a copy of the passport",
                    capitalize(self.named_party(false))
                ));
            }
            if self.has("pay") {
                if let [first, second, ..] = s.amounts.as_slice() {
                    details.push(format!(
                        "The order involved multiple payments: {} and {}",
                        first.text, second.text
                    ));
                }
            }
        }

        if self.has("arrears") {
            if let Some(last) = s.amounts.last() {
                if !primary.contains(&last.text) {
                    details.push(format!(
                        "The order addressed payment of arrears amounting to {}",
                        last.text
                    ));
                }
            } else if self.has("part") && self.has("paid") {
                details.push(
                    "Only part of the arrears had been paid, and a final opportunity was granted"
                        .to_string(),
                );
            } else if self.has("balance") {
                details.push("A final opportunity was granted to pay the balance amount".to_string());
            }
        }

        if let Some(statute) = &s.statute {
            if self.has_any(&["amendment", "amended"]) {
                let content = if self.has_any(&["60 days", "disposal"]) {
                    Some("disposal of applications within 60 days")
                } else if self.has("time") && self.has_any(&["limit", "period"]) {
                    Some("time limits for proceedings")
                } else if self.has("procedure") {
                    Some("procedural requirements")
                } else {
                    None
                };
                details.push(match content {
                    Some(content) => format!("The amendment inserted provisions requiring {}", content),
                    None => format!("The amendment inserted new provisions in {}", statute),
                });
            } else if !self.mentions_statute_in(primary) {
                details.push(format!("The matter arose under {}", statute));
            }
        }

        if self.has_any(&["challenged", "impugn"]) {
            details.push(self.challenge_sentence());
        }

        if self.has("mediation") {
            details.push(if self.has("failed") {
                "Mediation attempts failed, and the matter proceeded for final hearing".to_string()
            } else {
                "The matter was referred for mediation".to_string()
            });
        }

        if self.has_any(&["compliance", "affidavit"]) {
            if self.has_any(&["disclosure", "assets"]) {
                details.push(
                    "The order required filing of an affidavit disclosing assets and liabilities"
                        .to_string(),
                );
            } else if self.has("filed") {
                details.push("An affidavit of compliance was filed".to_string());
            }
        }

        if let [first, second, ..] = s.payments.as_slice() {
            if first.party != second.party {
                details.push(match s.subject {
                    Some(subject) => format!(
                        "{} was awarded separately to {} and {}",
                        capitalize(subject),
                        first.party,
                        second.party
                    ),
                    None => format!(
                        "Separate amounts were awarded to {} and {}",
                        first.party, second.party
                    ),
                });
            }
        }

        details.truncate(MAX_DETAILS);
        details
    }

    fn challenge_sentence(&self) -> String {
        let challenger = if self.has("petitioner") {
            "The petitioner"
        } else if self.has("respondent") {
            "The respondent"
        } else {
            "The appellant"
        };

        let forum = if self.has("supreme court") {
            Some("the Supreme Court")
        } else if self.has("high court") {
            Some(if self.has("bombay") {
                "the Bombay High Court"
            } else if self.has("delhi") {
                "the Delhi High Court"
            } else {
                "the High Court"
            })
        } else {
            None
        };

        let order = if self.has("family court") {
            "the Family Court order"
        } else if self.has("high court") && forum == Some("the Supreme Court") {
            "the High Court order"
        } else {
            "the lower court order"
        };

        match forum {
            Some(forum) => format!("{} challenged {} before {}", challenger, order, forum),
            None => format!("{} challenged {}", challenger, order),
        }
    }

    /// Closing sentences used when the context yields no details
    fn closing(&self, primary: &str) -> Vec<String> {
        let statute = self.slots.statute.as_ref();
        let mut closing = Vec::new();

        if self.event_type.ends_with("Judgment") {
            if let Some(challenge) = self.capture(&CHALLENGE) {
                closing.push(format!("The judgment addressed challenges regarding {}", challenge));
            }
            if let Some(held) = self.capture(&HELD_THAT) {
                closing.push(format!("The Court held that {}", held));
            }
            if let Some(statute) = statute.filter(|_| !self.mentions_statute_in(primary)) {
                closing.push(format!("This judgment interpreted and applied {}", statute));
            }
            if closing.is_empty() {
                closing.push("The judgment settled the legal questions raised in the matter".to_string());
            }
        } else if self.event_type == "Court Proceeding" {
            closing.push(if self.has_any(&["writ", "petition"]) {
                "The proceeding involved a writ petition".to_string()
            } else if let Some(statute) = statute {
                format!("The proceeding addressed matters under {}", statute)
            } else {
                "The proceeding formed part of the ongoing litigation".to_string()
            });
        } else if let Some(statute) = statute.filter(|_| !self.mentions_statute_in(primary)) {
            closing.push(format!("The matter arose under {}", statute));
        } else if self.has_any(&["filed", "filing"]) {
            closing.push("The filing formed part of the record of the case".to_string());
        } else {
            closing.push(category_closing(self.category).to_string());
        }

        closing
    }
}

/// Closing sentence keyed on the base category
fn category_closing(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Filing => "The filing formed part of the record of the case.",
        EventCategory::Hearing => "The matter was heard as part of the ongoing proceedings.",
        EventCategory::Judgment => "The decision determined the rights of the parties in the matter.",
        EventCategory::Appeal => "The appeal carried the dispute to a higher forum.",
        EventCategory::Settlement => "The parties moved towards resolving the dispute.",
        EventCategory::Dismissal => "The proceeding came to an end with this dismissal.",
        EventCategory::Interim => "The relief was interim and subject to the final outcome.",
        EventCategory::Adjournment => "The matter was deferred to a later hearing.",
        EventCategory::Other => "This action was part of the ongoing legal proceedings in the case.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classify::Classifier;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summarize(date: NaiveDate, context: &str) -> String {
        let classification = Classifier::default().classify(context);
        SummaryTemplater::new().summarize(date, context, &classification)
    }

    fn assert_shape(summary: &str) {
        let lines: Vec<&str> = summary.split('\n').collect();
        assert!((2..=4).contains(&lines.len()), "{:?}", lines);
        for line in lines {
            assert!(line.ends_with(&['.', '!', '?'][..]), "{:?}", line);
        }
    }

    #[test]
    fn test_decided_on_scenario() {
        let summary = summarize(
            ymd(2020, 11, 4),
            "Decided On: 04.11.2020 Appellants: Rajnesh Vs. Respondent: Neha",
        );
        assert_eq!(
            summary,
            "The Court delivered a judgment in the matter.\n\
             The judgment settled the legal questions raised in the matter."
        );
    }

    #[test]
    fn test_award_to_single_party() {
        let summary = summarize(
            ymd(2019, 3, 1),
            "The Family Court awarded maintenance of Rs. 20,000 per month to the wife.",
        );
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines[0],
            "The Family Court awarded maintenance of Rs. 20,000 per month to the wife."
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_award_to_multiple_parties() {
        let summary = summarize(
            ymd(2019, 3, 1),
            "The Family Court awarded maintenance of Rs. 20,000 to the wife and Rs. 10,000 to the son.",
        );
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines[0],
            "The Family Court awarded maintenance of Rs. 20,000 to the wife and Rs. 10,000 to the child."
        );
        assert!(lines.contains(&"Maintenance was awarded separately to the wife and the child."));
    }

    #[test]
    fn test_vague_order_uses_appeal_ladder() {
        let summary = summarize(
            ymd(2020, 11, 4),
            "In Criminal Appeal No. 730 of 2020 the order was affirmed.",
        );
        assert_eq!(
            summary.lines().next(),
            Some("The Court affirmed the lower court order while deciding Criminal Appeal No. 730.")
        );
        assert_shape(&summary);
    }

    #[test]
    fn test_amendment_skips_own_date() {
        let context = "Section 125 of the Code of Criminal Procedure was amended with effect from \
                       24.09.2001 to insert provisions on disposal of maintenance applications within 60 days.";
        let summary = summarize(ymd(2001, 9, 24), context);
        assert!(!summary.contains("24.09.2001"));
        assert_eq!(
            summary,
            "Section 125 of the Code of Criminal Procedure was amended.\n\
             The amendment inserted provisions requiring disposal of applications within 60 days."
        );

        let other_day = summarize(ymd(2001, 10, 1), context);
        assert!(other_day.contains("The order was effective from 24.09.2001."));
    }

    #[test]
    fn test_held_that_is_quoted_whole() {
        let context = "The Supreme Court decided the matter and held that maintenance is payable from the date of application.";
        let summary = summarize(ymd(2020, 11, 4), context);
        assert!(summary.contains("The Court held that maintenance is payable from the date of application."));
        assert_shape(&summary);
    }

    #[test]
    fn test_overlong_capture_is_skipped() {
        let long = "very long reasoning ".repeat(12);
        let context = format!("The Supreme Court decided the matter and held that {}.", long);
        let summary = summarize(ymd(2020, 11, 4), &context);
        assert!(!summary.contains("held that"));
        assert_shape(&summary);
    }

    #[test]
    fn test_summary_shape_for_empty_and_noisy_context() {
        for context in ["", "   ", "--- PAGE BREAK ---", "MANU/SC/0833/2020 https://x.y/z"] {
            let summary = summarize(ymd(2020, 1, 1), context);
            assert_shape(&summary);
        }
    }

    #[test]
    fn test_clean_context() {
        assert_eq!(
            clean_context("--- PAGE BREAK --- MANU/SC/0833/2020 Decided On: 04.11.2020 the appeal"),
            "the appeal"
        );
    }

    #[test]
    fn test_finish_sentence() {
        assert_eq!(finish_sentence("the court ruled,"), "The court ruled.");
        assert_eq!(finish_sentence("Is it?"), "Is it?");
        assert_eq!(finish_sentence("  "), "");
    }
}
