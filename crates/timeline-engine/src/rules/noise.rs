// Document noise detection: running headers, citation stamps and boilerplate
use crate::patterns::BOILERPLATE_WORDS;
use lazy_static::lazy_static;
use regex::Regex;

/// Lines longer than this are treated as extraction garbage
pub const MAX_LINE_CHARS: usize = 1000;

/// Minimum number of non-boilerplate words a header-bearing context needs
/// before it is trusted as event text
const MIN_CONTENT_WORDS: usize = 6;

lazy_static! {
    /// Signatures of lines that never carry event dates
    static ref NOISE_LINE_PATTERNS: Vec<Regex> = vec![
        // Citation database hosts and any other bare web host
        Regex::new(r"(?i)www\.[a-z0-9-]+\.[a-z]{2,}").unwrap(),
        // Page numbering, bare or parenthesised
        Regex::new(r"(?i)\(?\s*page\s+\d+\s+of\s+\d+\s*\)?").unwrap(),
        Regex::new(r"(?i)\blibrary\s+\w+").unwrap(),
        Regex::new(r"(?i)©.*all\s+rights\s+reserved").unwrap(),
        Regex::new(r"(?i)https?://\S+").unwrap(),
        // Bracketed citation references followed by a year
        Regex::new(r"\[[^\]]*\d+[^\]]*\].*\d{4}").unwrap(),
        // Reporter citations such as "2020 (12) SCC"
        Regex::new(r"\d{4}\s+\(\d+\)\s+\w+").unwrap(),
        Regex::new(r"(?i)manu/.*\d{4}").unwrap(),
    ];

    /// Header material looked for inside a whole context window
    static ref HEADER_SIGNATURES: Vec<Regex> = vec![
        Regex::new(r"(?i)\(?\s*page\s+\d+(\s+of\s+\d+)?\s*\)?").unwrap(),
        Regex::new(r"(?i)©[^.]*|copyright[^.]*|all\s+rights\s+reserved").unwrap(),
        Regex::new(r"(?i)https?://\S+|www\.\S+").unwrap(),
        Regex::new(r"(?i)\blibrary\s+\w+").unwrap(),
        // Citation stamps: MANU ids and reporter shorthand
        Regex::new(r"(?i)\bmanu/[a-z]*/?\d+/\d{4}").unwrap(),
        Regex::new(r"\[\d{4}\]\s+\d+\s+[A-Z][A-Za-z.]*(?:\s+\d+)?").unwrap(),
        Regex::new(r"\b\d{4}\s+\(\d+\)\s+[A-Z][A-Za-z.]*(?:\s+\d+)?").unwrap(),
    ];

    static ref WORD: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// Check whether a raw line is document noise and must not be scanned for dates
pub fn is_noise_line(line: &str) -> bool {
    if line.chars().count() > MAX_LINE_CHARS {
        return true;
    }
    NOISE_LINE_PATTERNS.iter().any(|re| re.is_match(line))
}

/// Lowercased alphabetic tokens of `text`
fn content_words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

fn is_boilerplate(word: &str) -> bool {
    BOILERPLATE_WORDS.contains(&word)
}

/// Check whether a context window carries nothing but boilerplate vocabulary.
///
/// A window without any words (a bare date, a date table) is not filler.
pub fn is_filler_context(context: &str) -> bool {
    let mut words = content_words(context).peekable();
    words.peek().is_some() && words.all(|word| is_boilerplate(&word))
}

/// Check whether a context window is a running header rather than event text.
///
/// True when the window contains page numbering, a copyright notice, a URL,
/// a library header or a citation stamp, and fewer than six substantive words remain once that
/// material is removed.
pub fn looks_like_header(context: &str) -> bool {
    if !HEADER_SIGNATURES.iter().any(|re| re.is_match(context)) {
        return false;
    }

    let mut stripped = context.to_string();
    for re in HEADER_SIGNATURES.iter() {
        stripped = re.replace_all(&stripped, " ").into_owned();
    }

    content_words(&stripped)
        .filter(|word| !is_boilerplate(word))
        .count()
        < MIN_CONTENT_WORDS
}
