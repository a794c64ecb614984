//! Context window builder
//!
//! Expands the line a date was found on into a sentence-aware window of
//! surrounding text used for classification and summarization.

/// Lines taken on each side of the matched line
pub const DEFAULT_WINDOW: usize = 4;
/// Hard cap on the length of a context window, in characters
pub const DEFAULT_MAX_CHARS: usize = 1000;
/// Lines that may be appended to finish a dangling sentence
const MAX_EXTENSION_LINES: usize = 2;

const TERMINAL_PUNCTUATION: [char; 4] = ['.', '!', '?', ';'];

/// Builds context windows around matched lines
#[derive(Debug, Clone, Copy)]
pub struct ContextBuilder {
    window: usize,
    max_chars: usize,
}

impl ContextBuilder {
    pub fn new(window: usize, max_chars: usize) -> Self {
        Self { window, max_chars }
    }

    /// Build the context window for the 1-based `line_number`.
    ///
    /// Joins lines `[line_number - 1 - window, line_number + window)`, skipping
    /// blank ones, then appends up to two following lines while the text does
    /// not end in terminal punctuation and stays under the length cap.
    pub fn expand(&self, lines: &[&str], line_number: usize) -> String {
        let start = line_number.saturating_sub(1 + self.window);
        let end = (line_number + self.window).min(lines.len());
        if start >= end {
            return String::new();
        }

        let mut context = normalize_whitespace(lines[start..end].iter().copied());
        if context.chars().count() > self.max_chars {
            context = truncate_at_word(&context, self.max_chars);
        }

        if context.is_empty() || ends_sentence(&context) {
            return context;
        }

        let extension_end = (end + MAX_EXTENSION_LINES).min(lines.len());
        for line in &lines[end..extension_end] {
            let next = normalize_whitespace(std::iter::once(*line));
            if next.is_empty() {
                continue;
            }
            let extended = format!("{} {}", context, next);
            if extended.chars().count() < self.max_chars {
                context = extended;
                if ends_sentence(&context) {
                    break;
                }
            }
        }

        context
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_MAX_CHARS)
    }
}

/// Join lines with single spaces, collapsing all internal whitespace
pub fn normalize_whitespace<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .flat_map(|line| line.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn ends_sentence(text: &str) -> bool {
    text.trim_end().ends_with(&TERMINAL_PUNCTUATION[..])
}

/// Cut `text` to at most `max_chars` characters, backing off to the last
/// whole word when possible
fn truncate_at_word(text: &str, max_chars: usize) -> String {
    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cut];
    match head.rfind(' ') {
        Some(space) if space > 0 => head[..space].to_string(),
        _ => head.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn test_window_joins_surrounding_lines() {
        let text = "l1\nl2\nl3\nl4\nl5\nl6\nl7\nl8\nl9\nl10\nl11.";
        let builder = ContextBuilder::new(2, 1000);
        // line 6 -> l4..=l8, then extended by l9 and l10 (no terminal punctuation)
        assert_eq!(builder.expand(&lines(text), 6), "l4 l5 l6 l7 l8 l9 l10");
    }

    #[test]
    fn test_extension_stops_at_terminal_punctuation() {
        let text = "Decided On:\n04.11.2020\nthe appeal\nwas dismissed.\nNext line\nAnother";
        let builder = ContextBuilder::new(1, 1000);
        assert_eq!(
            builder.expand(&lines(text), 2),
            "Decided On: 04.11.2020 the appeal was dismissed."
        );
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_normalized() {
        let text = "  First   part \n\n\t 12.01.2021   here ;\n";
        assert_eq!(
            ContextBuilder::default().expand(&lines(text), 3),
            "First part 12.01.2021 here ;"
        );
    }

    #[test]
    fn test_window_clamps_at_document_edges() {
        let text = "only line 2020-01-01";
        assert_eq!(ContextBuilder::default().expand(&lines(text), 1), "only line 2020-01-01");
    }

    #[test]
    fn test_extension_respects_length_cap() {
        let long = "x".repeat(30);
        let text = format!("start\n{}\n{}", long, long);
        let builder = ContextBuilder::new(0, 40);
        // "start" + 30 chars would be 36 chars -> accepted; the second would exceed the cap
        assert_eq!(builder.expand(&lines(&text), 1), format!("start {}", long));
    }

    #[test]
    fn test_base_window_is_capped() {
        let text = "word ".repeat(400);
        let context = ContextBuilder::default().expand(&lines(&text), 1);
        assert!(context.chars().count() <= DEFAULT_MAX_CHARS);
        assert!(context.ends_with("word"));
    }
}
