//! Line-level tokenization shared by the parsers and the validator.

use std::str::CharIndices;

use super::ast::ConditionValue;

/// Comment marker; everything after it on the same line is ignored.
const COMMENT_CHAR: char = '#';

/// Quote character delimiting multi-word values.
const QUOTE_CHAR: char = '"';

/// Iterates over the lines of a filter with their 1-based line numbers.
pub(crate) fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(i, line)| (i + 1, line))
}

/// Removes a trailing `#` comment and surrounding whitespace.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_CHAR) {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}

/// Splits a line into its leading keyword and the trimmed remainder.
///
/// The keyword must be followed by whitespace (or end the line), so
/// `Class==Currency` yields the keyword `Class==Currency`.
pub(crate) fn split_keyword(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.find(char::is_whitespace) {
        Some(idx) => Some((&line[..idx], line[idx..].trim_start())),
        None => Some((line, "")),
    }
}

/// Returns true if the text contains a quote character.
pub(crate) fn has_quotes(text: &str) -> bool {
    text.contains(QUOTE_CHAR)
}

/// Parses the value expression of a string condition.
///
/// Quoted segments each become one alternative. Without a closed quoted
/// segment the text is split on whitespace: a single word is a plain value
/// and several words are alternatives (an unquoted `Chaos Orb` means
/// "Chaos" or "Orb", and a stray `"` stays part of its word).
pub(crate) fn parse_value_expression(text: &str) -> Option<ConditionValue> {
    if text.trim().is_empty() {
        return None;
    }

    if has_quotes(text) {
        let quoted: Vec<String> = QuoteScanner::new(text).collect();
        if !quoted.is_empty() {
            return Some(ConditionValue::List(quoted));
        }
    }

    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if words.len() == 1 {
        words.pop().map(ConditionValue::Text)
    } else {
        Some(ConditionValue::List(words))
    }
}

/// Yields the contents of each closed, non-empty `"..."` segment.
///
/// Text outside quotes and an unterminated trailing quote are skipped.
struct QuoteScanner<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> QuoteScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
        }
    }

    /// Advances past the next opening quote, returning the byte offset after it.
    fn skip_to_quote(&mut self) -> Option<usize> {
        for (idx, c) in self.chars.by_ref() {
            if c == QUOTE_CHAR {
                return Some(idx + c.len_utf8());
            }
        }
        None
    }
}

impl Iterator for QuoteScanner<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let start = self.skip_to_quote()?;
            let end = self.skip_to_quote()? - QUOTE_CHAR.len_utf8();
            let segment = self.text[start..end].trim();
            if !segment.is_empty() {
                return Some(segment.to_string());
            }
        }
    }
}
