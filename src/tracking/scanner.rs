//! URL detection in email body text.
//!
//! Detection is intentionally permissive: anything starting with
//! `http://` or `https://` followed by a run of characters that could not
//! terminate a URL in surrounding prose or markup counts as a URL. There is
//! no scheme/host parsing beyond the prefix and no well-formedness check.
//!
//! The scanner does not know about existing markup. Raw URL text inside an
//! `href=""` attribute is matched like any other, which is why the wrapping
//! step must only ever run once per raw body.

use regex::Regex;
use std::sync::LazyLock;

/// Greedy URL pattern: an `http(s)://` prefix followed by the longest run
/// of non-whitespace, non-`<`, `>`, `"`, `'` characters.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("URL pattern must compile"));

/// Characters stripped one at a time from the end of a greedy match and
/// re-emitted after the generated anchor.
///
/// A trailing `)` is stripped unconditionally, even when the URL sits
/// inside balanced parentheses or legitimately ends in `)` (e.g. Wikipedia
/// disambiguation paths). Known limitation of the sentence-punctuation
/// heuristic.
pub const TRAILING_PUNCTUATION: &[char] =
    &['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"'];

/// One greedy match, split into the URL proper and its trailing punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Byte offset of the match start in the scanned text.
    pub start: usize,
    /// Byte offset one past the match end (including the punctuation).
    pub end: usize,
    /// The URL with trailing punctuation stripped.
    pub url: String,
    /// The stripped punctuation, in original order.
    pub trailing_punctuation: String,
}

/// Finds every URL occurrence in `text`.
///
/// Repeated URLs are reported once per occurrence, in document order.
pub fn scan(text: &str) -> Vec<LinkMatch> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| {
            let (url, punctuation) = split_trailing_punctuation(m.as_str());
            LinkMatch {
                start: m.start(),
                end: m.end(),
                url: url.to_string(),
                trailing_punctuation: punctuation.to_string(),
            }
        })
        .collect()
}

/// Counts URL occurrences in `text`.
///
/// Always equals the number of anchors link wrapping would emit for the
/// same input.
pub fn count_links(text: &str) -> usize {
    URL_PATTERN.find_iter(text).count()
}

/// Returns the punctuation-stripped URLs found in `text`, in document
/// order, one entry per occurrence.
pub fn extract_links(text: &str) -> Vec<String> {
    scan(text).into_iter().map(|m| m.url).collect()
}

/// Splits a greedy match into the URL and the run of trailing punctuation
/// that belongs to the surrounding sentence.
///
/// The split can never consume the whole match: the mandatory `//` of the
/// scheme prefix is not in the punctuation set.
fn split_trailing_punctuation(matched: &str) -> (&str, &str) {
    let mut split = matched.len();

    for c in matched.chars().rev() {
        if TRAILING_PUNCTUATION.contains(&c) {
            split -= c.len_utf8();
        } else {
            break;
        }
    }

    matched.split_at(split)
}
