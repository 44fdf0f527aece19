//! Cashtag candidate extraction
//!
//! Scans free-form text for `$`-prefixed runs of 2-4 uppercase ASCII
//! letters and yields them as normalized candidates, in order of
//! appearance, duplicates included. Pure: no side effects, same input
//! always yields the same sequence.

use regex::Regex;
use std::sync::LazyLock;

/// A cashtag is a `$` sigil followed by 2-4 uppercase letters. The word
/// boundary keeps the run from being a prefix of a longer token, so
/// "$TSLAX" and "$TSLAs" yield nothing while "$TSLA." yields TSLA.
static CASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[A-Z]{2,4}\b").unwrap());

/// Iterate over the normalized ticker candidates in `text`.
///
/// Normalization strips the sigil and any surrounding whitespace; the match
/// rule already guarantees uppercase. A text with no cashtags yields an
/// empty iterator.
pub fn candidates(text: &str) -> impl Iterator<Item = String> + '_ {
    CASHTAG_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_start_matches('$').trim().to_string())
}
