//! Query normalization and per-run match scanning.

use regex::{Regex, RegexBuilder};

/// A normalized search query: trimmed, non-empty, matched case-insensitively.
///
/// [`Query::parse`] returning `None` is the empty-query short-circuit: the
/// caller clears all overlays and restores the default thumbnail listing
/// without touching the document.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    matcher: Option<Regex>,
}

impl Query {
    /// Normalize raw input into a query. Whitespace-only input yields `None`.
    ///
    /// Every non-empty input parses. A pattern too large for the regex
    /// compiler yields a query that matches nothing, so the pass reports it
    /// as an ordinary no-result search instead of a cleared one.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        // Literal match only: the query is escaped, so the regex engine is
        // used purely for case-insensitive substring scanning. An escaped
        // literal can only fail to build by exceeding the compiled-size
        // limit.
        let matcher = RegexBuilder::new(&regex::escape(text))
            .case_insensitive(true)
            .build()
            .ok();
        if matcher.is_none() {
            log::warn!("query of {} bytes exceeds the matcher size limit", text.len());
        }
        Some(Self {
            text: text.to_string(),
            matcher,
        })
    }

    /// The normalized (trimmed, original-case) query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All matches of the query within one run's text, left to right.
    ///
    /// Matches never overlap: scanning resumes immediately after the end of
    /// the previous match. Offsets are byte offsets into the original-case
    /// text, so callers can slice it directly for width estimation.
    pub fn scan_run(&self, text: &str) -> Vec<RunMatch> {
        let Some(matcher) = &self.matcher else {
            return Vec::new();
        };
        matcher
            .find_iter(text)
            .map(|m| RunMatch {
                start: m.start(),
                len: m.end() - m.start(),
            })
            .collect()
    }
}

/// One match within a single text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMatch {
    /// Byte offset of the match start within the run's text
    pub start: usize,
    /// Byte length of the matched text (the query length, except for the
    /// rare case mappings that change length)
    pub len: usize,
}
