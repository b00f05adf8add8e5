//! Development diagnostics printed with `--diagnostic`.

use std::io::{self, Write};

use serde::Serialize;

use crate::file::RewriteReport;
use crate::pattern::{CoordinatePair, find_first, match_at_start};

/// How many trailing characters of the document to show before and after a rewrite
pub const DIAGNOSTIC_TAIL_CHARS: usize = 100;

/// Sample used to sanity-check the pattern: a pair embedded in non-numeric text
pub const PROBE_SAMPLE: &str = "oijf43.435093,\n-9043.90345jkkh";

/// Last `n` characters of `text` (the whole text if it is shorter)
pub fn tail(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Outcome of testing the pair pattern against a sample string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub sample: String,
    /// Pair that starts at the first byte of the sample
    pub anchored: Option<CoordinatePair>,
    /// First pair anywhere in the sample
    pub search: Option<CoordinatePair>,
}

pub fn probe(sample: &str) -> ProbeResult {
    ProbeResult {
        sample: sample.to_string(),
        anchored: match_at_start(sample),
        search: find_first(sample),
    }
}

impl std::fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.anchored {
            Some(pair) => writeln!(f, "anchored match: {:?}", pair.span.slice(&self.sample))?,
            None => writeln!(f, "anchored match: none")?,
        }
        match &self.search {
            Some(pair) => write!(
                f,
                "search match: span={}..{}, match={:?}",
                pair.span.byte_start,
                pair.span.byte_end,
                pair.span.slice(&self.sample)
            ),
            None => write!(f, "search match: none"),
        }
    }
}

/// Write the tail before, the probe of [`PROBE_SAMPLE`], the tail after, and
/// the location of every swapped pair in the original document.
pub fn write_diagnostics(out: &mut dyn Write, rewrite: &RewriteReport) -> io::Result<()> {
    writeln!(out, "{}", rewrite.tail_before)?;
    writeln!(out, "{}", probe(PROBE_SAMPLE))?;
    writeln!(out, "{}", rewrite.tail_after)?;
    for pair in &rewrite.pairs {
        writeln!(out, "pair {}", pair)?;
    }
    out.flush()
}
