use tracing::{debug, trace};

use crate::pattern::{CoordinatePair, PAIR_RE, PAIR_REPLACEMENT, find_pairs};
use crate::position::byte_to_position;

/// Result of swapping every coordinate pair in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Document after substitution
    pub text: String,
    /// Pairs as they were found in the input, in document order
    pub pairs: Vec<CoordinatePair>,
}

/// Swap the two numbers of every coordinate pair in `text`.
///
/// Each match of `A,\n<spaces>B` becomes `B,\nA`. Spaces before B are dropped.
/// Text outside the matches is copied unchanged, so a document with no pairs
/// comes back byte-for-byte identical.
pub fn swap_pairs(text: &str) -> SwapOutcome {
    let pairs = find_pairs(text);

    if pairs.is_empty() {
        debug!("no coordinate pairs found");
        return SwapOutcome {
            text: text.to_string(),
            pairs,
        };
    }

    for pair in &pairs {
        let pos = byte_to_position(text, pair.span.byte_start);
        trace!(
            line = pos.line,
            column = pos.column,
            first = %pair.first,
            second = %pair.second,
            "swapping pair"
        );
    }

    let swapped = PAIR_RE.replace_all(text, PAIR_REPLACEMENT).into_owned();
    debug!(count = pairs.len(), "swapped coordinate pairs");

    SwapOutcome {
        text: swapped,
        pairs,
    }
}
