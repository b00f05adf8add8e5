// Position tracking module
pub mod position;

// Coordinate-pair pattern module
pub mod pattern;

// Swap engine module
pub mod swap;

// File operations module
pub mod file;

// Diagnostics module
pub mod diagnostic;

// Run configuration module
pub mod config;

// Run report module
pub mod report;

// Re-exports
pub use position::{Position, Span, byte_to_position, span_to_positions};
pub use pattern::{CoordinatePair, PAIR_PATTERN, PAIR_REPLACEMENT, PairLocation, find_pairs};
pub use swap::{SwapOutcome, swap_pairs};
pub use file::{FileError, RewriteReport, checksum, rewrite_in_place};
pub use diagnostic::{
    DIAGNOSTIC_TAIL_CHARS, PROBE_SAMPLE, ProbeResult, probe, tail, write_diagnostics,
};
pub use config::{Args, Config, DEFAULT_TARGET, OutputFormat};
pub use report::{RunReport, generate_run_id};
