//! Ranking constants and runtime configuration defaults

// Percentage policy
/// Scale that percentage ranks are normalized to
pub const PERCENTAGE_SCALE: u64 = 100;

// Type-aware policy seeds, so an empty category never divides by zero
/// Starting value for the least frequent plain consonant in a group
pub const MIN_CONSONANT_SEED: u64 = 100;
/// Starting value for the most frequent consonant-vowel form in a group
pub const MAX_CONSONANT_VOWEL_SEED: u64 = 1;

// Target script recognized by the tokenizer
/// First code point of the Malayalam block
pub const MALAYALAM_START: char = '\u{0D00}';
/// Last code point of the Malayalam block
pub const MALAYALAM_END: char = '\u{0D7F}';
/// Zero width non-joiner, part of conjunct spelling
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
/// Zero width joiner, part of chillu and conjunct spelling
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

// Progress display settings
/// Number of input lines between progress refreshes
pub const PROGRESS_TICK_LINES: u64 = 1_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "symrank=info";
/// Filter used with `--verbose` when `RUST_LOG` is not set
pub const VERBOSE_LOG_FILTER: &str = "symrank=debug";

// Report format
/// Separator between the token and count fields of a report line
pub const REPORT_SEPARATOR: char = ' ';
