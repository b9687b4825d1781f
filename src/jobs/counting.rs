//! Symbol frequency passes over raw corpora and word frequency reports

use crate::frequency::tally::FrequencyTally;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::report::{LossyLines, ReportReader};
use crate::table::repository::{SymbolRepository, SymbolScope};
use crate::tokenize::munch::Tokenizer;
use crate::tokenize::script::Script;
use crate::tokenize::symbols::SymbolSet;
use std::io::BufRead;
use tracing::{debug, info};

/// Outcome of a counting pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Input lines consumed
    pub lines_read: u64,
    /// Malformed input lines skipped
    pub lines_skipped: u64,
    /// Symbols emitted by the tokenizer
    pub tokens_counted: u64,
    /// Distinct symbols in the tally
    pub distinct_symbols: usize,
    /// Script characters no known symbol covered
    pub dropped_characters: u64,
}

/// Build a tokenizer over the symbols of `repository`
///
/// # Errors
///
/// Returns an error if the symbol values cannot be read
pub fn load_tokenizer<R: SymbolRepository + ?Sized>(
    repository: &R,
    scope: SymbolScope,
    script: Script,
) -> Result<Tokenizer> {
    let symbols: SymbolSet = repository.symbol_values(scope)?.into_iter().collect();
    debug!(
        symbols = symbols.len(),
        longest = symbols.longest(),
        ?scope,
        "loaded known symbols"
    );
    Ok(Tokenizer::new(symbols, script))
}

/// Count every symbol occurrence in free corpus text, one per occurrence
///
/// # Errors
///
/// Returns an error if reading the corpus fails
pub fn count_corpus<R: BufRead>(
    reader: R,
    tokenizer: &Tokenizer,
    progress: &mut ProgressManager,
) -> Result<(FrequencyTally, CountSummary)> {
    let mut tally = FrequencyTally::new();
    let mut summary = CountSummary::default();
    let mut lines = LossyLines::new(reader);

    progress.start_lines("corpus");
    for line in lines.by_ref() {
        let line = line?;
        let mut tokens = tokenizer.text(&line);
        for symbol in tokens.by_ref() {
            tally.add(symbol, 1);
            summary.tokens_counted += 1;
        }
        summary.dropped_characters += tokens.dropped() as u64;
        progress.tick_line();
    }

    summary.lines_read = lines.line_number();
    summary.distinct_symbols = tally.len();
    progress.finish("corpus counted");
    log_summary("corpus", &summary);
    Ok((tally, summary))
}

/// Count symbols of every word in a word report, weighted by word frequency
///
/// # Errors
///
/// Returns an error if reading the report fails
pub fn count_words<R: BufRead>(
    reader: R,
    tokenizer: &Tokenizer,
    progress: &mut ProgressManager,
) -> Result<(FrequencyTally, CountSummary)> {
    let mut tally = FrequencyTally::new();
    let mut summary = CountSummary::default();
    let mut entries = ReportReader::new(reader);

    progress.start_lines("words");
    for entry in entries.by_ref() {
        let entry = entry?;
        let mut tokens = tokenizer.text(&entry.token);
        for symbol in tokens.by_ref() {
            tally.add(symbol, entry.count);
            summary.tokens_counted += 1;
        }
        summary.dropped_characters += tokens.dropped() as u64;
        progress.tick_line();
    }

    summary.lines_read = entries.lines_read();
    summary.lines_skipped = entries.skipped();
    summary.distinct_symbols = tally.len();
    progress.finish("words counted");
    log_summary("words", &summary);
    Ok((tally, summary))
}

fn log_summary(pass: &'static str, summary: &CountSummary) {
    info!(
        pass,
        lines = summary.lines_read,
        skipped = summary.lines_skipped,
        tokens = summary.tokens_counted,
        symbols = summary.distinct_symbols,
        dropped = summary.dropped_characters,
        "counting finished"
    );
}
