//! Removal of words that are themselves table symbols from a word report
//!
//! Single symbols in a word report are noise for word learning: the tokenizer
//! can already produce them, so they are filtered out before counting.

use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::report::{ReportReader, write_entry};
use crate::tokenize::symbols::SymbolSet;
use std::io::{BufRead, Write};
use tracing::info;

/// Outcome of a strip pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripSummary {
    /// Input lines consumed
    pub lines_read: u64,
    /// Malformed input lines skipped
    pub lines_skipped: u64,
    /// Entries written to the output
    pub kept: u64,
    /// Entries dropped because the word is a known symbol
    pub removed: u64,
}

/// Copy report entries whose word is not in `symbols`, preserving order
///
/// # Errors
///
/// Returns an error if reading the report or writing the output fails
pub fn strip_symbols<R, W>(
    reader: R,
    writer: &mut W,
    symbols: &SymbolSet,
    progress: &mut ProgressManager,
) -> Result<StripSummary>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut summary = StripSummary::default();
    let mut entries = ReportReader::new(reader);

    progress.start_lines("strip");
    for entry in entries.by_ref() {
        let entry = entry?;
        progress.tick_line();

        if symbols.contains(&entry.token) {
            summary.removed += 1;
            continue;
        }
        write_entry(writer, &entry.token, entry.count)?;
        summary.kept += 1;
    }
    writer.flush()?;

    summary.lines_read = entries.lines_read();
    summary.lines_skipped = entries.skipped();
    progress.finish("report stripped");
    info!(
        lines = summary.lines_read,
        skipped = summary.lines_skipped,
        kept = summary.kept,
        removed = summary.removed,
        "strip finished"
    );
    Ok(summary)
}
