//! Rewriting table weights from a symbol frequency report

use crate::frequency::ranking::{RankPolicy, candidates, rank_group};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::report::ReportReader;
use crate::table::repository::SymbolRepository;
use crate::table::symbol::MatchType;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How an update pass ranks and persists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightOptions {
    /// Rank policy applied to every group
    pub policy: RankPolicy,
    /// Restrict updated rows to one match type
    pub match_type: Option<MatchType>,
    /// Compute and list ranks but roll the updates back
    pub dry_run: bool,
}

/// Outcome of an update pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightSummary {
    /// Groups whose weights were rewritten
    pub groups_ranked: usize,
    /// Groups left untouched for lack of frequency data
    pub groups_skipped: usize,
    /// Table rows changed by update statements
    pub rows_updated: usize,
}

/// Observed frequency per symbol from a symbol report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolFrequencies {
    /// Frequency keyed by symbol; a later line for the same symbol wins
    pub counts: HashMap<String, u64>,
    /// Lines consumed
    pub lines_read: u64,
    /// Malformed lines skipped
    pub lines_skipped: u64,
}

/// Read a symbol report into a lookup table
///
/// # Errors
///
/// Returns an error if reading the report fails
pub fn load_frequencies<R: BufRead>(reader: R) -> Result<SymbolFrequencies> {
    let mut entries = ReportReader::new(reader);
    let mut counts = HashMap::new();
    for entry in entries.by_ref() {
        let entry = entry?;
        counts.insert(entry.token, entry.count);
    }

    Ok(SymbolFrequencies {
        counts,
        lines_read: entries.lines_read(),
        lines_skipped: entries.skipped(),
    })
}

/// Rank every multi-candidate group and persist the ranks as weights
///
/// Each ranked symbol is listed on `listing` as `pattern rank symbol`, groups in
/// table order and symbols by descending rank. All updates are committed once
/// at the end, or rolled back when `options.dry_run` is set.
///
/// # Errors
///
/// Returns an error if the table cannot be read or updated, or if writing the
/// listing fails; pending updates are then left uncommitted
pub fn update_weights<S, W>(
    repository: &mut S,
    frequencies: &HashMap<String, u64>,
    options: WeightOptions,
    listing: &mut W,
    progress: &mut ProgressManager,
) -> Result<WeightSummary>
where
    S: SymbolRepository + ?Sized,
    W: Write + ?Sized,
{
    let groups = repository.groups_with_multiple_candidates(options.match_type)?;
    let mut summary = WeightSummary::default();

    progress.start_groups("weights", groups.len());
    for group in &groups {
        let Some(ranks) = rank_group(options.policy, &candidates(group, frequencies)) else {
            debug!(pattern = %group.pattern, "no frequency data, weights left unchanged");
            summary.groups_skipped += 1;
            progress.advance_group(&group.pattern);
            continue;
        };

        for ranked in &ranks {
            writeln!(listing, "{} {} {}", group.pattern, ranked.rank, ranked.symbol)?;
            let weight = i64::try_from(ranked.rank).unwrap_or(i64::MAX);
            let changed = repository.update_weight(&group.pattern, &ranked.symbol, weight)?;
            if changed == 0 {
                warn!(pattern = %group.pattern, symbol = %ranked.symbol, "no row updated");
            } else {
                debug!(pattern = %group.pattern, symbol = %ranked.symbol, weight, "weight set");
            }
            summary.rows_updated += changed;
        }
        summary.groups_ranked += 1;
        progress.advance_group(&group.pattern);
    }
    listing.flush()?;

    if options.dry_run {
        repository.rollback()?;
    } else {
        repository.commit()?;
    }

    progress.finish("weights updated");
    info!(
        policy = %options.policy,
        match_type = ?options.match_type,
        dry_run = options.dry_run,
        ranked = summary.groups_ranked,
        skipped = summary.groups_skipped,
        rows = summary.rows_updated,
        "weight update finished"
    );
    Ok(summary)
}
