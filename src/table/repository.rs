//! Storage-agnostic access to the symbol table

use crate::io::error::Result;
use crate::table::symbol::{MatchType, PatternGroup};

/// Which rows contribute symbol values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolScope {
    /// Every row in the table
    All,
    /// Only rows whose pattern has more than one candidate
    #[default]
    MultiCandidate,
}

/// Queries and updates the ranking jobs need from a symbol table
///
/// Updates are batched: nothing is visible to other readers until
/// [`SymbolRepository::commit`] succeeds.
pub trait SymbolRepository {
    /// Symbol values in table order, duplicates included
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be queried
    fn symbol_values(&self, scope: SymbolScope) -> Result<Vec<String>>;

    /// Patterns with more than one candidate row
    ///
    /// Groups appear in the order their first row appears; rows keep table
    /// order. Candidates are counted over the whole table; with `match_type`
    /// set, only rows of that match type are returned for each group.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be queried or a
    /// returned row has no symbol value
    fn groups_with_multiple_candidates(
        &self,
        match_type: Option<MatchType>,
    ) -> Result<Vec<PatternGroup>>;

    /// Set the weight of the row identified by `pattern` and `symbol`
    ///
    /// Returns the number of rows changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the update statement fails
    fn update_weight(&mut self, pattern: &str, symbol: &str, weight: i64) -> Result<usize>;

    /// Make all pending updates durable
    ///
    /// # Errors
    ///
    /// Returns an error if the storage rejects the commit
    fn commit(&mut self) -> Result<()>;

    /// Discard all pending updates
    ///
    /// # Errors
    ///
    /// Returns an error if the storage rejects the rollback
    fn rollback(&mut self) -> Result<()>;
}
