//! Symbol table model and storage

/// Repository interface the ranking jobs are written against
pub mod repository;
/// `SQLite` implementation of the repository
pub mod sqlite;
/// Rows, type codes and pattern groups
pub mod symbol;

pub use repository::{SymbolRepository, SymbolScope};
pub use sqlite::SqliteRepository;
pub use symbol::{MatchType, PatternGroup, SymbolRow, SymbolType};
