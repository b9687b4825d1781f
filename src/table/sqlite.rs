//! `SQLite` backed symbol table

use crate::io::error::{RankError, Result, WithStatement};
use crate::table::repository::{SymbolRepository, SymbolScope};
use crate::table::symbol::{MatchType, PatternGroup, SymbolRow, SymbolType};
use rusqlite::{Connection, OpenFlags, params};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const MULTI_CANDIDATE_PATTERNS: &str =
    "SELECT pattern FROM symbols GROUP BY pattern HAVING COUNT(pattern) > 1";

/// Symbol table stored in an `SQLite` database with a `symbols` table
pub struct SqliteRepository {
    connection: Connection,
}

impl SqliteRepository {
    /// Open an existing symbol table file for reading and writing
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not a database
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RankError::FileSystem {
                path: path.to_path_buf(),
                operation: "open symbol table",
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_statement("open symbol table")?;
        debug!(path = %path.display(), "opened symbol table");
        Ok(Self::from_connection(connection))
    }

    /// Wrap an already open connection
    pub const fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Underlying connection
    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    fn begin_if_needed(&self) -> Result<()> {
        if self.connection.is_autocommit() {
            self.connection
                .execute_batch("BEGIN")
                .with_statement("begin weight update batch")?;
        }
        Ok(())
    }
}

fn read_symbol_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SymbolRow> {
    Ok(SymbolRow {
        pattern: row.get(0)?,
        symbol: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        symbol_type: SymbolType::from_code(row.get::<_, Option<i64>>(2)?.unwrap_or(0)),
    })
}

impl SymbolRepository for SqliteRepository {
    fn symbol_values(&self, scope: SymbolScope) -> Result<Vec<String>> {
        let query = match scope {
            SymbolScope::All => "SELECT value1 FROM symbols ORDER BY rowid".to_string(),
            SymbolScope::MultiCandidate => format!(
                "SELECT value1 FROM symbols WHERE pattern IN ({MULTI_CANDIDATE_PATTERNS}) ORDER BY rowid"
            ),
        };

        let mut statement = self
            .connection
            .prepare(&query)
            .with_statement("select symbol values")?;
        let values = statement
            .query_map([], |row| row.get::<_, Option<String>>(0))
            .with_statement("select symbol values")?
            .filter_map(std::result::Result::transpose)
            .collect::<rusqlite::Result<Vec<String>>>()
            .with_statement("read symbol values")?;

        Ok(values)
    }

    fn groups_with_multiple_candidates(
        &self,
        match_type: Option<MatchType>,
    ) -> Result<Vec<PatternGroup>> {
        let mut query = format!(
            "SELECT pattern, value1, type FROM symbols WHERE pattern IN ({MULTI_CANDIDATE_PATTERNS})"
        );
        if match_type.is_some() {
            query.push_str(" AND match_type = ?1");
        }
        query.push_str(" ORDER BY rowid");

        let mut statement = self
            .connection
            .prepare(&query)
            .with_statement("select pattern groups")?;

        let rows = match match_type {
            Some(kind) => statement
                .query_map(params![kind.code()], read_symbol_row)
                .with_statement("select pattern groups")?
                .collect::<rusqlite::Result<Vec<SymbolRow>>>(),
            None => statement
                .query_map([], read_symbol_row)
                .with_statement("select pattern groups")?
                .collect::<rusqlite::Result<Vec<SymbolRow>>>(),
        }
        .with_statement("read pattern groups")?;

        if let Some(row) = rows.iter().find(|row| row.symbol.is_empty()) {
            return Err(RankError::InvalidTableData {
                pattern: row.pattern.clone(),
                reason: "candidate row has no symbol value".to_string(),
            });
        }

        let mut groups: Vec<PatternGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for row in rows {
            if let Some(group) = index.get(&row.pattern).and_then(|&i| groups.get_mut(i)) {
                group.rows.push(row);
                continue;
            }
            index.insert(row.pattern.clone(), groups.len());
            groups.push(PatternGroup {
                pattern: row.pattern.clone(),
                rows: vec![row],
            });
        }

        debug!(groups = groups.len(), "loaded multi-candidate pattern groups");
        Ok(groups)
    }

    fn update_weight(&mut self, pattern: &str, symbol: &str, weight: i64) -> Result<usize> {
        self.begin_if_needed()?;
        self.connection
            .execute(
                "UPDATE symbols SET weight = ?1 WHERE pattern = ?2 AND value1 = ?3",
                params![weight, pattern, symbol],
            )
            .with_statement("update symbol weight")
    }

    fn commit(&mut self) -> Result<()> {
        if !self.connection.is_autocommit() {
            self.connection
                .execute_batch("COMMIT")
                .with_statement("commit weight updates")?;
        }
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        if !self.connection.is_autocommit() {
            self.connection
                .execute_batch("ROLLBACK")
                .with_statement("roll back weight updates")?;
        }
        Ok(())
    }
}
