//! Unit tests mirroring the source tree, one file per source file


use rusqlite::{Connection, params};
use symrank::table::SqliteRepository;

/// Layout of the symbol table written by the transliteration engine
pub const SCHEMA: &str = "CREATE TABLE symbols (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type INTEGER,
    pattern TEXT,
    value1 TEXT,
    value2 TEXT,
    value3 TEXT,
    tag TEXT,
    match_type INTEGER,
    priority INTEGER DEFAULT 0,
    accept_condition INTEGER,
    flags INTEGER DEFAULT 0,
    weight INTEGER
)";

/// Row fixture: pattern, symbol, type code, match type code
pub type Row<'a> = (&'a str, &'a str, i64, i64);

/// Create the schema on `connection` and insert `rows` in order
pub fn seed(connection: &Connection, rows: &[Row<'_>]) -> rusqlite::Result<()> {
    connection.execute_batch(SCHEMA)?;
    for (pattern, symbol, symbol_type, match_type) in rows {
        connection.execute(
            "INSERT INTO symbols (type, pattern, value1, match_type, weight) VALUES (?1, ?2, ?3, ?4, 0)",
            params![symbol_type, pattern, symbol, match_type],
        )?;
    }
    Ok(())
}

/// In-memory symbol table holding `rows`
pub fn symbol_table(rows: &[Row<'_>]) -> symrank::Result<SqliteRepository> {
    let connection = Connection::open_in_memory()?;
    seed(&connection, rows)?;
    Ok(SqliteRepository::from_connection(connection))
}

/// Current weight of the row identified by `pattern` and `symbol`
pub fn weight_of(repository: &SqliteRepository, pattern: &str, symbol: &str) -> symrank::Result<i64> {
    Ok(repository.connection().query_row(
        "SELECT weight FROM symbols WHERE pattern = ?1 AND value1 = ?2",
        params![pattern, symbol],
        |row| row.get(0),
    )?)
}
