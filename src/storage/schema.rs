//! Schema initialization and connection pragmas.
//!
//! The schema is a single `subscriptions` table. Creation is idempotent;
//! the server must not accept traffic if it fails.

use rusqlite::Connection;

/// Apply connection pragmas.
///
/// WAL mode allows concurrent readers alongside a single writer, and the
/// busy timeout covers writer contention between pooled connections.
pub fn apply_pragmas(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(())
}

/// Create the subscriptions table if it does not exist.
///
/// `next_billing` holds an ISO-8601 date string, so lexicographic order
/// matches chronological order and SQLite's `date()` comparisons apply.
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS subscriptions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            category      TEXT NOT NULL,
            cost          REAL NOT NULL,
            billing_cycle TEXT NOT NULL,
            next_billing  TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
}
