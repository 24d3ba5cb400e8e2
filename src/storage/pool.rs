//! Connection pool for the SQLite store.
//!
//! Uses r2d2 with r2d2_sqlite for pooled access. SQLite WAL mode allows
//! concurrent readers; writes are serialized by SQLite itself, within the
//! busy timeout applied in the pragmas.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use super::schema::{apply_pragmas, initialize_schema};
use super::StoreError;

/// Pooled connection handle for the subscription store.
///
/// Cheap to clone; all clones share the same underlying pool.
#[derive(Clone)]
pub struct StorePool {
    pool: Pool<SqliteConnectionManager>,
}

impl StorePool {
    /// Create a new pool for the given database path.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the SQLite database file
    /// * `max_size` - Maximum number of connections in the pool
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created.
    pub fn new<P: AsRef<Path>>(db_path: P, max_size: u32) -> Result<Self, StoreError> {
        let manager = SqliteConnectionManager::file(db_path);

        let pool = Pool::builder()
            .max_size(max_size)
            .connection_customizer(Box::new(PragmaCustomizer))
            .build(manager)?;

        Ok(Self { pool })
    }

    /// Get a connection from the pool.
    pub fn get(&self) -> Result<PooledConnection<SqliteConnectionManager>, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Ensure the schema exists, creating it if absent.
    ///
    /// Called once at startup; failure is fatal to the server.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let conn = self.get()?;
        initialize_schema(&conn)?;
        Ok(())
    }

    /// Cheap liveness check for the store health endpoint.
    pub fn ping(&self) -> Result<(), StoreError> {
        let conn = self.get()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}

/// Connection customizer that applies pragmas to every pooled connection.
#[derive(Debug)]
struct PragmaCustomizer;

impl r2d2::CustomizeConnection<rusqlite::Connection, rusqlite::Error> for PragmaCustomizer {
    fn on_acquire(&self, conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
        apply_pragmas(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_pool_creation_and_ping() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let pool = StorePool::new(&db_path, 5).unwrap();
        pool.initialize().unwrap();
        pool.ping().unwrap();

        let conn = pool.get().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM subscriptions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_clones_share_the_same_store() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let pool = StorePool::new(&db_path, 5).unwrap();
        pool.initialize().unwrap();

        let clone = pool.clone();
        clone
            .get()
            .unwrap()
            .execute(
                "INSERT INTO subscriptions (name, category, cost, billing_cycle, next_billing)
                 VALUES ('Netflix', 'Streaming', 15.99, 'monthly', '2024-07-01')",
                [],
            )
            .unwrap();

        let count: i64 = pool
            .get()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM subscriptions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
