//! SQLite-backed result store

use std::path::Path;

use rusqlite::{Connection, params};
use testpad_core::{ResultMap, ResultStore, ResultValue, TestpadError};

/// Per-step results persisted in SQLite
#[derive(Debug)]
pub struct SqliteResultStore {
    conn: Connection,
}

impl SqliteResultStore {
    /// Open (creating if needed) the database at `db_path`
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, TestpadError> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path).map_err(store_err)?;
        log::debug!("opened result store at {}", db_path.display());
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open a throwaway in-memory database
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, TestpadError> {
        let conn = Connection::open_in_memory().map_err(store_err)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), TestpadError> {
        self.conn
            .execute_batch(
                r#"
                PRAGMA journal_mode=WAL;
                PRAGMA synchronous=NORMAL;

                CREATE TABLE IF NOT EXISTS results (
                  user_id TEXT NOT NULL,
                  resource_id TEXT NOT NULL,
                  step_index INTEGER NOT NULL,
                  value TEXT NOT NULL,
                  updated_at_ms INTEGER NOT NULL,
                  PRIMARY KEY (user_id, resource_id, step_index)
                );
                "#,
            )
            .map_err(store_err)
    }
}

impl ResultStore for SqliteResultStore {
    fn stored_results(&self, user_id: &str, resource_id: &str) -> Result<ResultMap, TestpadError> {
        let mut stmt = self
            .conn
            .prepare(
                r#"
                SELECT step_index, value
                FROM results
                WHERE user_id = ?1 AND resource_id = ?2
                ORDER BY step_index ASC
                "#,
            )
            .map_err(store_err)?;
        let rows = stmt
            .query_map(params![user_id, resource_id], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(store_err)?;

        let mut results = ResultMap::new();
        for row in rows {
            let (index, value) = row.map_err(store_err)?;
            match (usize::try_from(index), value.parse::<ResultValue>()) {
                (Ok(index), Ok(value)) => {
                    results.insert(index, value);
                }
                _ => log::warn!(
                    "skipping stored result {:?} at index {} for {}/{}",
                    value,
                    index,
                    user_id,
                    resource_id
                ),
            }
        }
        Ok(results)
    }

    fn set_result(
        &mut self,
        user_id: &str,
        resource_id: &str,
        step_index: usize,
        value: Option<ResultValue>,
    ) -> Result<(), TestpadError> {
        let index = i64::try_from(step_index)
            .map_err(|_| TestpadError::Store(format!("step index {} too large", step_index)))?;

        match value {
            Some(value) => {
                self.conn
                    .execute(
                        r#"
                        INSERT INTO results(user_id, resource_id, step_index, value, updated_at_ms)
                        VALUES (?1, ?2, ?3, ?4, ?5)
                        ON CONFLICT(user_id, resource_id, step_index) DO UPDATE SET
                          value=excluded.value, updated_at_ms=excluded.updated_at_ms
                        "#,
                        params![user_id, resource_id, index, value.as_str(), now_ms()],
                    )
                    .map_err(store_err)?;
            }
            None => {
                self.conn
                    .execute(
                        "DELETE FROM results WHERE user_id = ?1 AND resource_id = ?2 AND step_index = ?3",
                        params![user_id, resource_id, index],
                    )
                    .map_err(store_err)?;
            }
        }
        log::debug!(
            "stored {}/{} step {} = {:?}",
            user_id,
            resource_id,
            step_index,
            value
        );
        Ok(())
    }
}

fn store_err(err: rusqlite::Error) -> TestpadError {
    TestpadError::Store(err.to_string())
}

fn now_ms() -> i64 {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    now.as_millis() as i64
}
