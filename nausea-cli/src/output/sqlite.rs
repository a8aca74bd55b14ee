//! SQLite result store
//!
//! Each batch replaces the `text_info` table wholesale inside one transaction.

use anyhow::{Context, Result};
use nausea_core::AnalysisResult;
use nausea_engine::{EngineError, ResultSink};
use rusqlite::{params, Connection};
use std::path::Path;

/// Table holding the last persisted batch
pub const TABLE_NAME: &str = "text_info";

/// Sink writing to a SQLite database file
pub struct SqliteSink {
    connection: Connection,
}

impl SqliteSink {
    /// Open or create the database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let connection = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        Ok(Self { connection })
    }

    /// Wrap an existing connection
    pub fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Underlying connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    fn replace_table(&mut self, results: &[AnalysisResult]) -> rusqlite::Result<()> {
        let tx = self.connection.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS {TABLE_NAME}"), [])?;
        tx.execute(
            &format!("CREATE TABLE {TABLE_NAME} (filename TEXT, nausea REAL, cheat INTEGER)"),
            [],
        )?;
        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO {TABLE_NAME} (filename, nausea, cheat) VALUES (?1, ?2, ?3)"
            ))?;
            for result in results {
                insert.execute(params![
                    result.identifier,
                    result.nausea_score,
                    i64::from(result.repaired)
                ])?;
            }
        }
        tx.commit()
    }
}

impl ResultSink for SqliteSink {
    fn persist(&mut self, results: &[AnalysisResult]) -> nausea_engine::Result<()> {
        self.replace_table(results)
            .map_err(|e| EngineError::Sink(format!("sqlite: {e}")))?;
        log::info!("Stored {} rows in {TABLE_NAME}", results.len());
        Ok(())
    }
}
