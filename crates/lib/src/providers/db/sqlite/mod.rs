//! # SQLite Provider
//!
//! Storage for the interaction log and the document/chunk store, backed by
//! a local SQLite database through Turso. The provider holds a `Database`
//! handle; each operation takes its own connection, and clones share the
//! same underlying database.

use crate::types::InteractionRecord;
use chrono::Utc;
use std::fmt::{self, Debug};
use thiserror::Error;
use tracing::{debug, info};
use turso::{params, Database, Value as TursoValue};

mod sql;

/// Errors from the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] turso::Error),
    #[error("No interaction found with id {0}")]
    NotFound(i64),
}

/// The fields of an interaction to be appended to the log. The id and
/// timestamp are assigned at insert.
#[derive(Debug, Clone, Default)]
pub struct NewInteraction {
    pub intent: String,
    pub original_prompt: String,
    pub optimized_prompt: Option<String>,
    pub original_response: Option<String>,
    pub optimized_response: Option<String>,
}

/// A provider for the local SQLite database.
#[derive(Clone)]
pub struct SqliteProvider {
    pub db: Database,
}

impl SqliteProvider {
    /// Creates a new `SqliteProvider` from a file path, or ":memory:" for an
    /// isolated in-memory database. To share an in-memory database across
    /// consumers (e.g. in tests), create one provider and `.clone()` it.
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        let db = turso::Builder::new_local(db_path).build().await?;

        // WAL mode helps concurrent readers on file-based databases and is
        // harmless for in-memory ones. PRAGMA returns a row, so use `query`.
        let conn = db.connect()?;
        conn.query("PRAGMA journal_mode=WAL;", ()).await?;

        Ok(Self { db })
    }

    /// Ensures all required tables and indexes exist. Idempotent, safe to
    /// call on every startup.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        let conn = self.db.connect()?;
        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ()).await?;
        }
        Ok(())
    }

    /// A helper for tests to pre-populate data by executing multiple SQL
    /// statements.
    pub async fn initialize_with_data(&self, init_sql: &str) -> Result<(), StoreError> {
        let conn = self.db.connect()?;
        for statement in init_sql.split(';').filter(|s| !s.trim().is_empty()) {
            conn.execute(statement, ()).await?;
        }
        Ok(())
    }

    // --- Interaction log ---

    /// Appends one interaction to the log and returns its assigned id.
    /// The timestamp is assigned here, as UTC RFC 3339.
    pub async fn append_interaction(&self, entry: NewInteraction) -> Result<i64, StoreError> {
        let conn = self.db.connect()?;
        let timestamp = Utc::now().to_rfc3339();

        let mut stmt = conn
            .prepare(
                "INSERT INTO prompt_logs
                 (timestamp, intent, original_prompt, optimized_prompt, original_response, optimized_response, feedback)
                 VALUES (?, ?, ?, ?, ?, ?, NULL) RETURNING id",
            )
            .await?;

        let mut rows = stmt
            .query(params![
                timestamp,
                entry.intent,
                entry.original_prompt,
                entry.optimized_prompt,
                entry.original_response,
                entry.optimized_response
            ])
            .await?;

        let id = match rows.next().await? {
            Some(row) => match row.get_value(0)? {
                TursoValue::Integer(id) => id,
                _ => 0,
            },
            None => 0,
        };

        debug!(id, "Appended interaction to prompt_logs");
        Ok(id)
    }

    /// Sets the feedback column for an existing interaction.
    ///
    /// Updating an id that does not exist is an error, not a silent no-op:
    /// the rows-affected count is checked and `StoreError::NotFound` is
    /// returned when nothing changed.
    pub async fn set_feedback(&self, id: i64, feedback: &str) -> Result<(), StoreError> {
        let conn = self.db.connect()?;
        let affected = conn
            .execute(
                "UPDATE prompt_logs SET feedback = ? WHERE id = ?",
                params![feedback, id],
            )
            .await?;

        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Fetches one interaction row by id.
    pub async fn get_interaction(&self, id: i64) -> Result<InteractionRecord, StoreError> {
        let conn = self.db.connect()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, timestamp, intent, original_prompt, optimized_prompt,
                        original_response, optimized_response, feedback
                 FROM prompt_logs WHERE id = ?",
            )
            .await?;
        let mut rows = stmt.query(params![id]).await?;

        let row = rows.next().await?.ok_or(StoreError::NotFound(id))?;

        Ok(InteractionRecord {
            id: as_integer(row.get_value(0)?),
            timestamp: as_text(row.get_value(1)?),
            intent: as_text(row.get_value(2)?),
            original_prompt: as_text(row.get_value(3)?),
            optimized_prompt: as_optional_text(row.get_value(4)?),
            original_response: as_optional_text(row.get_value(5)?),
            optimized_response: as_optional_text(row.get_value(6)?),
            feedback: as_optional_text(row.get_value(7)?),
        })
    }

    /// Counts the rows in the interaction log. Used by tests to assert that
    /// rejected requests write nothing.
    pub async fn count_interactions(&self) -> Result<i64, StoreError> {
        let conn = self.db.connect()?;
        let mut rows = conn.query("SELECT COUNT(*) FROM prompt_logs", ()).await?;
        let count = match rows.next().await? {
            Some(row) => as_integer(row.get_value(0)?),
            None => 0,
        };
        Ok(count)
    }

    // --- Document store ---

    /// Inserts or refreshes the `documents` row for a source and returns its
    /// id. Re-uploading a source clears its previous chunks so the new
    /// upload replaces them instead of accumulating duplicates.
    pub async fn upsert_document(&self, source: &str) -> Result<i64, StoreError> {
        let conn = self.db.connect()?;
        let uploaded_at = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO documents (source, uploaded_at) VALUES (?, ?)
             ON CONFLICT(source) DO UPDATE SET uploaded_at = excluded.uploaded_at",
            params![source, uploaded_at],
        )
        .await?;

        let mut stmt = conn
            .prepare("SELECT id FROM documents WHERE source = ?")
            .await?;
        let mut rows = stmt.query(params![source]).await?;
        let document_id = match rows.next().await? {
            Some(row) => as_integer(row.get_value(0)?),
            None => 0,
        };

        conn.execute(
            "DELETE FROM document_chunks WHERE document_id = ?",
            params![document_id],
        )
        .await?;

        Ok(document_id)
    }

    /// Stores one embedded chunk for a document.
    pub async fn insert_chunk(
        &self,
        document_id: i64,
        chunk_index: i64,
        content: &str,
        embedding: &[f32],
    ) -> Result<(), StoreError> {
        let conn = self.db.connect()?;

        // Store the f32 vector as its raw little-endian bytes, the layout
        // the vector distance functions read back.
        let embedding_bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(embedding.as_ptr() as *const u8, embedding.len() * 4)
        };

        conn.execute(
            "INSERT INTO document_chunks (document_id, chunk_index, content, embedding)
             VALUES (?, ?, ?, ?)",
            params![document_id, chunk_index, content, embedding_bytes],
        )
        .await?;

        Ok(())
    }

    /// Searches for the chunks closest to a query vector.
    ///
    /// Scores are cosine distances from `vector_distance_cos`: lower means
    /// more similar, so the ranking is ascending.
    pub async fn vector_search(
        &self,
        query_vector: Vec<f32>,
        limit: u32,
    ) -> Result<Vec<ChunkRow>, StoreError> {
        let conn = self.db.connect()?;

        // Turso's vector functions take the vector as a literal in the query.
        let vector_str = format!(
            "vector32('[{}]')",
            query_vector
                .into_iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let query = format!(
            "SELECT c.content, d.source, c.chunk_index,
                    vector_distance_cos(c.embedding, {vector_str}) AS distance
             FROM document_chunks c
             JOIN documents d ON d.id = c.document_id
             WHERE c.embedding IS NOT NULL
             ORDER BY distance ASC
             LIMIT {limit};"
        );

        info!("Executing vector search query.");
        let mut rows = conn.query(&query, ()).await?;
        let mut results = Vec::new();

        while let Some(row) = rows.next().await? {
            results.push(ChunkRow {
                content: as_text(row.get_value(0)?),
                source: as_text(row.get_value(1)?),
                chunk_index: as_integer(row.get_value(2)?),
                distance: as_real(row.get_value(3)?),
            });
        }

        Ok(results)
    }
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

impl AsRef<Database> for SqliteProvider {
    fn as_ref(&self) -> &Database {
        &self.db
    }
}

/// One raw row from a vector search, before conversion to `RetrievedChunk`.
#[derive(Debug, Clone)]
pub struct ChunkRow {
    pub content: String,
    pub source: String,
    pub chunk_index: i64,
    pub distance: f64,
}

fn as_text(v: TursoValue) -> String {
    match v {
        TursoValue::Text(s) => s,
        _ => String::new(),
    }
}

fn as_optional_text(v: TursoValue) -> Option<String> {
    match v {
        TursoValue::Text(s) => Some(s),
        _ => None,
    }
}

fn as_integer(v: TursoValue) -> i64 {
    match v {
        TursoValue::Integer(i) => i,
        _ => 0,
    }
}

fn as_real(v: TursoValue) -> f64 {
    match v {
        TursoValue::Real(f) => f,
        TursoValue::Integer(i) => i as f64,
        _ => 0.0,
    }
}
