//! # SQLite Schema Statements
//!
//! Centralizes the DDL for the provider. Every statement is idempotent so
//! the full list can be run on every startup.

/// Append-only interaction log. `feedback` is the only column mutated after
/// insert.
pub const CREATE_PROMPT_LOGS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS prompt_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp TEXT NOT NULL,
        intent TEXT NOT NULL,
        original_prompt TEXT NOT NULL,
        optimized_prompt TEXT,
        original_response TEXT,
        optimized_response TEXT,
        feedback TEXT
    );
";

/// One row per uploaded source file. Re-uploading a source replaces its
/// chunks rather than accumulating duplicates.
pub const CREATE_DOCUMENTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        source TEXT NOT NULL UNIQUE,
        uploaded_at TEXT NOT NULL
    );
";

/// The embedded chunks that back vector retrieval.
pub const CREATE_DOCUMENT_CHUNKS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS document_chunks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        chunk_index INTEGER NOT NULL,
        content TEXT NOT NULL,
        embedding BLOB
    );
";

pub const CREATE_DOCUMENT_CHUNKS_INDEX: &str = "
    CREATE INDEX IF NOT EXISTS idx_document_chunks_document_id
    ON document_chunks (document_id);
";

/// All statements required for a fresh database, in creation order.
pub const ALL_TABLE_CREATION_SQL: &[&str] = &[
    CREATE_PROMPT_LOGS_TABLE,
    CREATE_DOCUMENTS_TABLE,
    CREATE_DOCUMENT_CHUNKS_TABLE,
    CREATE_DOCUMENT_CHUNKS_INDEX,
];
