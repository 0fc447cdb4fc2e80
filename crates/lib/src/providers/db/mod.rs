pub mod sqlite;

pub use sqlite::{ChunkRow, NewInteraction, SqliteProvider, StoreError};
