//! # Text Chunking
//!
//! Splits raw text into the bounded, overlapping chunks used as the unit of
//! embedding and retrieval.

use super::IngestError;
use tracing::warn;

/// The target maximum size for a single text chunk in characters.
const CHUNK_SIZE_LIMIT: usize = 500;

/// The character overlap between consecutive chunks, to keep context across
/// chunk boundaries.
const CHUNK_OVERLAP: usize = 50;

/// Chunks text into pieces bounded by `CHUNK_SIZE_LIMIT`.
///
/// Paragraphs (split on `\n\n`) are the preferred boundary; a paragraph
/// that fits the limit becomes one chunk. Oversize paragraphs are split by
/// character count with `CHUNK_OVERLAP` characters carried between
/// consecutive splits.
pub fn chunk_text(text: &str) -> Result<Vec<String>, IngestError> {
    let trimmed_text = text.trim();
    if trimmed_text.is_empty() {
        return Err(IngestError::EmptyContent);
    }

    let mut chunks = Vec::new();

    for paragraph in trimmed_text.split("\n\n") {
        let p_trimmed = paragraph.trim();
        if p_trimmed.is_empty() {
            continue;
        }

        if p_trimmed.chars().count() <= CHUNK_SIZE_LIMIT {
            chunks.push(p_trimmed.to_string());
        } else {
            warn!(
                "Paragraph exceeds chunk size limit ({} > {}). Splitting by character.",
                p_trimmed.chars().count(),
                CHUNK_SIZE_LIMIT
            );
            chunks.append(&mut split_long_text(p_trimmed));
        }
    }

    Ok(chunks)
}

/// Splits a long string into chunks of at most `CHUNK_SIZE_LIMIT`
/// characters with `CHUNK_OVERLAP` characters of overlap.
fn split_long_text(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut start = 0;

    while start < chars.len() {
        let end = std::cmp::min(start + CHUNK_SIZE_LIMIT, chars.len());
        chunks.push(chars[start..end].iter().collect());

        let next_start = start + CHUNK_SIZE_LIMIT - CHUNK_OVERLAP;
        if next_start >= chars.len() || next_start <= start {
            break;
        }
        start = next_start;
    }

    chunks
}
