//! # PDF Text Extraction

use super::IngestError;
use pdf::file::FileOptions;

/// Extracts text from all pages of a PDF.
pub fn extract_text_from_pdf(pdf_data: &[u8]) -> Result<String, IngestError> {
    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| IngestError::Parse(e.to_string()))?;
    let resolver = file.resolver();
    let mut full_text = String::new();

    for page_num in 0..file.num_pages() {
        let page = file
            .get_page(page_num)
            .map_err(|e| IngestError::Parse(e.to_string()))?;
        if let Some(content) = &page.contents {
            let operations = content
                .operations(&resolver)
                .map_err(|e| IngestError::Parse(e.to_string()))?;
            for op in operations.iter() {
                if let pdf::content::Op::TextDraw { text } = op {
                    full_text.push_str(&text.to_string_lossy());
                }
            }
        }
    }

    Ok(full_text)
}
