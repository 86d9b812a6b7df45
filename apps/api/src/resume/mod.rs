pub mod fields;
pub mod handlers;
pub mod language;
pub mod text_extractor;
pub mod vocabulary;

use fields::{ExtractedProfile, ResumeFieldExtractor};
use text_extractor::{extract_text, DocumentFormat, TextExtractionError};

/// Reads `bytes` as `format` and runs field extraction over the text.
///
/// Only document decoding can fail; missing fields come back empty.
pub fn extract_profile_from_document(
    extractor: &ResumeFieldExtractor,
    bytes: &[u8],
    format: DocumentFormat,
) -> Result<ExtractedProfile, TextExtractionError> {
    let text = extract_text(bytes, format)?;
    Ok(extractor.extract(&text))
}
