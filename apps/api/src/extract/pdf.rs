use super::ExtractError;

/// Extracts plain text from PDF bytes. Page traversal and layout handling
/// are the library's concern.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
