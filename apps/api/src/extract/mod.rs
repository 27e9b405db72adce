//! Résumé text extraction.
//!
//! Parsing itself is delegated to format libraries; this module dispatches on
//! the declared format and keeps success and failure on separate channels —
//! a parser error is returned as `Err`, never smuggled back as text content.

mod docx;
mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Résumé formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
}

impl FileFormat {
    /// Detects the format from the uploaded filename's extension,
    /// ASCII case-insensitive. Anything but `.pdf`/`.docx` is unsupported.
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileFormat::Pdf),
            "docx" => Some(FileFormat::Docx),
            _ => None,
        }
    }
}

/// Extracts plain text from an uploaded document.
///
/// Blank output is not an error here — the caller decides what an empty
/// résumé means for its contract.
pub fn extract_text(bytes: &[u8], format: FileFormat) -> Result<String, ExtractError> {
    match format {
        FileFormat::Pdf => pdf::extract(bytes),
        FileFormat::Docx => docx::extract(bytes),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use docx_rs::{Docx, Paragraph, Run};

    use super::*;

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_format_from_pdf_filename() {
        assert_eq!(
            FileFormat::from_filename("resume.pdf"),
            Some(FileFormat::Pdf)
        );
    }

    #[test]
    fn test_format_is_case_insensitive() {
        assert_eq!(
            FileFormat::from_filename("Resume.PDF"),
            Some(FileFormat::Pdf)
        );
        assert_eq!(FileFormat::from_filename("cv.DocX"), Some(FileFormat::Docx));
    }

    #[test]
    fn test_txt_is_unsupported() {
        assert_eq!(FileFormat::from_filename("resume.txt"), None);
    }

    #[test]
    fn test_no_extension_is_unsupported() {
        assert_eq!(FileFormat::from_filename("resume"), None);
    }

    #[test]
    fn test_docx_paragraphs_join_with_newlines() {
        let bytes = docx_bytes(&["Senior Rust Engineer", "Led a team of five"]);
        let text = extract_text(&bytes, FileFormat::Docx).unwrap();
        assert_eq!(text, "Senior Rust Engineer\nLed a team of five");
    }

    #[test]
    fn test_garbage_pdf_bytes_fail_tagged() {
        let result = extract_text(b"not a pdf", FileFormat::Pdf);
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_garbage_docx_bytes_fail_tagged() {
        let result = extract_text(b"not a zip archive", FileFormat::Docx);
        assert!(matches!(result, Err(ExtractError::Docx(_))));
    }
}
