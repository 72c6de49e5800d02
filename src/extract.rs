//! Document text extraction seam.
//!
//! Real deployments plug a PDF extractor in behind
//! [`DocumentTextExtractor`]; the core only depends on the trait.
//! [`PlainTextExtractor`] covers plain-text uploads and tests.

/// Errors produced when extracting text from an uploaded document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The bytes are not a parsable document for this extractor.
    #[error("document is not valid UTF-8 text: {0}")]
    Encoding(String),

    /// The document parsed but contained no text.
    #[error("document contains no text")]
    Empty,
}

/// Turns uploaded file bytes into raw document text.
pub trait DocumentTextExtractor: Send + Sync {
    /// Extract the full text of the document.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] if the input is not a parsable
    /// document for this extractor.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Extractor for plain-text documents: validates UTF-8 and trims.
pub struct PlainTextExtractor;

impl DocumentTextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ExtractionError::Encoding(e.to_string()))?
            .trim();
        if text.is_empty() {
            return Err(ExtractionError::Empty);
        }
        Ok(text.to_owned())
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
