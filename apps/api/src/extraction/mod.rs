//! Resume text extraction.
//!
//! `TextExtractor` is the seam between the upload handler and the PDF
//! library. `AppState` carries an `Arc<dyn TextExtractor>`; tests swap in a
//! fixed-text extractor.

use thiserror::Error;
use tracing::debug;

/// The PDF header may legally appear anywhere in the first 1024 bytes.
const PDF_HEADER_WINDOW: usize = 1024;
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("uploaded document is empty")]
    Empty,

    #[error("uploaded document is not a PDF")]
    NotPdf,

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("extraction task aborted: {0}")]
    Aborted(String),
}

/// Turns an uploaded document into raw text.
///
/// Blocking and CPU-bound; callers run it on the blocking pool.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor used in production.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        check_pdf_header(bytes)?;

        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        debug!("Extracted {} chars from {} byte PDF", text.len(), bytes.len());
        Ok(text)
    }
}

fn check_pdf_header(bytes: &[u8]) -> Result<(), ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }
    let window = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];
    if window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
        Ok(())
    } else {
        Err(ExtractionError::NotPdf)
    }
}
