//! PDF text extraction — pluggable so handlers never depend on a specific PDF library.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; `PdfTextExtractor` is the default.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the raw text of each page, in document order.
    async fn extract_pages(&self, bytes: Bytes) -> Result<Vec<String>, AppError>;
}

/// `pdf-extract` backed extractor. Parsing is CPU-bound, so it runs on the
/// blocking pool; a panic inside the parser surfaces as an extraction error.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_pages(&self, bytes: Bytes) -> Result<Vec<String>, AppError> {
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        })
        .await
        .map_err(|e| AppError::Extraction(format!("PDF parser aborted: {e}")))?
        .map_err(|e| AppError::Extraction(e.to_string()))
    }
}
