pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod record;

use error::VitaeError;
use extraction::PdfExtractor;
use model::ExtractedResume;

pub use parsing::extract_resume;

/// Limits applied to an uploaded PDF before extraction.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Largest accepted upload in bytes.
    pub max_bytes: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            max_bytes: extraction::DEFAULT_MAX_BYTES,
        }
    }
}

/// Validate an uploaded PDF and recover its text, pages in order.
///
/// Fails with [`VitaeError::NoText`] when the PDF holds no extractable text
/// (scanned or encrypted documents); the caller should then offer manual
/// entry instead of running the extraction engine.
pub fn extract_text(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ImportOptions,
) -> Result<String, VitaeError> {
    extraction::validate_pdf(pdf_bytes, options.max_bytes)?;

    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = extraction::join_pages(&pages);

    if text.trim().is_empty() {
        tracing::warn!(
            backend = extractor.backend_name(),
            pages = pages.len(),
            "PDF produced no text"
        );
        return Err(VitaeError::NoText);
    }

    Ok(text)
}

/// Main API entry point: extract a structured resume from an uploaded PDF.
pub fn import_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ImportOptions,
) -> Result<ExtractedResume, VitaeError> {
    let text = extract_text(pdf_bytes, extractor, options)?;
    Ok(extract_resume(&text))
}
