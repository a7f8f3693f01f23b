use crate::error::VitaeError;
use crate::extraction::{split_pages, PageContent, PdfExtractor};

/// In-process PDF extraction backend built on the `pdf-extract` crate.
///
/// Needs no system tools, at the cost of weaker handling of unusual fonts
/// compared to poppler.
#[derive(Debug, Default)]
pub struct PdfExtractExtractor;

impl PdfExtractExtractor {
    pub fn new() -> Self {
        PdfExtractExtractor
    }
}

impl PdfExtractor for PdfExtractExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, VitaeError> {
        let text = ::pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| VitaeError::Extraction(e.to_string()))?;
        let pages = split_pages(&text);
        tracing::debug!(
            backend = self.backend_name(),
            pages = pages.len(),
            "extracted PDF text"
        );
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
