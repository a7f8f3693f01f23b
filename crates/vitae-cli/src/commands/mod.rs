pub mod import;
pub mod parse;
pub mod sections;

use std::path::Path;
use vitae_core::error::VitaeError;
use vitae_core::extraction::pdfextract::PdfExtractExtractor;
use vitae_core::extraction::pdftotext::PdftotextExtractor;
use vitae_core::extraction::PdfExtractor;
use vitae_core::ImportOptions;

/// Where resume text comes from: the PDF backend and upload limit chosen on
/// the command line.
pub struct Source {
    pub backend: String,
    pub max_bytes: usize,
}

impl Source {
    fn extractor(&self) -> Result<Box<dyn PdfExtractor>, VitaeError> {
        tracing::debug!(backend = %self.backend, "selecting PDF backend");
        match self.backend.as_str() {
            "pdftotext" => {
                if !PdftotextExtractor::is_available() {
                    return Err(VitaeError::PdftotextNotFound);
                }
                Ok(Box::new(PdftotextExtractor::new()))
            }
            "pdf-extract" => Ok(Box::new(PdfExtractExtractor::new())),
            other => Err(VitaeError::UnknownBackend(other.to_string())),
        }
    }

    /// Raw resume text for `path`. Files ending in `.txt` are read as-is;
    /// anything else goes through PDF validation and extraction.
    pub fn load_text(&self, path: &Path) -> Result<String, VitaeError> {
        let is_text = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);

        if is_text {
            tracing::debug!(path = %path.display(), "reading raw resume text");
            return Ok(std::fs::read_to_string(path)?);
        }

        let extractor = self.extractor()?;
        let pdf_bytes = std::fs::read(path)?;
        let options = ImportOptions {
            max_bytes: self.max_bytes,
        };
        vitae_core::extract_text(&pdf_bytes, extractor.as_ref(), &options)
    }
}
