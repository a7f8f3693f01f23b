use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VitaeError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux), or use --backend pdf-extract")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("please upload a PDF file")]
    NotPdf,

    #[error("file is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: usize, limit: usize },

    #[error("no text could be extracted from the PDF. Please enter your information manually")]
    NoText,

    #[error("unknown extraction backend '{0}'. Available: pdftotext, pdf-extract")]
    UnknownBackend(String),

    #[error("failed to load resume record from {path}: {reason}")]
    RecordLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
