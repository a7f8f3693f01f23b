pub mod pdfextract;
pub mod pdftotext;

use crate::error::VitaeError;

/// Default upload limit, matching the 10 MiB cap of the upload form.
pub const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, VitaeError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split backend output into pages on form feed, the separator both
/// backends emit between pages.
pub(crate) fn split_pages(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .filter(|p| !p.lines.is_empty() || p.page_number == 1)
        .collect()
}

/// Reject uploads that are not a PDF or exceed `max_bytes`.
pub fn validate_pdf(pdf_bytes: &[u8], max_bytes: usize) -> Result<(), VitaeError> {
    if pdf_bytes.len() > max_bytes {
        return Err(VitaeError::FileTooLarge {
            size: pdf_bytes.len(),
            limit: max_bytes,
        });
    }

    let start = pdf_bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(pdf_bytes.len());
    if !pdf_bytes[start..].starts_with(b"%PDF-") {
        return Err(VitaeError::NotPdf);
    }

    Ok(())
}

/// Concatenate pages into one newline-separated text in page order.
///
/// Control characters other than newline and tab are replaced with a space
/// so extraction artifacts never reach the parser as line noise.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut out = String::new();
    for page in pages {
        for line in &page.lines {
            out.extend(line.chars().map(|c| {
                if c.is_control() && c != '\t' {
                    ' '
                } else {
                    c
                }
            }));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_join_pages_in_order() {
        let text = join_pages(&[page(1, &["Jane Roe", "Summary"]), page(2, &["Skills"])]);
        assert_eq!(text, "Jane Roe\nSummary\nSkills\n");
    }

    #[test]
    fn test_join_pages_scrubs_control_chars() {
        let text = join_pages(&[page(1, &["Jane\u{0}Roe\u{7}", "a\tb"])]);
        assert_eq!(text, "Jane Roe \na\tb\n");
    }

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("one\ntwo\n\x0cthree\n\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines, vec!["one", "two"]);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].lines, vec!["three"]);
    }

    #[test]
    fn test_validate_pdf_accepts_header() {
        assert!(validate_pdf(b"%PDF-1.7\n...", DEFAULT_MAX_BYTES).is_ok());
        assert!(validate_pdf(b"\n  %PDF-1.4", DEFAULT_MAX_BYTES).is_ok());
    }

    #[test]
    fn test_validate_pdf_rejects_other_content() {
        assert!(matches!(
            validate_pdf(b"PK\x03\x04 docx", DEFAULT_MAX_BYTES),
            Err(VitaeError::NotPdf)
        ));
        assert!(matches!(
            validate_pdf(b"", DEFAULT_MAX_BYTES),
            Err(VitaeError::NotPdf)
        ));
    }

    #[test]
    fn test_validate_pdf_rejects_oversize() {
        let err = validate_pdf(b"%PDF-1.7 padding", 8).unwrap_err();
        assert!(matches!(
            err,
            VitaeError::FileTooLarge { size: 16, limit: 8 }
        ));
    }
}
