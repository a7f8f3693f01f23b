//! Line normalization and keyword-anchored section detection.
//!
//! Detection is greedy and runs independently per header keyword, so spans
//! may overlap in the source text. A boundary word inside a section body
//! (e.g. "skills" in a job description) ends that section early; this is a
//! known limitation of the scheme and is kept as-is so section boundaries
//! stay stable across versions.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 5] = [
        SectionLabel::Contact,
        SectionLabel::Summary,
        SectionLabel::Experience,
        SectionLabel::Education,
        SectionLabel::Skills,
    ];

    /// Header keywords in scan order. The first one yielding a nonempty body
    /// anchors the section, so the order is significant.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SectionLabel::Contact => &[],
            SectionLabel::Summary => &["summary", "objective", "profile", "about"],
            SectionLabel::Experience => &[
                "experience",
                "work history",
                "employment",
                "professional experience",
            ],
            SectionLabel::Education => &["education", "academic background", "qualifications"],
            SectionLabel::Skills => &["skills", "technical skills", "competencies", "technologies"],
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionLabel::Contact => write!(f, "contact"),
            SectionLabel::Summary => write!(f, "summary"),
            SectionLabel::Experience => write!(f, "experience"),
            SectionLabel::Education => write!(f, "education"),
            SectionLabel::Skills => write!(f, "skills"),
        }
    }
}

/// Words that end a section body wherever they appear as a whole word.
pub const BOUNDARY_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "profile",
    "certifications",
    "projects",
    "awards",
];

static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", BOUNDARY_KEYWORDS.join("|"))).unwrap()
});

/// One header regex per keyword: the keyword as a whole word plus any
/// trailing colon/whitespace, which is not part of the body.
static HEADER_RES: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    SectionLabel::ALL
        .iter()
        .flat_map(|label| label.keywords().iter().copied())
        .map(|kw| {
            let re = Regex::new(&format!(r"(?i)\b{}\b[:\s]*", regex::escape(kw))).unwrap();
            (kw, re)
        })
        .collect()
});

/// A candidate section body located in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSpan {
    pub label: SectionLabel,
    /// Header keyword that anchored the span; empty for the contact block.
    pub keyword: &'static str,
    /// Byte offsets of the untrimmed body in the source text.
    pub start: usize,
    pub end: usize,
    /// Trimmed body text.
    pub text: String,
}

/// Every nonempty candidate span, per label in keyword order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Sections {
    pub candidates: Vec<SectionSpan>,
}

impl Sections {
    pub fn candidates(&self, label: SectionLabel) -> impl Iterator<Item = &SectionSpan> {
        self.candidates.iter().filter(move |s| s.label == label)
    }

    /// The span used downstream for `label`: its first nonempty candidate.
    pub fn span(&self, label: SectionLabel) -> Option<&SectionSpan> {
        self.candidates(label).next()
    }

    /// Body text for `label`, or an empty string when the label was not found.
    pub fn text(&self, label: SectionLabel) -> &str {
        self.span(label).map(|s| s.text.as_str()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Trimmed, non-blank lines in original order.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Locate section bodies by header keyword.
pub fn detect_sections(text: &str) -> Sections {
    let mut candidates = Vec::new();

    if let Some(contact) = contact_block(text) {
        candidates.push(contact);
    }

    for label in SectionLabel::ALL {
        for &keyword in label.keywords() {
            let Some(header) = HEADER_RES.get(keyword).and_then(|re| re.find(text)) else {
                continue;
            };
            let start = header.end();
            let end = body_end(text, start, label);
            let body = text[start..end].trim();
            if body.is_empty() {
                tracing::trace!(%label, keyword, "header found with empty body");
                continue;
            }
            candidates.push(SectionSpan {
                label,
                keyword,
                start,
                end,
                text: body.to_string(),
            });
        }
    }

    Sections { candidates }
}

/// Everything before the first recognized header of any label.
fn contact_block(text: &str) -> Option<SectionSpan> {
    let end = HEADER_RES
        .values()
        .filter_map(|re| re.find(text))
        .map(|m| m.start())
        .min()
        .unwrap_or(text.len());
    let body = text[..end].trim();
    if body.is_empty() {
        return None;
    }
    Some(SectionSpan {
        label: SectionLabel::Contact,
        keyword: "",
        start: 0,
        end,
        text: body.to_string(),
    })
}

/// End of a body starting at `start`: the next boundary word, or end of text.
///
/// A boundary word right at the start of the body that is one of the
/// section's own keywords is a repeated label ("SKILLS\nSkills: ..."), not a
/// new section, and is skipped.
fn body_end(text: &str, start: usize, label: SectionLabel) -> usize {
    let mut from = start;
    while let Some(b) = BOUNDARY_RE.find_at(text, from) {
        let lead_in = b.start() == start
            && label
                .keywords()
                .iter()
                .any(|kw| kw.eq_ignore_ascii_case(b.as_str()));
        if !lead_in {
            return b.start();
        }
        from = b.end();
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Doe\njohn.doe@email.com\n555-123-4567\n\nEXPERIENCE\nAcme Corp - Senior Engineer (2019-2022)\n\nEDUCATION\nBachelor of Science, MIT, 2015\n\nSKILLS\nSkills: Python, Go, Rust";

    #[test]
    fn test_non_blank_lines() {
        let lines = non_blank_lines("  Jane Roe \n\n   \n\tEngineer\r\nlast");
        assert_eq!(lines, vec!["Jane Roe", "Engineer", "last"]);
    }

    #[test]
    fn test_non_blank_lines_empty() {
        assert!(non_blank_lines("").is_empty());
        assert!(non_blank_lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_sample_sections() {
        let s = detect_sections(SAMPLE);
        assert_eq!(
            s.text(SectionLabel::Contact),
            "John Doe\njohn.doe@email.com\n555-123-4567"
        );
        assert_eq!(
            s.text(SectionLabel::Experience),
            "Acme Corp - Senior Engineer (2019-2022)"
        );
        assert_eq!(
            s.text(SectionLabel::Education),
            "Bachelor of Science, MIT, 2015"
        );
        assert_eq!(s.text(SectionLabel::Skills), "Skills: Python, Go, Rust");
        assert!(s.span(SectionLabel::Summary).is_none());
    }

    #[test]
    fn test_span_offsets_point_into_source() {
        let s = detect_sections(SAMPLE);
        let exp = s.span(SectionLabel::Experience).unwrap();
        assert_eq!(exp.keyword, "experience");
        assert_eq!(SAMPLE[exp.start..exp.end].trim(), exp.text);
    }

    #[test]
    fn test_empty_text_has_no_sections() {
        assert!(detect_sections("").is_empty());
        assert!(detect_sections("  \n\n ").is_empty());
    }

    #[test]
    fn test_no_headers_only_contact_block() {
        let s = detect_sections("Jane Roe\nSomewhere nice");
        assert_eq!(s.candidates.len(), 1);
        assert_eq!(s.text(SectionLabel::Contact), "Jane Roe\nSomewhere nice");
        assert_eq!(s.text(SectionLabel::Experience), "");
    }

    #[test]
    fn test_keyword_order_beats_document_order() {
        let text = "Objective: get a job.\nSummary: seasoned dev.";
        let s = detect_sections(text);
        assert_eq!(s.text(SectionLabel::Summary), "seasoned dev.");
        let keywords: Vec<&str> = s
            .candidates(SectionLabel::Summary)
            .map(|c| c.keyword)
            .collect();
        assert_eq!(keywords, vec!["summary", "objective"]);
        assert_eq!(
            s.candidates(SectionLabel::Summary).nth(1).unwrap().text,
            "get a job."
        );
    }

    #[test]
    fn test_other_section_header_ends_body_immediately() {
        let s = detect_sections("EXPERIENCE\n\nEDUCATION\nBSc, Oxford");
        assert!(s.span(SectionLabel::Experience).is_none());
        assert_eq!(s.text(SectionLabel::Education), "BSc, Oxford");
    }

    #[test]
    fn test_whole_word_headers_only() {
        let s = detect_sections("Experienced leader\nEDUCATION\nBA, Yale");
        assert!(s.span(SectionLabel::Experience).is_none());
        assert_eq!(s.text(SectionLabel::Contact), "Experienced leader");
    }

    #[test]
    fn test_boundary_word_inside_body_truncates() {
        let text = "EXPERIENCE\nAcme - Dev (2019-2020)\nUsed Python skills daily\nEDUCATION\nBSc, Oxford\nSKILLS\nRust, Go";
        let s = detect_sections(text);
        assert_eq!(
            s.text(SectionLabel::Experience),
            "Acme - Dev (2019-2020)\nUsed Python"
        );
        // The first "skills" in the document anchors the skills section.
        assert_eq!(s.text(SectionLabel::Skills), "daily");
    }

    #[test]
    fn test_multiword_header() {
        let s = detect_sections("Work History: Globex - Analyst (2010-2012)");
        let span = s.span(SectionLabel::Experience).unwrap();
        assert_eq!(span.keyword, "work history");
        assert_eq!(span.text, "Globex - Analyst (2010-2012)");
    }
}
