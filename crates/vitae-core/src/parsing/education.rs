use crate::model::Education;
use crate::parsing::years::first_year;
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_ENTRIES: usize = 3;

/// A degree keyword, free text up to a separator, then the rest of the line
/// (institution and, often, the graduation year). Keywords must start a word,
/// so abbreviations such as MBA are listed on their own.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor|master|phd|doctorate|diploma|certificate|degree|b\.?a\.?|b\.?s\.?|m\.?b\.?a\.?|m\.?a\.?|m\.?s\.?|ph\.?d\.?)[^,\n]*(?:,|[ \t]+at[ \t]+|[ \t]+from[ \t]+|[ \t]+-[ \t]+)[^\n]*",
    )
    .unwrap()
});

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),|[ \t]+at[ \t]+|[ \t]+from[ \t]+|[ \t]+-[ \t]+").unwrap()
});

/// Seed education entries (degree, institution, year) from the education
/// section. Field of study and GPA are left for the user.
pub fn extract_education(section: &str) -> Vec<Education> {
    ENTRY_RE
        .find_iter(section)
        .filter_map(|m| {
            let matched = m.as_str();
            let mut parts = SEPARATOR_RE.split(matched).map(str::trim);
            let degree = parts.next().unwrap_or_default();
            let institution = parts.next().unwrap_or_default();
            if degree.is_empty() || institution.is_empty() {
                tracing::trace!(matched, "dropping education match without degree/institution");
                return None;
            }

            Some(Education {
                degree: degree.to_string(),
                institution: institution.to_string(),
                graduation_year: first_year(matched),
                ..Education::default()
            })
        })
        .take(MAX_ENTRIES)
        .enumerate()
        .map(|(i, entry)| Education {
            id: format!("edu-{i}"),
            ..entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_institution_year() {
        let entries = extract_education("Bachelor of Science, MIT, 2015");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.id, "edu-0");
        assert_eq!(e.degree, "Bachelor of Science");
        assert_eq!(e.institution, "MIT");
        assert_eq!(e.graduation_year, "2015");
        assert!(e.field.is_empty());
        assert!(e.gpa.is_empty());
    }

    #[test]
    fn test_abbreviation_with_from_and_dash() {
        let entries =
            extract_education("M.S. in Computer Science from Stanford University - 2018");
        assert_eq!(entries[0].degree, "M.S. in Computer Science");
        assert_eq!(entries[0].institution, "Stanford University");
        assert_eq!(entries[0].graduation_year, "2018");
    }

    #[test]
    fn test_at_separator_without_year() {
        let entries = extract_education("PhD in Physics at Caltech");
        assert_eq!(entries[0].degree, "PhD in Physics");
        assert_eq!(entries[0].institution, "Caltech");
        assert_eq!(entries[0].graduation_year, "");
    }

    #[test]
    fn test_malformed_match_dropped() {
        let entries = extract_education("Bachelor of Arts,\nMaster of Fine Arts, RISD, 2012");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "edu-0");
        assert_eq!(entries[0].degree, "Master of Fine Arts");
        assert_eq!(entries[0].institution, "RISD");
    }

    #[test]
    fn test_capped_at_three() {
        let section = "Diploma, School A\nBachelor of Arts, School B\nMaster of Arts, School C\nPhD, School D";
        let entries = extract_education(section);
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].institution, "School A");
        assert_eq!(entries[2].institution, "School C");
    }

    #[test]
    fn test_mba() {
        let entries = extract_education("MBA, Harvard Business School, 2010");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "MBA");
        assert_eq!(entries[0].institution, "Harvard Business School");
        assert_eq!(entries[0].graduation_year, "2010");

        let entries = extract_education("M.B.A. from Wharton");
        assert_eq!(entries[0].degree, "M.B.A.");
        assert_eq!(entries[0].institution, "Wharton");
    }

    #[test]
    fn test_keyword_must_start_a_word() {
        assert!(extract_education("Database Administrator, Oracle").is_empty());
        assert!(extract_education("").is_empty());
    }
}
