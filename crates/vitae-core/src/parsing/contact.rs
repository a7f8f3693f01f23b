use crate::model::PersonalInfo;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// North-American style: optional +1, optional parens around the area code,
/// `-`, `.` or whitespace between the 3-3-4 digit groups.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)\S+|linkedin\.com/in/\S+|github\.com/\S+").unwrap()
});

/// Only the top of the document is searched for a name.
const NAME_SCAN_LINES: usize = 5;

const NON_NAME_WORDS: &[&str] = &["resume", "cv", "curriculum", "vitae"];

/// Contact fields from the whole text, name from the leading `lines`.
///
/// Location is never inferred and stays empty.
pub fn extract_personal_info(text: &str, lines: &[&str]) -> PersonalInfo {
    let mut info = PersonalInfo {
        email: extract_email(text),
        phone: extract_phone(text),
        ..PersonalInfo::default()
    };

    let urls = extract_profile_urls(text);
    info.linkedin = urls.linkedin;
    info.github = urls.github;

    if let Some((first, last)) = extract_name(lines) {
        info.first_name = first;
        info.last_name = last;
    }

    info
}

/// First email-shaped substring, or empty.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-shaped substring with whitespace collapsed, or empty.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUrls {
    pub linkedin: String,
    pub github: String,
}

/// Professional-network links. A later link of the same kind replaces an
/// earlier one; links that are neither LinkedIn nor GitHub are ignored.
pub fn extract_profile_urls(text: &str) -> ProfileUrls {
    let mut urls = ProfileUrls::default();
    for m in URL_RE.find_iter(text) {
        let url = m.as_str();
        let lower = url.to_lowercase();
        if lower.contains("linkedin") {
            urls.linkedin = url.to_string();
        } else if lower.contains("github") {
            urls.github = url.to_string();
        }
    }
    urls
}

/// Guess (first name, last name) from the first few non-blank lines.
///
/// Lines that look like contact details are skipped. A line qualifies when
/// 2 to 5 purely alphabetic words of length 2+ remain after dropping words
/// like "Resume" or "CV".
pub fn extract_name(lines: &[&str]) -> Option<(String, String)> {
    for line in lines.iter().take(NAME_SCAN_LINES) {
        let line = line.trim();
        if looks_like_contact_line(line) {
            continue;
        }

        let parts: Vec<&str> = line
            .split_whitespace()
            .filter(|part| {
                part.len() > 1
                    && part.chars().all(|c| c.is_ascii_alphabetic())
                    && !NON_NAME_WORDS.contains(&part.to_ascii_lowercase().as_str())
            })
            .collect();

        if (2..=5).contains(&parts.len()) {
            return Some((parts[0].to_string(), parts[1..].join(" ")));
        }
    }
    None
}

fn looks_like_contact_line(line: &str) -> bool {
    line.contains('@') || has_digit_run(line, 3) || line.to_lowercase().contains("http")
}

fn has_digit_run(line: &str, len: usize) -> bool {
    let mut run = 0;
    for c in line.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run >= len {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
