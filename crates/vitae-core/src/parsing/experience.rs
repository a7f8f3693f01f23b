use crate::model::WorkExperience;
use crate::parsing::years::{first_year, mentions_current, second_year};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_ENTRIES: usize = 5;

/// `<company> - <position> (<year> [- <year|present|current>])`.
///
/// Company and position text stay on one line and both start with a letter,
/// so a line without them never becomes an entry. The date may follow on the
/// next line. Parentheses around the dates are optional.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([a-z][a-z &.,\t]*)[ \t]*[-–][ \t]*([a-z][a-z \t]*)\s*\(?((?:19|20)[0-9]{2})[ \t]*[-–]?[ \t]*((?:19|20)[0-9]{2}|present|current)?\)?",
    )
    .unwrap()
});

/// Seed work-experience entries (company, position, dates) from the
/// experience section. Description and achievements are left for the user.
pub fn extract_work_experience(section: &str) -> Vec<WorkExperience> {
    ENTRY_RE
        .captures_iter(section)
        .filter_map(|caps| {
            let matched = caps.get(0)?.as_str();
            let company = caps.get(1)?.as_str().trim();
            let position = caps.get(2)?.as_str().trim();
            let is_current = mentions_current(matched);
            Some(WorkExperience {
                company: company.to_string(),
                position: position.to_string(),
                start_date: first_year(matched),
                end_date: if is_current {
                    String::new()
                } else {
                    second_year(matched)
                },
                is_current,
                ..WorkExperience::default()
            })
        })
        .take(MAX_ENTRIES)
        .enumerate()
        .map(|(i, entry)| WorkExperience {
            id: format!("exp-{i}"),
            ..entry
        })
        .collect()
}
