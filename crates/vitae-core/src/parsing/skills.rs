use crate::model::SkillCategory;
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_SKILLS_PER_CATEGORY: usize = 10;

/// Tokens this long or longer are sentence fragments, not skills.
pub const MAX_SKILL_CHARS: usize = 30;

/// Label patterns in priority order, each with the category it produces.
/// Every pattern runs independently, so one list can surface under several
/// categories.
static CATEGORY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("Programming Languages", r"(?i)(?:programming languages?|languages?)[:\s]*([^.]+)"),
        ("Frameworks & Technologies", r"(?i)(?:frameworks?|technologies?)[:\s]*([^.]+)"),
        ("Tools & Software", r"(?i)(?:tools?|software)[:\s]*([^.]+)"),
        ("Technical Skills", r"(?i)skills?[:\s]*([^.]+)"),
    ]
    .into_iter()
    .map(|(category, pattern)| (category, Regex::new(pattern).unwrap()))
    .collect()
});

/// Skill categories from the skills section.
pub fn extract_skills(section: &str) -> Vec<SkillCategory> {
    let mut categories = Vec::new();

    for (index, (category, re)) in CATEGORY_PATTERNS.iter().enumerate() {
        let Some(list) = re.captures(section).and_then(|c| c.get(1)) else {
            continue;
        };

        let skills: Vec<String> = list
            .as_str()
            .split([',', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.chars().count() < MAX_SKILL_CHARS)
            .take(MAX_SKILLS_PER_CATEGORY)
            .map(str::to_string)
            .collect();

        if skills.is_empty() {
            continue;
        }

        categories.push(SkillCategory {
            id: format!("skill-{index}"),
            category: category.to_string(),
            skills,
        });
    }

    categories
}

/// The summary section as a single whitespace-normalized paragraph.
pub fn extract_summary(section: &str) -> String {
    section.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_skills_label() {
        let cats = extract_skills("Skills: Python, Go, Rust");
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].id, "skill-3");
        assert_eq!(cats[0].category, "Technical Skills");
        assert_eq!(cats[0].skills, vec!["Python", "Go", "Rust"]);
    }

    #[test]
    fn test_each_label_up_to_period() {
        let section = "Languages: Rust; Go. Frameworks: Axum, React. Tools: Git, Docker.";
        let cats = extract_skills(section);
        let names: Vec<&str> = cats.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Programming Languages",
                "Frameworks & Technologies",
                "Tools & Software"
            ]
        );
        assert_eq!(cats[0].skills, vec!["Rust", "Go"]);
        assert_eq!(cats[1].skills, vec!["Axum", "React"]);
        assert_eq!(cats[2].skills, vec!["Git", "Docker"]);
    }

    #[test]
    fn test_overlapping_categories_not_deduplicated() {
        // "Technical Skills" matches the skills pattern; "software" appears
        // inside the same list and matches the tools pattern too.
        let cats = extract_skills("Technical Skills: Rust, software design, SQL");
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].category, "Tools & Software");
        assert_eq!(cats[0].skills, vec!["design", "SQL"]);
        assert_eq!(cats[1].category, "Technical Skills");
        assert_eq!(cats[1].skills, vec!["Rust", "software design", "SQL"]);
    }

    #[test]
    fn test_long_and_empty_tokens_dropped() {
        let section = "Skills: Rust,, a very long description of what I did at work, Go";
        let cats = extract_skills(section);
        assert_eq!(cats[0].skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_token_length_limit_is_exclusive() {
        let kept = "x".repeat(MAX_SKILL_CHARS - 1);
        let dropped = "y".repeat(MAX_SKILL_CHARS);
        let cats = extract_skills(&format!("Skills: {kept}, {dropped}, Go"));
        assert_eq!(cats[0].skills, vec![kept.as_str(), "Go"]);
    }

    #[test]
    fn test_capped_at_ten_per_category() {
        let section = format!(
            "Skills: {}",
            (1..=14).map(|i| format!("s{i}")).collect::<Vec<_>>().join(", ")
        );
        let cats = extract_skills(&section);
        assert_eq!(cats[0].skills.len(), MAX_SKILLS_PER_CATEGORY);
        assert_eq!(cats[0].skills[9], "s10");
    }

    #[test]
    fn test_no_labels() {
        assert!(extract_skills("Python, Go, Rust").is_empty());
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_summary_collapses_whitespace() {
        assert_eq!(
            extract_summary("  Seasoned   engineer\nwith\t10 years.  "),
            "Seasoned engineer with 10 years."
        );
        assert_eq!(extract_summary(""), "");
    }
}
