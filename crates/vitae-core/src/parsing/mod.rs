pub mod contact;
pub mod education;
pub mod experience;
pub mod segment;
pub mod skills;
pub mod years;

use crate::model::ExtractedResume;
use segment::SectionLabel;

/// Infer a structured resume from raw resume text.
///
/// Pure and infallible: fields that cannot be found stay empty, and the same
/// input always yields the same output.
pub fn extract_resume(text: &str) -> ExtractedResume {
    let lines = segment::non_blank_lines(text);
    let sections = segment::detect_sections(text);

    for label in SectionLabel::ALL {
        if let Some(span) = sections.span(label) {
            tracing::debug!(
                %label,
                keyword = span.keyword,
                start = span.start,
                end = span.end,
                "section detected"
            );
        }
    }

    let resume = ExtractedResume {
        personal_info: contact::extract_personal_info(text, &lines),
        summary: skills::extract_summary(sections.text(SectionLabel::Summary)),
        work_experience: experience::extract_work_experience(
            sections.text(SectionLabel::Experience),
        ),
        education: education::extract_education(sections.text(SectionLabel::Education)),
        skills: skills::extract_skills(sections.text(SectionLabel::Skills)),
    };

    tracing::debug!(
        lines = lines.len(),
        work_experience = resume.work_experience.len(),
        education = resume.education.len(),
        skill_categories = resume.skills.len(),
        has_name = !resume.personal_info.first_name.is_empty(),
        has_email = !resume.personal_info.email.is_empty(),
        "resume extraction complete"
    );

    resume
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_section_flattened() {
        let text = "Jane Roe\nSUMMARY\nBackend engineer   focused on\nreliability.\nEXPERIENCE\nAcme - Engineer (2019-2021)";
        let resume = extract_resume(text);
        assert_eq!(resume.summary, "Backend engineer focused on reliability.");
        assert_eq!(resume.work_experience.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_resume("").is_empty());
        assert!(extract_resume("\n\n  \t\n").is_empty());
    }

    #[test]
    fn test_links_recovered() {
        let text = "Jane Roe\nlinkedin.com/in/janeroe  github.com/janeroe";
        let info = extract_resume(text).personal_info;
        assert_eq!(info.linkedin, "linkedin.com/in/janeroe");
        assert_eq!(info.github, "github.com/janeroe");
        assert_eq!(info.first_name, "Jane");
    }
}
