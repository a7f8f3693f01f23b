use vitae_core::model::ExtractedResume;
use vitae_core::parsing::segment::{SectionLabel, Sections};

const MISSING: &str = "-";

fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        MISSING
    } else {
        value
    }
}

pub fn format_extracted(resume: &ExtractedResume) -> String {
    let mut out: Vec<String> = Vec::new();
    let info = &resume.personal_info;

    out.push("=== Personal info ===".to_string());
    let name = format!("{} {}", info.first_name, info.last_name);
    let fields = [
        ("Name", name.trim()),
        ("Email", info.email.as_str()),
        ("Phone", info.phone.as_str()),
        ("LinkedIn", info.linkedin.as_str()),
        ("GitHub", info.github.as_str()),
    ];
    for (label, value) in fields {
        out.push(format!("  {:<9} {}", label, or_missing(value)));
    }

    if !resume.summary.is_empty() {
        out.push(String::new());
        out.push("=== Summary ===".to_string());
        out.push(format!("  {}", resume.summary));
    }

    out.push(String::new());
    out.push(format!(
        "=== Work experience ({}) ===",
        resume.work_experience.len()
    ));
    for job in &resume.work_experience {
        let end = if job.is_current {
            "present"
        } else {
            or_missing(&job.end_date)
        };
        out.push(format!(
            "  {} - {}  ({} to {})",
            job.company,
            job.position,
            or_missing(&job.start_date),
            end
        ));
    }

    out.push(String::new());
    out.push(format!("=== Education ({}) ===", resume.education.len()));
    for edu in &resume.education {
        out.push(format!(
            "  {}, {}  ({})",
            edu.degree,
            edu.institution,
            or_missing(&edu.graduation_year)
        ));
    }

    out.push(String::new());
    out.push(format!("=== Skills ({}) ===", resume.skills.len()));
    let width = resume
        .skills
        .iter()
        .map(|c| c.category.len())
        .max()
        .unwrap_or(10);
    for cat in &resume.skills {
        out.push(format!(
            "  {:<width$}  {}",
            cat.category,
            cat.skills.join(", "),
            width = width
        ));
    }

    out.join("\n")
}

/// Every candidate span per label; `*` marks the one extraction uses.
pub fn format_sections(line_count: usize, sections: &Sections) -> String {
    let mut out = vec![format!("{line_count} non-blank line(s)")];

    for label in SectionLabel::ALL {
        out.push(String::new());
        let candidates: Vec<_> = sections.candidates(label).collect();
        if candidates.is_empty() {
            out.push(format!("=== {label} === (not found)"));
            continue;
        }
        out.push(format!("=== {label} ==="));
        for (i, span) in candidates.iter().enumerate() {
            let marker = if i == 0 { '*' } else { ' ' };
            let keyword = if span.keyword.is_empty() {
                "(top of document)"
            } else {
                span.keyword
            };
            out.push(format!(
                "{marker} {keyword} [{}..{}]",
                span.start, span.end
            ));
            for line in span.text.lines() {
                out.push(format!("    {line}"));
            }
        }
    }

    out.join("\n")
}
