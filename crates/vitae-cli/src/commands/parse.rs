use std::path::PathBuf;
use vitae_core::error::VitaeError;

use super::Source;
use crate::output;

pub fn run(
    source: &Source,
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), VitaeError> {
    let text = source.load_text(&input_file)?;
    let extracted = vitae_core::extract_resume(&text);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            output::json::write(&path, &extracted)?;
            eprintln!(
                "Extracted {} job(s), {} education entr(ies), {} skill categor(ies), written to {}",
                extracted.work_experience.len(),
                extracted.education.len(),
                extracted.skills.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&extracted)?,
            _ => println!("{}", output::table::format_extracted(&extracted)),
        },
    }

    Ok(())
}
