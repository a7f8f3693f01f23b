use std::path::PathBuf;
use vitae_core::error::VitaeError;
use vitae_core::record::{Resume, ResumePatch};

use super::Source;
use crate::output;

pub fn run(
    source: &Source,
    input_file: PathBuf,
    into: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<(), VitaeError> {
    let text = source.load_text(&input_file)?;
    let extracted = vitae_core::extract_resume(&text);

    let mut record = match &into {
        Some(path) => Resume::load(path)?,
        None => Resume::new(),
    };
    record.apply(ResumePatch::from(extracted));

    match out.or(into) {
        Some(path) => {
            output::json::write(&path, &record)?;
            eprintln!("Resume {} written to {}", record.id, path.display());
        }
        None => output::json::print(&record)?,
    }

    eprintln!("Imported fields are a best guess. Please review and edit them before use.");
    Ok(())
}
