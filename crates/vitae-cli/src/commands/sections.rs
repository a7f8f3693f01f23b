use std::path::PathBuf;
use vitae_core::error::VitaeError;
use vitae_core::parsing::segment;

use super::Source;
use crate::output;

pub fn run(source: &Source, input_file: PathBuf) -> Result<(), VitaeError> {
    let text = source.load_text(&input_file)?;
    let lines = segment::non_blank_lines(&text);
    let sections = segment::detect_sections(&text);

    println!("{}", output::table::format_sections(lines.len(), &sections));
    Ok(())
}
