use serde::Serialize;
use std::path::Path;
use vitae_core::error::VitaeError;

pub fn print<T: Serialize>(value: &T) -> Result<(), VitaeError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), VitaeError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
