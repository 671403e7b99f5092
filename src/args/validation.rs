use std::{fs, path::PathBuf};

use crate::model::RoundState;

/// # Errors
///
/// Will return `Err` if the file is not readable, is not a round in JSON, or breaks a layout invariant
pub fn check_readable_round_json(file: &str) -> Result<RoundState, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The round file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The round file '{file}': {e}"))?;
    let round: RoundState = serde_json::from_str(&contents)
        .map_err(|e| format!("The round file '{file}' is not in the correct format: {e}"))?;
    round.validate().map_err(|e| e.to_string())?;
    Ok(round)
}

/// # Errors
///
/// Will return `Err` unless the value is 9 or 18
pub fn check_holes_count(value: &str) -> Result<u8, String> {
    match value.trim().parse::<u8>() {
        Ok(n @ (9 | 18)) => Ok(n),
        _ => Err(format!("holes must be 9 or 18, got '{value}'")),
    }
}

/// # Errors
///
/// Will return `Err` if the name is blank
pub fn check_template_name(value: &str) -> Result<String, String> {
    let name = value.trim();
    if name.is_empty() {
        return Err("template name must not be empty".to_string());
    }
    Ok(name.to_string())
}
