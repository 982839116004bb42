//! Reference-data rules for defect types and color codes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Default cap on registered defect types. Deployments override via
/// `MAX_DEFECT_TYPES`.
pub const DEFAULT_MAX_DEFECT_TYPES: usize = 7;

static HEX_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static regex must compile"));

/// Reject creating another defect type once the configured cap is reached.
pub fn ensure_defect_type_capacity(current: usize, max: usize) -> Result<(), CoreError> {
    if current >= max {
        return Err(CoreError::Conflict(format!(
            "Maximum of {max} defect types reached"
        )));
    }
    Ok(())
}

/// A defect-type name must be non-empty after trimming.
pub fn validate_defect_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Defect name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// A color hex code must be a 6-digit `#RRGGBB` value.
pub fn validate_hex_code(hex: &str) -> Result<(), CoreError> {
    if !HEX_CODE.is_match(hex.trim()) {
        return Err(CoreError::Validation(format!(
            "Invalid hex color code: {hex}"
        )));
    }
    Ok(())
}
