use facetstud_core::FacetError;
use std::io::ErrorKind;
use std::path::Path;

/// Map file loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &FacetError, path: &Path) -> (String, String, String) {
    match error {
        FacetError::InvalidGroups { errors } => (
            "Validation Error".to_string(),
            "The group configuration has validation errors.".to_string(),
            errors
                .iter()
                .enumerate()
                .map(|(i, e)| format!("  {}. {}", i + 1, e))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        FacetError::Io(io) if io.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        FacetError::Io(io) if io.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        FacetError::Json(json) => (
            "Invalid JSON".to_string(),
            "The file is not valid JSON for this input.".to_string(),
            format!("{}\n(line {}, column {})", json, json.line(), json.column()),
        ),
        FacetError::NotAnArray { .. } => (
            "Invalid Data File".to_string(),
            "The data file must contain a JSON array of records.".to_string(),
            error.to_string(),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load file.".to_string(),
            other.to_string(),
        ),
    }
}
