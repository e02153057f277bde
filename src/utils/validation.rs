use super::error::AppError;

fn missing(label: &str, field: &str) -> AppError {
    AppError::persistence(format!(
        "{} validation failed: {}: Path `{}` is required.",
        label, field, field
    ))
}

/// Unwraps a required text field, treating absent, `null` and blank alike.
pub fn required_text(label: &str, field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(label, field)),
    }
}

pub fn required<T>(label: &str, field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| missing(label, field))
}

/// Partial updates may omit a field but may not blank it.
pub fn non_blank_if_present(label: &str, field: &str, value: Option<&String>) -> Result<(), AppError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(missing(label, field)),
        _ => Ok(()),
    }
}
