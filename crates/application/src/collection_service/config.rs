use tintcalc_core::{AppError, AppResult};

/// Outcome of a filtered window selection that matches no item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowSelectionMissPolicy {
    /// Respond with an empty option list so dependent widgets keep working.
    #[default]
    EmptyList,
    /// Respond with a not-found error.
    NotFound,
}

impl WindowSelectionMissPolicy {
    /// Parses a configuration value (`empty` or `not_found`).
    pub fn parse_transport(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::EmptyList),
            "not_found" => Ok(Self::NotFound),
            other => Err(AppError::Configuration(format!(
                "window selection miss policy must be 'empty' or 'not_found', got '{other}'"
            ))),
        }
    }
}
