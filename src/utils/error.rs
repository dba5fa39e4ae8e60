use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Series '{series}' has {actual} values but the category axis has {expected} labels")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("Chart '{chart}' has no categories to draw")]
    EmptyChart { chart: String },

    #[error("Series '{series}' holds a non-finite value at index {index}")]
    InvalidValue { series: String, index: usize },

    #[error("Rendering backend failed: {message}")]
    BackendError { message: String },

    #[error("No display surface available: {message}")]
    DisplayUnavailable { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Rendering,
    Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ChartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChartError::LengthMismatch { .. }
            | ChartError::EmptyChart { .. }
            | ChartError::InvalidValue { .. } => ErrorCategory::Validation,
            ChartError::ConfigError { .. }
            | ChartError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ChartError::BackendError { .. } | ChartError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            ChartError::DisplayUnavailable { .. } | ChartError::IoError(_) => {
                ErrorCategory::Environment
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Environment => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ChartError::LengthMismatch { expected, .. } => format!(
                "Supply exactly {} values per series, one for each category label",
                expected
            ),
            ChartError::EmptyChart { .. } => {
                "Add at least one category label and one value per series".to_string()
            }
            ChartError::InvalidValue { .. } => {
                "Replace NaN or infinite values with finite numbers".to_string()
            }
            ChartError::BackendError { .. } => {
                "Check that the output format is supported".to_string()
            }
            ChartError::DisplayUnavailable { .. } => {
                "Run without --show to write the chart to a file instead".to_string()
            }
            ChartError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            ChartError::SerializationError(_) => {
                "Report this as a bug: the chart description could not be encoded".to_string()
            }
            ChartError::ConfigError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            ChartError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the config or on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Chart data is inconsistent: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Rendering => format!("Could not draw the chart: {}", self),
            ErrorCategory::Environment => format!("Environment problem: {}", self),
        }
    }
}

/// Wrap any plotters drawing error.
pub fn backend_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::BackendError {
        message: err.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_is_high_severity_validation() {
        let err = ChartError::LengthMismatch {
            series: "latency".to_string(),
            expected: 6,
            actual: 7,
        };

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("7 values"));
        assert!(err.recovery_suggestion().contains("exactly 6"));
    }

    #[test]
    fn test_exit_codes_follow_category() {
        let backend = backend_error("font not found");
        assert_eq!(backend.exit_code(), 2);

        let display = ChartError::DisplayUnavailable {
            message: "no DISPLAY".to_string(),
        };
        assert_eq!(display.exit_code(), 3);
        assert!(display.user_friendly_message().starts_with("Environment problem"));
    }
}
