use crate::utils::error::{ChartError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ChartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ChartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不落在任何區間內
    if !(min..=max).contains(&value) {
        return Err(ChartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ChartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 資料長度必須與類別軸標籤數一致
pub fn validate_series_length(series: &str, values: usize, labels: usize) -> Result<()> {
    if values != labels {
        return Err(ChartError::LengthMismatch {
            series: series.to_string(),
            expected: labels,
            actual: values,
        });
    }
    Ok(())
}

pub fn validate_finite(series: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ChartError::InvalidValue {
            series: series.to_string(),
            index,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "./charts").is_ok());
        assert!(validate_path("output.directory", "").is_err());
        assert!(validate_path("output.directory", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.width", 800, 200, 4096).is_ok());
        assert!(validate_range("output.width", 100, 200, 4096).is_err());
        assert!(validate_range("bar_width", 0.35, 0.01, 0.5).is_ok());
        assert!(validate_range("bar_width", f64::NAN, 0.01, 0.5).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "svg", &["svg", "png"]).is_ok());
        let err = validate_one_of("output.format", "pdf", &["svg", "png"]).unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn test_validate_series_length_reports_counts() {
        assert!(validate_series_length("latency", 6, 6).is_ok());

        match validate_series_length("latency", 6, 7) {
            Err(ChartError::LengthMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 7);
                assert_eq!(actual, 6);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("kb", &[1.0, 2.0]).is_ok());
        assert!(matches!(
            validate_finite("kb", &[1.0, f64::NAN]),
            Err(ChartError::InvalidValue { index: 1, .. })
        ));
    }
}
