use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DemoError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// NaN compares false against everything, so a NaN threshold would silently count nothing.
pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_all_finite(field_name: &str, values: &[f64]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        validate_finite(&format!("{}[{}]", field_name, index), *value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source.csv_path", "data.csv").is_ok());
        assert!(validate_path("source.csv_path", "").is_err());
        assert!(validate_path("source.csv_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("processor.threshold", 2.0).is_ok());
        assert!(validate_finite("processor.threshold", f64::NAN).is_err());
        assert!(validate_finite("processor.threshold", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_all_finite_names_index() {
        let err = validate_all_finite("source.values", &[1.0, f64::NAN]).unwrap_err();
        assert!(err.to_string().contains("source.values[1]"));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3.0);
        assert_eq!(*validate_required_field("threshold", &present).unwrap(), 3.0);

        let missing: Option<f64> = None;
        assert!(matches!(
            validate_required_field("threshold", &missing),
            Err(DemoError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("processor.name", "sample").is_ok());
        assert!(validate_non_empty_string("processor.name", "   ").is_err());
    }
}
