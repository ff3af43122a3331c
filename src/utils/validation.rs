use crate::utils::error::{Result, ServeError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ServeError::Config {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ServeError::Config {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("model_path", "model/forest.json").is_ok());
        assert!(validate_path("model_path", "").is_err());
        assert!(validate_path("model_path", "   ").is_err());
        assert!(validate_path("model_path", "bad\0path").is_err());
    }
}
