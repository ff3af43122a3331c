use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "titanic-serve")]
#[command(about = "Web front-end serving Titanic survival predictions")]
pub struct ServeConfig {
    /// Listening port; deployment platforms inject PORT.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long, default_value = "model/forest.json")]
    pub model_path: String,

    #[arg(long, default_value = "model/processed_titanic.csv")]
    pub dataset_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ServeConfig {
    fn validate(&self) -> Result<()> {
        validate_path("model_path", &self.model_path)?;
        validate_path("dataset_path", &self.dataset_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        std::env::remove_var("PORT");
        let config = ServeConfig::parse_from(["titanic-serve"]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.model_path, "model/forest.json");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flag_overrides() {
        let config = ServeConfig::parse_from([
            "titanic-serve",
            "--port",
            "8080",
            "--model-path",
            "elsewhere/forest.json",
            "--verbose",
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, "elsewhere/forest.json");
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_model_path_fails_validation() {
        let mut config = ServeConfig::parse_from(["titanic-serve"]);
        config.model_path = "".to_string();
        assert!(config.validate().is_err());
    }
}
