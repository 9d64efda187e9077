use crate::server::error::config::ConfigError;

/// Runtime configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,
    /// Run the whole submission pipeline inside a single transaction. A resubmission that
    /// fails any group then keeps its previous children instead of replacing them.
    pub submission_atomic: bool,
    pub log_level: String,
}

impl Config {
    const DEFAULT_LOG_LEVEL: &'static str = "info";

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            submission_atomic: optional_bool("SUBMISSION_ATOMIC", false)?,
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| Self::DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_bool(var: &str, default: bool) -> Result<bool, ConfigError> {
    let Ok(value) = std::env::var(var) else {
        return Ok(default);
    };

    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the default when the variable is unset
    #[test]
    fn optional_bool_defaults_when_unset() {
        let result = optional_bool("GEOMETA_TEST_UNSET_FLAG", true);

        assert!(result.unwrap());
    }

    /// Expect common spellings to parse and anything else to be rejected
    #[test]
    fn optional_bool_parses_values() {
        std::env::set_var("GEOMETA_TEST_FLAG_OFF", "Off");
        std::env::set_var("GEOMETA_TEST_FLAG_BAD", "maybe");

        assert!(!optional_bool("GEOMETA_TEST_FLAG_OFF", true).unwrap());
        assert!(matches!(
            optional_bool("GEOMETA_TEST_FLAG_BAD", true),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
    }
}
