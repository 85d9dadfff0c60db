use std::env;
use std::fmt;

/// Runtime mode. Development exposes internal error detail in 500 bodies,
/// production suppresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub environment: Environment,
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
}

impl Config {
    /// Reads the configuration from the process environment, falling back
    /// to defaults suitable for local development.
    pub fn init() -> Config {
        Config {
            port: env_parsed("PORT", 3000),
            cors_origin: env::var("FRONTEND_URL").unwrap_or_else(|_| "*".to_string()),
            environment: env::var("APP_ENV")
                .as_deref()
                .unwrap_or("development")
                .into(),
            rate_limit_max: env_parsed("RATE_LIMIT_MAX", 100),
            rate_limit_window_secs: env_parsed("RATE_LIMIT_WINDOW_SECS", 15 * 60),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_production_aliases() {
        assert_eq!(Environment::from("production"), Environment::Production);
        assert_eq!(Environment::from("PROD"), Environment::Production);
    }

    #[test]
    fn environment_defaults_to_development() {
        assert_eq!(Environment::from("development"), Environment::Development);
        assert_eq!(Environment::from("staging"), Environment::Development);
        assert!(Environment::from("").is_development());
    }
}
