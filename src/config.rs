use std::fmt;

/// Deployment environment the service is running in.
///
/// The envelope builders and the exception handler query this to decide
/// whether internal error detail (debug blocks, raw exception messages) may
/// be exposed to callers. Constructed once at startup and carried by the
/// [`ApiResponder`](crate::ApiResponder) handle, never looked up ambiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Staging,
    Testing,
    Local,
}

impl Environment {
    /// Read the environment from `APP_ENV`, defaulting to `Local`.
    pub fn from_env() -> Self {
        std::env::var("APP_ENV")
            .map(|name| Self::from_name(&name))
            .unwrap_or(Environment::Local)
    }

    /// Parse an environment name. Unrecognized names fall back to `Local`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" => Environment::Staging,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Local,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Testing => "testing",
            Environment::Local => "local",
        }
    }

    /// Whether internal error detail must be withheld from responses.
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
