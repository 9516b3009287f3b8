//! Deployment environments and their fixed base URLs.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Base URL of a locally running API.
pub const LOCAL_API_URL: &str = "http://localhost:8080/";

/// Base URL of the staging API.
pub const STAGE_API_URL: &str = "https://stage.api.itransact.com/";

/// Base URL of the production API.
pub const PRODUCTION_API_URL: &str = "https://api.itransact.com/";

/// Named deployment target a client talks to.
///
/// Selectors other than `"local"` and `"stage"` resolve to [`Environment::Production`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// `http://localhost:8080/`
    Local,
    /// Staging deployment
    Stage,
    /// Production deployment
    #[default]
    Production,
}

impl Environment {
    /// Resolve a loosely-typed selector. Matching is exact and case-sensitive.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "local" => Self::Local,
            "stage" => Self::Stage,
            _ => Self::Production,
        }
    }

    /// Base URL for this environment, always ending in `/`.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Local => LOCAL_API_URL,
            Self::Stage => STAGE_API_URL,
            Self::Production => PRODUCTION_API_URL,
        }
    }

    /// Canonical selector string for this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Stage => "stage",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl From<&str> for Environment {
    fn from(selector: &str) -> Self {
        Self::from_selector(selector)
    }
}
