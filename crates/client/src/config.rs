//! Service endpoint configuration.

use thiserror::Error;

const AUTH_URL_VAR: &str = "STOCKLINK_AUTH_URL";
const CATALOG_URL_VAR: &str = "STOCKLINK_CATALOG_URL";
const INVENTORY_URL_VAR: &str = "STOCKLINK_INVENTORY_URL";
const AUDIT_URL_VAR: &str = "STOCKLINK_AUDIT_URL";

/// Base URLs of the four backend services.
///
/// Each value is the service's API root (e.g. `http://localhost:8083/api`
/// for inventory); paths are appended verbatim, so trailing slashes are
/// trimmed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub auth: String,
    pub catalog: String,
    pub inventory: String,
    pub audit: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

impl ServiceEndpoints {
    pub fn new(
        auth: impl Into<String>,
        catalog: impl Into<String>,
        inventory: impl Into<String>,
        audit: impl Into<String>,
    ) -> Self {
        Self {
            auth: trim_base(auth.into()),
            catalog: trim_base(catalog.into()),
            inventory: trim_base(inventory.into()),
            audit: trim_base(audit.into()),
        }
    }

    /// Read the four `STOCKLINK_*_URL` variables, picking up a local
    /// `.env` file first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(Self::new(
            require(AUTH_URL_VAR)?,
            require(CATALOG_URL_VAR)?,
            require(INVENTORY_URL_VAR)?,
            require(AUDIT_URL_VAR)?,
        ))
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
