use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role granted to an account by the auth service.
///
/// Roles are opaque strings at this layer; the two the platform ships are
/// exposed as constants. Screens are gated on these, but the backends
/// remain the enforcing authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Full administrative access (approvals, catalog and user management).
    pub const ADMIN: Role = Role(Cow::Borrowed("ROLE_ADMIN"));

    /// Warehouse operator access (stock views, movements, requests).
    pub const USER: Role = Role(Cow::Borrowed("ROLE_USER"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&Role::ADMIN).unwrap();
        assert_eq!(json, "\"ROLE_ADMIN\"");
        let back: Role = serde_json::from_str("\"ROLE_USER\"").unwrap();
        assert_eq!(back, Role::USER);
    }

    #[test]
    fn custom_roles_pass_through_untouched() {
        let auditor = Role::new("ROLE_AUDITOR");
        assert_eq!(auditor.as_str(), "ROLE_AUDITOR");
        assert_ne!(auditor, Role::ADMIN);
    }
}
