use serde::{Deserialize, Serialize};

use stocklink_core::{UserId, WarehouseId};

use crate::Role;

/// The authenticated identity, derived from a login response.
///
/// Immutable once created; logging in again replaces the whole value.
/// Persisted in the login-response wire shape so a stored session from a
/// previous run loads without translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token attached to every authenticated call.
    pub token: String,
    pub user_id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub roles: Vec<Role>,
    /// Warehouse the account is assigned to, if any. Admins usually have
    /// none; warehouse operators are scoped to exactly one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<WarehouseId>,
}

impl Session {
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::ADMIN)
    }

    pub fn is_warehouse_user(&self) -> bool {
        self.has_role(&Role::USER)
    }

    pub fn warehouse_id(&self) -> Option<WarehouseId> {
        self.warehouse_id
    }

    /// Name shown in the header chrome; falls back to the email.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_session() -> Session {
        Session {
            token: "jwt-token".into(),
            user_id: UserId::new(1),
            email: "admin@ims.example".into(),
            first_name: Some("Ada".into()),
            last_name: Some("Marsh".into()),
            roles: vec![Role::ADMIN],
            warehouse_id: None,
        }
    }

    #[test]
    fn role_predicates() {
        let admin = admin_session();
        assert!(admin.is_admin());
        assert!(!admin.is_warehouse_user());

        let operator = Session {
            roles: vec![Role::USER],
            warehouse_id: Some(WarehouseId::new(3)),
            ..admin
        };
        assert!(operator.is_warehouse_user());
        assert!(!operator.is_admin());
        assert_eq!(operator.warehouse_id(), Some(WarehouseId::new(3)));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut s = admin_session();
        assert_eq!(s.display_name(), "Ada Marsh");
        s.first_name = None;
        s.last_name = None;
        assert_eq!(s.display_name(), "admin@ims.example");
    }

    #[test]
    fn round_trips_in_login_response_shape() {
        let s = admin_session();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"userId\":1"));
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
