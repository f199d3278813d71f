//! Platform users as listed by the backend.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::{id::UserId, lenient};

/// A registered platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier (`_id` on the wire; a virtual `id` is ignored).
    #[serde(rename(deserialize = "_id"), default)]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub full_name: Option<String>,
    /// Email address, used as the key for deletion.
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Returns the email address or an empty string when absent.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// Returns the display name or an empty string when absent.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }
}

/// A user role.
///
/// Roles form an open set of strings; only [`Role::ADMIN`] carries meaning
/// here, as it is protected from deletion. Users without a role are
/// bucketed as [`Role::UNASSIGNED`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// The protected administrator role.
    pub const ADMIN: &'static str = "Admin";
    /// Placeholder for users whose document carries no role.
    pub const UNASSIGNED: &'static str = "Unassigned";

    /// Create a role from its string value.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// Returns the role as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether users with this role must never be deleted.
    ///
    /// Exact, case-sensitive comparison against `"Admin"`.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.0 == Self::ADMIN
    }
}

impl Default for Role {
    fn default() -> Self {
        Self(Self::UNASSIGNED.to_owned())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(lenient::text(deserializer)?.map_or_else(Self::default, Self))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_user() {
        let user: User = serde_json::from_value(json!({
            "_id": "65f0a1",
            "fullName": "Asha Rao",
            "email": "asha@example.com",
            "role": "User",
            "password": "$2b$10$ignored",
        }))
        .unwrap();

        assert_eq!(user.id, Some(UserId::new("65f0a1")));
        assert_eq!(user.full_name(), "Asha Rao");
        assert_eq!(user.email(), "asha@example.com");
        assert_eq!(user.role, Role::new("User"));
    }

    #[test]
    fn test_id_virtual_alongside_backend_id() {
        let user: User = serde_json::from_value(json!({
            "_id": "65f0a1",
            "id": "65f0a1",
            "email": "asha@example.com",
        }))
        .unwrap();

        assert_eq!(user.id, Some(UserId::new("65f0a1")));
        assert_eq!(
            serde_json::to_value(&user).unwrap()["id"],
            json!("65f0a1")
        );
    }

    #[test]
    fn test_missing_role_is_unassigned() {
        let user: User = serde_json::from_value(json!({"email": "a@b.c"})).unwrap();
        assert_eq!(user.role.as_str(), Role::UNASSIGNED);

        let user: User = serde_json::from_value(json!({"email": "a@b.c", "role": null})).unwrap();
        assert_eq!(user.role.as_str(), Role::UNASSIGNED);
    }

    #[test]
    fn test_only_exact_admin_is_protected() {
        assert!(Role::new("Admin").is_protected());
        assert!(!Role::new("admin").is_protected());
        assert!(!Role::new("ADMIN").is_protected());
        assert!(!Role::new("User").is_protected());
        assert!(!Role::default().is_protected());
    }
}
