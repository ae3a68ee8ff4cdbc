use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user can hold in the platform. A user has at most one role,
/// optionally scoped to a club. Earlier schema iterations carried
/// `club_admin`/`center_admin` variants; those are superseded and an
/// unrecognized role string is handled at the call site as "no role".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Coach,
    Parent,
    Player,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Coach => "coach",
            UserRole::Parent => "parent",
            UserRole::Player => "player",
        }
    }

    /// Human-readable label for badges and headers.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Administrator",
            UserRole::Coach => "Coach",
            UserRole::Parent => "Parent",
            UserRole::Player => "Player",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(UserRole::SuperAdmin),
            "coach" => Ok(UserRole::Coach),
            "parent" => Ok(UserRole::Parent),
            "player" => Ok(UserRole::Player),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("super_admin", UserRole::SuperAdmin)]
    #[test_case("coach", UserRole::Coach)]
    #[test_case("parent", UserRole::Parent)]
    #[test_case("player", UserRole::Player)]
    fn test_role_from_str(input: &str, expected: UserRole) {
        assert_eq!(input.parse::<UserRole>().unwrap(), expected);
    }

    #[test]
    fn test_legacy_roles_are_rejected() {
        assert!("club_admin".parse::<UserRole>().is_err());
        assert!("center_admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&UserRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
        let back: UserRole = serde_json::from_str("\"player\"").unwrap();
        assert_eq!(back, UserRole::Player);
    }

    #[test]
    fn test_display_roundtrips_with_from_str() {
        for role in [
            UserRole::SuperAdmin,
            UserRole::Coach,
            UserRole::Parent,
            UserRole::Player,
        ] {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
    }
}
