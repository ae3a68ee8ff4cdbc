use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile row from the `users_profile` table.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProfileDto {
    pub id: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<FixedOffset>,
    /// Two-letter language preference, e.g. "es" / "en".
    #[serde(default)]
    pub language: Option<String>,
}

/// Role assignment row from the `user_roles` table. The role arrives as a
/// raw string so that a legacy or unknown value can degrade to "unassigned"
/// instead of failing the whole resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleAssignmentDto {
    pub role: String,
    #[serde(default)]
    pub club_id: Option<String>,
}

/// The client-side identity derived from a profile row. Immutable for the
/// duration of a session; rebuilt on re-login.
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<FixedOffset>,
}

impl UserIdentity {
    pub fn from_profile(profile: &ProfileDto) -> Self {
        let (first_name, last_name) = split_full_name(&profile.full_name);
        Self {
            id: profile.id.clone(),
            email: profile.email.clone(),
            first_name,
            last_name,
            created_at: profile.created_at,
        }
    }
}

/// Splits a stored full name into (first, last). The first whitespace token
/// becomes the first name and the remaining tokens, joined by single spaces,
/// the last name. An empty remainder is an empty last name, not an error.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("Alex Johnson", "Alex", "Johnson")]
    #[test_case("Maria del Carmen Ruiz", "Maria", "del Carmen Ruiz")]
    #[test_case("Cher", "Cher", "")]
    #[test_case("", "", "")]
    #[test_case("  Ana   Gomez  ", "Ana", "Gomez")]
    fn test_split_full_name(input: &str, first: &str, last: &str) {
        assert_eq!(split_full_name(input), (first.to_string(), last.to_string()));
    }

    #[test]
    fn test_identity_from_profile() {
        let profile = ProfileDto {
            id: "u-1".to_string(),
            email: "alex@example.com".to_string(),
            full_name: "Alex Johnson".to_string(),
            created_at: "2024-03-01T10:00:00+00:00".parse().unwrap(),
            language: Some("en".to_string()),
        };
        let identity = UserIdentity::from_profile(&profile);
        assert_eq!(identity.first_name, "Alex");
        assert_eq!(identity.last_name, "Johnson");
        assert_eq!(identity.email, profile.email);
    }

    #[test]
    fn test_role_assignment_without_club() {
        let row: RoleAssignmentDto = serde_json::from_str(r#"{"role":"player"}"#).unwrap();
        assert_eq!(row.role, "player");
        assert!(row.club_id.is_none());
    }

    #[test]
    fn test_profile_language_is_optional() {
        let json = r#"{
            "id": "u-2",
            "email": "b@example.com",
            "full_name": "B C",
            "created_at": "2024-03-01T10:00:00+00:00"
        }"#;
        let profile: ProfileDto = serde_json::from_str(json).unwrap();
        assert!(profile.language.is_none());
    }
}
