use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for the password-grant sign-in call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// User's email address
    #[validate(email)]
    pub email: String,

    /// User's password
    #[validate(length(min = 8))]
    pub password: String,
}

/// Request for a password change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Free-form user metadata carried on the auth record. Accounts created by
/// an admin with a temporary password carry `temp_password: true` until the
/// user changes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserMetadata {
    #[serde(default)]
    pub temp_password: Option<bool>,
}

/// The auth-service view of a user, as returned by the session and
/// sign-in endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl SessionUser {
    /// Whether this account is still on an admin-issued temporary password.
    pub fn temp_password(&self) -> bool {
        self.user_metadata.temp_password == Some(true)
    }
}

/// Response for a successful password grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sign_in_request() -> SignInRequest {
        SignInRequest {
            email: "parent@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_sign_in_request_validation() {
        assert!(sign_in_request().validate().is_ok());
    }

    #[test]
    fn test_sign_in_request_invalid_email() {
        let mut request = sign_in_request();
        request.email = "not-an-email".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_sign_in_request_short_password() {
        let mut request = sign_in_request();
        request.password = "1234567".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_update_password_minimum_length() {
        let ok = UpdatePasswordRequest {
            password: "12345678".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = UpdatePasswordRequest {
            password: "1234567".to_string(),
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_temp_password_marker() {
        let json = r#"{
            "id": "u-1",
            "email": "p@example.com",
            "user_metadata": { "temp_password": true }
        }"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert!(user.temp_password());
    }

    #[test]
    fn test_temp_password_defaults_to_false() {
        // A normally registered account has no marker at all.
        let json = r#"{ "id": "u-2" }"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert!(!user.temp_password());
        assert!(user.email.is_none());
    }

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{
            "access_token": "jwt.token.here",
            "user": { "id": "u-3", "email": "c@example.com", "user_metadata": {} }
        }"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "jwt.token.here");
        assert_eq!(resp.user.id, "u-3");
        assert!(!resp.user.temp_password());
    }
}
