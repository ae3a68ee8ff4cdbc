use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

/// Club row, also used as the branding record the layout chrome consumes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ClubDto {
    pub id: String,
    #[validate(length(min = 1, message = "Club name is required"))]
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    #[validate(regex(path = "HEX_COLOR_REGEX", message = "Color must be #rrggbb"))]
    pub primary_color: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

/// Minimal club reference embedded in join rows and selectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubRef {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_primary_color_must_be_hex() {
        let mut club: ClubDto = serde_json::from_str(
            r##"{
            "id": "club-1",
            "name": "Rayo FC",
            "primary_color": "#1a2b3c",
            "created_at": "2024-01-15T09:00:00+00:00"
        }"##,
        )
        .unwrap();
        assert!(club.validate().is_ok());

        club.primary_color = Some("blue".to_string());
        assert!(club.validate().is_err());
    }

    #[test]
    fn test_branding_fields_are_optional() {
        let json = r#"{
            "id": "club-1",
            "name": "Rayo FC",
            "created_at": "2024-01-15T09:00:00+00:00"
        }"#;
        let club: ClubDto = serde_json::from_str(json).unwrap();
        assert_eq!(club.name, "Rayo FC");
        assert!(club.logo_url.is_none());
        assert!(club.primary_color.is_none());
    }
}
