use serde::{Deserialize, Serialize};
use validator::Validate;

/// Training center row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CenterDto {
    pub id: String,
    pub club_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCenterRequest {
    pub club_id: String,
    #[validate(length(min = 1, message = "Center name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_request_requires_name() {
        let request = CreateCenterRequest {
            club_id: "club-1".to_string(),
            name: String::new(),
            address: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_absent_address_is_omitted() {
        let request = CreateCenterRequest {
            club_id: "club-1".to_string(),
            name: "North Campus".to_string(),
            address: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("address"));
    }
}
