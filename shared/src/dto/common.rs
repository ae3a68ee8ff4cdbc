use serde::{Deserialize, Serialize};

/// Common error response body returned by the backend service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Embedded join rows come back from the data API either as a single object
/// (to-one relation), `null`, or an array (when the relation cardinality is
/// not known to the query planner). This normalizes all three shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeJoined<T> {
    One(Option<T>),
    Many(Vec<T>),
}

impl<T> MaybeJoined<T> {
    /// The joined row, if any. Arrays yield their first element.
    pub fn into_first(self) -> Option<T> {
        match self {
            MaybeJoined::One(inner) => inner,
            MaybeJoined::Many(rows) => rows.into_iter().next(),
        }
    }

    pub fn first(&self) -> Option<&T> {
        match self {
            MaybeJoined::One(inner) => inner.as_ref(),
            MaybeJoined::Many(rows) => rows.first(),
        }
    }
}

impl<T> Default for MaybeJoined<T> {
    fn default() -> Self {
        MaybeJoined::One(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_object_shape() {
        let joined: MaybeJoined<Named> = serde_json::from_str(r#"{"name":"U12"}"#).unwrap();
        assert_eq!(joined.into_first().unwrap().name, "U12");
    }

    #[test]
    fn test_null_shape() {
        let joined: MaybeJoined<Named> = serde_json::from_str("null").unwrap();
        assert!(joined.into_first().is_none());
    }

    #[test]
    fn test_array_shape_takes_first() {
        let joined: MaybeJoined<Named> =
            serde_json::from_str(r#"[{"name":"U12"},{"name":"U14"}]"#).unwrap();
        assert_eq!(joined.into_first().unwrap().name, "U12");
    }

    #[test]
    fn test_empty_array_is_none() {
        let joined: MaybeJoined<Named> = serde_json::from_str("[]").unwrap();
        assert!(joined.into_first().is_none());
    }
}
