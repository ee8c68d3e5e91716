use serde::{Deserialize, Serialize};

/// Identity the authorization backend returns for a valid access token.
///
/// Lives for a single request; it is never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub id: String,
    pub user_id: i64,
    pub client_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_deserialize() {
        let json = r#"{"id":"tok1","userId":42,"clientId":7}"#;
        let token: AccessToken = serde_json::from_str(json).unwrap();

        assert_eq!(token.id, "tok1");
        assert_eq!(token.user_id, 42);
        assert_eq!(token.client_id, 7);
    }

    #[test]
    fn test_access_token_ignores_extra_fields() {
        let json = r#"{"id":"tok1","userId":1,"clientId":2,"expires":1700000000}"#;
        let token: AccessToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.client_id, 2);
    }

    #[test]
    fn test_access_token_requires_ids() {
        let json = r#"{"id":"tok1","userId":"42"}"#;
        assert!(serde_json::from_str::<AccessToken>(json).is_err());
    }

    #[test]
    fn test_access_token_serialize_camel_case() {
        let token = AccessToken {
            id: "abc".to_string(),
            user_id: i64::MAX,
            client_id: -3,
        };
        let serialized = serde_json::to_string(&token).unwrap();
        assert!(serialized.contains(r#""userId":9223372036854775807"#));
        assert!(serialized.contains(r#""clientId":-3"#));
    }
}
