//! Client Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::{MAX_EMAIL_LEN, MAX_LOGIN_LEN, MAX_NAME_LEN, not_blank};

/// Client entity
///
/// Orders referencing a client are reachable through an order lookup by
/// client id; the entity itself carries no back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: Uuid,
    pub name: String,
    pub login: String,
    pub email: String,
}

/// Create / update client payload (updates always overwrite every field)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClientPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_NAME_LEN, message = "is too long")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_LOGIN_LEN, message = "is too long")
    )]
    pub login: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_EMAIL_LEN, message = "is too long")
    )]
    pub email: String,
}

impl ClientPayload {
    pub fn new(
        name: impl Into<String>,
        login: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            login: login.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_serializes_camel_case() {
        let client = Client {
            client_id: Uuid::nil(),
            name: "Ana".into(),
            login: "ana".into(),
            email: "ana@example.com".into(),
        };
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["clientId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["login"], "ana");
        assert!(json.get("client_id").is_none());
    }

    #[test]
    fn test_payload_rejects_blank_fields() {
        assert!(ClientPayload::new("Ana", "ana", "ana@example.com").validate().is_ok());

        let errors = ClientPayload::new("  ", "ana", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("login"));
    }

    #[test]
    fn test_payload_rejects_overlong_name() {
        let name = "x".repeat(MAX_NAME_LEN as usize + 1);
        let errors = ClientPayload::new(name, "ana", "ana@example.com")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
