//! Response-body decoding for the user endpoints.
//!
//! The backing service signals outcomes with sentinel strings as often as
//! with structure: a list answer is either a JSON array of records or a
//! `{"message": "User not found"}` body that means zero records, a 2xx
//! mutation answer can still carry an `error` field, and a delete is
//! confirmed only by one exact message. Everything here is a pure function of
//! the body text so the mapping is testable without a network.

use serde::Deserialize;
use store::{StoreError, User};

/// Message a list response carries instead of an empty array.
const NOT_FOUND_SENTINEL: &str = "User not found";
/// The only message that confirms a delete.
const DELETE_OK_SENTINEL: &str = "User deleted successfully";

#[derive(Debug, Deserialize)]
struct StatusBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody {
    Users(Vec<User>),
    Status(StatusBody),
}

/// Decode a 2xx list body, mapping the "not found" sentinel to an empty
/// collection rather than a failure.
pub(crate) fn decode_list(body: &str) -> Result<Vec<User>, StoreError> {
    match serde_json::from_str::<ListBody>(body) {
        Ok(ListBody::Users(users)) => Ok(users),
        Ok(ListBody::Status(status)) => {
            if let Some(error) = status.error {
                return Err(StoreError::Rejected(error));
            }
            match status.message {
                Some(message) if message == NOT_FOUND_SENTINEL => Ok(Vec::new()),
                Some(message) => Err(StoreError::Rejected(message)),
                None => Err(StoreError::Rejected(
                    "unrecognized list response".to_string(),
                )),
            }
        }
        Err(e) => Err(StoreError::Rejected(format!("malformed list response: {e}"))),
    }
}

/// Decode a 2xx create/update body. An embedded `error` field is a failure
/// despite the status; anything else, including a non-JSON body, is success.
pub(crate) fn decode_mutation(body: &str) -> Result<(), StoreError> {
    if let Ok(status) = serde_json::from_str::<StatusBody>(body) {
        if let Some(error) = status.error {
            return Err(StoreError::Rejected(error));
        }
    }
    Ok(())
}

/// Decode a 2xx delete body. Only the exact success sentinel confirms the
/// delete; any other message — the service's failure sentinel included — is
/// normalized to a failure carrying that message.
pub(crate) fn decode_delete(body: &str) -> Result<(), StoreError> {
    let status: StatusBody = serde_json::from_str(body)
        .map_err(|e| StoreError::Rejected(format!("malformed delete response: {e}")))?;
    if let Some(error) = status.error {
        return Err(StoreError::Rejected(error));
    }
    match status.message {
        Some(message) if message == DELETE_OK_SENTINEL => Ok(()),
        Some(message) => Err(StoreError::Rejected(message)),
        None => Err(StoreError::Rejected(
            "unrecognized delete response".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::UserId;

    #[test]
    fn test_list_decodes_records() {
        let body = r#"[
            {"id": 1, "name": "Ann", "email": "a@x.com", "password": "p", "dob": "2000-01-01"},
            {"id": "2", "name": "Ben", "email": "b@x.com", "password": "q", "dob": "1999-12-31"}
        ]"#;

        let users = decode_list(body).unwrap();
        assert_eq!(users.len(), 2);
        // Numeric and string ids both normalize to text.
        assert_eq!(users[0].id, UserId::new("1"));
        assert_eq!(users[1].id, UserId::new("2"));
        assert_eq!(users[0].name, "Ann");
        assert_eq!(users[1].dob, "1999-12-31");
    }

    #[test]
    fn test_list_not_found_sentinel_means_empty() {
        let users = decode_list(r#"{"message": "User not found"}"#).unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_list_error_field_is_failure() {
        let err = decode_list(r#"{"error": "database unavailable"}"#).unwrap_err();
        assert_eq!(err, StoreError::Rejected("database unavailable".to_string()));
    }

    #[test]
    fn test_list_unknown_message_is_failure() {
        let err = decode_list(r#"{"message": "maintenance window"}"#).unwrap_err();
        assert_eq!(err, StoreError::Rejected("maintenance window".to_string()));
    }

    #[test]
    fn test_list_malformed_body_is_failure() {
        assert!(decode_list("<html>502</html>").is_err());
    }

    #[test]
    fn test_mutation_plain_body_is_success() {
        decode_mutation(r#"{"message": "User created successfully"}"#).unwrap();
        decode_mutation("").unwrap();
    }

    #[test]
    fn test_mutation_error_field_fails_despite_2xx() {
        let err = decode_mutation(r#"{"error": "email already taken"}"#).unwrap_err();
        assert_eq!(err, StoreError::Rejected("email already taken".to_string()));
    }

    #[test]
    fn test_delete_success_sentinel() {
        decode_delete(r#"{"message": "User deleted successfully"}"#).unwrap();
    }

    #[test]
    fn test_delete_other_message_is_failure() {
        let err = decode_delete(r#"{"message": "Failed to delete user"}"#).unwrap_err();
        assert_eq!(err, StoreError::Rejected("Failed to delete user".to_string()));
    }

    #[test]
    fn test_delete_ambiguous_body_is_failure() {
        assert!(decode_delete(r#"{}"#).is_err());
        assert!(decode_delete("ok").is_err());
    }
}
