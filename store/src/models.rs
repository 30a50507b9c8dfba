//! # Domain models for user records
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserId`] | Opaque identifier assigned by the remote store. |
//! | [`User`] | A persisted record as the store returns it. |
//! | [`UserDraft`] | The scratch record being typed in the modal, with no persisted id. |
//! | [`DraftField`] | One of the four editable form fields. |
//!
//! These types are `Serialize + Deserialize` so the `api` crate can decode
//! them straight off the wire.

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier assigned by the remote store.
///
/// The store is not consistent about the JSON type of ids — numeric database
/// rows come back as numbers, other handlers echo them as strings — so
/// deserialization accepts both and normalizes to text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => UserId(s),
            Raw::Number(n) => UserId(n.to_string()),
        })
    }
}

/// A user record as held by the remote store.
///
/// `password` is carried in plaintext: the store echoes it back on every list
/// and the table displays it as-is. That is the store's wire contract, not an
/// oversight on this side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    /// ISO calendar date carried as text: "2000-01-01"
    pub dob: String,
}

impl User {
    /// Seed an edit draft with a copy of this record's fields.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            dob: self.dob.clone(),
        }
    }
}

/// One of the four editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Password,
    Dob,
}

impl DraftField {
    /// Human-readable field name for notifications.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Email => "Email",
            DraftField::Password => "Password",
            DraftField::Dob => "Date of birth",
        }
    }
}

/// The scratch record being typed in the modal.
///
/// A draft has no persisted id; it joins the collection only after a
/// successful commit and the full refresh that follows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
}

impl UserDraft {
    /// Replace a single field, leaving the rest untouched.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Password => self.password = value,
            DraftField::Dob => self.dob = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Password => &self.password,
            DraftField::Dob => &self.dob,
        }
    }

    /// First required field that is still empty, or `None` when the draft is
    /// submittable. Whitespace-only input counts as empty.
    pub fn first_empty(&self) -> Option<DraftField> {
        [
            DraftField::Name,
            DraftField::Email,
            DraftField::Password,
            DraftField::Dob,
        ]
        .into_iter()
        .find(|field| self.get(*field).trim().is_empty())
    }
}
