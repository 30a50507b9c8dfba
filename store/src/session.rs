//! The modal edit-session state machine.

use thiserror::Error;

use crate::directory::UserStore;
use crate::error::StoreError;
use crate::models::{DraftField, User, UserDraft, UserId};

/// What a successful commit did, so the caller can phrase the notification
/// and trigger a collection refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    Created,
    Updated,
}

/// Why a commit did not go through.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommitError {
    /// A required field is empty; no request was issued and the draft is
    /// untouched.
    #[error("{} is required", .0.label())]
    Incomplete(DraftField),

    /// No session is open; there is nothing to commit.
    #[error("no edit session is open")]
    NotOpen,

    /// The store failed or rejected the request; the session stays open with
    /// the draft intact so the operator can retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// State machine for the single shared create/edit modal.
///
/// At most one draft exists at a time, and it is owned here exclusively: the
/// collection never sees it until a commit round-trips through the store and
/// a refresh replaces the snapshot. The mode is determined solely by how the
/// draft was seeded — empty for `Creating`, copied from a record for
/// `Editing` — and the captured id never changes for the life of a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Creating(UserDraft),
    Editing { id: UserId, draft: UserDraft },
}

impl EditSession {
    /// Open the modal with an empty draft.
    pub fn open_create(&mut self) {
        *self = EditSession::Creating(UserDraft::default());
    }

    /// Open the modal seeded with a copy of an existing record.
    pub fn open_edit(&mut self, user: &User) {
        *self = EditSession::Editing {
            id: user.id.clone(),
            draft: user.to_draft(),
        };
    }

    /// Close the modal, discarding the draft unconditionally. Used for
    /// cancel, backdrop dismissal, and after a successful commit alike.
    pub fn close(&mut self) {
        *self = EditSession::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, EditSession::Creating(_))
    }

    /// The live draft, while the modal is open.
    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            EditSession::Closed => None,
            EditSession::Creating(draft) => Some(draft),
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    /// Id of the record being edited, in edit mode only.
    pub fn editing_id(&self) -> Option<&UserId> {
        match self {
            EditSession::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Replace one field of the live draft. No-op while closed.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match self {
            EditSession::Closed => {}
            EditSession::Creating(draft) => draft.set(field, value),
            EditSession::Editing { draft, .. } => draft.set(field, value),
        }
    }

    /// Validate the draft and commit it through the store.
    ///
    /// All four fields must be non-empty before any request goes out. On
    /// success the session closes and the draft is discarded; the caller is
    /// expected to report the outcome and refresh the collection. On any
    /// failure the session is left exactly as it was.
    pub async fn commit<S: UserStore>(&mut self, store: &S) -> Result<Commit, CommitError> {
        let outcome = match &*self {
            EditSession::Closed => return Err(CommitError::NotOpen),
            EditSession::Creating(draft) => {
                if let Some(field) = draft.first_empty() {
                    return Err(CommitError::Incomplete(field));
                }
                store.create(draft).await?;
                Commit::Created
            }
            EditSession::Editing { id, draft } => {
                if let Some(field) = draft.first_empty() {
                    return Err(CommitError::Incomplete(field));
                }
                store.update(id, draft).await?;
                Commit::Updated
            }
        };
        *self = EditSession::Closed;
        Ok(outcome)
    }
}
