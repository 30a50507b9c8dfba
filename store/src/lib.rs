//! # store — local state for the user administration screen
//!
//! This crate holds everything the screen knows about users without touching
//! the network or the DOM:
//!
//! - [`models`] — the [`User`] record, the [`UserDraft`] scratch copy edited in
//!   the modal, and the opaque [`UserId`].
//! - [`UserStore`] — the async gateway trait with the four remote operations
//!   (list, create, update, delete). The HTTP implementation lives in the
//!   `api` crate; [`MemoryUserStore`] is the in-process implementation used by
//!   tests.
//! - [`Directory`] — the authoritative local mirror of the collection,
//!   replaced wholesale after every successful round-trip.
//! - [`EditSession`] — the modal state machine (closed, creating, editing)
//!   that owns the draft and drives the commit protocol.
//!
//! Failures never corrupt state: a refresh that errors keeps the previous
//! snapshot, and a commit that errors keeps the session open with the draft
//! intact so the operator can retry.

pub mod models;

mod directory;
pub use directory::{Directory, UserStore};

mod session;
pub use session::{Commit, CommitError, EditSession};

mod error;
pub use error::StoreError;

mod memory;
pub use memory::MemoryUserStore;

pub use models::{DraftField, User, UserDraft, UserId};
