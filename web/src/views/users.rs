//! The manage-users screen: the table, the shared create/edit modal, and the
//! wiring between the collection, the edit session, and the toast sink.

use std::collections::HashSet;

use dioxus::prelude::*;

use api::ApiClient;
use store::{Commit, CommitError, Directory, EditSession, User, UserId};
use ui::components::{Button, ButtonVariant};
use ui::{push_toast, use_toasts, ModalOverlay, ToastLevel, UserFormDialog, UsersTable};

const USERS_CSS: Asset = asset!("/assets/users.css");

#[component]
pub fn ManageUsers() -> Element {
    let mut directory = use_signal(|| Directory::<ApiClient>::new(api::make_client()));
    let mut session = use_signal(EditSession::default);
    let mut toasts = use_toasts();
    // Records whose delete is still in flight; their row actions stay
    // disabled until the store answers.
    let mut deleting = use_signal(HashSet::<UserId>::new);
    let mut submitting = use_signal(|| false);

    // Initial fetch on mount. Builds its own directory so the resource does
    // not track the signal it replaces.
    let _loader = use_resource(move || async move {
        let mut dir = Directory::new(api::make_client());
        match dir.refresh().await {
            Ok(()) => directory.set(dir),
            Err(e) => push_toast(
                &mut toasts,
                ToastLevel::Error,
                format!("Error fetching users: {e}"),
            ),
        }
    });

    let open_create = move |_| session.write().open_create();

    let open_edit = move |user: User| session.write().open_edit(&user);

    let close_modal = move |_| session.write().close();

    let edit_field =
        move |(field, value): (store::DraftField, String)| session.write().set_field(field, value);

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            let client = directory.read().store().clone();
            let mut live = session();
            let result = live.commit(&client).await;
            submitting.set(false);

            match result {
                Ok(commit) => {
                    session.write().close();
                    let message = match commit {
                        Commit::Created => "User created successfully",
                        Commit::Updated => "User details updated successfully",
                    };
                    push_toast(&mut toasts, ToastLevel::Success, message);

                    let mut dir = directory();
                    match dir.refresh().await {
                        Ok(()) => directory.set(dir),
                        Err(e) => push_toast(
                            &mut toasts,
                            ToastLevel::Error,
                            format!("Error fetching users: {e}"),
                        ),
                    }
                }
                Err(CommitError::NotOpen) => {}
                Err(err @ CommitError::Incomplete(_)) => {
                    push_toast(&mut toasts, ToastLevel::Error, err.to_string());
                }
                Err(CommitError::Store(e)) => {
                    let action = if session.read().is_creating() {
                        "creating"
                    } else {
                        "updating"
                    };
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        format!("Error {action} user: {e}"),
                    );
                }
            }
        });
    };

    let handle_delete = move |id: UserId| {
        if deleting.read().contains(&id) {
            return;
        }
        deleting.write().insert(id.clone());
        spawn(async move {
            let mut dir = directory();
            let result = dir.remove(&id).await;
            deleting.write().remove(&id);

            match result {
                Ok(()) => {
                    directory.set(dir);
                    push_toast(&mut toasts, ToastLevel::Success, "User deleted successfully");
                }
                Err(e) => push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    format!("Error deleting user: {e}"),
                ),
            }
        });
    };

    let users = directory.read().users().to_vec();
    let busy_rows: Vec<UserId> = deleting.read().iter().cloned().collect();
    let modal = session();

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "users-page",

            header {
                class: "users-header",
                h1 { "Manage Users" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: open_create,
                    "Create User"
                }
            }

            UsersTable {
                users: users,
                busy_rows: busy_rows,
                on_edit: open_edit,
                on_delete: handle_delete,
            }

            if let Some(draft) = modal.draft() {
                ModalOverlay {
                    on_close: close_modal,
                    UserFormDialog {
                        draft: draft.clone(),
                        creating: modal.is_creating(),
                        busy: submitting(),
                        on_field: edit_field,
                        on_submit: handle_submit,
                        on_cancel: close_modal,
                    }
                }
            }
        }
    }
}
