use dioxus::prelude::*;
use store::{DraftField, UserDraft};

use crate::components::{Button, ButtonVariant, Input, Label};

/// The shared create/edit form rendered inside the modal.
///
/// The draft is not owned here: every keystroke goes out through `on_field`
/// and the refreshed draft comes back in as a prop, so the edit session stays
/// the single owner of what is being typed.
#[component]
pub fn UserFormDialog(
    draft: UserDraft,
    creating: bool,
    busy: bool,
    on_field: EventHandler<(DraftField, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if creating { "Create User" } else { "Edit User" };
    let submit_label = if creating { "Create" } else { "Save Changes" };

    rsx! {
        div {
            class: "user-form",
            h2 { "{title}" }

            div {
                class: "form-field",
                Label { html_for: "user-name", "Name" }
                Input {
                    id: "user-name",
                    placeholder: "Full name",
                    value: draft.name.clone(),
                    oninput: move |evt: FormEvent| on_field.call((DraftField::Name, evt.value())),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "user-email", "Email" }
                Input {
                    id: "user-email",
                    placeholder: "name@example.com",
                    value: draft.email.clone(),
                    oninput: move |evt: FormEvent| on_field.call((DraftField::Email, evt.value())),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "user-password", "Password" }
                Input {
                    id: "user-password",
                    value: draft.password.clone(),
                    oninput: move |evt: FormEvent| on_field.call((DraftField::Password, evt.value())),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "user-dob", "DOB" }
                Input {
                    id: "user-dob",
                    r#type: "date",
                    value: draft.dob.clone(),
                    oninput: move |evt: FormEvent| on_field.call((DraftField::Dob, evt.value())),
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: busy,
                    onclick: move |_| on_submit.call(()),
                    if busy { "Saving..." } else { "{submit_label}" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
