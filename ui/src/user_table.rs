use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use store::{User, UserId};

use crate::components::{Button, ButtonVariant};

/// Renders the collection snapshot as rows with per-row actions.
///
/// `busy_rows` lists the records whose delete is still in flight; their
/// actions are disabled until the store answers, so the same row cannot be
/// acted on twice. Passwords render exactly as the store returns them.
#[component]
pub fn UsersTable(
    users: Vec<User>,
    busy_rows: Vec<UserId>,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<UserId>,
) -> Element {
    rsx! {
        table {
            class: "users-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Password" }
                    th { "DOB" }
                    th { "Actions" }
                }
            }
            tbody {
                if users.is_empty() {
                    tr {
                        td {
                            class: "users-empty",
                            colspan: "5",
                            "No users found"
                        }
                    }
                }
                for user in users.iter() {
                    UserRow {
                        key: "{user.id}",
                        user: user.clone(),
                        busy: busy_rows.contains(&user.id),
                        on_edit: on_edit,
                        on_delete: on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    busy: bool,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<UserId>,
) -> Element {
    let record = user.clone();
    let id = user.id.clone();

    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td { class: "cell-password", "{user.password}" }
            td { "{user.dob}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: busy,
                    title: "Edit",
                    onclick: move |_| on_edit.call(record.clone()),
                    Icon { width: 14, height: 14, icon: FaPen }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: busy,
                    title: "Delete",
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }
        }
    }
}
