use dioxus::prelude::*;

use views::ManageUsers;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/manage-users")]
    ManageUsers {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the one mounted screen.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::ManageUsers {});
    rsx! {}
}
