pub mod assignments;
pub mod not_found;

use dioxus::prelude::*;

use assignments::AssignmentsTab;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Assignments {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Assignments route: the course staff assignments tab.
#[component]
fn Assignments() -> Element {
    rsx! { AssignmentsTab {} }
}

/// Shell shared by all in-app pages.
#[component]
fn AppLayout() -> Element {
    rsx! {
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
