use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

/// Fallback for any path outside the assignments tab.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "container assignments-tab",
            Card {
                CardHeader {
                    CardTitle { "Nothing here" }
                    CardDescription {
                        code { "{path}" }
                        " is not part of this course."
                    }
                }
                CardContent {
                    Link { to: Route::Assignments {}, "Go to assignments" }
                }
            }
        }
    }
}
