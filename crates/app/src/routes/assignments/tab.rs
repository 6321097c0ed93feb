use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_ui::components::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, PageActions, PageHeader,
    PageTitle,
};

use super::create::AssignmentCreate;

/// Assignments tab for course staff.
///
/// Shows an overview until `New Assignment` is clicked, then swaps in the
/// creation form. Going back discards the form without prompting.
#[component]
pub fn AssignmentsTab() -> Element {
    let mut creating = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./assignments.css") }
        div { class: "container assignments-tab",
            if *creating.read() {
                AssignmentCreate {
                    on_back: move |_| creating.set(false),
                }
            } else {
                PageHeader { description: "Course staff view",
                    PageTitle { "Assignments" }
                    PageActions {
                        Button {
                            onclick: move |_| {
                                tracing::debug!(target: "assignments", "opening assignment form");
                                creating.set(true);
                            },
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "New Assignment"
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "No assignments yet" }
                        CardDescription {
                            "Create an assignment with a name, a due date and a handout for students."
                        }
                    }
                    CardContent {
                        p { class: "text-muted",
                            "Assignments you create are not saved yet; submitting only records the request in the application log."
                        }
                    }
                }
            }
        }
    }
}
