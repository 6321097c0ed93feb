use dioxus::prelude::*;

/// Page header: title and actions on one row, optional description below.
#[component]
pub fn PageHeader(#[props(default)] description: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header-block",
            div { class: "page-header",
                {children}
            }
            if !description.is_empty() {
                p { class: "page-description", "{description}" }
            }
        }
    }
}

/// Page title element rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Container for action buttons in the page header.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
