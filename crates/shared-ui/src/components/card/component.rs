use dioxus::prelude::*;

/// A bordered surface grouping related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer section of a Card, right-aligned action row.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
