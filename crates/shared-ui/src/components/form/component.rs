use dioxus::prelude::*;

/// Form wrapper that swallows the browser's default submission.
///
/// Pressing Enter in a field fires `onsubmit` unless the form is `locked`,
/// which keeps keyboard submission in step with a disabled submit button.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default = false)] locked: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let locked_attr = if locked { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            "data-locked": locked_attr,
            onsubmit: move |evt| {
                evt.prevent_default();
                if !locked {
                    onsubmit.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}
