use dioxus::prelude::*;

/// A labelled text input.
///
/// When `id` is set the label is bound to the input with `for`, so clicking
/// the label focuses the field. `hint` renders a muted line under the input.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] id: String,
    #[props(default)] hint: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !hint.is_empty() {
                span { class: "input-hint", "{hint}" }
            }
        }
    }
}
