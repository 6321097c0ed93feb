use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUpload;
use dioxus_free_icons::Icon;

/// A styled single-file picker.
///
/// The native input is visually hidden behind a label; the label text is
/// whatever the caller passes in `file_label`, typically the chosen file's
/// name or a placeholder. The component never writes to its own label.
#[component]
pub fn FileInput(
    id: String,
    file_label: String,
    #[props(default)] label: String,
    #[props(default)] accept: String,
    #[props(default = false)] has_file: bool,
    #[props(default)] on_change: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "file-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let state = if has_file { "selected" } else { "empty" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if !label.is_empty() {
            label { class: "input-label", r#for: "{id}", "{label}" }
        }
        div {
            "data-state": state,
            ..merged,
            input {
                id: "{id}",
                class: "file-input-native",
                r#type: "file",
                accept: "{accept}",
                onchange: move |evt| on_change.call(evt),
            }
            label { class: "file-input-label", r#for: "{id}",
                Icon::<FaUpload> { icon: FaUpload, width: 14, height: 14 }
                span { class: "file-input-text", "{file_label}" }
            }
        }
    }
}
