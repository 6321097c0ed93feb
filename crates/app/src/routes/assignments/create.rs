use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_types::{format_due, to_datetime_local, AssignmentDraft, AssignmentsConfig, HandoutFile};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, FileInput, Form,
    Input,
};

use super::form_state::{apply, FormCommand, FormOutcome};

/// Assignment creation form: name, due date/time and handout file.
///
/// `Create` stays disabled until all three values are present. Confirming
/// writes the request to the `assignments` log target; nothing is sent
/// anywhere. `on_back` is called once per click of `Back`; the form state
/// is dropped with the component.
#[component]
pub fn AssignmentCreate(on_back: EventHandler<()>, initial: Option<AssignmentDraft>) -> Element {
    let settings = try_use_context::<AssignmentsConfig>().unwrap_or_default();
    let mut draft = use_signal(|| initial.clone().unwrap_or_default());

    let mut dispatch = move |command: FormCommand| {
        let outcome = if command.is_edit() {
            draft.with_mut(|d| apply(d, command))
        } else {
            apply(&mut (*draft.peek()).clone(), command)
        };
        finish(outcome, on_back);
    };

    let handle_file = move |evt: FormEvent| {
        let handout = first_handout(
            evt.files()
                .iter()
                .map(|f| (f.name(), f.size(), f.content_type())),
        );
        tracing::debug!(
            target: "assignments",
            file = ?handout.as_ref().map(|h| h.name.as_str()),
            "handout selection changed"
        );
        dispatch(FormCommand::SelectHandout(handout));
    };

    let current = draft.read();
    let due_value = current.due_at.map(to_datetime_local).unwrap_or_default();
    let due_hint = current
        .due_at
        .map(|at| format!("Due {}", format_due(at, &settings.due_date_format)))
        .unwrap_or_default();
    let file_label = current.handout_label(&settings.handout_placeholder).to_string();
    let file_size = current
        .handout
        .as_ref()
        .map(|h| h.size_label())
        .unwrap_or_default();
    let has_file = current.handout.is_some();
    let can_create = current.can_create();
    let name = current.name.clone();
    drop(current);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./assignments.css") }
        Card { class: "assignment-create",
            CardHeader {
                CardTitle { "New Assignment" }
            }
            Form {
                locked: !can_create,
                onsubmit: move |_| dispatch(FormCommand::Create),
                CardContent {
                    div { class: "form-group",
                        Input {
                            id: "new-assign-name",
                            label: "Name",
                            placeholder: "Assignment title",
                            value: name,
                            on_input: move |e: FormEvent| dispatch(FormCommand::SetName(e.value())),
                        }
                    }

                    div { class: "form-group",
                        Input {
                            id: "new-assign-due",
                            label: "Due",
                            input_type: "datetime-local",
                            value: due_value,
                            hint: due_hint,
                            on_input: move |e: FormEvent| dispatch(FormCommand::SetDueAt(e.value())),
                        }
                    }

                    div { class: "form-group",
                        FileInput {
                            id: "new-assign-upload",
                            label: "Assignment Handout",
                            file_label,
                            accept: settings.handout_accept.clone(),
                            has_file,
                            on_change: handle_file,
                        }
                        if has_file {
                            span { class: "input-hint", "{file_size}" }
                        }
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| dispatch(FormCommand::Back),
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Back"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        disabled: !can_create,
                        "Create"
                    }
                }
            }
        }
    }
}

/// Carry out what a command asked for once the draft has been updated.
fn finish(outcome: Option<FormOutcome>, on_back: EventHandler<()>) {
    match outcome {
        Some(FormOutcome::Created(request)) => match serde_json::to_string(&request) {
            Ok(payload) => tracing::info!(
                target: "assignments",
                name = %request.name,
                due_at = %request.due_at,
                handout = %request.handout.name,
                %payload,
                "assignment create requested"
            ),
            Err(e) => tracing::error!(target: "assignments", error = %e, "failed to encode request"),
        },
        Some(FormOutcome::Back) => {
            tracing::debug!(target: "assignments", "leaving assignment form");
            on_back.call(());
        }
        None => {}
    }
}

/// Handout reference for the first picked file as `(name, size, content type)`.
/// An empty pick (dialog cancelled) yields `None`.
fn first_handout<I>(picked: I) -> Option<HandoutFile>
where
    I: IntoIterator<Item = (String, u64, Option<String>)>,
{
    picked
        .into_iter()
        .next()
        .map(|(name, size, content_type)| HandoutFile::new(&name, size, content_type))
}
