use shared_types::{parse_datetime_local, AssignmentDraft, CreateAssignmentRequest, HandoutFile};

/// A user interaction with the assignment creation form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    SetName(String),
    /// Raw `datetime-local` widget value.
    SetDueAt(String),
    SelectHandout(Option<HandoutFile>),
    Create,
    Back,
}

impl FormCommand {
    /// Whether applying this command can change the draft.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            FormCommand::SetName(_) | FormCommand::SetDueAt(_) | FormCommand::SelectHandout(_)
        )
    }
}

/// What the component must do after a command was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Created(CreateAssignmentRequest),
    Back,
}

/// Apply a command to the draft.
///
/// Edits touch exactly one field and produce no outcome. `Create` and
/// `Back` only read the draft.
pub fn apply(draft: &mut AssignmentDraft, command: FormCommand) -> Option<FormOutcome> {
    match command {
        FormCommand::SetName(name) => {
            draft.set_name(name);
            None
        }
        FormCommand::SetDueAt(raw) => {
            draft.set_due_at(parse_datetime_local(&raw));
            None
        }
        FormCommand::SelectHandout(handout) => {
            draft.select_handout(handout);
            None
        }
        FormCommand::Create => match draft.to_request() {
            Ok(request) => Some(FormOutcome::Created(request)),
            Err(e) => {
                tracing::warn!(target: "assignments", error = %e, "create ignored, draft incomplete");
                None
            }
        },
        FormCommand::Back => Some(FormOutcome::Back),
    }
}
