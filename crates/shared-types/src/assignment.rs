use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Field keys reported by [`AssignmentDraft::missing_fields`].
pub const FIELD_NAME: &str = "name";
pub const FIELD_DUE_AT: &str = "due_at";
pub const FIELD_HANDOUT: &str = "handout";

/// Accepted `datetime-local` input shapes, tried in order.
const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Reference to the handout file picked by the user.
///
/// Only metadata is kept; the file contents are never read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoutFile {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

impl HandoutFile {
    /// Build a handout reference from what the file picker reports.
    ///
    /// Browsers may prefix the name with a fake path (`C:\fakepath\notes.pdf`);
    /// only the final segment is kept. A missing content type is guessed
    /// from the extension.
    pub fn new(raw_name: &str, size_bytes: u64, content_type: Option<String>) -> Self {
        let name = file_name_from_path(raw_name).to_string();
        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| mime_from_filename(&name));
        Self {
            name,
            size_bytes,
            content_type,
        }
    }

    /// Human-readable size, e.g. "12.5 KB".
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = 1024 * KB;
        if self.size_bytes < KB {
            format!("{} B", self.size_bytes)
        } else if self.size_bytes < MB {
            format!("{:.1} KB", self.size_bytes as f64 / KB as f64)
        } else {
            format!("{:.1} MB", self.size_bytes as f64 / MB as f64)
        }
    }
}

/// Last path segment of a picker-reported file name.
pub fn file_name_from_path(raw: &str) -> &str {
    raw.rsplit(['\\', '/']).next().unwrap_or(raw)
}

/// Guess a MIME type from a file name's extension.
pub fn mime_from_filename(name: &str) -> String {
    let lower = name.to_lowercase();
    let mime = match lower.rsplit_once('.').map(|(_, ext)| ext) {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("zip") => "application/zip",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    };
    mime.to_string()
}

/// Parse the value of an HTML `datetime-local` input.
///
/// Returns `None` for empty or malformed input; the due date is then unset.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Format a timestamp as a `datetime-local` input value (`YYYY-MM-DDTHH:MM`).
pub fn to_datetime_local(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M").to_string()
}

/// Render a due date with a chrono format pattern.
pub fn format_due(at: NaiveDateTime, pattern: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    // Unknown specifiers surface as fmt::Error; `to_string()` would panic.
    if write!(out, "{}", at.format(pattern)).is_err() {
        return to_datetime_local(at);
    }
    out
}

/// In-progress assignment being filled out by course staff.
///
/// Lives only as long as the creation form; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentDraft {
    pub name: String,
    pub due_at: Option<NaiveDateTime>,
    pub handout: Option<HandoutFile>,
}

impl AssignmentDraft {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_due_at(&mut self, due_at: Option<NaiveDateTime>) {
        self.due_at = due_at;
    }

    /// Replace the chosen handout. `None` clears the selection.
    pub fn select_handout(&mut self, handout: Option<HandoutFile>) {
        self.handout = handout;
    }

    /// Fields that still need a value before the assignment can be created.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(FIELD_NAME);
        }
        if self.due_at.is_none() {
            missing.push(FIELD_DUE_AT);
        }
        if self.handout.is_none() {
            missing.push(FIELD_HANDOUT);
        }
        missing
    }

    /// Presence check only: non-empty name, a due date and a handout.
    pub fn can_create(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Text for the handout picker label.
    pub fn handout_label<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.handout
            .as_ref()
            .map(|h| h.name.as_str())
            .unwrap_or(placeholder)
    }

    /// Snapshot the draft as a creation request without modifying it.
    pub fn to_request(&self) -> Result<CreateAssignmentRequest, AppError> {
        match (&self.due_at, &self.handout) {
            (Some(due_at), Some(handout)) if !self.name.is_empty() => {
                Ok(CreateAssignmentRequest {
                    name: self.name.clone(),
                    due_at: *due_at,
                    handout: handout.clone(),
                })
            }
            _ => Err(AppError::missing_fields(self.missing_fields())),
        }
    }
}

/// Request to create a new assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    pub name: String,
    pub due_at: NaiveDateTime,
    pub handout: HandoutFile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn handout() -> HandoutFile {
        HandoutFile::new("a1-handout.pdf", 2048, Some("application/pdf".into()))
    }

    fn complete() -> AssignmentDraft {
        AssignmentDraft {
            name: "Assignment 1".into(),
            due_at: Some(at(2026, 10, 19, 23, 59)),
            handout: Some(handout()),
        }
    }

    #[test]
    fn default_draft_is_empty() {
        let draft = AssignmentDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.due_at.is_none());
        assert!(draft.handout.is_none());
        assert!(!draft.can_create());
    }

    #[test]
    fn any_missing_field_blocks_creation() {
        let mut no_name = complete();
        no_name.set_name("");
        let mut no_due = complete();
        no_due.set_due_at(None);
        let mut no_file = complete();
        no_file.select_handout(None);

        for draft in [no_name, no_due, no_file] {
            assert!(!draft.can_create(), "{draft:?}");
        }
    }

    #[test]
    fn all_fields_present_allows_creation() {
        assert!(complete().can_create());
    }

    #[test]
    fn whitespace_name_counts_as_present() {
        let mut draft = complete();
        draft.set_name("   ");
        assert!(draft.can_create());
    }

    #[test]
    fn past_due_dates_are_accepted() {
        let mut draft = complete();
        draft.set_due_at(Some(at(1999, 1, 1, 0, 0)));
        assert!(draft.can_create());
    }

    #[test]
    fn set_name_leaves_other_fields_alone() {
        let mut draft = complete();
        let before = draft.clone();
        draft.set_name("Renamed");
        assert_eq!(draft.name, "Renamed");
        assert_eq!(draft.due_at, before.due_at);
        assert_eq!(draft.handout, before.handout);
    }

    #[test]
    fn missing_fields_reports_in_form_order() {
        let draft = AssignmentDraft::default();
        assert_eq!(
            draft.missing_fields(),
            vec![FIELD_NAME, FIELD_DUE_AT, FIELD_HANDOUT]
        );
    }

    #[test]
    fn handout_label_follows_selection() {
        let mut draft = AssignmentDraft::default();
        assert_eq!(draft.handout_label("Upload handout here"), "Upload handout here");
        draft.select_handout(Some(handout()));
        assert_eq!(draft.handout_label("Upload handout here"), "a1-handout.pdf");
        draft.select_handout(None);
        assert_eq!(draft.handout_label("Upload handout here"), "Upload handout here");
    }

    #[test]
    fn to_request_does_not_mutate_draft() {
        let draft = complete();
        let before = draft.clone();
        let request = draft.to_request().unwrap();
        assert_eq!(draft, before);
        assert_eq!(request.name, "Assignment 1");
        assert_eq!(request.due_at, at(2026, 10, 19, 23, 59));
        assert_eq!(request.handout, handout());
    }

    #[test]
    fn to_request_reports_missing_fields() {
        let mut draft = AssignmentDraft::default();
        draft.set_name("Lab 2");
        let err = draft.to_request().unwrap_err();
        assert!(!err.has_field_error(FIELD_NAME));
        assert!(err.has_field_error(FIELD_DUE_AT));
        assert!(err.has_field_error(FIELD_HANDOUT));
    }

    #[test]
    fn handout_name_strips_fake_path() {
        let file = HandoutFile::new(r"C:\fakepath\week3.docx", 10, None);
        assert_eq!(file.name, "week3.docx");
        assert_eq!(
            file.content_type,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(file_name_from_path("/tmp/notes/readme.txt"), "readme.txt");
        assert_eq!(file_name_from_path("plain.pdf"), "plain.pdf");
    }

    #[test]
    fn handout_keeps_reported_content_type() {
        let file = HandoutFile::new("data.bin", 1, Some("application/x-custom".into()));
        assert_eq!(file.content_type, "application/x-custom");
        let blank = HandoutFile::new("data.bin", 1, Some(String::new()));
        assert_eq!(blank.content_type, "application/octet-stream");
    }

    #[test]
    fn size_label_units() {
        assert_eq!(HandoutFile::new("a", 512, None).size_label(), "512 B");
        assert_eq!(HandoutFile::new("a", 2048, None).size_label(), "2.0 KB");
        assert_eq!(
            HandoutFile::new("a", 3 * 1024 * 1024, None).size_label(),
            "3.0 MB"
        );
    }

    #[test]
    fn parse_datetime_local_accepts_minutes_and_seconds() {
        assert_eq!(
            parse_datetime_local("2026-10-19T15:30"),
            Some(at(2026, 10, 19, 15, 30))
        );
        assert_eq!(
            parse_datetime_local("2026-10-19T15:30:00"),
            Some(at(2026, 10, 19, 15, 30))
        );
    }

    #[test]
    fn parse_datetime_local_rejects_garbage() {
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("tomorrow"), None);
        assert_eq!(parse_datetime_local("2026-13-01T10:00"), None);
    }

    #[test]
    fn datetime_local_formatting() {
        assert_eq!(to_datetime_local(at(2026, 1, 5, 9, 7)), "2026-01-05T09:07");
    }

    #[test]
    fn format_due_uses_pattern() {
        let due = at(2026, 10, 19, 15, 30);
        assert_eq!(format_due(due, "%b %d, %-I:%M %p"), "Oct 19, 3:30 PM");
        assert_eq!(format_due(at(2026, 3, 2, 0, 5), "%b %d, %-I:%M %p"), "Mar 02, 12:05 AM");
    }

    #[test]
    fn format_due_falls_back_on_bad_pattern() {
        let due = at(2026, 10, 19, 15, 30);
        assert_eq!(format_due(due, "%Q"), "2026-10-19T15:30");
    }

    #[test]
    fn request_serializes_due_at_as_naive_timestamp() {
        let json = serde_json::to_value(complete().to_request().unwrap()).unwrap();
        assert_eq!(json["due_at"], "2026-10-19T23:59:00");
        assert_eq!(json["handout"]["name"], "a1-handout.pdf");
    }
}
