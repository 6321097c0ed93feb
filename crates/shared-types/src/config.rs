use serde::{Deserialize, Serialize};

/// Default label shown on the handout picker before a file is chosen.
pub const DEFAULT_HANDOUT_PLACEHOLDER: &str = "Upload handout here";

/// Default chrono pattern for displaying due dates ("Oct 19, 3:30 PM").
pub const DEFAULT_DUE_DATE_FORMAT: &str = "%b %d, %-I:%M %p";

/// Log verbosity settings.
///
/// `level` is one of `trace`, `debug`, `info`, `warn`, `error`
/// (case-insensitive). Anything else is treated as `info` by the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Presentation settings for the assignment creation form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentsConfig {
    #[serde(default = "default_placeholder")]
    pub handout_placeholder: String,
    #[serde(default = "default_due_format")]
    pub due_date_format: String,
    /// Value for the file input's `accept` attribute. Empty accepts anything.
    #[serde(default)]
    pub handout_accept: String,
}

impl Default for AssignmentsConfig {
    fn default() -> Self {
        Self {
            handout_placeholder: default_placeholder(),
            due_date_format: default_due_format(),
            handout_accept: String::new(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_HANDOUT_PLACEHOLDER.to_string()
}

fn default_due_format() -> String {
    DEFAULT_DUE_DATE_FORMAT.to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default so that a missing or partial
/// file still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub assignments: AssignmentsConfig,
}
