use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;
use tracing::Level;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static LOAD_PROBLEM: OnceLock<String> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// `config.toml` as it stood at build time. Web builds have no filesystem
/// and always use it; native builds use it when no file is found.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse config file contents, reporting syntax or type errors as `BadRequest`.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::bad_request(format!("{CONFIG_PATH}: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<String> {
    std::fs::read_to_string(CONFIG_PATH).ok()
}

/// Load the configuration and store it in the global `OnceLock`. Safe to
/// call multiple times; only the first call has effect.
///
/// Native builds prefer a `config.toml` in the working directory over the
/// embedded copy. Unparseable contents yield the defaults. Runs before the
/// logger exists, so problems are reported once logging is up via
/// [`report_load_problem`].
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let file = read_config_file();
        let contents = file.as_deref().unwrap_or(EMBEDDED_CONFIG);
        parse_config(contents).unwrap_or_else(|e| {
            LOAD_PROBLEM.get_or_init(|| e.to_string());
            AppConfig::default()
        })
    })
}

/// Log whatever went wrong while loading the config file, if anything.
pub fn report_load_problem() {
    match LOAD_PROBLEM.get() {
        Some(problem) => tracing::warn!("{problem}; using default configuration"),
        None => tracing::debug!(config = ?config(), "configuration loaded"),
    }
}

/// Get the loaded configuration. Returns defaults if `load_config()` hasn't
/// been called yet.
pub fn config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Map a configured level name to a tracing level, falling back to `INFO`.
pub fn log_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}
