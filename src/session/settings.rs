use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "retroshell";
const SETTINGS_FILE: &str = "settings.json";

pub type SessionResult<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to write session settings: {path}")]
    WriteSettings { path: PathBuf, source: io::Error },
    #[error("failed to serialize session settings")]
    Serialize(#[from] serde_json::Error),
}

/// The selections that survive a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSettings {
    pub theme_name: String,
    pub selected_variant: String,
    pub selected_color_scheme: String,
    pub selected_aspect_ratio: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            theme_name: "analogue-os-menu-es-de".to_string(),
            selected_variant: "gamelist-list".to_string(),
            selected_color_scheme: "dark".to_string(),
            selected_aspect_ratio: "16:9".to_string(),
        }
    }
}

/// Loads persisted settings, degrading to defaults when the file is missing
/// or corrupt — a broken settings file must never block startup.
pub fn load_settings() -> SessionSettings {
    let (xdg_config_home, home) = config_env_dirs();
    load_settings_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_settings_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> SessionSettings {
    let path = match settings_path_with(xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return SessionSettings::default(),
    };
    if !path.exists() {
        return SessionSettings::default();
    }
    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse settings.json; using defaults");
            SessionSettings::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read settings.json; using defaults");
            SessionSettings::default()
        }
    }
}

pub fn save_settings(settings: &SessionSettings) -> SessionResult<()> {
    let (xdg_config_home, home) = config_env_dirs();
    save_settings_with(settings, xdg_config_home.as_deref(), home.as_deref())
}

fn save_settings_with(
    settings: &SessionSettings,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> SessionResult<()> {
    let path = settings_path_with(xdg_config_home, home)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SessionError::WriteSettings {
            path: path.clone(),
            source,
        })?;
    }
    let serialized = serde_json::to_string_pretty(settings)?;
    fs::write(&path, serialized).map_err(|source| SessionError::WriteSettings {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

fn settings_path_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> SessionResult<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(APP_DIR);
    path.push(SETTINGS_FILE);
    Ok(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> SessionResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }
    let home = home.ok_or(SessionError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}
