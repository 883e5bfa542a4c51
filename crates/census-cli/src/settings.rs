use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use census_core::{CompositionPolicy, DEFAULT_PRESENTED_TO};
use census_generate::OutputFormat;
use census_generate::output::write_bytes_atomic;

/// Settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "census.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Defaults for `census generate`; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub presented_to: String,
    pub files: CountSetting,
    pub households: CountSetting,
    pub policy: CompositionPolicy,
    pub format: OutputFormat,
    pub out_dir: PathBuf,
    pub run_dir: PathBuf,
    pub max_attempts: u32,
}

/// A count as written in the settings file.
///
/// Any TOML value is accepted; it goes through the same parse-then-clamp
/// path as a count typed on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountSetting {
    Number(i64),
    Float(f64),
    Text(String),
    Other(toml::Value),
}

impl CountSetting {
    /// Raw text handed to [`census_core::GenerationRequest::from_inputs`].
    pub fn to_input(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Other(_) => String::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            presented_to: DEFAULT_PRESENTED_TO.to_string(),
            files: CountSetting::Number(1),
            households: CountSetting::Number(5),
            policy: CompositionPolicy::EmployeeOnly,
            format: OutputFormat::Xlsx,
            out_dir: PathBuf::from("out"),
            run_dir: PathBuf::from("runs"),
            max_attempts: 1000,
        }
    }
}

/// Load settings from `path`, or from `census.toml` when present, or defaults.
///
/// An explicit path must exist.
pub fn load_settings(path: Option<&Path>) -> SettingsResult<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !fallback.exists() {
                return Ok(Settings::default());
            }
            fallback
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> SettingsResult<Settings> {
    Ok(toml::from_str(content)?)
}

pub fn save_settings(path: &Path, settings: &Settings) -> SettingsResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())?;
    Ok(())
}
