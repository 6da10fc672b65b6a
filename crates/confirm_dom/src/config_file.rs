//! Page-wide defaults loaded from TOML.
//!
//! ```toml
//! format = "Sure? ##counterp##"
//! countdown = 3
//! countdownCss = "disabled waiting"
//! cooldown = "15"
//! cooldownCss = ""
//! ```
//!
//! Hooks are code and cannot come from a file.

use confirm_core::{ConfigError, Count, Options};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DefaultsFile {
    format: Option<String>,
    countdown: Option<CountValue>,
    countdown_css: Option<String>,
    cooldown: Option<CountValue>,
    cooldown_css: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountValue {
    Number(i64),
    Text(String),
}

impl From<CountValue> for Count {
    fn from(v: CountValue) -> Self {
        match v {
            CountValue::Number(n) => Count::from_i64(n),
            CountValue::Text(s) => Count::parse(&s),
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Invalid(ConfigError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            LoadError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Invalid(err) => Some(err),
        }
    }
}

impl From<ConfigError> for LoadError {
    fn from(err: ConfigError) -> Self {
        LoadError::Invalid(err)
    }
}

/// Parse a TOML defaults document into options.
pub fn parse_defaults(src: &str) -> Result<Options, ConfigError> {
    let file: DefaultsFile = toml::from_str(src).map_err(|e| ConfigError::Parse {
        message: e.message().to_string(),
    })?;

    let mut options = Options::new();
    options.format = file.format.map(Into::into);
    options.countdown = file.countdown.map(Count::from);
    options.countdown_css = file.countdown_css;
    options.cooldown = file.cooldown.map(Count::from);
    options.cooldown_css = file.cooldown_css;
    Ok(options)
}

pub fn load_defaults(path: &Path) -> Result<Options, LoadError> {
    let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_defaults(&src)?)
}
