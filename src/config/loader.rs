//! Configuration loading

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MuwanxError, MuwanxResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{ProjectFile, Settings};

pub const ENV_BASE_PATH: &str = "MUWANX_BASE_PATH";
pub const ENV_NO_LAUNCH: &str = "MUWANX_NO_LAUNCH";
pub const ENV_HOST: &str = "MUWANX_HOST";
pub const ENV_PORT: &str = "MUWANX_PORT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Load a project file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MuwanxResult<(ProjectFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| MuwanxError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse project file contents; `path` is used for messages only
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MuwanxResult<(ProjectFile, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let file: ProjectFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MuwanxError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((file, warnings))
}

/// Apply `MUWANX_*` overrides read through `lookup`, warning to `writer`
pub fn with_env_overrides<F, W>(mut settings: Settings, lookup: F, writer: &mut W) -> Settings
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(base_path) = lookup(ENV_BASE_PATH) {
        settings.base_path = Some(base_path);
    }

    if let Some(value) = lookup(ENV_NO_LAUNCH) {
        settings.no_launch = EnvVarValidator::new(
            ENV_NO_LAUNCH,
            &["1", "0", "true", "false", "yes", "no"],
        )
        .parse_or_warn(&value, parse_flag, false, writer);
    }

    if let Some(value) = lookup(ENV_HOST) {
        let default = settings.host.clone();
        settings.host = EnvVarValidator::new(ENV_HOST, &["localhost", "127.0.0.1", "0.0.0.0"])
            .with_expected("a host name or IP address without spaces")
            .parse_or_warn(&value, parse_host, default, writer);
    }

    if let Some(value) = lookup(ENV_PORT) {
        settings.port = EnvVarValidator::new(ENV_PORT, &[])
            .with_expected("a port number from 0 to 65535")
            .parse_or_warn(&value, |s| s.trim().parse::<u16>().ok(), settings.port, writer);
    }

    settings
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}

fn parse_host(value: &str) -> Option<String> {
    let host = value.trim();
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        None
    } else {
        Some(host.to_string())
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app",
        "base_path",
        "projects",
        "name",
        "id",
        "metadata",
        "scenes",
        "model",
        "policies",
        "config",
        "config_path",
        "source_path",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
