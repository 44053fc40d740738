// DeviceDiag - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for DeviceDiag configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Full path of config.toml inside the platform configuration directory
    /// (e.g. ~/.config/devicediag/ or %APPDATA%\DeviceDiag\config\).
    pub config_file: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let config_file = config_dir.join(constants::CONFIG_FILE_NAME);

            tracing::debug!(
                config = %config_dir.display(),
                "Platform paths resolved"
            );

            Self { config_file }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_file: PathBuf::from(".").join(constants::CONFIG_FILE_NAME),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[report]` section.
    pub report: ReportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Report font size in points.
    pub font_size: Option<f32>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// File name pre-filled in the Save As dialog.
    pub default_file_name: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Report font size in points.
    pub font_size: f32,
    /// File name pre-filled in the Save As dialog.
    pub default_file_name: String,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            default_file_name: constants::DEFAULT_REPORT_FILE_NAME.to_string(),
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with one warning.
///
/// This runs before logging is initialised (the log level comes from it),
/// so callers log the returned warnings themselves.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    (validate(raw, &mut warnings), warnings)
}

/// Check each field against the named limits, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(out_of_range(
                "ui.theme",
                other,
                "\"dark\" or \"light\"".to_string(),
            )),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(out_of_range(
                "ui.font_size",
                &size.to_string(),
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            ));
        }
    }

    // -- Report: default_file_name --
    if let Some(name) = raw.report.default_file_name {
        let trimmed = name.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= constants::MAX_REPORT_FILE_NAME_LEN
            && !trimmed.contains(['/', '\\']);
        if valid {
            config.default_file_name = trimmed.to_string();
        } else {
            warnings.push(out_of_range(
                "report.default_file_name",
                &name,
                format!(
                    "a bare file name of 1-{} characters",
                    constants::MAX_REPORT_FILE_NAME_LEN
                ),
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(out_of_range(
                "logging.level",
                level,
                constants::VALID_LOG_LEVELS.join(", "),
            ));
        }
    }

    config
}

fn out_of_range(field: &str, value: &str, expected: String) -> String {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    };
    format!("{err}. Using default.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_resolved_path_names_the_config_file() {
        let paths = PlatformPaths::resolve();
        assert_eq!(
            paths.config_file.file_name().and_then(|n| n.to_str()),
            Some(constants::CONFIG_FILE_NAME)
        );
        assert!(paths.config_file.parent().is_some());
    }

    #[test]
    fn test_missing_file_gives_defaults_silently() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[ui]
theme = "Light"
font_size = 16.0

[report]
default_file_name = "lab-pc.txt"

[logging]
level = "DEBUG"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.default_file_name, "lab-pc.txt");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[ui]
theme = "sepia"
font_size = 200.0

[report]
default_file_name = "../escape.txt"

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 4, "warnings: {warnings:?}");
        assert_eq!(config, AppConfig::default());
        assert!(warnings.iter().any(|w| w.contains("ui.font_size")));
    }

    #[test]
    fn test_unparseable_file_warns_once() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[ui\ntheme = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config parse error"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[future]\nflag = true\n");
        let (_, warnings) = load_config(&path);
        assert!(warnings.is_empty());
    }
}
