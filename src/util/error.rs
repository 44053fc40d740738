// DeviceDiag - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all DeviceDiag operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DiagError {
    /// A device backend could not be brought up.
    Init(InitError),

    /// Querying devices failed after initialisation.
    Probe(ProbeError),

    /// Writing a report to disk failed.
    Save(SaveError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for DiagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "Initialisation error: {e}"),
            Self::Probe(e) => write!(f, "Device query error: {e}"),
            Self::Save(e) => write!(f, "Save error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for DiagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Init(e) => Some(e),
            Self::Probe(e) => Some(e),
            Self::Save(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Init errors
// ---------------------------------------------------------------------------

/// Errors raised while opening the device backends.
#[derive(Debug)]
pub enum InitError {
    /// The gamepad backend refused to start.
    GamepadBackend { backend: &'static str, reason: String },

    /// The display backend could not be reached (no display server,
    /// missing permissions).
    DisplayBackend { backend: &'static str, reason: String },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GamepadBackend { backend, reason } => {
                write!(f, "gamepad backend '{backend}' failed to start: {reason}")
            }
            Self::DisplayBackend { backend, reason } => {
                write!(f, "display backend '{backend}' is unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for InitError {}

impl From<InitError> for DiagError {
    fn from(e: InitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Probe errors
// ---------------------------------------------------------------------------

/// Errors raised while enumerating devices.
#[derive(Debug)]
pub enum ProbeError {
    /// Monitor enumeration failed.
    Monitors { backend: &'static str, reason: String },

    /// Joystick enumeration failed.
    Joysticks { backend: &'static str, reason: String },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monitors { backend, reason } => {
                write!(f, "could not enumerate monitors via '{backend}': {reason}")
            }
            Self::Joysticks { backend, reason } => {
                write!(f, "could not enumerate joysticks via '{backend}': {reason}")
            }
        }
    }
}

impl std::error::Error for ProbeError {}

impl From<ProbeError> for DiagError {
    fn from(e: ProbeError) -> Self {
        Self::Probe(e)
    }
}

// ---------------------------------------------------------------------------
// Save errors
// ---------------------------------------------------------------------------

/// Errors related to writing a report file.
#[derive(Debug)]
pub enum SaveError {
    /// The destination could not be created or written.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<SaveError> for DiagError {
    fn from(e: SaveError) -> Self {
        Self::Save(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for DiagError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Log a fatal error and terminate the process with a failure status.
///
/// Every unrecoverable path (backend start-up, a failed refresh, GUI
/// launch) ends here. There is no retry.
pub fn exit_fatal(context: &str, err: &dyn std::error::Error) -> ! {
    let mut chain = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        // Wrapper variants already embed their inner message.
        let text = inner.to_string();
        if !chain.contains(&text) {
            chain.push_str(": ");
            chain.push_str(&text);
        }
        cause = inner.source();
    }
    tracing::error!(error = %chain, "{context}");
    eprintln!("Error: {context}: {chain}");
    std::process::exit(super::constants::EXIT_FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_save_error_keeps_io_source() {
        let err: DiagError = SaveError::Io {
            path: PathBuf::from("/nope/report.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        let msg = err.to_string();
        assert!(msg.starts_with("Save error:"), "got {msg}");
        assert!(msg.contains("report.txt"));

        let save = err.source().expect("DiagError::Save has a source");
        let io = save.source().expect("SaveError::Io has a source");
        assert_eq!(io.to_string(), "denied");
    }

    #[test]
    fn test_probe_error_names_backend() {
        let err = ProbeError::Joysticks {
            backend: "gilrs",
            reason: "device list unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not enumerate joysticks via 'gilrs': device list unavailable"
        );
    }

    #[test]
    fn test_init_error_display_backend_has_no_source() {
        let err = InitError::DisplayBackend {
            backend: "display-info",
            reason: "no display server".to_string(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("no display server"));
    }
}
