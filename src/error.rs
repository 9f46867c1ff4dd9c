use std::fmt;

/// Top-level application error type
#[derive(Debug)]
pub enum AutomationError {
    /// Browser / driver level failures
    Browser(BrowserError),
    /// Configuration and credential problems
    Config(ConfigError),
    /// Login flow failures
    Auth(AuthError),
    /// Anything wrapped from third-party libraries
    Other(String),
}

impl fmt::Display for AutomationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomationError::Browser(e) => write!(f, "browser error: {}", e),
            AutomationError::Config(e) => write!(f, "configuration error: {}", e),
            AutomationError::Auth(e) => write!(f, "authentication error: {}", e),
            AutomationError::Other(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl std::error::Error for AutomationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutomationError::Browser(e) => Some(e),
            AutomationError::Config(e) => Some(e),
            AutomationError::Auth(e) => Some(e),
            AutomationError::Other(_) => None,
        }
    }
}

/// Browser / driver level failures
#[derive(Debug)]
pub enum BrowserError {
    /// Attaching to a running browser on the debug port failed
    ConnectionFailed {
        port: u16,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Launching a fresh browser instance failed
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Creating a page failed
    PageCreationFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Navigation failed
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// In-page script execution failed
    ScriptExecutionFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The session holds no live page
    PageUnavailable,
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::ConnectionFailed { port, source } => {
                write!(f, "could not attach to browser (port {}): {}", port, source)
            }
            BrowserError::LaunchFailed { source } => {
                write!(f, "could not launch browser: {}", source)
            }
            BrowserError::PageCreationFailed { source } => {
                write!(f, "could not create page: {}", source)
            }
            BrowserError::NavigationFailed { url, source } => {
                write!(f, "navigation to {} failed: {}", url, source)
            }
            BrowserError::ScriptExecutionFailed { source } => {
                write!(f, "script execution failed: {}", source)
            }
            BrowserError::PageUnavailable => {
                write!(f, "session holds no live page")
            }
        }
    }
}

impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrowserError::ConnectionFailed { source, .. }
            | BrowserError::LaunchFailed { source }
            | BrowserError::PageCreationFailed { source }
            | BrowserError::NavigationFailed { source, .. }
            | BrowserError::ScriptExecutionFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            BrowserError::PageUnavailable => None,
        }
    }
}

/// Configuration and credential problems
///
/// Everything here is fatal before any browser interaction starts.
#[derive(Debug)]
pub enum ConfigError {
    /// A required credential field is empty
    MissingCredential { field: &'static str },
    /// The batch was started with no records
    EmptyRecordSet,
    /// Manual entry left a required field without a value or default
    MissingRequiredField { field: String },
    /// Manual entry supplied a value of the wrong shape for the field
    InputKindMismatch { field: String, expected: &'static str },
    /// A chosen option is not in the field's allowed option list
    UnknownOption { field: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingCredential { field } => {
                write!(f, "required credential '{}' is not set", field)
            }
            ConfigError::EmptyRecordSet => write!(f, "no records to process"),
            ConfigError::MissingRequiredField { field } => {
                write!(f, "required field '{}' has no value and no default", field)
            }
            ConfigError::InputKindMismatch { field, expected } => {
                write!(f, "field '{}' expects {} input", field, expected)
            }
            ConfigError::UnknownOption { field, value } => {
                write!(
                    f,
                    "'{}' is not an allowed option for field '{}'",
                    value, field
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Login flow failures
///
/// Fatal: the whole batch is aborted, no records are attempted.
#[derive(Debug)]
pub enum AuthError {
    /// A login form control could not be filled or clicked
    SubmitFailed {
        stage: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The portal demanded a one-time code but no seed is configured
    TotpSeedMissing,
    /// The configured TOTP seed could not be used
    TotpSeedInvalid { detail: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::SubmitFailed { stage, source } => {
                write!(f, "login step '{}' failed: {}", stage, source)
            }
            AuthError::TotpSeedMissing => {
                write!(
                    f,
                    "portal asked for a one-time code but no TOTP seed is configured"
                )
            }
            AuthError::TotpSeedInvalid { detail } => {
                write!(f, "TOTP seed rejected: {}", detail)
            }
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::SubmitFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== conversions from common error types ==========
// anyhow already blanket-covers everything implementing std::error::Error,
// so only the inward conversions are spelled out here.

impl From<chromiumoxide::error::CdpError> for AutomationError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AutomationError::Browser(BrowserError::ScriptExecutionFailed {
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AutomationError {
    fn from(err: serde_json::Error) -> Self {
        AutomationError::Other(format!("JSON conversion failed: {}", err))
    }
}

impl From<std::io::Error> for AutomationError {
    fn from(err: std::io::Error) -> Self {
        AutomationError::Other(format!("I/O failed: {}", err))
    }
}

// ========== convenience constructors ==========

impl AutomationError {
    /// Attach failure on the well-known debug port
    pub fn connection_failed(
        port: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AutomationError::Browser(BrowserError::ConnectionFailed {
            port,
            source: Box::new(source),
        })
    }

    /// Fresh launch failure
    pub fn launch_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AutomationError::Browser(BrowserError::LaunchFailed {
            source: Box::new(source),
        })
    }

    /// Navigation failure
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AutomationError::Browser(BrowserError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// Login step failure
    pub fn auth_submit_failed(
        stage: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AutomationError::Auth(AuthError::SubmitFailed {
            stage,
            source: Box::new(source),
        })
    }

    /// Missing credential, reported before any automation starts
    pub fn missing_credential(field: &'static str) -> Self {
        AutomationError::Config(ConfigError::MissingCredential { field })
    }
}

// ========== Result alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AutomationError>;
