use crate::error::{AppResult, AutomationError};
use crate::models::record::PersonnelCategory;

/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Portal credentials and entry points
    pub credentials: Credentials,
    /// Run the browser without a visible window
    pub headless: bool,
    /// Debug port of an already-running browser to attach to
    pub browser_debug_port: u16,
    /// TOML sheet with the records to enter
    pub records_file: String,
    /// Append-only journal for fields that could not be resolved
    pub unresolved_log_file: String,
    /// Append-only history of record outcomes
    pub history_file: String,
    /// Show per-field detail logs
    pub verbose_logging: bool,
}

/// Portal credentials
///
/// All portal URLs live here, not in the automation code: the wire contract
/// with the portal is configuration data.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Login page
    pub login_url: String,
    /// Entry form for hourly personnel
    pub worker_entry_url: String,
    /// Entry form for salaried personnel
    pub officer_entry_url: String,
    /// Company code typed into the login form
    pub company_code: String,
    pub username: String,
    pub password: String,
    /// Base32 seed for the one-time-code second factor, when enabled
    pub totp_seed: Option<String>,
}

impl Credentials {
    /// Entry URL for a personnel category
    pub fn entry_url(&self, category: PersonnelCategory) -> &str {
        match category {
            PersonnelCategory::Worker => &self.worker_entry_url,
            PersonnelCategory::Officer => &self.officer_entry_url,
        }
    }

    /// Reject before any browser work when a required item is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.login_url.is_empty() {
            return Err(AutomationError::missing_credential("login_url"));
        }
        if self.company_code.is_empty() {
            return Err(AutomationError::missing_credential("company_code"));
        }
        if self.username.is_empty() {
            return Err(AutomationError::missing_credential("username"));
        }
        if self.password.is_empty() {
            return Err(AutomationError::missing_credential("password"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials {
                login_url: "https://personel.ornekportal.com.tr/Giris.aspx".to_string(),
                worker_entry_url: "https://personel.ornekportal.com.tr/Personel/IsciGiris.aspx"
                    .to_string(),
                officer_entry_url: "https://personel.ornekportal.com.tr/Personel/MemurGiris.aspx"
                    .to_string(),
                company_code: String::new(),
                username: String::new(),
                password: String::new(),
                totp_seed: None,
            },
            headless: true,
            browser_debug_port: 9222,
            records_file: "personel.toml".to_string(),
            unresolved_log_file: "unresolved.txt".to_string(),
            history_file: "history.jsonl".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            credentials: Credentials {
                login_url: std::env::var("PORTAL_LOGIN_URL")
                    .unwrap_or(default.credentials.login_url),
                worker_entry_url: std::env::var("PORTAL_WORKER_ENTRY_URL")
                    .unwrap_or(default.credentials.worker_entry_url),
                officer_entry_url: std::env::var("PORTAL_OFFICER_ENTRY_URL")
                    .unwrap_or(default.credentials.officer_entry_url),
                company_code: std::env::var("PORTAL_COMPANY_CODE")
                    .unwrap_or(default.credentials.company_code),
                username: std::env::var("PORTAL_USERNAME")
                    .unwrap_or(default.credentials.username),
                password: std::env::var("PORTAL_PASSWORD")
                    .unwrap_or(default.credentials.password),
                totp_seed: std::env::var("PORTAL_TOTP_SEED").ok().filter(|s| !s.is_empty()),
            },
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            records_file: std::env::var("RECORDS_FILE").unwrap_or(default.records_file),
            unresolved_log_file: std::env::var("UNRESOLVED_LOG_FILE").unwrap_or(default.unresolved_log_file),
            history_file: std::env::var("HISTORY_FILE").unwrap_or(default.history_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
