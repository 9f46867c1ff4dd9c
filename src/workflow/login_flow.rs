//! Login flow
//!
//! Drives the portal's login form through a small state machine:
//!
//! `NotAuthenticated → CredentialsSubmitted → {TwoFactorPending |
//! Authenticated} → Authenticated | Failed`
//!
//! Success detection is heuristic. The portal redirects differently per
//! tenant, so the flow probes an ordered marker list and, when nothing
//! matches within the settle window, logs a warning and continues
//! optimistically instead of aborting a batch that would likely succeed.

use anyhow::{Context, Result};
use regex::Regex;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Credentials;
use crate::error::{AuthError, AutomationError};
use crate::infrastructure::dom::DomDriver;
use crate::portal::selectors as sel;
use crate::services::totp::TotpGenerator;

/// Login state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    NotAuthenticated,
    CredentialsSubmitted,
    TwoFactorPending,
    Authenticated,
    Failed,
}

/// What one look at the page says about the login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginProbe {
    /// A dashboard/logout marker is in the DOM
    DashboardMarker,
    /// The URL is inside the authenticated area
    AuthenticatedUrl,
    /// The login form markers are gone
    NoLoginMarkers,
    /// The second-factor page is still showing
    StillTwoFactor,
    /// Nothing conclusive either way
    Ambiguous,
}

/// Ordered success heuristics, first match wins
pub(crate) fn classify_login_page(content: &str, url: &str, auth_url: &Regex) -> LoginProbe {
    if sel::DASHBOARD_MARKERS.iter().any(|m| content.contains(m)) {
        return LoginProbe::DashboardMarker;
    }
    if auth_url.is_match(url) {
        return LoginProbe::AuthenticatedUrl;
    }
    if !sel::LOGIN_MARKERS.iter().any(|m| content.contains(m)) {
        return LoginProbe::NoLoginMarkers;
    }
    if sel::OTP_MARKERS.iter().any(|m| content.contains(m)) {
        return LoginProbe::StillTwoFactor;
    }
    LoginProbe::Ambiguous
}

/// Drives the login once per batch
pub struct LoginFlow<'a> {
    credentials: &'a Credentials,
}

impl<'a> LoginFlow<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Run the full login. Errors here abort the batch; ambiguity does not.
    pub async fn run<D: DomDriver + ?Sized>(&self, dom: &D) -> Result<AuthState> {
        let mut state = AuthState::NotAuthenticated;
        info!("🔐 logging in at {}", self.credentials.login_url);

        dom.goto(&self.credentials.login_url).await.map_err(|e| {
            AutomationError::Auth(AuthError::SubmitFailed {
                stage: "navigate to login page",
                source: e.into(),
            })
        })?;

        self.set_first(dom, sel::COMPANY_CODE_INPUTS, &self.credentials.company_code, "company code")
            .await?;
        self.set_first(dom, sel::USERNAME_INPUTS, &self.credentials.username, "username")
            .await?;
        self.set_first(dom, sel::PASSWORD_INPUTS, &self.credentials.password, "password")
            .await?;
        self.click_first(dom, sel::LOGIN_BUTTONS, "login submit").await?;

        state = self.transition(state, AuthState::CredentialsSubmitted);

        if let Some(otp_input) = self.probe_second_factor(dom).await? {
            state = self.transition(state, AuthState::TwoFactorPending);
            self.submit_one_time_code(dom, &otp_input).await?;
        } else {
            debug!("no second-factor input appeared, assuming direct login");
        }

        state = self.await_authenticated(dom, state).await?;
        Ok(state)
    }

    /// Bounded probe for the second-factor input; returns the selector that
    /// resolved, if any
    async fn probe_second_factor<D: DomDriver + ?Sized>(&self, dom: &D) -> Result<Option<String>> {
        let deadline = tokio::time::Instant::now() + sel::OTP_PROBE_TIMEOUT;
        loop {
            for selector in sel::OTP_INPUTS {
                if dom.exists(selector).await? {
                    return Ok(Some(selector.to_string()));
                }
            }
            if tokio::time::Instant::now() >= deadline {
                return Ok(None);
            }
            sleep(sel::POLL_INTERVAL).await;
        }
    }

    async fn submit_one_time_code<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        otp_input: &str,
    ) -> Result<()> {
        let seed = self
            .credentials
            .totp_seed
            .as_deref()
            .ok_or(AutomationError::Auth(AuthError::TotpSeedMissing))?;
        let generator = TotpGenerator::from_base32(seed).map_err(|e| {
            AutomationError::Auth(AuthError::TotpSeedInvalid {
                detail: e.to_string(),
            })
        })?;
        let code = generator.code_now().map_err(|e| {
            AutomationError::Auth(AuthError::TotpSeedInvalid {
                detail: e.to_string(),
            })
        })?;

        info!("🔑 entering one-time code");
        // clear whatever half-typed code is in the field, then fill
        dom.set_value(otp_input, "").await?;
        if !dom.set_value(otp_input, &code).await? {
            return Err(AutomationError::Auth(AuthError::SubmitFailed {
                stage: "one-time code entry",
                source: anyhow::anyhow!("input {} vanished", otp_input).into(),
            })
            .into());
        }
        self.click_first(dom, sel::OTP_BUTTONS, "one-time code submit").await
    }

    /// Poll the success heuristics until something positive shows up or the
    /// settle window runs out; the window running out is not a failure.
    async fn await_authenticated<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        state: AuthState,
    ) -> Result<AuthState> {
        let auth_url = Regex::new(sel::AUTH_URL_PATTERN)
            .context("authenticated-area URL pattern does not compile")?;
        let deadline = tokio::time::Instant::now() + sel::LOGIN_SETTLE_TIMEOUT;
        loop {
            let content = dom.page_text().await?;
            let url = dom.current_url().await?;
            match classify_login_page(&content, &url, &auth_url) {
                LoginProbe::DashboardMarker => {
                    info!("✓ logged in (dashboard marker)");
                    return Ok(self.transition(state, AuthState::Authenticated));
                }
                LoginProbe::AuthenticatedUrl => {
                    info!("✓ logged in (authenticated URL: {})", url);
                    return Ok(self.transition(state, AuthState::Authenticated));
                }
                LoginProbe::NoLoginMarkers => {
                    info!("✓ logged in (login form gone)");
                    return Ok(self.transition(state, AuthState::Authenticated));
                }
                LoginProbe::StillTwoFactor | LoginProbe::Ambiguous if tokio::time::Instant::now() < deadline => {
                    sleep(sel::POLL_INTERVAL).await;
                }
                probe => {
                    warn!(
                        "login success detection stayed {:?} for {:?}, continuing optimistically",
                        probe,
                        sel::LOGIN_SETTLE_TIMEOUT
                    );
                    return Ok(self.transition(state, AuthState::Authenticated));
                }
            }
        }
    }

    fn transition(&self, from: AuthState, to: AuthState) -> AuthState {
        debug!("auth state: {:?} -> {:?}", from, to);
        to
    }

    /// Fill the first candidate that resolves; none resolving is fatal
    async fn set_first<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        candidates: &[&str],
        value: &str,
        stage: &'static str,
    ) -> Result<()> {
        for selector in candidates {
            if dom.set_value(selector, value).await? {
                return Ok(());
            }
        }
        Err(AutomationError::Auth(AuthError::SubmitFailed {
            stage,
            source: anyhow::anyhow!("no login control resolved").into(),
        })
        .into())
    }

    /// Click the first candidate that resolves; none resolving is fatal
    async fn click_first<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        candidates: &[&str],
        stage: &'static str,
    ) -> Result<()> {
        for selector in candidates {
            if dom.click(selector).await? {
                return Ok(());
            }
        }
        Err(AutomationError::Auth(AuthError::SubmitFailed {
            stage,
            source: anyhow::anyhow!("no submit control resolved").into(),
        })
        .into())
    }
}
