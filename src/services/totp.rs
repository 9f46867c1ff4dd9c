//! One-time-code generation for the portal's second factor
//!
//! Standard 30-second-step, 6-digit HMAC-SHA1 codes from a base32 seed.

use thiserror::Error;
use totp_rs::{Algorithm, Secret, TOTP};

#[derive(Debug, Error)]
pub enum TotpError {
    #[error("TOTP seed is not valid base32")]
    InvalidSeed,
    #[error("TOTP seed unusable: {0}")]
    Unusable(String),
}

/// Code generator bound to one seed
pub struct TotpGenerator {
    totp: TOTP,
}

impl TotpGenerator {
    /// Build from the base32 seed as the portal hands it out.
    ///
    /// Whitespace and lowercase are tolerated; authenticator apps print
    /// seeds in groups of four.
    pub fn from_base32(seed: &str) -> Result<Self, TotpError> {
        let compact: String = seed
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let bytes = Secret::Encoded(compact)
            .to_bytes()
            .map_err(|_| TotpError::InvalidSeed)?;
        let totp = TOTP::new(Algorithm::SHA1, 6, 1, 30, bytes)
            .map_err(|e| TotpError::Unusable(e.to_string()))?;
        Ok(Self { totp })
    }

    /// 6-digit code for the current time window
    pub fn code_now(&self) -> Result<String, TotpError> {
        self.totp
            .generate_current()
            .map_err(|e| TotpError::Unusable(e.to_string()))
    }

    /// 6-digit code for an explicit unix timestamp
    pub fn code_at(&self, unix_secs: u64) -> String {
        self.totp.generate(unix_secs)
    }
}
