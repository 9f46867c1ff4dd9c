//! Locator and marker tables for the target portal
//!
//! These strings MUST track the portal markup. When the portal is
//! redeployed with new control ids, this file is the only place to update.

use std::time::Duration;

// ============================================================================
// LOGIN FORM
// ============================================================================

/// Company code input, tried in order
pub const COMPANY_CODE_INPUTS: &[&str] = &["#txtIsyeriKodu", "input[name='isyeriKodu']"];

/// Username input, tried in order
pub const USERNAME_INPUTS: &[&str] = &["#txtKullaniciAdi", "input[name='kullaniciAdi']"];

/// Password input, tried in order
pub const PASSWORD_INPUTS: &[&str] = &["#txtSifre", "input[type='password']"];

/// Login submit control, tried in order
pub const LOGIN_BUTTONS: &[&str] = &["#btnGiris", "button[type='submit']", "input[type='submit']"];

/// Second-factor code input, tried in order
pub const OTP_INPUTS: &[&str] = &["#txtDogrulamaKodu", "input[name='dogrulamaKodu']"];

/// Second-factor submit control, tried in order
pub const OTP_BUTTONS: &[&str] = &["#btnDogrula", "button[type='submit']"];

// ============================================================================
// LOGIN SUCCESS / FAILURE MARKERS
// ============================================================================

/// Fragments that only appear once a session is established
pub const DASHBOARD_MARKERS: &[&str] = &["btnCikis", "Güvenli Çıkış", "anasayfa-panel"];

/// Authenticated-area URL pattern
pub const AUTH_URL_PATTERN: &str = r"/(Anasayfa|Personel|Dashboard)";

/// Fragments that only appear while the login form is still showing
pub const LOGIN_MARKERS: &[&str] = &["txtKullaniciAdi", "frmGiris", "Kullanıcı Girişi"];

/// Fragments of the second-factor page
pub const OTP_MARKERS: &[&str] = &["txtDogrulamaKodu", "Doğrulama Kodu"];

// ============================================================================
// ENTRY FORM
// ============================================================================

/// Submit control of the personnel entry form, tried in order
pub const SUBMIT_BUTTONS: &[&str] = &["#btnKaydet", "button[type='submit']"];

/// Row selector inside the duty composite group
pub const DUTY_ROW_SELECTOR: &str = "#pnlGorevler .gorev-satir";

// ============================================================================
// TIMING
// ============================================================================

/// Delay after connecting or launching, lets the browser state settle
pub const BROWSER_SYNC_DELAY: Duration = Duration::from_millis(300);

/// Upper bound on the second-factor input probe
pub const OTP_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval for bounded selector waits
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Grace period after a tab switch, lets revealed fields attach behaviors
pub const TAB_GRACE_DELAY: Duration = Duration::from_millis(750);

/// Settle wait after submitting one record
pub const SUBMIT_SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// Upper bound on post-login success detection
pub const LOGIN_SETTLE_TIMEOUT: Duration = Duration::from_secs(10);
