//! Login flow against the in-memory DOM

mod common;

use common::FakeDom;
use personel_entry_bot::error::{AuthError, AutomationError};
use personel_entry_bot::workflow::{AuthState, LoginFlow};
use personel_entry_bot::Credentials;

// RFC 6238 test seed, base32 of "12345678901234567890"
const TEST_SEED: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

fn credentials(totp_seed: Option<&str>) -> Credentials {
    Credentials {
        login_url: "https://portal.test/Giris.aspx".to_string(),
        worker_entry_url: "https://portal.test/Personel/IsciGiris.aspx".to_string(),
        officer_entry_url: "https://portal.test/Personel/MemurGiris.aspx".to_string(),
        company_code: "123456".to_string(),
        username: "ik.uzman".to_string(),
        password: "gizli".to_string(),
        totp_seed: totp_seed.map(str::to_string),
    }
}

fn login_page_dom() -> FakeDom {
    let dom = FakeDom::new();
    dom.put_plain("#txtIsyeriKodu");
    dom.put_plain("#txtKullaniciAdi");
    dom.put_plain("#txtSifre");
    dom.put_plain("#btnGiris");
    dom
}

#[tokio::test(start_paused = true)]
async fn plain_login_without_second_factor() {
    let dom = login_page_dom();
    // after submit the page no longer shows the login form
    dom.set_content("<div class='anasayfa-panel'>Hoş geldiniz</div>");

    let creds = credentials(None);
    let state = LoginFlow::new(&creds).run(&dom).await.unwrap();
    assert_eq!(state, AuthState::Authenticated);

    assert_eq!(dom.value_of("#txtIsyeriKodu"), "123456");
    assert_eq!(dom.value_of("#txtKullaniciAdi"), "ik.uzman");
    assert_eq!(dom.value_of("#txtSifre"), "gizli");
}

#[tokio::test(start_paused = true)]
async fn second_factor_gets_a_six_digit_code() {
    let dom = login_page_dom();
    dom.put_plain("#txtDogrulamaKodu");
    dom.put_plain("#btnDogrula");
    dom.set_content("<div class='anasayfa-panel'></div>");

    let creds = credentials(Some(TEST_SEED));
    let state = LoginFlow::new(&creds).run(&dom).await.unwrap();
    assert_eq!(state, AuthState::Authenticated);

    let code = dom.value_of("#txtDogrulamaKodu");
    assert_eq!(code.len(), 6, "expected a 6-digit code, got '{}'", code);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test(start_paused = true)]
async fn second_factor_without_seed_is_fatal() {
    let dom = login_page_dom();
    dom.put_plain("#txtDogrulamaKodu");
    dom.set_content("<form id='frmGiris'></form>");

    let creds = credentials(None);
    let err = LoginFlow::new(&creds).run(&dom).await.unwrap_err();
    let automation = err.downcast_ref::<AutomationError>().unwrap();
    assert!(matches!(
        automation,
        AutomationError::Auth(AuthError::TotpSeedMissing)
    ));
}

#[tokio::test(start_paused = true)]
async fn missing_login_controls_are_fatal() {
    let dom = FakeDom::new();
    let creds = credentials(None);
    let err = LoginFlow::new(&creds).run(&dom).await.unwrap_err();
    let automation = err.downcast_ref::<AutomationError>().unwrap();
    assert!(matches!(
        automation,
        AutomationError::Auth(AuthError::SubmitFailed { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn ambiguous_page_logs_and_continues() {
    let dom = login_page_dom();
    // login form still visible, no second-factor marker, URL unchanged
    dom.set_content("<form id='frmGiris'><input id='txtKullaniciAdi'></form>");

    let creds = credentials(None);
    let state = LoginFlow::new(&creds).run(&dom).await.unwrap();
    // ambiguity is a warning, not a failure
    assert_eq!(state, AuthState::Authenticated);
}
