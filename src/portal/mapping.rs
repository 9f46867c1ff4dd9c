//! Fixed translation tables
//!
//! Compile-time maps keep these immutable and allocation-free; they are
//! data, not behavior, and change only when the upstream sheet template or
//! the portal's bank list changes.

use phf::{phf_map, phf_set};

// ============================================================================
// SPREADSHEET HEADER → CANONICAL FIELD NAME
// ============================================================================

/// Canonical name of the first-name field
pub const FIRST_NAME_FIELD: &str = "ad";
/// Canonical name of the last-name field
pub const LAST_NAME_FIELD: &str = "soyad";
/// Canonical name of the national id field
pub const NATIONAL_ID_FIELD: &str = "tc_kimlik_no";
/// Canonical name of the account number field
pub const IBAN_FIELD: &str = "iban";

/// Exact header literals as the sheet template exports them.
///
/// Lookups are case- and whitespace-sensitive on purpose: a template change
/// should surface as an unmapped header, not be papered over.
static HEADER_TO_FIELD: phf::Map<&'static str, &'static str> = phf_map! {
    "AD" => "ad",
    "SOYAD" => "soyad",
    "TC KİMLİK NO" => "tc_kimlik_no",
    "DOĞUM TARİHİ" => "dogum_tarihi",
    "DOĞUM YERİ" => "dogum_yeri",
    "CİNSİYET" => "cinsiyet",
    "MEDENİ HAL" => "medeni_hal",
    "UYRUK" => "uyruk",
    "TELEFON" => "telefon",
    "E-POSTA" => "eposta",
    "ADRES" => "adres",
    "İL" => "il",
    "İŞE GİRİŞ TARİHİ" => "ise_giris_tarihi",
    "MESLEK KODU" => "meslek_kodu",
    "BRÜT ÜCRET" => "brut_ucret",
    "BANKA" => "banka",
    "IBAN" => "iban",
    "EĞİTİM DURUMU" => "egitim_durumu",
    "ENGELLİ" => "engelli",
    "EMEKLİ" => "emekli",
    "GÖREVLER" => "gorevler",
};

/// Translate a sheet header; unknown headers come back unchanged
pub fn canonical_field_name(header: &str) -> &str {
    HEADER_TO_FIELD.get(header).copied().unwrap_or(header)
}

// ============================================================================
// SELECT VALUE SYNONYMS
// ============================================================================

/// Folded synonym → folded fragment of the portal's option text.
///
/// Sheets write bank names a dozen ways; the portal renders exactly one.
/// Keys and values are pre-folded (see `utils::text::fold_for_match`).
static SELECT_SYNONYMS: phf::Map<&'static str, &'static str> = phf_map! {
    "ziraat" => "ziraat bankasi",
    "ziraat bank" => "ziraat bankasi",
    "is bankasi" => "turkiye is bankasi",
    "isbank" => "turkiye is bankasi",
    "garanti" => "garanti bbva",
    "yapi kredi" => "yapi ve kredi bankasi",
    "yapikredi" => "yapi ve kredi bankasi",
    "halk bankasi" => "halkbank",
    "vakif" => "vakifbank",
    "vakiflar bankasi" => "vakifbank",
    "ilkokul" => "ilkogretim",
    "universite" => "lisans",
};

/// Look up a folded search text in the synonym table
pub fn synonym_target(folded: &str) -> Option<&'static str> {
    SELECT_SYNONYMS.get(folded).copied()
}

// ============================================================================
// CHECKBOX COERCION
// ============================================================================

/// Folded tokens that check a checkbox; anything else unchecks it
static TRUTHY_TOKENS: phf::Set<&'static str> = phf_set! {
    "evet",
    "1",
    "true",
};

/// Coerce a sheet cell to a checkbox state
pub fn is_truthy(raw: &str) -> bool {
    TRUTHY_TOKENS.contains(crate::utils::text::fold_for_match(raw).as_str())
}
