//! Field set of the personnel entry form
//!
//! Tab layout mirrors the portal: 1 kimlik (identity), 2 iletişim
//! (contact), 3 ücret ve banka (payroll), 4 diğer (misc + duties).

use crate::models::field::{FieldDescriptor, InputKind};
use crate::models::form::{FormSchema, TabLocator};

const CINSIYET_OPTIONS: &[&str] = &["Erkek", "Kadın"];
const MEDENI_HAL_OPTIONS: &[&str] = &["Bekar", "Evli"];
const IL_OPTIONS: &[&str] = &[
    "ADANA", "ANKARA", "ANTALYA", "BURSA", "İSTANBUL", "İZMİR", "KAYSERİ", "KOCAELİ", "KONYA",
    "MERSİN", "SAMSUN", "TRABZON",
];
const BANKA_OPTIONS: &[&str] = &[
    "AKBANK",
    "GARANTİ BBVA",
    "HALKBANK",
    "TÜRKİYE İŞ BANKASI",
    "VAKIFBANK",
    "YAPI VE KREDİ BANKASI",
    "ZİRAAT BANKASI",
];
const EGITIM_OPTIONS: &[&str] = &["İlköğretim", "Lise", "Ön Lisans", "Lisans", "Yüksek Lisans"];

fn fields() -> Vec<FieldDescriptor> {
    vec![
        // ---- tab 1: kimlik ----
        FieldDescriptor::text("tc_kimlik_no", "TC Kimlik No", "#txtTcKimlikNo", true, 1)
            .with_max_length(11),
        FieldDescriptor::text("ad", "Ad", "#txtAd", true, 1).with_max_length(50),
        FieldDescriptor::text("soyad", "Soyad", "#txtSoyad", true, 1).with_max_length(50),
        FieldDescriptor::text("dogum_tarihi", "Doğum Tarihi", "#txtDogumTarihi", true, 1)
            .with_kind(InputKind::Date),
        FieldDescriptor::text("dogum_yeri", "Doğum Yeri", "#txtDogumYeri", false, 1),
        FieldDescriptor::text("cinsiyet", "Cinsiyet", "#ddlCinsiyet", true, 1)
            .with_kind(InputKind::Select)
            .with_options(CINSIYET_OPTIONS),
        FieldDescriptor::text("medeni_hal", "Medeni Hal", "#ddlMedeniHal", false, 1)
            .with_kind(InputKind::Select)
            .with_options(MEDENI_HAL_OPTIONS)
            .with_default("Bekar"),
        FieldDescriptor::text("uyruk", "Uyruk", "#txtUyruk", false, 1).with_default("T.C."),
        // ---- tab 2: iletişim ----
        FieldDescriptor::text("telefon", "Telefon", "#txtTelefon", false, 2).with_max_length(15),
        FieldDescriptor::text("eposta", "E-Posta", "#txtEposta", false, 2),
        FieldDescriptor::text("adres", "Adres", "#txtAdres", false, 2).with_max_length(250),
        FieldDescriptor::text("il", "İl", "#ddlIl", false, 2)
            .with_kind(InputKind::Select)
            .with_options(IL_OPTIONS),
        // ---- tab 3: ücret ve banka ----
        FieldDescriptor::text("ise_giris_tarihi", "İşe Giriş Tarihi", "#txtIseGirisTarihi", true, 3)
            .with_kind(InputKind::Date),
        FieldDescriptor::text("meslek_kodu", "Meslek Kodu", "#txtMeslekKodu", false, 3),
        FieldDescriptor::text("brut_ucret", "Brüt Ücret", "#txtBrutUcret", false, 3),
        FieldDescriptor::text("banka", "Banka", "#ddlBanka", false, 3)
            .with_kind(InputKind::Select)
            .with_options(BANKA_OPTIONS),
        FieldDescriptor::text("iban", "IBAN", "#txtIban", false, 3).with_max_length(26),
        // ---- tab 4: diğer ----
        FieldDescriptor::text("egitim_durumu", "Eğitim Durumu", "#ddlEgitimDurumu", false, 4)
            .with_kind(InputKind::Select)
            .with_options(EGITIM_OPTIONS),
        FieldDescriptor::text("engelli", "Engelli", "#chkEngelli", false, 4)
            .with_kind(InputKind::Checkbox),
        FieldDescriptor::text("emekli", "Emekli", "#chkEmekli", false, 4)
            .with_kind(InputKind::Checkbox),
        FieldDescriptor::text("gorevler", "Görevler", "#pnlGorevler", false, 4)
            .with_kind(InputKind::CompositeGroup),
    ]
}

fn tabs() -> Vec<TabLocator> {
    vec![
        TabLocator {
            tab_index: 1,
            label: "Kimlik Bilgileri",
            selectors: &["#tabKimlik", "a[href='#tab-kimlik']"],
        },
        TabLocator {
            tab_index: 2,
            label: "İletişim",
            selectors: &["#tabIletisim", "a[href='#tab-iletisim']"],
        },
        TabLocator {
            tab_index: 3,
            label: "Ücret ve Banka",
            selectors: &["#tabUcret", "a[href='#tab-ucret']"],
        },
        TabLocator {
            tab_index: 4,
            label: "Diğer",
            selectors: &["#tabDiger", "a[href='#tab-diger']"],
        },
    ]
}

/// The personnel entry form, built once at startup
pub fn personnel_form() -> FormSchema {
    FormSchema::new(fields(), tabs())
}
