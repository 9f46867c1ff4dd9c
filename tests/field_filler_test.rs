//! Driver-level filler behavior against the in-memory DOM

mod common;

use common::{FakeDom, FakeElement};
use personel_entry_bot::models::field::{FieldDescriptor, InputKind};
use personel_entry_bot::services::{BackfillVerifier, FieldFiller};
use personel_entry_bot::models::form::FormSchema;
use personel_entry_bot::models::record::{PersonnelCategory, Record};

fn text_field(name: &'static str, primary: &'static str) -> FieldDescriptor {
    FieldDescriptor::text(name, name, primary, false, 1)
}

#[tokio::test]
async fn fallback_stops_at_first_succeeding_candidate() {
    let dom = FakeDom::new();
    // primary missing, the derived id selector resolves
    dom.put_plain("#telefon");

    let filler = FieldFiller::new();
    let field = text_field("telefon", "#txtTelefon");
    assert!(filler.fill(&dom, &field, "5551234567").await.unwrap());

    assert_eq!(dom.attempts_on("#txtTelefon"), 1);
    assert_eq!(dom.attempts_on("#telefon"), 1);
    // candidates after the winner are never attempted
    assert_eq!(dom.attempts_on("[name='telefon']"), 0);
    assert_eq!(dom.attempts_on("input[name='telefon']"), 0);
    assert_eq!(dom.value_of("#telefon"), "5551234567");
}

#[tokio::test]
async fn unresolvable_field_reports_false_after_all_candidates() {
    let dom = FakeDom::new();
    let filler = FieldFiller::new();
    let field = text_field("eposta", "#txtEposta");
    assert!(!filler.fill(&dom, &field, "a@b.c").await.unwrap());
    // every candidate was attempted exactly once
    assert_eq!(dom.attempts_on("#txtEposta"), 1);
    assert_eq!(dom.attempts_on("select[id*='eposta']"), 1);
}

#[tokio::test]
async fn name_field_is_not_retyped_when_already_correct() {
    let dom = FakeDom::new();
    dom.put(
        "#txtAd",
        FakeElement {
            value: "Ahmet".to_string(),
            ..FakeElement::default()
        },
    );

    let filler = FieldFiller::new();
    let field = text_field("ad", "#txtAd");
    assert!(filler.fill(&dom, &field, "Ahmet").await.unwrap());
    // read-only probe, no write
    assert_eq!(dom.write_count(), 0);

    assert!(filler.fill(&dom, &field, "Mehmet").await.unwrap());
    assert_eq!(dom.value_of("#txtAd"), "Mehmet");
}

#[tokio::test]
async fn iban_is_normalized_before_typing() {
    let dom = FakeDom::new();
    dom.put_plain("#txtIban");

    let filler = FieldFiller::new();
    let field = text_field("iban", "#txtIban");
    assert!(filler
        .fill(&dom, &field, "TR33 0006 1005 1978 6457 8413 26")
        .await
        .unwrap());
    assert_eq!(dom.value_of("#txtIban"), "330006100519786457841326");
}

#[tokio::test]
async fn select_resolves_ziraat_through_fuzzy_matching() {
    let dom = FakeDom::new();
    dom.put(
        "#ddlBanka",
        FakeElement {
            options: vec![
                "Seçiniz".to_string(),
                "AKBANK".to_string(),
                "ZİRAAT BANKASI".to_string(),
            ],
            ..FakeElement::default()
        },
    );

    let filler = FieldFiller::new();
    let field = text_field("banka", "#ddlBanka").with_kind(InputKind::Select);
    assert!(filler.fill(&dom, &field, "Ziraat").await.unwrap());
    assert_eq!(dom.value_of("#ddlBanka"), "ZİRAAT BANKASI");
}

#[tokio::test]
async fn checkbox_coerces_the_fixed_token_set() {
    let dom = FakeDom::new();
    dom.put(
        "#chkEngelli",
        FakeElement {
            is_checkbox: true,
            ..FakeElement::default()
        },
    );

    let filler = FieldFiller::new();
    let field = text_field("engelli", "#chkEngelli").with_kind(InputKind::Checkbox);

    assert!(filler.fill(&dom, &field, "Evet").await.unwrap());
    assert_eq!(dom.value_of("#chkEngelli"), "");
    assert!(dom.elements.lock().unwrap()["#chkEngelli"].checked);

    assert!(filler.fill(&dom, &field, "Hayır").await.unwrap());
    assert!(!dom.elements.lock().unwrap()["#chkEngelli"].checked);
}

#[tokio::test]
async fn date_walks_strategies_until_the_value_sticks() {
    let dom = FakeDom::new();
    // widget swallows keystrokes and bare assignment, honors the
    // event-dispatching assignment
    dom.put(
        "#txtDogumTarihi",
        FakeElement {
            keys_work: false,
            silent_set_works: false,
            ..FakeElement::default()
        },
    );

    let filler = FieldFiller::new();
    let field = text_field("dogum_tarihi", "#txtDogumTarihi").with_kind(InputKind::Date);
    assert!(filler.fill(&dom, &field, "15.03.1990").await.unwrap());
    // first representation, third strategy
    assert_eq!(dom.value_of("#txtDogumTarihi"), "15031990");
}

#[tokio::test]
async fn date_keystrokes_win_when_the_widget_accepts_them() {
    let dom = FakeDom::new();
    dom.put_plain("#txtIseGirisTarihi");

    let filler = FieldFiller::new();
    let field = text_field("ise_giris_tarihi", "#txtIseGirisTarihi").with_kind(InputKind::Date);
    assert!(filler.fill(&dom, &field, "01.02.2024").await.unwrap());
    assert_eq!(dom.value_of("#txtIseGirisTarihi"), "01022024");
    // only the keystroke write happened
    assert_eq!(dom.write_count(), 1);
}

#[tokio::test]
async fn composite_toggles_exactly_the_matching_rows() {
    let dom = FakeDom::new();
    dom.put_plain("#pnlGorevler");
    dom.put_row("Vardiya Amiri (gece)");
    dom.put_row("Forklift Operatörü");
    dom.put_row("Depo Sorumlusu");

    let filler = FieldFiller::new();
    let field = text_field("gorevler", "#pnlGorevler").with_kind(InputKind::CompositeGroup);
    assert!(filler
        .fill(&dom, &field, "Vardiya Amiri, Depo Sorumlusu")
        .await
        .unwrap());

    let rows = dom.rows.lock().unwrap();
    assert!(rows[0].checkbox && rows[0].radio);
    assert!(!rows[1].checkbox && !rows[1].radio);
    assert!(rows[2].checkbox && rows[2].radio);
}

// ========== backfill ==========

fn two_field_schema() -> FormSchema {
    FormSchema::new(
        vec![
            FieldDescriptor::text("ad", "Ad", "#txtAd", true, 1),
            FieldDescriptor::text("soyad", "Soyad", "#txtSoyad", true, 1),
        ],
        vec![],
    )
}

#[tokio::test]
async fn backfill_refills_only_emptied_fields() {
    let dom = FakeDom::new();
    dom.put_plain("#txtAd"); // portal cleared this one
    dom.put(
        "#txtSoyad",
        FakeElement {
            value: "Yılmaz".to_string(),
            ..FakeElement::default()
        },
    );

    let schema = two_field_schema();
    let filler = FieldFiller::new();
    let verifier = BackfillVerifier::new(&schema, &filler);

    let mut record = Record::new(PersonnelCategory::Worker);
    record.set("ad", "Ahmet");
    record.set("soyad", "Yılmaz");

    verifier.verify(&dom, 1, &record).await.unwrap();
    assert_eq!(dom.value_of("#txtAd"), "Ahmet");
    assert_eq!(dom.value_of("#txtSoyad"), "Yılmaz");
    let writes_after_first = dom.write_count();
    assert!(writes_after_first > 0);

    // second pass finds everything in place and writes nothing
    verifier.verify(&dom, 1, &record).await.unwrap();
    assert_eq!(dom.write_count(), writes_after_first);
}
