//! Field filler
//!
//! Fills exactly one field per call, never a whole form. The portal's
//! markup drifts between deployments, so every field gets an ordered
//! candidate-selector list and the filler walks it until something takes
//! the value. How "taking the value" looks depends on the field's input
//! kind.

use anyhow::Result;
use tracing::{debug, warn};

use crate::infrastructure::dom::DomDriver;
use crate::models::field::{FieldDescriptor, InputKind};
use crate::portal::{mapping, selectors};
use crate::utils::text;

/// Result of an ordered candidate fold: either some candidate resolved, or
/// the whole list is exhausted. Replaces try/catch-per-candidate chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    Exhausted,
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Ordered fold over candidates: first success wins, later candidates are
/// never attempted.
pub fn resolve_ordered<C, T, F>(candidates: &[C], mut attempt: F) -> Resolution<(usize, T)>
where
    F: FnMut(usize, &C) -> Option<T>,
{
    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(value) = attempt(index, candidate) {
            return Resolution::Resolved((index, value));
        }
    }
    Resolution::Exhausted
}

// ============================================================================
// LOCATORS
// ============================================================================

/// Produces the ordered candidate-selector list for a field
pub trait LocatorStrategy: Send + Sync {
    fn candidates(&self, field: &FieldDescriptor) -> Vec<String>;
}

/// Default strategy: the declared primary selector, then id- and
/// name-attribute patterns derived from the canonical field name, for both
/// input- and select-shaped elements.
pub struct IdNameLocators;

impl LocatorStrategy for IdNameLocators {
    fn candidates(&self, field: &FieldDescriptor) -> Vec<String> {
        let name = field.name;
        let derived = [
            field.primary_selector.to_string(),
            format!("#{}", name),
            format!("[name='{}']", name),
            format!("input[name='{}']", name),
            format!("select[name='{}']", name),
            format!("input[id*='{}']", name),
            format!("select[id*='{}']", name),
        ];
        let mut candidates = Vec::with_capacity(derived.len());
        for selector in derived {
            if !candidates.contains(&selector) {
                candidates.push(selector);
            }
        }
        candidates
    }
}

// ============================================================================
// TUNING
// ============================================================================

/// Per-field behavior tweaks, configuration rather than code
pub struct FillTuning {
    /// Fields whose current value is read first; an already-correct value
    /// is left untouched
    pub read_before_write: Vec<&'static str>,
    /// Fields normalized as account numbers before typing
    pub normalized_account: Vec<&'static str>,
    /// Row selector of the composite duty group
    pub composite_row_selector: &'static str,
}

impl Default for FillTuning {
    fn default() -> Self {
        Self {
            read_before_write: vec![mapping::FIRST_NAME_FIELD, mapping::LAST_NAME_FIELD],
            normalized_account: vec![mapping::IBAN_FIELD],
            composite_row_selector: selectors::DUTY_ROW_SELECTOR,
        }
    }
}

// ============================================================================
// SELECT MATCHING
// ============================================================================

/// How a select value was matched, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Folded,
    Synonym,
    Substring,
    Fallback,
}

/// Resolve a wanted value against a select's visible option texts.
///
/// Ordered strategies, first hit wins: exact text, folded text, synonym
/// table, substring containment either direction, then the first usable
/// option rather than leaving the field unset. Placeholder options
/// ("Seçiniz" and blanks) never win the fallback.
pub fn match_option(options: &[String], wanted: &str) -> Option<(usize, MatchKind)> {
    if options.is_empty() {
        return None;
    }
    let folded_wanted = text::fold_for_match(wanted);
    let folded_options: Vec<String> = options.iter().map(|o| text::fold_for_match(o)).collect();

    const STRATEGIES: [MatchKind; 5] = [
        MatchKind::Exact,
        MatchKind::Folded,
        MatchKind::Synonym,
        MatchKind::Substring,
        MatchKind::Fallback,
    ];

    match resolve_ordered(&STRATEGIES, |_, strategy| match strategy {
        MatchKind::Exact => options.iter().position(|o| o == wanted),
        MatchKind::Folded => folded_options.iter().position(|o| *o == folded_wanted),
        MatchKind::Synonym => mapping::synonym_target(&folded_wanted)
            .and_then(|target| folded_options.iter().position(|o| o.contains(target))),
        MatchKind::Substring => folded_options.iter().position(|o| {
            !o.is_empty()
                && !folded_wanted.is_empty()
                && (o.contains(&folded_wanted) || folded_wanted.contains(o.as_str()))
        }),
        MatchKind::Fallback => folded_options
            .iter()
            .position(|o| !o.is_empty() && o != "seciniz")
            .or(Some(0)),
    }) {
        Resolution::Resolved((strategy_index, option_index)) => {
            Some((option_index, STRATEGIES[strategy_index]))
        }
        Resolution::Exhausted => None,
    }
}

// ============================================================================
// FILLER
// ============================================================================

/// Fills one field at a time through the driver seam
pub struct FieldFiller {
    locators: Box<dyn LocatorStrategy>,
    tuning: FillTuning,
}

impl Default for FieldFiller {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldFiller {
    pub fn new() -> Self {
        Self {
            locators: Box::new(IdNameLocators),
            tuning: FillTuning::default(),
        }
    }

    pub fn with_parts(locators: Box<dyn LocatorStrategy>, tuning: FillTuning) -> Self {
        Self { locators, tuning }
    }

    /// Candidate selectors for a field, in attempt order
    pub fn candidates(&self, field: &FieldDescriptor) -> Vec<String> {
        self.locators.candidates(field)
    }

    /// Fill one field. `true` means some candidate took the value; `false`
    /// means the field stays unresolved, which is never fatal here.
    pub async fn fill<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        field: &FieldDescriptor,
        value: &str,
    ) -> Result<bool> {
        let prepared = self.prepare_value(field, value);
        let candidates = self.locators.candidates(field);

        for (index, selector) in candidates.iter().enumerate() {
            let took = self.fill_candidate(dom, field, selector, &prepared).await?;
            if took {
                debug!(
                    "{}: filled via candidate {} ({})",
                    field.name,
                    index + 1,
                    selector
                );
                return Ok(true);
            }
        }

        warn!(
            "{}: no selector candidate resolved, field skipped",
            field.name
        );
        Ok(false)
    }

    /// Pre-typing value adjustments that depend on which field this is
    fn prepare_value(&self, field: &FieldDescriptor, value: &str) -> String {
        let mut prepared = if self.tuning.normalized_account.contains(&field.name) {
            text::normalize_iban(value)
        } else {
            value.trim().to_string()
        };
        if field.input_kind == InputKind::Text {
            if let Some(max_length) = field.max_length {
                if prepared.chars().count() > max_length {
                    warn!(
                        "{}: value exceeds {} chars, truncating",
                        field.name, max_length
                    );
                    prepared = prepared.chars().take(max_length).collect();
                }
            }
        }
        prepared
    }

    /// One candidate attempt, dispatched on the field's input kind
    async fn fill_candidate<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        field: &FieldDescriptor,
        selector: &str,
        value: &str,
    ) -> Result<bool> {
        match field.input_kind {
            InputKind::Text => self.fill_text(dom, field, selector, value).await,
            InputKind::Select => self.fill_select(dom, field, selector, value).await,
            InputKind::Checkbox => dom.set_checked(selector, mapping::is_truthy(value)).await,
            InputKind::Date => self.fill_date(dom, field, selector, value).await,
            InputKind::CompositeGroup => self.fill_composite(dom, field, value).await,
        }
    }

    async fn fill_text<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        field: &FieldDescriptor,
        selector: &str,
        value: &str,
    ) -> Result<bool> {
        if self.tuning.read_before_write.contains(&field.name) {
            if let Some(current) = dom.read_value(selector).await? {
                if current == value {
                    debug!("{}: already holds the wanted value", field.name);
                    return Ok(true);
                }
            }
        }
        dom.set_value(selector, value).await
    }

    async fn fill_select<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        field: &FieldDescriptor,
        selector: &str,
        value: &str,
    ) -> Result<bool> {
        let Some(options) = dom.select_options(selector).await? else {
            return Ok(false);
        };
        let Some((option_index, kind)) = match_option(&options, value) else {
            return Ok(false);
        };
        match kind {
            MatchKind::Exact => {}
            MatchKind::Fallback => warn!(
                "{}: '{}' matched no option, falling back to '{}'",
                field.name, value, options[option_index]
            ),
            _ => debug!(
                "{}: '{}' matched '{}' via {:?}",
                field.name, value, options[option_index], kind
            ),
        }
        dom.select_by_index(selector, option_index).await
    }

    /// Try each date representation against each entry strategy and accept
    /// the first pair that leaves a non-empty field value.
    async fn fill_date<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        field: &FieldDescriptor,
        selector: &str,
        value: &str,
    ) -> Result<bool> {
        if !dom.exists(selector).await? {
            return Ok(false);
        }
        for candidate in text::date_candidates(value) {
            // keystrokes first: date widgets usually listen for key events
            if dom.type_keys(selector, &candidate).await? && self.took(dom, selector).await? {
                return Ok(true);
            }
            if dom.set_value_silent(selector, &candidate).await? && self.took(dom, selector).await?
            {
                return Ok(true);
            }
            if dom.set_value(selector, &candidate).await? && self.took(dom, selector).await? {
                return Ok(true);
            }
        }
        warn!("{}: no date representation was accepted", field.name);
        Ok(false)
    }

    async fn took<D: DomDriver + ?Sized>(&self, dom: &D, selector: &str) -> Result<bool> {
        Ok(dom
            .read_value(selector)
            .await?
            .is_some_and(|v| !v.trim().is_empty()))
    }

    /// Toggle every duty sub-row whose visible text contains one of the
    /// requested labels.
    async fn fill_composite<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        field: &FieldDescriptor,
        value: &str,
    ) -> Result<bool> {
        let mut any_touched = false;
        for label in value.split(',').map(str::trim).filter(|l| !l.is_empty()) {
            let touched = dom
                .toggle_labeled_rows(self.tuning.composite_row_selector, label)
                .await?;
            if touched == 0 {
                warn!("{}: no row matches label '{}'", field.name, label);
            } else {
                debug!("{}: label '{}' toggled {} rows", field.name, label, touched);
                any_touched = true;
            }
        }
        Ok(any_touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::FieldDescriptor;

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn candidates_start_with_primary_and_dedupe() {
        let field = FieldDescriptor::text("soyad", "Soyad", "#txtSoyad", true, 1);
        let candidates = IdNameLocators.candidates(&field);
        assert_eq!(candidates[0], "#txtSoyad");
        assert_eq!(candidates[1], "#soyad");
        assert!(candidates.contains(&"select[name='soyad']".to_string()));
        let mut deduped = candidates.clone();
        deduped.dedup();
        assert_eq!(candidates, deduped);
    }

    #[test]
    fn primary_equal_to_derived_is_not_repeated() {
        let field = FieldDescriptor::text("ad", "Ad", "#ad", true, 1);
        let candidates = IdNameLocators.candidates(&field);
        assert_eq!(candidates.iter().filter(|c| *c == "#ad").count(), 1);
    }

    #[test]
    fn resolve_ordered_stops_at_first_success() {
        let candidates = [10, 20, 30, 40];
        let mut attempted = Vec::new();
        let resolution = resolve_ordered(&candidates, |_, c| {
            attempted.push(*c);
            (*c == 30).then_some(*c)
        });
        assert_eq!(resolution, Resolution::Resolved((2, 30)));
        assert_eq!(attempted, vec![10, 20, 30]);
    }

    #[test]
    fn resolve_ordered_reports_exhaustion() {
        let resolution = resolve_ordered(&[1, 2], |_, _| Option::<()>::None);
        assert_eq!(resolution, Resolution::Exhausted);
    }

    #[test]
    fn exact_option_match_wins_before_fuzzy() {
        let options = strings(&["Seçiniz", "Bekar", "Evli"]);
        assert_eq!(match_option(&options, "Evli"), Some((2, MatchKind::Exact)));
    }

    #[test]
    fn ziraat_resolves_via_fuzzy_after_exact_fails() {
        let options = strings(&["Seçiniz", "AKBANK", "ZİRAAT BANKASI", "VAKIFBANK"]);
        let (index, kind) = match_option(&options, "Ziraat").unwrap();
        assert_eq!(index, 2);
        assert_ne!(kind, MatchKind::Exact);
        assert_ne!(kind, MatchKind::Fallback);
    }

    #[test]
    fn folded_equality_beats_substring() {
        let options = strings(&["seçiniz", "ERKEK", "KADIN"]);
        assert_eq!(match_option(&options, "Erkek"), Some((1, MatchKind::Folded)));
    }

    #[test]
    fn substring_matches_either_direction() {
        let options = strings(&["Seçiniz", "TÜRKİYE İŞ BANKASI A.Ş."]);
        let (index, kind) = match_option(&options, "Türkiye İş Bankası").unwrap();
        assert_eq!(index, 1);
        assert_eq!(kind, MatchKind::Substring);
    }

    #[test]
    fn unmatched_value_falls_back_past_placeholder() {
        let options = strings(&["Seçiniz", "AKBANK", "HALKBANK"]);
        assert_eq!(
            match_option(&options, "Finansbank"),
            Some((1, MatchKind::Fallback))
        );
    }

    #[test]
    fn empty_option_list_matches_nothing() {
        assert_eq!(match_option(&[], "AKBANK"), None);
    }
}
