//! Text normalization helpers
//!
//! Everything the filler needs to compare what a human typed into a
//! spreadsheet with what the portal renders: Turkish case/diacritic
//! folding, IBAN cleanup, date representation candidates.

use chrono::NaiveDate;

/// Fold text for fuzzy comparison: trim, lowercase with Turkish letter
/// handling, strip diacritics, collapse whitespace runs.
pub fn fold_for_match(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_space = true;
    for c in input.trim().chars() {
        let mapped: Option<char> = match c {
            'İ' | 'I' | 'ı' => Some('i'),
            'Ş' | 'ş' => Some('s'),
            'Ğ' | 'ğ' => Some('g'),
            'Ü' | 'ü' => Some('u'),
            'Ö' | 'ö' => Some('o'),
            'Ç' | 'ç' => Some('c'),
            'Â' | 'â' => Some('a'),
            'Î' | 'î' => Some('i'),
            'Û' | 'û' => Some('u'),
            _ => None,
        };
        match mapped {
            Some(m) => {
                out.push(m);
                last_was_space = false;
            }
            None if c.is_whitespace() => {
                if !last_was_space {
                    out.push(' ');
                }
                last_was_space = true;
            }
            None => {
                out.extend(c.to_lowercase());
                last_was_space = false;
            }
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Normalize an account number for typing: strip all whitespace, uppercase,
/// drop the leading country prefix the portal inserts on its own.
pub fn normalize_iban(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_uppercase())
        .collect();
    match compact.strip_prefix("TR") {
        Some(rest) => rest.to_string(),
        None => compact,
    }
}

/// Parse a date the way spreadsheet exports write them
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    const FORMATS: [&str; 5] = ["%d.%m.%Y", "%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d%m%Y"];
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}

/// Ordered candidate representations for a date value.
///
/// The portal's date widgets disagree about which shape they accept, so the
/// filler tries each in turn: digits-only, ISO, dotted, then the raw input.
/// Duplicates are collapsed while preserving order.
pub fn date_candidates(raw: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(4);
    if let Some(date) = parse_flexible_date(raw) {
        push_unique(&mut candidates, date.format("%d%m%Y").to_string());
        push_unique(&mut candidates, date.format("%Y-%m-%d").to_string());
        push_unique(&mut candidates, date.format("%d.%m.%Y").to_string());
    }
    push_unique(&mut candidates, raw.trim().to_string());
    candidates
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}

/// Truncate long values for log display
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
