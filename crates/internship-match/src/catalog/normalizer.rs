use crate::matching::normalize_text;

const STIPEND_DECORATIONS: &[&str] = &[
    "\u{20b9}", "per month", "/month", "/ month", "p.m.", "/-", "inr", "rs.", "rs", ",", " ",
];

pub(crate) fn normalize_header(value: &str) -> String {
    normalize_text(value).replace(' ', "_")
}

/// Strips currency decorations and parses the remaining amount, defaulting to 0.
pub(crate) fn parse_stipend(raw: &str) -> u64 {
    let mut cleaned = raw.trim().to_lowercase();
    for decoration in STIPEND_DECORATIONS {
        cleaned = cleaned.replace(decoration, "");
    }

    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return 0;
    }

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => amount.floor() as u64,
        _ => 0,
    }
}
