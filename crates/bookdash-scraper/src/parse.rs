//! Low-level parsing of raw price text and rating class tokens.
//!
//! Price cleaning is a character filter rather than a regex: everything that
//! is not an ASCII digit or decimal point is dropped, then the remainder is
//! parsed. This keeps currency symbols (including multi-byte ones like `£`)
//! and thousands separators out without caring which locale produced them.

/// Cleans a currency-formatted price string and parses it as a decimal.
///
/// `"£51.77"` → `Some(51.77)`, `"$1,024.00"` → `Some(1024.0)`.
///
/// Returns `None` when nothing parseable remains (empty remainder, multiple
/// decimal points, or any other shape `f64::from_str` rejects). Negative
/// values cannot occur: the minus sign is stripped with everything else.
#[must_use]
pub fn clean_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Maps a star-rating word token to its numeric value.
///
/// The five known tokens map to 1..=5 in order; anything else — including an
/// empty or garbled class — maps to 0 rather than failing.
#[must_use]
pub fn rating_from_class(token: &str) -> u8 {
    match token {
        "One" => 1,
        "Two" => 2,
        "Three" => 3,
        "Four" => 4,
        "Five" => 5,
        _ => 0,
    }
}
