// Canonical matching keys for titles, keywords and queries.
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Maps arbitrary text to the canonical form every comparison runs on:
/// Turkish letters folded to ASCII, lowercased, leftover diacritics stripped
/// via NFKD, anything outside `[a-z0-9]` collapsed to single spaces.
///
/// Total and idempotent; empty or symbol-only input yields the empty string.
pub fn normalize(text: &str) -> String {
    let folded: String = text.trim().chars().map(fold_turkish).collect();
    let lowered = folded.to_lowercase();

    let stripped: String = lowered.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    let mut key = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        if c.is_ascii_alphanumeric() {
            key.push(c);
        } else if !key.is_empty() && !key.ends_with(' ') {
            key.push(' ');
        }
    }
    if key.ends_with(' ') {
        key.pop();
    }
    key
}

/// Fixed transliteration table for the Turkish letter variants. Applied
/// before lowercasing so the dotted capital İ never reaches `to_lowercase`,
/// which would otherwise leave a combining dot behind.
fn fold_turkish(c: char) -> char {
    match c {
        'ı' | 'İ' => 'i',
        'ş' | 'Ş' => 's',
        'ç' | 'Ç' => 'c',
        'ğ' | 'Ğ' => 'g',
        'ö' | 'Ö' => 'o',
        'ü' | 'Ü' => 'u',
        other => other,
    }
}
