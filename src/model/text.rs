//! Display-name normalisation and price formatting.
//!
//! Item names coming off the screen carry `§x` formatting pairs. Matching
//! against the item repository happens on the "monochrome" form produced by
//! [`clean_for_title_search`].

/// Formatting prefix character used by in-game text.
pub const FORMAT_CHAR: char = '§';

/// Remove every `§x` formatting pair from `text`.
///
/// A trailing lone `§` is dropped as well.
pub fn strip_control_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == FORMAT_CHAR {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Normalise a display name into its monochrome search key.
///
/// Formatting pairs are removed, every character that is not an ASCII letter,
/// digit or space is dropped, the result is lowercased and trimmed.
pub fn clean_for_title_search(text: &str) -> String {
    strip_control_codes(text)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .to_ascii_lowercase()
        .trim()
        .to_string()
}

const MAGNITUDE_SUFFIXES: [char; 4] = ['k', 'm', 'b', 't'];

/// Compact price text: `950`, `12.50`, `1.2k`, `35k`, `4m`.
///
/// Values are truncated to one decimal, never rounded up. The decimal is
/// dropped once the mantissa exceeds 9.99.
pub fn short_number_format(value: f64) -> String {
    if value < 1000.0 {
        return if value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            format!("{:.2}", value)
        };
    }

    let mut scaled = truncate_thousands(value);
    let mut magnitude = 0;
    while scaled >= 1000.0 && magnitude + 1 < MAGNITUDE_SUFFIXES.len() {
        scaled = truncate_thousands(scaled);
        magnitude += 1;
    }
    let suffix = MAGNITUDE_SUFFIXES[magnitude];

    if scaled.fract() == 0.0 || scaled > 9.99 {
        format!("{}{}", scaled as i64, suffix)
    } else {
        format!("{}{}", scaled, suffix)
    }
}

/// Divide by 1000 keeping one truncated decimal.
fn truncate_thousands(value: f64) -> f64 {
    ((value as i64) / 100) as f64 / 10.0
}
