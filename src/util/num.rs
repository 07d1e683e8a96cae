/// Parses text as a floating-point literal.
///
/// Leading and trailing whitespace is ignored. Besides ordinary decimal and
/// exponent notation this accepts `inf`, `infinity` and `nan` in any case,
/// with an optional sign. Digits may be grouped with single underscores, as in
/// `1_000`; an underscore must sit between two digits.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is not a number.
///
/// ## Example
/// ```
/// use polish::util::num::parse_real;
///
/// assert_eq!(parse_real("3.5"), Some(3.5));
/// assert_eq!(parse_real("-2e3"), Some(-2000.0));
/// assert_eq!(parse_real("\t7"), Some(7.0));
/// assert!(parse_real("pi").is_none());
/// assert!(parse_real("").is_none());
/// assert_eq!(parse_real("1_000"), Some(1000.0));
/// assert!(parse_real("1__0").is_none());
/// ```
#[must_use]
pub fn parse_real(text: &str) -> Option<f64> {
    let text = text.trim();
    if !text.contains('_') {
        return text.parse().ok();
    }

    strip_digit_separators(text)?.parse().ok()
}

/// Removes underscores that separate two digits. Returns `None` if any
/// underscore is leading, trailing, doubled or next to a non-digit.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        if !before.is_some_and(u8::is_ascii_digit) || !after.is_some_and(u8::is_ascii_digit) {
            return None;
        }
    }

    Some(text.chars().filter(|&c| c != '_').collect())
}

/// Coerces a value to a truth value: nonzero is true, zero is false.
///
/// `NaN` is not equal to zero and therefore counts as true.
///
/// ## Example
/// ```
/// use polish::util::num::is_truthy;
///
/// assert!(is_truthy(1.0));
/// assert!(is_truthy(-0.5));
/// assert!(is_truthy(f64::NAN));
/// assert!(!is_truthy(0.0));
/// assert!(!is_truthy(-0.0));
/// ```
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}
