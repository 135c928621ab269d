//! Email address shape check.
//!
//! Syntax only: no DNS lookup, no deliverability check.

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace as browsers define it for form input: the class members of
/// [`is_form_whitespace`].
const SPACE: &str = r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Line terminators, which a quoted local part may not contain.
const LINE_BREAK: &str = r"\n\r\x{2028}\x{2029}";

/// Local part: dot-separated runs of non-special characters, or a quoted
/// string. Domain: one or more `label.` followed by a final label of at least
/// two characters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let atom = format!(r#"[^<>()\[\]\\.,;:@"{SPACE}]"#);
    let pattern = format!(
        r#"(?i)^(?:(?:{atom}+(?:\.{atom}+)*)|(?:"[^{LINE_BREAK}]+"))@(?:(?:{atom}+\.)+{atom}{{2,}})$"#
    );
    Regex::new(&pattern).expect("Invalid email regex pattern")
});

/// Whether `c` counts as whitespace in form input.
///
/// Unicode `White_Space` minus U+0085 (NEL), plus U+FEFF (BOM).
#[must_use]
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Whether `value` is empty or all whitespace.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

/// Check whether `email` has the shape of an email address.
///
/// The address is lower-cased before matching.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(&email.to_lowercase())
}
