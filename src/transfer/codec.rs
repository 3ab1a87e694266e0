use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::model::Student;

/// Bytes escaped by `application/x-www-form-urlencoded`: everything except
/// ASCII alphanumerics and `* - . _`. Spaces are handled separately.
const FORM_ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Renders students as a bracketed, comma-separated list, e.g.
/// `[Student(name=Tanu), Student(name=Tina)]`.
pub fn render(students: &[Student]) -> String {
    let items: Vec<String> = students.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Renders students and form-encodes the result for use as a route parameter.
pub fn encode(students: &[Student]) -> String {
    encode_text(&render(students))
}

/// Form-encodes arbitrary text. Spaces become `+`.
pub fn encode_text(text: &str) -> String {
    text.split(' ')
        .map(|part| utf8_percent_encode(part, FORM_ESCAPED).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Reverses [`encode_text`]. `+` becomes a space and `%XX` escapes are
/// decoded.
///
/// Never fails: malformed escapes are kept literally and invalid UTF-8 is
/// replaced with U+FFFD. The result is display text; it is not parsed back
/// into students.
pub fn decode(text: &str) -> String {
    percent_decode_str(&text.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
