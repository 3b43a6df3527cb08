use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`).
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Serialize form params into an `application/x-www-form-urlencoded` body.
///
/// Keys and values are percent-encoded per RFC 3986, so space becomes `%20`.
pub fn encode_form_body(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM_COMPONENT),
                utf8_percent_encode(value, FORM_COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
