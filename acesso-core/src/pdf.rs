//! PDF document path mapping for the selector binding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a selected document name: the set JavaScript's
/// `encodeURI` escapes. URI-reserved characters (`/`, `?`, `&`, …) and the
/// unreserved marks stay bare, so option values that carry a subpath keep
/// their slashes. Pages persisted links built this way; the set is a
/// compatibility contract.
const DOCUMENT_PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// Build the viewer/link target for a selected document.
///
/// The selected value is percent-encoded and appended to the configured
/// base path. No validation happens here; the mapping from selection to
/// path is pure and the page is free to point it anywhere.
#[must_use]
pub fn document_path(base: &str, value: &str) -> String {
    format!("{base}{}", utf8_percent_encode(value, DOCUMENT_PATH_SET))
}
