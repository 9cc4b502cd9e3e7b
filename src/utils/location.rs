//! Encoding of redirect targets for the `Location` header.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped in a redirect target, besides all non-ASCII bytes.
///
/// `%` is absent: it is handled separately so existing escapes survive.
const LOCATION_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes `target` so it is always a valid header value.
///
/// Characters already legal in a URL are kept, as are well-formed `%XX`
/// escapes. A `%` not followed by two hex digits becomes `%25`.
pub fn encode_location(target: &str) -> String {
    let mut out = String::with_capacity(target.len());
    let mut rest = target;

    while let Some(pos) = rest.find('%') {
        out.extend(utf8_percent_encode(&rest[..pos], LOCATION_ENCODE_SET));

        let tail = &rest[pos + 1..];
        let escaped = tail.len() >= 2 && tail.as_bytes()[..2].iter().all(u8::is_ascii_hexdigit);
        if escaped {
            out.push('%');
            out.push_str(&tail[..2]);
            rest = &tail[2..];
        } else {
            out.push_str("%25");
            rest = tail;
        }
    }

    out.extend(utf8_percent_encode(rest, LOCATION_ENCODE_SET));
    out
}
