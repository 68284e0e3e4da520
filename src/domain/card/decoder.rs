//! Track 1 stripe decoder.
//!
//! A swipe delivers one or more tracks, each terminated by `?`. Track 1
//! starts with the `%` sentinel and carries `^`-separated fields:
//!
//! ```text
//! %B1234567890^DOE/JOHN^2512101000000?
//!  └─ start    └─ name  └─ remaining fields
//! ```
//!
//! The name field is `LAST/FIRST`; the decoder returns `FIRST LAST`.
//! Decoding is pure. Each call sees only the text it is given, so a track
//! split across two reads from the device does not decode.

use super::CanonicalName;

/// Start sentinel of a Track 1 field.
pub const TRACK_1_SENTINEL: char = '%';

/// End sentinel separating tracks in a swipe payload.
pub const TRACK_TERMINATOR: char = '?';

const FIELD_SEPARATOR: char = '^';
const NAME_SEPARATOR: char = '/';

/// Minimum number of `^`-separated segments in a usable Track 1.
const MIN_TRACK_1_SEGMENTS: usize = 3;

/// Decodes the cardholder name from a raw swipe payload.
///
/// Returns `None` when no track yields a well-formed name. That is a
/// "no match", not a failure: callers decide how to report it.
pub fn decode(raw: &str) -> Option<CanonicalName> {
    raw.split(TRACK_TERMINATOR).find_map(decode_track)
}

/// Decodes a raw chunk read from a card reader.
///
/// Bytes that are not valid UTF-8 are replaced before decoding, so a noisy
/// read can still match if the Track 1 text itself is intact.
pub fn decode_bytes(raw: &[u8]) -> Option<CanonicalName> {
    decode(&String::from_utf8_lossy(raw))
}

fn decode_track(track: &str) -> Option<CanonicalName> {
    if !track.starts_with(TRACK_1_SENTINEL) {
        return None;
    }

    let segments: Vec<&str> = track.split(FIELD_SEPARATOR).collect();
    if segments.len() < MIN_TRACK_1_SEGMENTS {
        return None;
    }

    match segments[1].split(NAME_SEPARATOR).collect::<Vec<_>>().as_slice() {
        [last, first] => Some(CanonicalName::from_parts(first, last)),
        _ => None,
    }
}
