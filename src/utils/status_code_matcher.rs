//! HTTP Status Code Matching Utilities
//!
//! Classification of the status recorded for a stream URL. `0` is the
//! sentinel for "no HTTP response at all".

use std::ops::RangeInclusive;

/// Status codes that count as reachable
pub const REACHABLE_STATUS: RangeInclusive<u16> = 200..=399;

/// Status code recorded when no response was obtained
pub const UNREACHABLE_STATUS: u16 = 0;

/// A stream is reachable iff its recorded status lies in `200..=399`
pub fn is_reachable(status: u16) -> bool {
    REACHABLE_STATUS.contains(&status)
}

/// HEAD responses at or above this status trigger the GET fallback
pub fn needs_get_fallback(head_status: u16) -> bool {
    head_status >= 400
}
