// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elapsed wall-clock time rendering.

use time::OffsetDateTime;

/// Renders the elapsed time between `start` and `end` as zero-padded
/// `HH:MM:SS`.
///
/// Hours grow beyond two digits when the elapsed time requires it; minutes
/// and seconds are always in `[00, 59]`. Sub-second remainders are
/// truncated, never rounded up.
///
/// Returns [`None`] when the duration cannot be computed: either timestamp
/// missing, or `end` before `start`. Callers must omit the corresponding
/// output attribute in that case rather than emit a malformed value.
#[must_use]
pub fn format_elapsed(
    start: Option<OffsetDateTime>,
    end: Option<OffsetDateTime>,
) -> Option<String> {
    let diff_millis = (end? - start?).whole_milliseconds();
    if diff_millis < 0 {
        return None;
    }

    let total_seconds = (diff_millis / 1000) as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    Some(format!("{hours:02}:{minutes:02}:{seconds:02}"))
}
