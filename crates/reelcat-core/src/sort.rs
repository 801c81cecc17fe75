//! Quality ordering for each bucket. Both sorts are stable.

use crate::descriptor::FormatDescriptor;
use std::cmp::Reverse;

/// Highest resolution first
pub fn sort_video(formats: &mut [FormatDescriptor]) {
    formats.sort_by_key(|f| Reverse(f.height_or_zero()));
}

/// Largest file first
pub fn sort_audio(formats: &mut [FormatDescriptor]) {
    formats.sort_by_key(|f| Reverse(f.filesize_or_zero()));
}
