//! Collapse formats that point at the same media URL

use crate::descriptor::FormatDescriptor;
use std::collections::HashMap;
use tracing::debug;

/// Score used to pick between formats sharing a URL: `height * 2 + filesize`.
///
/// Size and resolution are weighted additively, so a large low-resolution
/// variant can beat a small high-resolution one.
pub fn dedup_score(format: &FormatDescriptor) -> i64 {
    format
        .height_or_zero()
        .saturating_mul(2)
        .saturating_add(format.filesize_or_zero())
}

/// Keep one format per distinct URL.
///
/// Entries without a URL are dropped. A later duplicate replaces the kept one
/// only when its score is strictly greater, and the replacement takes over the
/// slot of the first occurrence.
pub fn dedupe_by_url(formats: &[Option<FormatDescriptor>]) -> Vec<FormatDescriptor> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut kept: Vec<&FormatDescriptor> = Vec::new();
    let mut dropped = 0usize;
    let mut replaced = 0usize;

    for format in formats {
        let Some((format, url)) = format.as_ref().and_then(|f| Some((f, f.media_url()?))) else {
            dropped += 1;
            continue;
        };

        match slots.get(url) {
            Some(&slot) => {
                if dedup_score(format) > dedup_score(kept[slot]) {
                    kept[slot] = format;
                    replaced += 1;
                }
            }
            None => {
                slots.insert(url, kept.len());
                kept.push(format);
            }
        }
    }

    debug!(
        "Deduplicated {} formats: {} kept, {} without url, {} replaced",
        formats.len(),
        kept.len(),
        dropped,
        replaced
    );

    kept.into_iter().cloned().collect()
}
