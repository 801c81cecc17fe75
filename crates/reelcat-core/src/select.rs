//! Default download selection over the raw format list

use crate::descriptor::FormatDescriptor;

/// Pick the URL to offer as the primary download.
///
/// A requested format id wins when a format with that id has a URL. Otherwise
/// the tallest format with a URL is used, earliest first on equal heights.
pub fn select_download_url<'a>(
    formats: &'a [Option<FormatDescriptor>],
    requested_format_id: Option<&str>,
) -> Option<&'a str> {
    let with_url = || {
        formats
            .iter()
            .flatten()
            .filter_map(|f| f.media_url().map(|url| (f, url)))
    };

    if let Some(id) = requested_format_id {
        if let Some((_, url)) = with_url().find(|(f, _)| f.format_id == id) {
            return Some(url);
        }
    }

    let mut best: Option<(i64, &str)> = None;
    for (format, url) in with_url() {
        let height = format.height_or_zero();
        if best.map_or(true, |(best_height, _)| height > best_height) {
            best = Some((height, url));
        }
    }
    best.map(|(_, url)| url)
}
