//! Catalog assembly: dedup, classify, sort

use crate::classify::partition;
use crate::dedup::dedupe_by_url;
use crate::descriptor::FormatDescriptor;
use crate::sort::{sort_audio, sort_video};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ranked, deduplicated formats split into video and audio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub video: Vec<FormatDescriptor>,
    pub audio: Vec<FormatDescriptor>,
}

impl Catalog {
    /// Wrap two already-sorted buckets
    pub fn assemble(video: Vec<FormatDescriptor>, audio: Vec<FormatDescriptor>) -> Self {
        Self { video, audio }
    }

    pub fn len(&self) -> usize {
        self.video.len() + self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.video.is_empty() && self.audio.is_empty()
    }
}

/// Turn a raw extractor format list into a catalog.
///
/// Never fails: missing fields default to zero or empty and entries without a
/// URL are left out.
pub fn reconcile(formats: &[Option<FormatDescriptor>]) -> Catalog {
    let deduped = dedupe_by_url(formats);
    let (mut video, mut audio) = partition(deduped);

    sort_video(&mut video);
    sort_audio(&mut audio);

    debug!("Catalog: {} video, {} audio", video.len(), audio.len());

    Catalog::assemble(video, audio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Vec<Option<FormatDescriptor>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let catalog = reconcile(&[]);
        assert!(catalog.is_empty());
        assert_eq!(
            serde_json::to_value(&catalog).unwrap(),
            json!({ "video": [], "audio": [] })
        );
    }

    #[test]
    fn test_end_to_end() {
        let formats = parse(json!([
            {"url": "a", "ext": "mp4", "height": 1080, "filesize": 5000000, "format_id": "137"},
            {"url": "a", "ext": "mp4", "height": 360, "filesize": 50000000, "format_id": "18"},
            {"url": "b", "ext": "m4a", "filesize": 3000000, "format_id": "140", "format_note": "audio only"}
        ]));

        let catalog = reconcile(&formats);

        assert_eq!(catalog.video.len(), 1);
        assert_eq!(catalog.video[0].media_url(), Some("a"));
        assert_eq!(catalog.video[0].height, Some(360));
        assert_eq!(catalog.video[0].format_id, "18");

        assert_eq!(catalog.audio.len(), 1);
        assert_eq!(catalog.audio[0].media_url(), Some("b"));
        assert_eq!(catalog.audio[0].format_id, "140");
    }

    #[test]
    fn test_urlless_entries_excluded() {
        let formats = parse(json!([
            null,
            {"ext": "m4a", "filesize": 99999999, "format_id": "ghost-audio"},
            {"url": null, "height": 2160, "format_id": "ghost-video"},
            {"url": "v", "ext": "webm", "height": 144, "format_id": "real"}
        ]));

        let catalog = reconcile(&formats);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.audio.is_empty());
        assert_eq!(catalog.video[0].format_id, "real");
    }

    #[test]
    fn test_idempotent() {
        let formats = parse(json!([
            {"url": "a", "height": 720, "format_id": "1"},
            {"url": "b", "height": 720, "format_id": "2"},
            {"url": "c", "ext": "mp3", "filesize": 5, "format_id": "3"},
            {"url": "d", "ext": "m4a", "filesize": 5, "format_id": "4"}
        ]));
        assert_eq!(reconcile(&formats), reconcile(&formats));
    }
}
