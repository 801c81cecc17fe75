//! End-to-end reconciliation over extractor-shaped JSON, plus catalog properties.

use proptest::prelude::*;
use reelcat_core::classify::{classify, MediaKind};
use reelcat_core::links::LinkBuilder;
use reelcat_core::{reconcile, CatalogReport, FormatDescriptor, MediaInfo};
use std::collections::HashSet;

const YT_DLP_RESPONSE: &str = r#"{
    "id": "abc123",
    "title": "Test Video",
    "uploader": "tester",
    "thumbnail": "http://example.com/thumb.jpg",
    "duration": 12,
    "formats": [
        {"format_id": "sb0", "ext": "mhtml", "format_note": "storyboard", "url": "http://cdn/sb"},
        {"format_id": "139", "ext": "m4a", "format_note": "low", "filesize": 1000, "url": "http://cdn/139"},
        {"format_id": "140", "ext": "m4a", "format_note": "medium", "filesize": 3000000, "url": "http://cdn/140"},
        {"format_id": "251", "ext": "webm", "format_note": "Audio Only", "filesize": 2500000, "url": "http://cdn/251"},
        {"format_id": "18", "ext": "mp4", "format_note": "360p", "height": 360, "width": 640, "filesize": 11111, "url": "http://cdn/18"},
        {"format_id": "22", "ext": "mp4", "format_note": "720p", "height": 720, "width": 1280, "filesize": null, "url": "http://cdn/22"},
        {"format_id": "22-dup", "ext": "mp4", "format_note": "720p", "height": 720, "filesize": 4, "url": "http://cdn/22"},
        {"format_id": "137", "ext": "mp4", "format_note": "1080p", "height": 1080, "url": null},
        {"format_id": "299", "ext": "mp4", "format_note": "1080p60", "height": 1080, "filesize": 9000000, "url": "http://cdn/299"}
    ]
}"#;

fn ids(formats: &[FormatDescriptor]) -> Vec<&str> {
    formats.iter().map(|f| f.format_id.as_str()).collect()
}

#[test]
fn yt_dlp_response_becomes_ranked_catalog() {
    let info = MediaInfo::from_json(YT_DLP_RESPONSE).unwrap();
    let catalog = reconcile(&info.formats);

    // "22-dup" outscores "22" by its filesize and takes over its slot
    assert_eq!(ids(&catalog.video), ["299", "22-dup", "18", "sb0"]);
    assert_eq!(ids(&catalog.audio), ["140", "251", "139"]);
}

#[test]
fn three_entry_scenario() {
    let info = MediaInfo::from_json(
        r#"{"formats": [
            {"url": "a", "ext": "mp4", "height": 1080, "filesize": 5000000, "format_id": "137"},
            {"url": "a", "ext": "mp4", "height": 360, "filesize": 50000000, "format_id": "18"},
            {"url": "b", "ext": "m4a", "filesize": 3000000, "format_id": "140", "format_note": "audio only"}
        ]}"#,
    )
    .unwrap();

    let catalog = reconcile(&info.formats);
    let json = serde_json::to_value(&catalog).unwrap();

    assert_eq!(json["video"].as_array().unwrap().len(), 1);
    assert_eq!(json["video"][0]["url"], "a");
    assert_eq!(json["video"][0]["height"], 360);
    assert_eq!(json["audio"].as_array().unwrap().len(), 1);
    assert_eq!(json["audio"][0]["url"], "b");
}

#[test]
fn report_links_use_proxy_contract() {
    let info = MediaInfo::from_json(YT_DLP_RESPONSE).unwrap();
    let report = CatalogReport::build(&info, None);
    let links = LinkBuilder::new("http://localhost:8000/");

    // tallest with a URL; "137" has none
    assert_eq!(report.download_url.as_deref(), Some("http://cdn/299"));

    let best = &report.catalog.video[0];
    let best_links = links.links_for(best, report.title.as_deref()).unwrap();
    assert_eq!(
        best_links.download,
        "http://localhost:8000/stream?download=1&filename=Test+Video.mp4&url=http%3A%2F%2Fcdn%2F299"
    );
    assert_eq!(
        links.thumbnail_link(report.thumbnail.as_deref().unwrap()).unwrap(),
        "http://localhost:8000/stream?url=http%3A%2F%2Fexample.com%2Fthumb.jpg"
    );
}

#[test]
fn playlist_response_uses_first_entry() {
    let info = MediaInfo::from_json(
        r#"{"_type": "playlist", "title": "List", "entries": [
            {"id": "e1", "title": "Entry", "formats": [{"url": "x", "format_id": "1", "ext": "mp3"}]}
        ]}"#,
    )
    .unwrap();

    let report = CatalogReport::build(&info, None);
    assert_eq!(report.id.as_deref(), Some("e1"));
    assert_eq!(ids(&report.catalog.audio), ["1"]);
}

fn arb_format() -> impl Strategy<Value = Option<FormatDescriptor>> {
    let format = (
        prop::option::of(prop::sample::select(vec!["", "a", "b", "c", "d", "e"])),
        prop::option::of(prop::sample::select(vec!["mp4", "webm", "m4a", "MP3", "3gp"])),
        prop::option::of(-10i64..2200),
        prop::option::of(-1000i64..10_000_000),
        prop::option::of(prop::sample::select(vec!["audio only", "720p", "DASH"])),
    )
        .prop_map(|(url, ext, height, filesize, note)| FormatDescriptor {
            url: url.map(String::from),
            ext: ext.map(String::from),
            height,
            filesize,
            format_note: note.map(String::from),
            ..Default::default()
        });
    prop::option::weighted(0.9, format)
}

proptest! {
    #[test]
    fn catalog_has_one_entry_per_distinct_url(formats in prop::collection::vec(arb_format(), 0..40)) {
        let catalog = reconcile(&formats);

        let distinct: HashSet<&str> = formats
            .iter()
            .flatten()
            .filter_map(|f| f.media_url())
            .collect();
        prop_assert_eq!(catalog.len(), distinct.len());

        let mut seen = HashSet::new();
        for format in catalog.video.iter().chain(&catalog.audio) {
            let url = format.media_url();
            prop_assert!(url.is_some());
            prop_assert!(seen.insert(url.unwrap().to_string()));
        }
    }

    #[test]
    fn buckets_are_classified_and_sorted(formats in prop::collection::vec(arb_format(), 0..40)) {
        let catalog = reconcile(&formats);

        prop_assert!(catalog.video.iter().all(|f| classify(f) == MediaKind::Video));
        prop_assert!(catalog.audio.iter().all(|f| classify(f) == MediaKind::Audio));
        prop_assert!(catalog.video.windows(2).all(|w| w[0].height_or_zero() >= w[1].height_or_zero()));
        prop_assert!(catalog.audio.windows(2).all(|w| w[0].filesize_or_zero() >= w[1].filesize_or_zero()));
    }

    #[test]
    fn reconcile_is_deterministic(formats in prop::collection::vec(arb_format(), 0..40)) {
        prop_assert_eq!(reconcile(&formats), reconcile(&formats));
    }
}
