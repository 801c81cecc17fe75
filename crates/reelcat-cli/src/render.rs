//! Terminal output for catalog reports

use anyhow::Result;
use reelcat_core::display::{describe, human_duration};
use reelcat_core::links::LinkBuilder;
use reelcat_core::CatalogReport;
use std::fmt::Write;

pub fn print_report(report: &CatalogReport, links: &LinkBuilder, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_table(report, links)?);
    }
    Ok(())
}

pub fn render_table(report: &CatalogReport, links: &LinkBuilder) -> Result<String> {
    let mut out = String::new();
    let title = report.title.as_deref();

    writeln!(out, "{}", title.unwrap_or("(untitled)"))?;
    writeln!(
        out,
        "{} • {}",
        report.uploader.as_deref().unwrap_or("unknown uploader"),
        human_duration(report.duration)
    )?;
    if let Some(ref id) = report.id {
        writeln!(out, "Video ID: {}", id)?;
    }
    writeln!(
        out,
        "Formats: {} ({} downloadable)",
        report.format_count,
        report.catalog.len()
    )?;
    if let Some(link) = report
        .thumbnail
        .as_deref()
        .and_then(|t| links.thumbnail_link(t).ok())
    {
        writeln!(out, "Thumbnail: {}", link)?;
    }
    if let Some(ref url) = report.download_url {
        writeln!(out, "Best: {}", url)?;
    }

    writeln!(out, "\nVideo")?;
    if report.catalog.video.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for format in &report.catalog.video {
        let format_links = links.links_for(format, title)?;
        writeln!(out, "  {:<10} {}", format.format_id, describe(format, true))?;
        writeln!(out, "    download: {}", format_links.download)?;
        writeln!(out, "    stream:   {}", format_links.stream)?;
    }

    writeln!(out, "\nAudio")?;
    if report.catalog.audio.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for format in &report.catalog.audio {
        writeln!(out, "  {:<10} {}", format.format_id, describe(format, false))?;
        if let Some(url) = format.media_url() {
            writeln!(out, "    download: {}", url)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcat_core::MediaInfo;

    #[test]
    fn test_render_table() {
        let info = MediaInfo::from_json(
            r#"{
                "id": "abc123",
                "title": "Clip",
                "uploader": "tester",
                "duration": 75,
                "formats": [
                    {"format_id": "18", "ext": "mp4", "height": 360, "filesize": 1536, "url": "http://cdn/18"},
                    {"format_id": "140", "ext": "m4a", "filesize": 2048, "url": "http://cdn/140"},
                    {"format_id": "x", "ext": "mp4", "height": 2160}
                ]
            }"#,
        )
        .unwrap();
        let report = CatalogReport::build(&info, None);
        let table = render_table(&report, &LinkBuilder::new("")).unwrap();

        assert!(table.starts_with("Clip\ntester • 1:15\n"));
        assert!(table.contains("Formats: 3 (2 downloadable)"));
        assert!(table.contains("  18         mp4 • 360p • 1.5 KB\n"));
        assert!(table.contains("    download: /stream?download=1&filename=Clip.mp4&url=http%3A%2F%2Fcdn%2F18\n"));
        assert!(table.contains("  140        m4a • 2.0 KB\n    download: http://cdn/140\n"));
        assert!(!table.contains("2160p"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let report = CatalogReport::build(&MediaInfo::default(), None);
        let table = render_table(&report, &LinkBuilder::new("")).unwrap();
        assert!(table.contains("Video\n  (none)\n"));
        assert!(table.contains("Audio\n  (none)\n"));
    }
}
