//! Audio/video classification heuristic

use crate::descriptor::FormatDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

/// Audio when the extension mentions m4a, is exactly mp3, or the format note
/// mentions audio (all case-insensitive). Everything else is video.
pub fn classify(format: &FormatDescriptor) -> MediaKind {
    let ext = format.ext_or_empty().to_lowercase();
    let note = format
        .format_note
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    if ext.contains("m4a") || ext == "mp3" || note.contains("audio") {
        MediaKind::Audio
    } else {
        MediaKind::Video
    }
}

/// Split formats into `(video, audio)`, preserving relative order.
pub fn partition(formats: Vec<FormatDescriptor>) -> (Vec<FormatDescriptor>, Vec<FormatDescriptor>) {
    formats
        .into_iter()
        .partition(|f| classify(f) == MediaKind::Video)
}
