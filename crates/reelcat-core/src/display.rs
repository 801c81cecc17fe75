//! Human-readable labels for catalog rows

use crate::descriptor::FormatDescriptor;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Byte count in binary units, e.g. `1.5 KB`, `12 MB`
pub fn human_size(bytes: Option<i64>) -> String {
    let Some(bytes) = bytes else {
        return "unknown".to_string();
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value.abs() >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if value.abs() >= 10.0 {
        format!("{:.0} {}", value, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// `720p`, or `auto` when the height is unknown
pub fn resolution_label(format: &FormatDescriptor) -> String {
    match format.height_or_zero() {
        0 => "auto".to_string(),
        h => format!("{}p", h),
    }
}

/// One-line description: `mp4 • 720p • 1.5 MB` (audio rows omit resolution)
pub fn describe(format: &FormatDescriptor, with_resolution: bool) -> String {
    let ext = match format.ext_or_empty() {
        "" => "?",
        ext => ext,
    };
    if with_resolution {
        format!(
            "{} • {} • {}",
            ext,
            resolution_label(format),
            human_size(format.filesize)
        )
    } else {
        format!("{} • {}", ext, human_size(format.filesize))
    }
}

/// Duration as `m:ss` or `h:mm:ss`
pub fn human_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite() && *s >= 0.0) else {
        return "?".to_string();
    };
    let total = seconds.round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}
