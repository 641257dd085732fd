//! Unit conversions for display fields.

/// Binary size ladder, smallest unit first.
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count using the largest unit keeping the value below 1024.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} TB", value)
}

/// Formats fractional seconds as "HH:MM:SS", truncating the remainder.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Formats bits per second as kilobits per second.
pub fn format_bitrate(bits_per_sec: u64) -> String {
    format!("{:.0} kbps", bits_per_sec as f64 / 1000.0)
}

/// Formats a sample rate in Hz as kilohertz.
pub fn format_sample_rate(hz: u64) -> String {
    format!("{:.1} kHz", hz as f64 / 1000.0)
}

/// Coarse resolution category by frame height. Thresholds are inclusive,
/// highest first; heights below 480 get no category.
pub fn resolution_category(height: u32) -> Option<&'static str> {
    match height {
        h if h >= 2160 => Some("4K"),
        h if h >= 1440 => Some("1440p"),
        h if h >= 1080 => Some("1080p"),
        h if h >= 720 => Some("720p"),
        h if h >= 480 => Some("480p"),
        _ => None,
    }
}

/// Renders "{width}×{height}" with the category appended when one applies.
pub fn format_resolution(width: u32, height: u32) -> String {
    match resolution_category(height) {
        Some(category) => format!("{}×{} ({})", width, height, category),
        None => format!("{}×{}", width, height),
    }
}

/// Parses a rational "num/den" frame rate into a display string.
///
/// A denominator of zero yields None rather than dividing by zero.
pub fn parse_framerate(rate: &str) -> Option<String> {
    let (num, den) = rate.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(format!("{:.2} fps", num / den))
}

/// Channel-layout label inferred from a channel count, used when the probe
/// does not supply an explicit layout string.
pub fn infer_channel_layout(channels: u32) -> String {
    match channels {
        1 => "Mono".to_string(),
        2 => "Stereo".to_string(),
        6 => "5.1".to_string(),
        8 => "7.1".to_string(),
        n => format!("{} channels", n),
    }
}
