//! Media metadata normalization.
//!
//! This module converts raw probe documents into the canonical, strongly
//! typed [`VideoInfo`] record: formatted duration/size/bitrate, a video
//! stream summary, audio tracks, and subtitle tracks including externally
//! discovered sibling files.

mod format;
mod normalize;
mod subtitles;
mod types;

pub use format::{
    format_bitrate, format_duration, format_resolution, format_sample_rate, format_size,
    infer_channel_layout, parse_framerate, resolution_category,
};
pub use normalize::normalize;
pub use subtitles::discover_external_subtitles;
pub use types::{AudioTrack, SubtitleTrack, VideoInfo, VideoStreamInfo};
