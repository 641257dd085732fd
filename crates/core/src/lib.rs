pub mod compat;
pub mod config;
pub mod library;
pub mod media;
pub mod probe;
pub mod testing;

pub use compat::{
    annotate, classify, primary_audio_track, CodecConfig, CodecStore, CodecStoreError,
    CompatibilityVerdict, JsonCodecStore, ProblematicCodecs,
};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config, ConfigError,
    LibraryConfig, ServerConfig,
};
pub use library::{
    collect_video_files, scan_directory, AnalysisError, AnalysisEvent, AnalyzeOptions, BulkStats,
    CancelFlag, LibraryAnalyzer, MediaRoot, PathError, ProblematicFile, ScanError, ScanItem,
};
pub use media::{normalize, AudioTrack, SubtitleTrack, VideoInfo, VideoStreamInfo};
pub use probe::{FfprobeProber, ProbeError, ProbeOutput, Prober, ProberConfig};
