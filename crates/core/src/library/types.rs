//! Types for directory scanning and bulk analysis.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One entry of a directory listing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanItem {
    /// A subdirectory, annotated with its recursive video-file count.
    Folder { name: String, video_count: u64 },
    /// A video file, annotated with a human-readable size.
    File {
        name: String,
        size: String,
        path: String,
    },
}

impl ScanItem {
    /// The entry name, for ordering assertions.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Aggregate compatibility statistics for a library.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkStats {
    /// Number of files enumerated, including files that later fail to probe.
    pub total_files: usize,
    /// Successfully analyzed files with no problematic codec.
    pub compatible_files: usize,
    /// Successfully analyzed files needing a remux.
    pub problematic_files: usize,
    /// Files whose primary audio codec is problematic.
    pub audio_issues: usize,
    /// Files whose video codec is problematic.
    pub video_issues: usize,
    /// Files with both kinds of issue (also counted in each above).
    pub both_issues: usize,
    /// Codec usage histograms, keyed by lowercased codec name.
    pub codec_breakdown: CodecBreakdown,
    /// Summaries of every file needing a remux.
    pub problematic_files_list: Vec<ProblematicFile>,
    /// `round(100 * compatible / total, 1)`; 0 when no files were found.
    pub compatibility_percentage: f64,
}

/// Audio and video codec occurrence counts.
///
/// Each analyzed file contributes at most one increment per histogram: the
/// primary audio codec and the single video codec.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CodecBreakdown {
    pub audio: HashMap<String, u64>,
    pub video: HashMap<String, u64>,
}

/// Summary of one problematic file.
#[derive(Debug, Clone, Serialize)]
pub struct ProblematicFile {
    /// Path relative to the analysis root.
    pub path: String,
    /// Base filename.
    pub name: String,
    /// The codecs responsible for the verdict.
    pub issues: Vec<String>,
    pub audio_codec: Option<String>,
    pub video_codec: Option<String>,
    /// Formatted size, "Unknown" when it could not be read.
    pub size: String,
}

/// Options for a bulk analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Stop enumerating once this many files have been collected.
    pub max_files: Option<usize>,
}

/// Progress events emitted during a bulk analysis run, in file-enumeration
/// order. Serialized with a `status` tag for the push channel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisEvent {
    /// Enumeration has begun.
    Starting { message: String },
    /// Enumeration finished (current_file 0) or one file was analyzed.
    Progress {
        total_files: usize,
        current_file: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        current_filename: Option<String>,
        message: String,
    },
    /// Terminal event carrying the complete statistics.
    Complete {
        message: String,
        #[serde(flatten)]
        stats: BulkStats,
    },
    /// Terminal event for a failed or cancelled run.
    Error { message: String },
}

/// Cancellation signal checked between files during bulk analysis.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation at the next file boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_item_serialization() {
        let folder = ScanItem::Folder {
            name: "movies".to_string(),
            video_count: 3,
        };
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json["type"], "folder");
        assert_eq!(json["video_count"], 3);

        let file = ScanItem::File {
            name: "a.mkv".to_string(),
            size: "1.0 GB".to_string(),
            path: "/media/a.mkv".to_string(),
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["size"], "1.0 GB");
    }

    #[test]
    fn test_event_serialization_tags() {
        let event = AnalysisEvent::Starting {
            message: "Scanning for video files...".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["status"], "starting");

        let event = AnalysisEvent::Complete {
            message: "Analysis complete!".to_string(),
            stats: BulkStats::default(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["status"], "complete");
        // stats are flattened alongside the tag
        assert_eq!(json["total_files"], 0);
    }

    #[test]
    fn test_cancel_flag() {
        let flag = CancelFlag::new();
        assert!(!flag.is_cancelled());
        let clone = flag.clone();
        clone.cancel();
        assert!(flag.is_cancelled());
    }
}
