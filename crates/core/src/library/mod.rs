//! Media library operations: directory scanning, path containment, and bulk
//! compatibility analysis.
//!
//! # Example
//!
//! ```ignore
//! use mediascope_core::library::{AnalyzeOptions, CancelFlag, LibraryAnalyzer, MediaRoot};
//!
//! let analyzer = LibraryAnalyzer::new(prober);
//! let root = MediaRoot::new("/srv/media");
//! let stats = analyzer
//!     .analyze(&root, &codec_config, &AnalyzeOptions::default(), &CancelFlag::new())
//!     .await?;
//! println!("{}% compatible", stats.compatibility_percentage);
//! ```

mod analyzer;
mod error;
mod root;
mod scanner;
mod types;

pub use analyzer::LibraryAnalyzer;
pub use error::{AnalysisError, PathError, ScanError};
pub use root::MediaRoot;
pub use scanner::{
    collect_video_files, count_videos_recursive, is_video_file, scan_directory, MAX_SCAN_DEPTH,
    VIDEO_EXTENSIONS,
};
pub use types::{
    AnalysisEvent, AnalyzeOptions, BulkStats, CancelFlag, CodecBreakdown, ProblematicFile,
    ScanItem,
};
