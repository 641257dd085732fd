//! Directory scanning and video-file enumeration.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::media::format_size;

use super::error::ScanError;
use super::types::ScanItem;

/// File extensions treated as video files.
pub const VIDEO_EXTENSIONS: [&str; 11] = [
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "3gp",
];

/// Maximum recursion depth for counting and enumeration. Subtrees beyond
/// this depth silently contribute nothing.
pub const MAX_SCAN_DEPTH: u32 = 10;

/// Windows system directory excluded from every listing.
const SYSTEM_VOLUME_DIR: &str = "System Volume Information";

/// Whether a filename has a supported video extension.
pub fn is_video_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_excluded(name: &str) -> bool {
    name.starts_with('.') || name == SYSTEM_VOLUME_DIR
}

/// Lists the immediate children of a directory, lexicographically sorted by
/// name: folders annotated with recursive video counts, video files
/// annotated with formatted sizes.
///
/// Dotfiles and the reserved system-volume directory are excluded. A read
/// failure on `path` itself propagates; failures deeper in the tree only
/// zero out the affected counts.
pub fn scan_directory(path: &Path) -> Result<Vec<ScanItem>, ScanError> {
    if !path.is_dir() {
        return Err(ScanError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let entries = fs::read_dir(path).map_err(|e| ScanError::ReadDir {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut children: Vec<_> = entries.flatten().collect();
    children.sort_by_key(|entry| entry.file_name());

    let mut items = Vec::new();
    for entry in children {
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_excluded(&name) {
            continue;
        }

        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            items.push(ScanItem::Folder {
                video_count: count_videos_recursive(&entry.path(), MAX_SCAN_DEPTH),
                name,
            });
        } else if file_type.is_file() && is_video_file(&name) {
            let size = entry
                .metadata()
                .map(|m| format_size(m.len()))
                .unwrap_or_else(|_| "Unknown".to_string());
            items.push(ScanItem::File {
                name,
                size,
                path: entry.path().to_string_lossy().into_owned(),
            });
        }
    }

    Ok(items)
}

/// Recursively counts video files under a directory, bounded by `depth`.
/// Unreadable entries contribute zero.
pub fn count_videos_recursive(path: &Path, depth: u32) -> u64 {
    if depth == 0 {
        return 0;
    }

    let Ok(entries) = fs::read_dir(path) else {
        debug!("Skipping unreadable directory {:?}", path);
        return 0;
    };

    let mut count = 0;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_excluded(&name) {
            continue;
        }
        match entry.file_type() {
            Ok(ft) if ft.is_file() && is_video_file(&name) => count += 1,
            Ok(ft) if ft.is_dir() => count += count_videos_recursive(&entry.path(), depth - 1),
            _ => {}
        }
    }
    count
}

/// Recursively enumerates video files under `root` in sorted order per
/// directory level, stopping once `max_files` paths have been collected.
/// All read errors are swallowed.
pub fn collect_video_files(root: &Path, max_files: Option<usize>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_into(root, max_files, MAX_SCAN_DEPTH, &mut files);
    files
}

fn collect_into(dir: &Path, max_files: Option<usize>, depth: u32, files: &mut Vec<PathBuf>) {
    if depth == 0 {
        return;
    }

    let Ok(entries) = fs::read_dir(dir) else {
        debug!("Skipping unreadable directory {:?}", dir);
        return;
    };

    let mut children: Vec<_> = entries.flatten().collect();
    children.sort_by_key(|entry| entry.file_name());

    for entry in children {
        if max_files.is_some_and(|max| files.len() >= max) {
            return;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_excluded(&name) {
            continue;
        }
        match entry.file_type() {
            Ok(ft) if ft.is_file() && is_video_file(&name) => files.push(entry.path()),
            Ok(ft) if ft.is_dir() => collect_into(&entry.path(), max_files, depth - 1, files),
            _ => {}
        }
    }
}
