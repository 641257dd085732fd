//! External subtitle discovery.
//!
//! Subtitles shipped as sibling files (e.g. `movie.en.srt` next to
//! `movie.mkv`) are attached to the probed file's track list. Discovery is
//! best-effort: directory-read failures are swallowed and never fail the
//! overall normalization.

use std::fs;
use std::path::Path;

use super::types::SubtitleTrack;

/// Subtitle file extensions recognized during discovery.
const SUBTITLE_EXTENSIONS: [&str; 6] = ["srt", "ass", "ssa", "sub", "idx", "vtt"];

/// Language codes searched for, in priority order, inside subtitle filenames.
const LANGUAGE_CODES: [&str; 9] = ["en", "es", "fr", "de", "it", "pt", "ja", "ko", "zh"];

/// Scans the containing directory of `video_path` for subtitle files whose
/// name starts with the video's base filename (case-insensitive).
pub fn discover_external_subtitles(video_path: &Path) -> Vec<SubtitleTrack> {
    let Some(directory) = video_path.parent() else {
        return Vec::new();
    };
    let Some(stem) = video_path.file_stem().map(|s| s.to_string_lossy().to_lowercase()) else {
        return Vec::new();
    };

    let Ok(entries) = fs::read_dir(directory) else {
        return Vec::new();
    };

    let mut subtitles: Vec<SubtitleTrack> = entries
        .flatten()
        .filter_map(|entry| {
            let filename = entry.file_name().to_string_lossy().into_owned();
            let lower = filename.to_lowercase();

            let extension = lower.rsplit_once('.').map(|(_, ext)| ext)?;
            if !SUBTITLE_EXTENSIONS.contains(&extension) || !lower.starts_with(&stem) {
                return None;
            }

            Some(SubtitleTrack {
                index: None,
                codec: extension.to_uppercase(),
                language: infer_language(&lower),
                title: filename,
                forced: false,
                default: false,
                external: true,
            })
        })
        .collect();

    subtitles.sort_by(|a, b| a.title.cmp(&b.title));
    subtitles
}

/// Infers a language by substring-searching the lowercased filename for a
/// known code; first match wins.
fn infer_language(filename_lower: &str) -> String {
    LANGUAGE_CODES
        .iter()
        .find(|code| filename_lower.contains(*code))
        .map(|code| code.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[test]
    fn test_discovers_matching_siblings_only() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "movie.mkv");
        touch(&dir, "movie.en.srt");
        touch(&dir, "Movie.fr.ass");
        touch(&dir, "other.srt");
        touch(&dir, "movie.txt");

        let subs = discover_external_subtitles(&dir.path().join("movie.mkv"));
        assert_eq!(subs.len(), 2);

        let en = subs.iter().find(|s| s.codec == "SRT").unwrap();
        assert_eq!(en.language, "en");
        assert_eq!(en.title, "movie.en.srt");
        assert!(en.external);
        assert!(en.index.is_none());

        let fr = subs.iter().find(|s| s.codec == "ASS").unwrap();
        assert_eq!(fr.language, "fr");
    }

    #[test]
    fn test_language_inference_first_match_wins() {
        assert_eq!(infer_language("movie.en.srt"), "en");
        assert_eq!(infer_language("movie.de.srt"), "de");
        // "english" contains "en" before "de" is ever considered
        assert_eq!(infer_language("movie.english.srt"), "en");
        assert_eq!(infer_language("track.xx.srt"), "Unknown");
    }

    #[test]
    fn test_missing_directory_is_swallowed() {
        let subs = discover_external_subtitles(Path::new("/nonexistent/dir/movie.mkv"));
        assert!(subs.is_empty());
    }
}
