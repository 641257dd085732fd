//! Bulk library analysis.
//!
//! Drives the probe -> normalize -> classify pipeline over every video file
//! under a root and folds the per-file verdicts into aggregate statistics,
//! optionally streaming progress events as it goes.

use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::compat::{classify, primary_audio_track, CodecConfig};
use crate::media::normalize;
use crate::probe::Prober;

use super::error::AnalysisError;
use super::root::MediaRoot;
use super::scanner::collect_video_files;
use super::types::{AnalysisEvent, AnalyzeOptions, BulkStats, CancelFlag, ProblematicFile};

/// Sequential bulk analyzer over a media library.
///
/// Files are processed strictly in enumeration order, one at a time, so
/// progress events always match file-processing order.
#[derive(Clone)]
pub struct LibraryAnalyzer {
    prober: Arc<dyn Prober>,
}

impl LibraryAnalyzer {
    pub fn new(prober: Arc<dyn Prober>) -> Self {
        Self { prober }
    }

    /// Analyzes every video file under the root and returns the aggregate
    /// statistics.
    ///
    /// `config` is an immutable snapshot consulted for every file of this
    /// run; concurrent configuration updates are not observed mid-run.
    pub async fn analyze(
        &self,
        root: &MediaRoot,
        config: &CodecConfig,
        options: &AnalyzeOptions,
        cancel: &CancelFlag,
    ) -> Result<BulkStats, AnalysisError> {
        self.run(root, config, options, cancel, None).await
    }

    /// Like [`analyze`](Self::analyze), but pushes one [`AnalysisEvent`] per
    /// progress step into `events`, ending with either a `Complete` event
    /// carrying the statistics or a single terminal `Error` event.
    ///
    /// A closed receiver is treated as cancellation.
    pub async fn analyze_with_progress(
        &self,
        root: &MediaRoot,
        config: &CodecConfig,
        options: &AnalyzeOptions,
        cancel: &CancelFlag,
        events: mpsc::Sender<AnalysisEvent>,
    ) -> Result<BulkStats, AnalysisError> {
        let result = self
            .run(root, config, options, cancel, Some(&events))
            .await;

        let terminal = match &result {
            Ok(stats) => AnalysisEvent::Complete {
                message: "Analysis complete!".to_string(),
                stats: stats.clone(),
            },
            Err(e) => AnalysisEvent::Error {
                message: e.to_string(),
            },
        };
        // Best effort: the receiver may already be gone.
        let _ = events.send(terminal).await;

        result
    }

    async fn run(
        &self,
        root: &MediaRoot,
        config: &CodecConfig,
        options: &AnalyzeOptions,
        cancel: &CancelFlag,
        events: Option<&mpsc::Sender<AnalysisEvent>>,
    ) -> Result<BulkStats, AnalysisError> {
        emit(
            events,
            AnalysisEvent::Starting {
                message: "Scanning for video files...".to_string(),
            },
        )
        .await?;

        let files = collect_video_files(root.path(), options.max_files);
        let total_files = files.len();
        info!("Bulk analysis over {} files under {:?}", total_files, root.path());

        emit(
            events,
            AnalysisEvent::Progress {
                total_files,
                current_file: 0,
                current_filename: None,
                message: format!("Found {} video files. Starting analysis...", total_files),
            },
        )
        .await?;

        let mut stats = BulkStats {
            // Enumeration count: probe failures below are skipped from every
            // other counter but stay in this denominator.
            total_files,
            ..BulkStats::default()
        };

        for (index, path) in files.iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }

            let filename = file_name(path);
            emit(
                events,
                AnalysisEvent::Progress {
                    total_files,
                    current_file: index + 1,
                    current_filename: Some(filename.clone()),
                    message: format!("Analyzing {}/{}: {}", index + 1, total_files, filename),
                },
            )
            .await?;

            let probe = match self.prober.probe(path).await {
                Ok(probe) => probe,
                Err(e) => {
                    warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            };

            let info = normalize(&probe, path);
            let verdict = classify(&info, config);

            if verdict.needs_remux {
                stats.problematic_files += 1;
                if verdict.primary_audio_problematic {
                    stats.audio_issues += 1;
                }
                if verdict.video_problematic {
                    stats.video_issues += 1;
                }
                if verdict.primary_audio_problematic && verdict.video_problematic {
                    stats.both_issues += 1;
                }

                let mut issues = Vec::new();
                if verdict.primary_audio_problematic {
                    issues.push(unknown_if_absent(&verdict.primary_audio_codec));
                }
                if verdict.video_problematic {
                    issues.push(unknown_if_absent(&verdict.video_codec));
                }

                stats.problematic_files_list.push(ProblematicFile {
                    path: root.relativize(path),
                    name: filename,
                    issues,
                    audio_codec: verdict.primary_audio_codec.clone(),
                    video_codec: verdict.video_codec.clone(),
                    size: info.size.clone().unwrap_or_else(|| "Unknown".to_string()),
                });
            } else {
                stats.compatible_files += 1;
            }

            if let Some(primary) = primary_audio_track(&info.audio_tracks) {
                *stats
                    .codec_breakdown
                    .audio
                    .entry(primary.codec.to_lowercase())
                    .or_insert(0) += 1;
            }
            if let Some(codec) = &info.video.codec {
                *stats
                    .codec_breakdown
                    .video
                    .entry(codec.to_lowercase())
                    .or_insert(0) += 1;
            }
        }

        stats.compatibility_percentage = if stats.total_files > 0 {
            let pct = 100.0 * stats.compatible_files as f64 / stats.total_files as f64;
            (pct * 10.0).round() / 10.0
        } else {
            0.0
        };

        Ok(stats)
    }
}

async fn emit(
    events: Option<&mpsc::Sender<AnalysisEvent>>,
    event: AnalysisEvent,
) -> Result<(), AnalysisError> {
    if let Some(sender) = events {
        // The consumer hanging up ends the run at the next boundary.
        sender
            .send(event)
            .await
            .map_err(|_| AnalysisError::Cancelled)?;
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn unknown_if_absent(codec: &Option<String>) -> String {
    codec.clone().unwrap_or_else(|| "Unknown".to_string())
}
