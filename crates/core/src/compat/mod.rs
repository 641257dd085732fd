//! Codec-compatibility classification and configuration.
//!
//! A [`CodecConfig`] names the audio/video codecs expected to fail playback
//! on the target player. Classification consumes an immutable snapshot of
//! that configuration; the owning collaborator is responsible for atomic
//! swap-on-update, so the core never coordinates concurrent readers and
//! writers itself.

mod classify;
mod error;
mod store;
mod types;

pub use classify::{annotate, classify, primary_audio_track};
pub use error::CodecStoreError;
pub use store::{CodecStore, JsonCodecStore};
pub use types::{
    CodecConfig, CompatibilityVerdict, ProblematicCodecs, DEFAULT_PROBLEMATIC_AUDIO,
};
