use std::sync::Arc;
use tokio::sync::RwLock;

use mediascope_core::{
    CodecConfig, CodecStore, Config, LibraryAnalyzer, MediaRoot, Prober,
};

/// Shared application state
pub struct AppState {
    config: Config,
    media_root: MediaRoot,
    prober: Arc<dyn Prober>,
    analyzer: LibraryAnalyzer,
    codec_store: Arc<dyn CodecStore>,
    /// Current codec configuration. Classification reads an Arc snapshot so
    /// updates never tear a classification in progress.
    codec_config: RwLock<Arc<CodecConfig>>,
}

impl AppState {
    pub fn new(config: Config, prober: Arc<dyn Prober>, codec_store: Arc<dyn CodecStore>) -> Self {
        let media_root = MediaRoot::new(config.library.root.clone());
        let codec_config = RwLock::new(Arc::new(codec_store.load_or_default()));
        Self {
            media_root,
            prober: Arc::clone(&prober),
            analyzer: LibraryAnalyzer::new(prober),
            codec_store,
            codec_config,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn media_root(&self) -> &MediaRoot {
        &self.media_root
    }

    pub fn prober(&self) -> &dyn Prober {
        self.prober.as_ref()
    }

    pub fn analyzer(&self) -> &LibraryAnalyzer {
        &self.analyzer
    }

    /// Immutable snapshot of the current codec configuration.
    pub async fn codec_config(&self) -> Arc<CodecConfig> {
        Arc::clone(&*self.codec_config.read().await)
    }

    /// Atomically swaps in a new codec configuration.
    pub async fn set_codec_config(&self, config: CodecConfig) {
        *self.codec_config.write().await = Arc::new(config);
    }

    pub fn codec_store(&self) -> &dyn CodecStore {
        self.codec_store.as_ref()
    }
}
