use rustc_hash::FxHashMap;

use crate::assets::provider::{AssetProvider, LoadedActor, PendingActor};
use crate::errors::StageError;

/// Serves actors registered in memory. Loads complete immediately.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssetProvider {
    actors: FxHashMap<String, LoadedActor>,
}

impl MemoryAssetProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, actor: LoadedActor) {
        self.actors.insert(path.into(), actor);
    }

    #[must_use]
    pub fn with_actor(mut self, path: impl Into<String>, actor: LoadedActor) -> Self {
        self.insert(path, actor);
        self
    }
}

impl AssetProvider for MemoryAssetProvider {
    fn load(&self, path: &str) -> PendingActor {
        let result = self
            .actors
            .get(path)
            .cloned()
            .ok_or_else(|| StageError::AssetNotFound(path.to_string()));
        PendingActor::ready(path, result)
    }
}
