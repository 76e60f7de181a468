use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::animation::clip::AnimationClip;
use crate::errors::{Result, StageError};

/// Named clips of one actor.
///
/// Built once when the actor finishes loading and handed to
/// [`AnimationController::initialize`](crate::animation::AnimationController::initialize).
#[derive(Debug, Clone, Default)]
pub struct ClipRegistry {
    clips: FxHashMap<String, Arc<AnimationClip>>,
}

impl ClipRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every clip under its own name.
    #[must_use]
    pub fn from_clips(clips: impl IntoIterator<Item = AnimationClip>) -> Self {
        clips
            .into_iter()
            .map(|clip| (clip.name.clone(), Arc::new(clip)))
            .collect()
    }

    /// Binds names to positions of an ordered clip list.
    ///
    /// For assets that only expose clips in export order. Fails if the list
    /// is shorter than `names`; surplus clips are ignored.
    pub fn from_ordered(clips: Vec<AnimationClip>, names: &[&str]) -> Result<Self> {
        let mut clips = clips.into_iter();
        let mut registry = Self::new();
        for (index, &name) in names.iter().enumerate() {
            let clip = clips.next().ok_or_else(|| StageError::MissingClip {
                index,
                name: name.to_string(),
            })?;
            registry.insert(name, Arc::new(clip));
        }
        Ok(registry)
    }

    pub fn insert(&mut self, name: impl Into<String>, clip: Arc<AnimationClip>) {
        self.clips.insert(name.into(), clip);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.clips.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Clip names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.clips.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn into_inner(self) -> FxHashMap<String, Arc<AnimationClip>> {
        self.clips
    }
}

impl FromIterator<(String, Arc<AnimationClip>)> for ClipRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Arc<AnimationClip>)>>(iter: I) -> Self {
        Self {
            clips: iter.into_iter().collect(),
        }
    }
}
