//! JSON actor descriptions.
//!
//! A compact interchange format for actors whose clips were exported
//! elsewhere:
//!
//! ```json
//! {
//!   "name": "Fox",
//!   "materials": ["fox_material"],
//!   "clips": [
//!     {
//!       "name": "idle",
//!       "tracks": [
//!         { "node": "b_Head_05", "target": "rotation", "interpolation": "linear",
//!           "times": [0.0, 1.0], "values": [0, 0, 0, 1, 0, 0.38, 0, 0.92] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `values` is flat: three components per key for translation and scale,
//! four (`x y z w`) for rotation, times three for cubic-spline tracks.

use std::path::{Path, PathBuf};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationClip, InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData};
use crate::assets::provider::{ActorRoot, AssetProvider, LoadedActor, PendingActor};
use crate::errors::{Result, StageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationDocument {
    #[default]
    Linear,
    Step,
    CubicSpline,
}

impl From<InterpolationDocument> for InterpolationMode {
    fn from(value: InterpolationDocument) -> Self {
        match value {
            InterpolationDocument::Linear => InterpolationMode::Linear,
            InterpolationDocument::Step => InterpolationMode::Step,
            InterpolationDocument::CubicSpline => InterpolationMode::CubicSpline,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDocument {
    pub node: String,
    pub target: TargetPath,
    #[serde(default)]
    pub interpolation: InterpolationDocument,
    pub times: Vec<f32>,
    pub values: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDocument {
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<TrackDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorDocument {
    pub name: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub clips: Vec<ClipDocument>,
}

impl ActorDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_actor(self) -> Result<LoadedActor> {
        let clips = self
            .clips
            .into_iter()
            .map(ClipDocument::into_clip)
            .collect::<Result<Vec<_>>>()?;

        Ok(LoadedActor {
            root: ActorRoot {
                name: self.name,
                materials: self.materials,
            },
            clips,
        })
    }
}

impl ClipDocument {
    fn into_clip(self) -> Result<AnimationClip> {
        let tracks = self
            .tracks
            .into_iter()
            .map(TrackDocument::into_track)
            .collect::<Result<Vec<_>>>()?;
        Ok(AnimationClip::new(self.name, tracks))
    }
}

impl TrackDocument {
    fn into_track(self) -> Result<Track> {
        let interpolation = InterpolationMode::from(self.interpolation);
        let components = match self.target {
            TargetPath::Rotation => 4,
            TargetPath::Translation | TargetPath::Scale => 3,
        };
        if self.values.len() % components != 0 {
            return Err(StageError::AssetLoad(format!(
                "track for node '{}' has {} values, not a multiple of {components}",
                self.node,
                self.values.len()
            )));
        }

        let data = match self.target {
            TargetPath::Rotation => {
                let values = self
                    .values
                    .chunks_exact(4)
                    .map(|c| Quat::from_xyzw(c[0], c[1], c[2], c[3]))
                    .collect();
                TrackData::Quaternion(KeyframeTrack::new(self.times, values, interpolation))
            }
            TargetPath::Translation | TargetPath::Scale => {
                let values = self
                    .values
                    .chunks_exact(3)
                    .map(Vec3::from_slice)
                    .collect();
                TrackData::Vector3(KeyframeTrack::new(self.times, values, interpolation))
            }
        };

        Track::new(self.node, self.target, data)
    }
}

/// Loads [`ActorDocument`] files relative to a base directory on a
/// background thread.
#[derive(Debug, Clone)]
pub struct JsonAssetProvider {
    base_dir: PathBuf,
}

impl JsonAssetProvider {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn read_actor(path: &Path) -> Result<LoadedActor> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StageError::AssetNotFound(path.display().to_string())
            } else {
                StageError::IoError(err)
            }
        })?;
        ActorDocument::from_json_str(&text)?.into_actor()
    }
}

impl AssetProvider for JsonAssetProvider {
    fn load(&self, path: &str) -> PendingActor {
        let full_path = self.base_dir.join(path);
        let (sender, pending) = PendingActor::channel(path);

        std::thread::spawn(move || {
            let result = Self::read_actor(&full_path);
            match &result {
                Ok(actor) => log::info!(
                    "Loaded actor '{}' with {} clips from {}",
                    actor.root.name,
                    actor.clips.len(),
                    full_path.display()
                ),
                Err(err) => log::error!("Failed to load {}: {err}", full_path.display()),
            }
            // The stage may have been dropped while loading.
            let _ = sender.send(result);
        });

        pending
    }
}
