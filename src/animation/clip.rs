use glam::{Quat, Vec3};

use crate::animation::binding::TargetPath;
use crate::animation::tracks::KeyframeTrack;
use crate::errors::{Result, StageError};

#[derive(Debug, Clone)]
pub struct TrackMeta {
    pub node_name: String,
    pub target: TargetPath,
}

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    fn end_time(&self) -> f32 {
        match self {
            TrackData::Vector3(track) => track.end_time(),
            TrackData::Quaternion(track) => track.end_time(),
        }
    }

    fn is_well_formed(&self) -> bool {
        match self {
            TrackData::Vector3(track) => track.is_well_formed(),
            TrackData::Quaternion(track) => track.is_well_formed(),
        }
    }
}

/// Track metadata plus its keyframe data.
#[derive(Debug, Clone)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

impl Track {
    /// Builds a track, rejecting keyframe data that cannot be sampled.
    pub fn new(node_name: impl Into<String>, target: TargetPath, data: TrackData) -> Result<Self> {
        let node_name = node_name.into();
        if !data.is_well_formed() {
            return Err(StageError::EmptyTrack { node: node_name });
        }
        Ok(Self {
            meta: TrackMeta { node_name, target },
            data,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Creates a clip whose duration is the end of its longest track.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }
}
