//! Animation System
//!
//! Keyframe tracks and clips, per-clip playback actions, a mixer that blends
//! them into a [`Pose`], and the [`AnimationController`] that cross-fades an
//! actor between named clips.

pub mod action;
pub mod binding;
pub mod clip;
pub mod controller;
pub mod mixer;
pub mod pose;
pub mod registry;
pub mod tracks;
pub mod transition;
pub mod values;

pub use action::{AnimationAction, FadeOutcome, LoopMode, TrackValue, WeightFade};
pub use binding::{PropertyKey, TargetPath};
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use controller::{AnimationController, DEFAULT_FADE_DURATION};
pub use mixer::{ActionHandle, AnimationMixer};
pub use pose::Pose;
pub use registry::ClipRegistry;
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use transition::BlendTransition;
pub use values::Interpolatable;
