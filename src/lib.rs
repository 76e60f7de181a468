//! # Fox Stage
//!
//! A headless model of an animated scene: a fox actor that cross-fades
//! between named clips, a floor, a directional light, a camera and a debug
//! panel. Rendering, model parsing and camera controls plug in from outside.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fox_stage::prelude::*;
//!
//! let assets = MemoryAssetProvider::new().with_actor("fox.json", actor);
//! let mut stage = Stage::new(StageSettings::default(), NullRenderer, 1280, 720, 1.0);
//! stage.load_actor(&assets);
//!
//! loop {
//!     stage.advance();
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`animation`]: Keyframe tracks, mixer and the cross-fading controller
//! - [`assets`]: Actor loading seam and bundled providers
//! - [`scene`]: Environment, floor, light, camera and viewport state
//! - [`debug`]: Debug panel sliders and buttons
//! - [`settings`]: Serde-backed configuration
//! - [`stage`]: The per-frame driver
//! - [`errors`]: Error types

pub mod animation;
pub mod assets;
pub mod debug;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod stage;
pub mod utils;

pub use animation::{AnimationClip, AnimationController, BlendTransition, ClipRegistry, Pose};
pub use errors::{Result, StageError};
pub use settings::StageSettings;
pub use stage::{FrameRenderer, FrameView, NullRenderer, Stage};

pub mod prelude {
    //! Common imports for hosts driving a [`Stage`](crate::Stage).

    pub use crate::animation::{
        AnimationClip, AnimationController, ClipRegistry, InterpolationMode, KeyframeTrack,
        TargetPath, Track, TrackData,
    };
    pub use crate::assets::{
        ActorRoot, AssetProvider, JsonAssetProvider, LoadedActor, MemoryAssetProvider,
    };
    pub use crate::debug::PanelEvent;
    pub use crate::errors::{Result, StageError};
    pub use crate::settings::StageSettings;
    pub use crate::stage::{FrameRenderer, FrameView, NullRenderer, Stage};
}
