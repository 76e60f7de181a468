//! Actor Asset Loading
//!
//! The stage never parses model formats itself. An [`AssetProvider`] turns a
//! path into a [`LoadedActor`] (root description plus named clips) and
//! reports completion through a one-shot [`PendingActor`] that the frame
//! driver polls.
//!
//! Two providers ship with the crate:
//! - [`MemoryAssetProvider`]: actors registered in memory, for tests and demos
//! - [`JsonAssetProvider`]: actor descriptions stored as JSON on disk

pub mod json;
pub mod memory;
pub mod provider;

pub use json::{ActorDocument, JsonAssetProvider};
pub use memory::MemoryAssetProvider;
pub use provider::{ActorRoot, AssetProvider, LoadedActor, PendingActor};
