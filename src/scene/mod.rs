//! Scene Description
//!
//! The static content around the actor: environment, floor, light, camera
//! and viewport. Drawing it is the renderer's job; this module only keeps
//! the state the debug panel and resize handling mutate.

pub mod camera;
pub mod light;
pub mod material;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod viewport;

pub use camera::Camera;
pub use light::{DirectionalLight, ShadowConfig};
pub use material::{Material, StandardMaterial, TextureRef, Wrapping};
pub use scene::{Environment, Geometry, Mesh, Scene};
pub use viewport::Viewport;
