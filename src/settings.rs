//! Stage Settings
//!
//! Every tunable of the fox scene in one serde-friendly tree. Defaults
//! reproduce the reference scene; a JSON file may override any subset.
//!
//! ```rust,ignore
//! use fox_stage::settings::StageSettings;
//!
//! let settings = StageSettings::from_json_str(r#"{ "light": { "intensity": 2.5 } }"#)?;
//! assert_eq!(settings.camera.fov, 35.0);
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StageSettings {
    pub environment: EnvironmentSettings,
    pub floor: FloorSettings,
    pub actor: ActorSettings,
    pub light: LightSettings,
    pub camera: CameraSettings,
    pub renderer: RendererSettings,
}

impl StageSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded stage settings from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Cube-map environment shared by every standard material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Faces in `+x, -x, +y, -y, +z, -z` order.
    pub faces: [String; 6],
    pub srgb: bool,
    pub env_map_intensity: f32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        let face = |name: &str| format!("static/textures/environmentMap/{name}.jpg");
        Self {
            faces: [
                face("px"),
                face("nx"),
                face("py"),
                face("ny"),
                face("pz"),
                face("nz"),
            ],
            srgb: true,
            env_map_intensity: 0.4,
        }
    }
}

// ---------------------------------------------------------------------------
// Floor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorSettings {
    pub radius: f32,
    pub segments: u32,
    pub color_texture: String,
    pub normal_texture: String,
    /// UV repeat on both axes, with repeat wrapping.
    pub texture_repeat: f32,
}

impl Default for FloorSettings {
    fn default() -> Self {
        Self {
            radius: 5.0,
            segments: 64,
            color_texture: "textures/dirt/color.jpg".to_string(),
            normal_texture: "textures/dirt/normal.jpg".to_string(),
            texture_repeat: 1.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorSettings {
    pub model_path: String,
    pub scale: f32,
    /// Names bound to the asset's clips when it only exposes them in order.
    pub clip_names: Vec<String>,
    pub default_clip: String,
    pub fade_duration: f32,
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self {
            model_path: "static/models/Fox/glTF/Fox.gltf".to_string(),
            scale: 0.02,
            clip_names: vec![
                "idle".to_string(),
                "walking".to_string(),
                "running".to_string(),
            ],
            default_clip: "idle".to_string(),
            fade_duration: crate::animation::DEFAULT_FADE_DURATION,
        }
    }
}

// ---------------------------------------------------------------------------
// Light
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    pub camera_far: f32,
    pub map_size: u32,
    pub normal_bias: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            camera_far: 15.0,
            map_size: 1024,
            normal_bias: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
    pub shadow: ShadowSettings,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 4.0,
            position: Vec3::new(3.5, 2.0, -1.25),
            cast_shadow: true,
            shadow: ShadowSettings::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 35.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(6.0, 4.0, 8.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMapping {
    None,
    Linear,
    Reinhard,
    Cineon,
    AcesFilmic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowFilter {
    Basic,
    Pcf,
    PcfSoft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub antialias: bool,
    pub physically_correct_lights: bool,
    pub srgb_output: bool,
    pub tone_mapping: ToneMapping,
    pub tone_mapping_exposure: f32,
    pub shadows_enabled: bool,
    pub shadow_filter: ShadowFilter,
    /// `#rrggbb`
    pub clear_color: String,
    pub max_pixel_ratio: f32,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            antialias: true,
            physically_correct_lights: true,
            srgb_output: true,
            tone_mapping: ToneMapping::Cineon,
            tone_mapping_exposure: 1.75,
            shadows_enabled: true,
            shadow_filter: ShadowFilter::PcfSoft,
            clear_color: "#211d20".to_string(),
            max_pixel_ratio: 2.0,
        }
    }
}

impl RendererSettings {
    /// Clear color as RGB in `[0, 1]`, or `None` if malformed.
    #[must_use]
    pub fn clear_color_rgb(&self) -> Option<Vec3> {
        parse_hex_color(&self.clear_color)
    }
}

/// Parses `#rrggbb` into RGB components in `[0, 1]`.
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Vec3> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
