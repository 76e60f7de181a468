use glam::Vec3;
use uuid::Uuid;

use crate::settings::LightSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    /// Far plane of the shadow camera.
    pub camera_far: f32,
    pub normal_bias: f32,
    pub map_size: u32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            camera_far: 15.0,
            normal_bias: 0.05,
            map_size: 1024,
        }
    }
}

/// The scene's single directional light.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadows: bool,
    pub shadow: ShadowConfig,
}

impl DirectionalLight {
    #[must_use]
    pub fn new(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            position: Vec3::Y,
            cast_shadows: false,
            shadow: ShadowConfig::default(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &LightSettings) -> Self {
        Self {
            position: settings.position,
            cast_shadows: settings.cast_shadow,
            shadow: ShadowConfig {
                camera_far: settings.shadow.camera_far,
                normal_bias: settings.shadow.normal_bias,
                map_size: settings.shadow.map_size,
            },
            ..Self::new(settings.color, settings.intensity)
        }
    }

    /// Direction the light travels, from its position towards the origin.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}
