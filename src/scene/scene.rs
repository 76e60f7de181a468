use glam::{Quat, Vec3};
use uuid::Uuid;

use crate::assets::ActorRoot;
use crate::scene::camera::Camera;
use crate::scene::light::DirectionalLight;
use crate::scene::material::{Material, StandardMaterial, TextureRef};
use crate::settings::{EnvironmentSettings, StageSettings};

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle { radius: f32, segments: u32 },
    /// Skinned mesh owned by a loaded actor.
    Skinned { actor: String },
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub uuid: Uuid,
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

/// Cube-map environment lighting.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub faces: [TextureRef; 6],
    pub intensity: f32,
}

impl Environment {
    #[must_use]
    pub fn from_settings(settings: &EnvironmentSettings) -> Self {
        let faces = settings.faces.clone().map(|path| {
            let texture = TextureRef::new(path);
            if settings.srgb { texture.srgb() } else { texture }
        });
        Self {
            faces,
            intensity: settings.env_map_intensity,
        }
    }
}

/// Everything the renderer draws, apart from the actor's pose.
#[derive(Debug, Clone)]
pub struct Scene {
    pub environment: Environment,
    pub meshes: Vec<Mesh>,
    pub light: DirectionalLight,
    pub camera: Camera,
    pub actor: Option<ActorRoot>,
}

impl Scene {
    /// Builds the static part of the scene: environment, floor, light and
    /// camera. The actor is added once its asset has loaded.
    #[must_use]
    pub fn from_settings(settings: &StageSettings, aspect: f32) -> Self {
        let floor_settings = &settings.floor;
        let mut floor_material = StandardMaterial::new("floor");
        floor_material.map = Some(
            TextureRef::new(&floor_settings.color_texture)
                .srgb()
                .repeated(floor_settings.texture_repeat),
        );
        floor_material.normal_map = Some(
            TextureRef::new(&floor_settings.normal_texture).repeated(floor_settings.texture_repeat),
        );

        let mut floor = Mesh::new(
            "floor",
            Geometry::Circle {
                radius: floor_settings.radius,
                segments: floor_settings.segments,
            },
            Material::Standard(floor_material),
        );
        floor.rotation = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);

        let mut scene = Self {
            environment: Environment::from_settings(&settings.environment),
            meshes: vec![floor],
            light: DirectionalLight::from_settings(&settings.light),
            camera: Camera::from_settings(&settings.camera, aspect),
            actor: None,
        };
        scene.update_all_materials(settings.environment.env_map_intensity);
        scene
    }

    /// Adds one skinned mesh per material slot of the actor, scaled uniformly.
    pub fn add_actor(&mut self, root: &ActorRoot, scale: f32) {
        for slot in &root.materials {
            let mut mesh = Mesh::new(
                format!("{}/{slot}", root.name),
                Geometry::Skinned {
                    actor: root.name.clone(),
                },
                Material::Standard(StandardMaterial::new(slot.clone())),
            );
            mesh.scale = Vec3::splat(scale);
            self.meshes.push(mesh);
        }
        self.actor = Some(root.clone());
        self.update_all_materials(self.environment.intensity);
    }

    /// Applies the environment intensity to every standard material and
    /// turns on shadow casting and receiving for those meshes.
    pub fn update_all_materials(&mut self, env_map_intensity: f32) {
        self.environment.intensity = env_map_intensity;
        let mut touched = 0usize;
        for mesh in &mut self.meshes {
            if let Some(material) = mesh.material.as_standard_mut() {
                material.env_map_intensity = env_map_intensity;
                material.needs_update = true;
                mesh.cast_shadow = true;
                mesh.receive_shadow = true;
                touched += 1;
            }
        }
        log::debug!("Environment intensity {env_map_intensity:.3} applied to {touched} materials");
    }

    #[must_use]
    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.name == name)
    }
}
