use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapping {
    ClampToEdge,
    Repeat,
}

/// Reference to an image the renderer loads lazily.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRef {
    pub path: String,
    pub srgb: bool,
    pub repeat: Vec2,
    pub wrap: Wrapping,
}

impl TextureRef {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            srgb: false,
            repeat: Vec2::ONE,
            wrap: Wrapping::ClampToEdge,
        }
    }

    #[must_use]
    pub fn srgb(mut self) -> Self {
        self.srgb = true;
        self
    }

    /// Tiles the texture `times` on both axes with repeat wrapping.
    #[must_use]
    pub fn repeated(mut self, times: f32) -> Self {
        self.repeat = Vec2::splat(times);
        self.wrap = Wrapping::Repeat;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    pub name: String,
    pub map: Option<TextureRef>,
    pub normal_map: Option<TextureRef>,
    pub env_map_intensity: f32,
    /// Set when a property changed that requires the renderer to rebuild
    /// the material's pipeline state.
    pub needs_update: bool,
}

impl StandardMaterial {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            map: None,
            normal_map: None,
            env_map_intensity: 1.0,
            needs_update: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Standard(StandardMaterial),
}

impl Material {
    #[must_use]
    pub fn as_standard_mut(&mut self) -> Option<&mut StandardMaterial> {
        match self {
            Material::Standard(m) => Some(m),
        }
    }

    #[must_use]
    pub fn as_standard(&self) -> Option<&StandardMaterial> {
        match self {
            Material::Standard(m) => Some(m),
        }
    }
}
