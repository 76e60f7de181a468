use serde::{Deserialize, Serialize};

/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPath {
    Translation, // Maps to transform.position
    Rotation,    // Maps to transform.rotation
    Scale,       // Maps to transform.scale
}

/// Key of one animated property in a [`Pose`](crate::animation::Pose):
/// the skeleton node name plus the transform component it drives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyKey {
    pub node_name: String,
    pub target: TargetPath,
}

impl PropertyKey {
    #[must_use]
    pub fn new(node_name: impl Into<String>, target: TargetPath) -> Self {
        Self {
            node_name: node_name.into(),
            target,
        }
    }
}
