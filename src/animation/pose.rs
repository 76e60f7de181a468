use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::action::TrackValue;
use crate::animation::binding::{PropertyKey, TargetPath};

/// Weighted blend of every running action, keyed by animated property.
///
/// The renderer applies these values to the actor's skeleton nodes.
#[derive(Debug, Clone, Default)]
pub struct Pose {
    values: FxHashMap<PropertyKey, TrackValue>,
}

impl Pose {
    #[must_use]
    pub fn get(&self, node_name: &str, target: TargetPath) -> Option<TrackValue> {
        self.values
            .get(&PropertyKey::new(node_name, target))
            .copied()
    }

    #[must_use]
    pub fn translation(&self, node_name: &str) -> Option<Vec3> {
        match self.get(node_name, TargetPath::Translation)? {
            TrackValue::Vector3(v) => Some(v),
            TrackValue::Quaternion(_) => None,
        }
    }

    #[must_use]
    pub fn rotation(&self, node_name: &str) -> Option<Quat> {
        match self.get(node_name, TargetPath::Rotation)? {
            TrackValue::Quaternion(q) => Some(q),
            TrackValue::Vector3(_) => None,
        }
    }

    #[must_use]
    pub fn scale(&self, node_name: &str) -> Option<Vec3> {
        match self.get(node_name, TargetPath::Scale)? {
            TrackValue::Vector3(v) => Some(v),
            TrackValue::Quaternion(_) => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &TrackValue)> {
        self.values.iter()
    }
}

#[derive(Debug, Clone, Copy)]
enum Accumulator {
    /// Weighted sum, normalized on finish.
    Vector(Vec3),
    /// Progressive slerp, already normalized.
    Rotation(Quat),
}

/// Accumulates weighted samples into a [`Pose`].
#[derive(Debug, Default)]
pub(crate) struct PoseBlender {
    entries: FxHashMap<PropertyKey, (Accumulator, f32)>,
}

impl PoseBlender {
    pub(crate) fn accumulate(&mut self, key: PropertyKey, value: TrackValue, weight: f32) {
        if weight <= 0.0 {
            return;
        }

        match self.entries.get_mut(&key) {
            None => {
                let acc = match value {
                    TrackValue::Vector3(v) => Accumulator::Vector(v * weight),
                    TrackValue::Quaternion(q) => Accumulator::Rotation(q),
                };
                self.entries.insert(key, (acc, weight));
            }
            Some((acc, total)) => {
                match (acc, value) {
                    (Accumulator::Vector(sum), TrackValue::Vector3(v)) => *sum += v * weight,
                    (Accumulator::Rotation(q_acc), TrackValue::Quaternion(q)) => {
                        let t = weight / (*total + weight);
                        *q_acc = q_acc.slerp(q, t);
                    }
                    _ => {
                        log::warn!(
                            "Mismatched track value types for node '{}', sample ignored",
                            key.node_name
                        );
                        return;
                    }
                }
                *total += weight;
            }
        }
    }

    pub(crate) fn finish(self) -> Pose {
        let values = self
            .entries
            .into_iter()
            .map(|(key, (acc, total))| {
                let value = match acc {
                    Accumulator::Vector(sum) => TrackValue::Vector3(sum / total),
                    Accumulator::Rotation(q) => TrackValue::Quaternion(q.normalize()),
                };
                (key, value)
            })
            .collect();
        Pose { values }
    }
}
