use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};

use crate::animation::action::{AnimationAction, FadeOutcome};
use crate::animation::binding::PropertyKey;
use crate::animation::clip::AnimationClip;
use crate::animation::pose::{Pose, PoseBlender};

new_key_type! {
    pub struct ActionHandle;
}

/// Owns the actions of one actor, advances them and blends their output.
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: SlotMap<ActionHandle, AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action and returns its handle. Every call creates a new
    /// action, even for a clip that already has one.
    pub fn add_action(&mut self, action: AnimationAction) -> ActionHandle {
        self.actions.insert(action)
    }

    /// Shorthand for [`add_action`](Self::add_action) with a fresh action.
    pub fn clip_action(&mut self, clip: Arc<AnimationClip>) -> ActionHandle {
        self.add_action(AnimationAction::new(clip))
    }

    #[must_use]
    pub fn action(&self, handle: ActionHandle) -> Option<&AnimationAction> {
        self.actions.get(handle)
    }

    pub fn action_mut(&mut self, handle: ActionHandle) -> Option<&mut AnimationAction> {
        self.actions.get_mut(handle)
    }

    pub fn actions(&self) -> impl Iterator<Item = (ActionHandle, &AnimationAction)> {
        self.actions.iter()
    }

    /// Fades `to` in and `from` out over the same `duration`.
    ///
    /// `from` fades from its current weight factor, so a cross-fade issued
    /// mid-transition continues from the blended state.
    pub fn cross_fade(&mut self, from: ActionHandle, to: ActionHandle, duration: f32) {
        if from != to
            && let Some(action) = self.actions.get_mut(from)
        {
            action.fade_out(duration);
        }
        if let Some(action) = self.actions.get_mut(to) {
            action.fade_in(duration);
        }
    }

    /// Advances every running action and its fade by `dt`.
    pub fn update(&mut self, dt: f32) {
        for action in self.actions.values_mut() {
            action.update(dt);
            if action.update_fade(dt) == FadeOutcome::Stopped {
                log::debug!("Animation '{}' faded out", action.name());
            }
        }
    }

    /// Blends the current sample of every contributing action.
    pub fn evaluate(&mut self) -> Pose {
        let mut blender = PoseBlender::default();

        for action in self.actions.values_mut() {
            let weight = action.effective_weight();
            if weight <= 0.0 {
                continue;
            }

            let clip = Arc::clone(action.clip());
            for (index, track) in clip.tracks.iter().enumerate() {
                if let Some(value) = action.sample_track(index) {
                    let key = PropertyKey::new(track.meta.node_name.clone(), track.meta.target);
                    blender.accumulate(key, value, weight);
                }
            }
        }

        blender.finish()
    }
}
