//! Animation Controller
//!
//! Drives one actor's playback: a registry of named clips, exactly one active
//! clip, and a timed cross-fade whenever the active clip changes.
//!
//! ```rust,ignore
//! let mut controller = AnimationController::new();
//! controller.initialize(registry, "idle")?;
//!
//! // Debug panel / input callback
//! controller.play("walking")?;
//!
//! // Every frame, before rendering
//! controller.update(dt);
//! renderer.render(controller.pose());
//! ```

use rustc_hash::FxHashMap;

use crate::animation::mixer::{ActionHandle, AnimationMixer};
use crate::animation::pose::Pose;
use crate::animation::registry::ClipRegistry;
use crate::animation::transition::BlendTransition;
use crate::errors::{Result, StageError};

/// Cross-fade duration used when none is configured, in seconds.
pub const DEFAULT_FADE_DURATION: f32 = 1.0;

#[derive(Debug)]
pub struct AnimationController {
    mixer: AnimationMixer,
    clips: FxHashMap<String, ActionHandle>,
    active: Option<String>,
    transition: Option<BlendTransition>,
    fade_duration: f32,
    pose: Pose,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_fade_duration(DEFAULT_FADE_DURATION)
    }

    /// Creates a controller whose cross-fades last `fade_duration` seconds.
    /// Negative or non-finite values fall back to zero (instant switch).
    #[must_use]
    pub fn with_fade_duration(fade_duration: f32) -> Self {
        let fade_duration = if fade_duration.is_finite() {
            fade_duration.max(0.0)
        } else {
            0.0
        };
        Self {
            mixer: AnimationMixer::new(),
            clips: FxHashMap::default(),
            active: None,
            transition: None,
            fade_duration,
            pose: Pose::default(),
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Takes ownership of the actor's clips and starts `default_clip`.
    ///
    /// Must be called once, from the asset completion handler.
    pub fn initialize(&mut self, clips: ClipRegistry, default_clip: &str) -> Result<()> {
        if self.is_initialized() {
            return Err(StageError::Configuration(
                "animation controller is already initialized".to_string(),
            ));
        }
        if clips.is_empty() {
            return Err(StageError::Configuration(
                "clip registry is empty".to_string(),
            ));
        }
        if !clips.contains(default_clip) {
            return Err(StageError::Configuration(format!(
                "default clip '{default_clip}' is not registered (available: {})",
                clips.names().join(", ")
            )));
        }

        for (name, clip) in clips.into_inner() {
            let handle = self.mixer.clip_action(clip);
            self.clips.insert(name, handle);
        }

        let handle = self.clips[default_clip];
        if let Some(action) = self.mixer.action_mut(handle) {
            action.reset();
            action.play();
        }
        self.active = Some(default_clip.to_string());
        self.pose = self.mixer.evaluate();

        log::info!(
            "Animation controller initialized with {} clips, default '{default_clip}'",
            self.clips.len()
        );
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Makes `name` the active clip, cross-fading from the current one.
    ///
    /// Requesting the active clip again does nothing. A request issued while
    /// a transition is in flight starts a new transition from the current
    /// blended weights.
    pub fn play(&mut self, name: &str) -> Result<()> {
        let Some(&next) = self.clips.get(name) else {
            return Err(StageError::UnknownClip(name.to_string()));
        };
        let Some(previous_name) = self.active.as_deref() else {
            return Err(StageError::UnknownClip(name.to_string()));
        };
        if previous_name == name {
            return Ok(());
        }
        let previous = self.clips[previous_name];

        if let Some(action) = self.mixer.action_mut(next) {
            action.reset();
            action.play();
        }
        self.mixer.cross_fade(previous, next, self.fade_duration);

        log::debug!(
            "Cross-fading '{previous_name}' -> '{name}' over {:.2}s",
            self.fade_duration
        );
        self.transition = Some(BlendTransition::new(
            previous_name,
            name,
            self.fade_duration,
        ));
        self.active = Some(name.to_string());
        self.pose = self.mixer.evaluate();
        Ok(())
    }

    /// Advances playback and any in-flight cross-fade by `dt` seconds.
    ///
    /// Call once per frame, after computing the frame delta and before
    /// rendering.
    pub fn update(&mut self, dt: f32) {
        if !self.is_initialized() {
            return;
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("Ignoring invalid animation delta time {dt}");
            0.0
        };
        if dt == 0.0 {
            return;
        }

        self.mixer.update(dt);

        if let Some(transition) = self.transition.as_mut() {
            transition.advance(dt);
            if transition.is_finished() {
                log::debug!("Transition to '{}' complete", transition.to);
                self.transition = None;
            }
        }

        self.pose = self.mixer.evaluate();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn active_clip(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn transition(&self) -> Option<&BlendTransition> {
        self.transition.as_ref()
    }

    #[must_use]
    pub fn fade_duration(&self) -> f32 {
        self.fade_duration
    }

    /// Registered clip names in sorted order.
    #[must_use]
    pub fn clip_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.clips.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Blend weight `name` currently contributes to the pose.
    #[must_use]
    pub fn clip_weight(&self, name: &str) -> Option<f32> {
        self.action_for(name).map(|a| a.effective_weight())
    }

    /// Playback position of `name` in seconds.
    #[must_use]
    pub fn clip_time(&self, name: &str) -> Option<f32> {
        self.action_for(name).map(|a| a.time)
    }

    #[must_use]
    pub fn is_clip_running(&self, name: &str) -> bool {
        self.action_for(name).is_some_and(|a| a.is_running())
    }

    /// Blended pose as of the last `update` or `play`.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    #[must_use]
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    fn action_for(&self, name: &str) -> Option<&crate::animation::AnimationAction> {
        self.clips
            .get(name)
            .and_then(|&handle| self.mixer.action(handle))
    }
}
