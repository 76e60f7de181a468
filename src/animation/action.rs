use std::sync::Arc;

use glam::{Quat, Vec3};

use crate::animation::{
    clip::{AnimationClip, TrackData},
    tracks::KeyframeCursor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// A scheduled linear change of an action's weight factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightFade {
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub duration: f32,
}

impl WeightFade {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Normalized progress in `[0, 1]`. Zero-length fades are complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn factor(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// What happened to an action's fade during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeOutcome {
    /// No fade, or the fade is still in progress.
    Unchanged,
    /// A fade-in (or partial fade) reached its target weight.
    Settled,
    /// A fade-out reached zero and the action was stopped.
    Stopped,
}

/// Playback state of one clip.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    running: bool,
    fade: Option<WeightFade>,

    pub(crate) track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: true,
            running: false,
            fade: None,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.clip.name
    }

    /// Schedules the action for playback. Does not touch time or weight.
    pub fn play(&mut self) {
        self.running = true;
        self.enabled = true;
    }

    /// Removes the action from playback and cancels any fade.
    pub fn stop(&mut self) {
        self.running = false;
        self.fade = None;
    }

    /// Rewinds to time zero, cancels fading and re-enables the action.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
        self.fade = None;
        self.track_cursors.fill(KeyframeCursor::default());
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running && self.enabled
    }

    #[must_use]
    pub fn fade(&self) -> Option<&WeightFade> {
        self.fade.as_ref()
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Current fade factor, `1.0` when no fade is scheduled.
    #[must_use]
    pub fn fade_factor(&self) -> f32 {
        self.fade.map_or(1.0, |fade| fade.factor())
    }

    /// Weight this action contributes to the blended pose right now.
    #[must_use]
    pub fn effective_weight(&self) -> f32 {
        if self.is_running() {
            self.weight * self.fade_factor()
        } else {
            0.0
        }
    }

    /// Ramps the weight factor from zero to one over `duration`.
    pub fn fade_in(&mut self, duration: f32) {
        self.fade = Some(WeightFade::new(0.0, 1.0, duration));
    }

    /// Ramps the weight factor from its current value to zero over `duration`.
    pub fn fade_out(&mut self, duration: f32) {
        let from = if self.is_running() { self.fade_factor() } else { 0.0 };
        self.fade = Some(WeightFade::new(from, 0.0, duration));
    }

    /// Advances the scheduled fade by `dt`.
    pub fn update_fade(&mut self, dt: f32) -> FadeOutcome {
        let Some(fade) = self.fade.as_mut() else {
            return FadeOutcome::Unchanged;
        };
        if !self.running {
            return FadeOutcome::Unchanged;
        }

        fade.elapsed += dt;
        if !fade.is_finished() {
            return FadeOutcome::Unchanged;
        }

        let target = fade.to;
        self.fade = None;
        if target <= 0.0 {
            self.stop();
            FadeOutcome::Stopped
        } else {
            FadeOutcome::Settled
        }
    }

    /// Core logic: advance time.
    pub fn update(&mut self, dt: f32) {
        if self.paused || !self.is_running() {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Reverse playback wraps to the end.
                    self.time = duration + (self.time % duration);
                }
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let mut t = self.time % double_duration;
                if t < 0.0 {
                    t += double_duration;
                }
                if t > duration {
                    t = double_duration - t;
                }
                self.time = t;
            }
        }
    }

    /// Samples the track at `track_index` at the current time.
    pub fn sample_track(&mut self, track_index: usize) -> Option<TrackValue> {
        let track = self.clip.tracks.get(track_index)?;
        let cursor = self.track_cursors.get_mut(track_index)?;

        match &track.data {
            TrackData::Vector3(t) => t.sample_with_cursor(self.time, cursor).map(TrackValue::Vector3),
            TrackData::Quaternion(t) => {
                t.sample_with_cursor(self.time, cursor).map(TrackValue::Quaternion)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Vector3(Vec3),
    Quaternion(Quat),
}
