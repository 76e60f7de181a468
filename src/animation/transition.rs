/// An in-flight cross-fade between two clips of the controller.
///
/// Weights are linear: `from` decays 1 → 0 while `to` rises 0 → 1 over
/// `duration`. The transition is dropped once `elapsed >= duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendTransition {
    pub from: String,
    pub to: String,
    pub elapsed: f32,
    pub duration: f32,
}

impl BlendTransition {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, duration: f32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            elapsed: 0.0,
            duration,
        }
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn from_weight(&self) -> f32 {
        1.0 - self.progress()
    }

    #[must_use]
    pub fn to_weight(&self) -> f32 {
        self.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}
