use crate::errors::{Result, StageError};

/// A bounded numeric slider.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberControl {
    pub name: String,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl NumberControl {
    /// Clamps `value` into range and snaps it to the step grid anchored at
    /// `min`. Non-finite input keeps the current value.
    #[must_use]
    pub fn constrain(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.value;
        }
        let (lo, hi) = (self.min.min(self.max), self.max.max(self.min));
        let clamped = value.max(lo).min(hi);
        if !self.step.is_finite() || self.step <= 0.0 {
            return clamped;
        }
        let snapped = lo + ((clamped - lo) / self.step).round() * self.step;
        snapped.max(lo).min(hi)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Number(NumberControl),
    /// Zero-argument button.
    Trigger { name: String },
}

impl Control {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Control::Number(n) => &n.name,
            Control::Trigger { name } => name,
        }
    }
}

/// What a user interaction produced. The frame driver dispatches these.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Changed { name: String, value: f32 },
    Triggered { name: String },
}

#[derive(Debug, Clone)]
struct Entry {
    folder: Option<String>,
    control: Control,
}

/// Named controls, optionally grouped into folders.
#[derive(Debug, Clone, Default)]
pub struct DebugPanel {
    entries: Vec<Entry>,
}

impl DebugPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slider at the root level. The initial value is constrained too.
    ///
    /// Sliders with a non-finite or inverted range are not registered.
    pub fn add_number(&mut self, name: &str, value: f32, min: f32, max: f32, step: f32) -> &mut Self {
        if !min.is_finite() || !max.is_finite() || min > max {
            log::warn!("Debug slider '{name}' has invalid range [{min}, {max}], skipping");
            return self;
        }
        let mut control = NumberControl {
            name: name.to_string(),
            value: min,
            min,
            max,
            step,
        };
        control.value = control.constrain(value);
        self.push(None, Control::Number(control));
        self
    }

    pub fn add_trigger(&mut self, folder: Option<&str>, name: &str) -> &mut Self {
        self.push(
            folder.map(str::to_string),
            Control::Trigger {
                name: name.to_string(),
            },
        );
        self
    }

    fn push(&mut self, folder: Option<String>, control: Control) {
        if self.find(control.name()).is_some() {
            log::warn!("Debug control '{}' registered twice, keeping the first", control.name());
            return;
        }
        self.entries.push(Entry { folder, control });
    }

    fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.control.name() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.control.name() == name)
    }

    /// Simulates the user dragging a slider.
    pub fn set_number(&mut self, name: &str, value: f32) -> Result<PanelEvent> {
        match self.find_mut(name).map(|e| &mut e.control) {
            Some(Control::Number(control)) => {
                if !value.is_finite() {
                    log::warn!("Ignoring non-finite value {value} for '{name}'");
                }
                control.value = control.constrain(value);
                Ok(PanelEvent::Changed {
                    name: control.name.clone(),
                    value: control.value,
                })
            }
            _ => Err(StageError::UnknownControl(name.to_string())),
        }
    }

    /// Simulates the user pressing a button.
    pub fn press(&mut self, name: &str) -> Result<PanelEvent> {
        match self.find(name).map(|e| &e.control) {
            Some(Control::Trigger { name }) => Ok(PanelEvent::Triggered { name: name.clone() }),
            _ => Err(StageError::UnknownControl(name.to_string())),
        }
    }

    #[must_use]
    pub fn number(&self, name: &str) -> Option<f32> {
        match self.find(name).map(|e| &e.control) {
            Some(Control::Number(control)) => Some(control.value),
            _ => None,
        }
    }

    #[must_use]
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.find(name).map(|e| &e.control)
    }

    /// Names of the controls inside `folder`, in insertion order.
    #[must_use]
    pub fn folder(&self, folder: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.folder.as_deref() == Some(folder))
            .map(|e| e.control.name())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
