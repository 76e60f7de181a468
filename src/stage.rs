//! Render Loop Driver
//!
//! [`Stage`] owns everything the fox scene needs between frames: settings,
//! scene, animation controller, debug panel, viewport and the pending actor
//! load. Each display frame the host calls [`Stage::advance`] (or
//! [`Stage::tick`] with its own delta), which
//!
//! 1. delivers a finished actor load, initializing the controller once,
//! 2. advances the controller by the frame delta,
//! 3. issues exactly one [`FrameRenderer::render`] call.
//!
//! Panel interactions arrive out-of-band through [`Stage::press`] and
//! [`Stage::set_number`] on the same thread.

use crate::animation::{AnimationController, ClipRegistry, Pose};
use crate::assets::{AssetProvider, LoadedActor, PendingActor};
use crate::debug::{DebugPanel, PanelEvent};
use crate::errors::{Result, StageError};
use crate::scene::{Scene, Viewport};
use crate::settings::{RendererSettings, StageSettings};
use crate::utils::Timer;

pub const ENV_MAP_INTENSITY: &str = "envMapIntensity";
pub const LIGHT_INTENSITY: &str = "lightIntensity";
pub const LIGHT_X: &str = "lightX";
pub const LIGHT_Y: &str = "lightY";
pub const LIGHT_Z: &str = "lightZ";

/// Panel folder holding the actor's clip buttons.
pub const ACTOR_FOLDER: &str = "fox";

const PLAY_PREFIX: &str = "play_";

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub scene: &'a Scene,
    pub pose: &'a Pose,
    pub viewport: &'a Viewport,
    pub settings: &'a RendererSettings,
    pub elapsed: f32,
    pub frame: u64,
}

/// Backend that draws a frame. GPU work lives behind this trait.
pub trait FrameRenderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Renderer that draws nothing; useful for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl FrameRenderer for NullRenderer {
    fn render(&mut self, _frame: &FrameView<'_>) {}
}

pub struct Stage<R: FrameRenderer> {
    settings: StageSettings,
    scene: Scene,
    controller: AnimationController,
    panel: DebugPanel,
    viewport: Viewport,
    timer: Timer,
    pending: Option<PendingActor>,
    renderer: R,
    elapsed: f32,
    frame: u64,
}

impl<R: FrameRenderer> Stage<R> {
    /// Builds the static scene and the parameter sliders.
    pub fn new(settings: StageSettings, renderer: R, width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        let viewport = Viewport::new(
            width,
            height,
            device_pixel_ratio,
            settings.renderer.max_pixel_ratio,
        );
        let scene = Scene::from_settings(&settings, viewport.aspect());
        let controller = AnimationController::with_fade_duration(settings.actor.fade_duration);

        let mut panel = DebugPanel::new();
        panel
            .add_number(
                ENV_MAP_INTENSITY,
                settings.environment.env_map_intensity,
                0.0,
                4.0,
                0.001,
            )
            .add_number(LIGHT_INTENSITY, settings.light.intensity, 0.0, 10.0, 0.001)
            .add_number(LIGHT_X, settings.light.position.x, -5.0, 5.0, 0.001)
            .add_number(LIGHT_Y, settings.light.position.y, -5.0, 5.0, 0.001)
            .add_number(LIGHT_Z, settings.light.position.z, -5.0, 5.0, 0.001);

        let mut stage = Self {
            settings,
            scene,
            controller,
            panel,
            viewport,
            timer: Timer::new(),
            pending: None,
            renderer,
            elapsed: 0.0,
            frame: 0,
        };
        stage.sync_scene_to_panel();
        stage
    }

    /// Writes the panel's constrained slider values into the scene, so the
    /// scene never holds a value its slider cannot show.
    fn sync_scene_to_panel(&mut self) {
        for name in [ENV_MAP_INTENSITY, LIGHT_INTENSITY, LIGHT_X, LIGHT_Y, LIGHT_Z] {
            let Some(value) = self.panel.number(name) else {
                continue;
            };
            if self.apply_number(name, value).is_err() {
                log::warn!("Slider '{name}' has no scene binding");
            }
        }
    }

    // ========================================================================
    // Asset Loading
    // ========================================================================

    /// Starts loading the actor configured in the settings.
    pub fn load_actor(&mut self, provider: &dyn AssetProvider) {
        if self.pending.is_some() || self.controller.is_initialized() {
            log::warn!("Actor load already requested, ignoring");
            return;
        }
        let path = self.settings.actor.model_path.clone();
        log::info!("Loading actor from {path}");
        self.pending = Some(provider.load(&path));
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn poll_pending(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        let path = pending.path().to_string();
        self.pending = None;

        match result.and_then(|actor| self.install_actor(actor)) {
            Ok(()) => log::info!("Actor '{path}' ready"),
            Err(err) => log::error!("Actor '{path}' unavailable: {err}"),
        }
    }

    /// Completion handler for the actor load: registers clips, starts the
    /// default clip, adds the meshes and the clip buttons.
    fn install_actor(&mut self, actor: LoadedActor) -> Result<()> {
        let registry = self.clip_registry(actor.clips)?;
        self.controller
            .initialize(registry, &self.settings.actor.default_clip)?;

        self.scene.add_actor(&actor.root, self.settings.actor.scale);

        let names: Vec<String> = self
            .controller
            .clip_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let ordered = self
            .settings
            .actor
            .clip_names
            .iter()
            .filter(|n| names.contains(n))
            .chain(names.iter().filter(|n| !self.settings.actor.clip_names.contains(n)));
        for name in ordered {
            self.panel
                .add_trigger(Some(ACTOR_FOLDER), &format!("{PLAY_PREFIX}{name}"));
        }
        Ok(())
    }

    /// Prefers the asset's own clip names; falls back to binding the
    /// configured names by export order.
    fn clip_registry(&self, clips: Vec<crate::animation::AnimationClip>) -> Result<ClipRegistry> {
        let wanted = &self.settings.actor.clip_names;
        let named = wanted
            .iter()
            .all(|name| clips.iter().any(|clip| &clip.name == name));

        if named {
            Ok(ClipRegistry::from_clips(clips))
        } else {
            log::debug!("Asset clips are unnamed, binding {wanted:?} by position");
            let names: Vec<&str> = wanted.iter().map(String::as_str).collect();
            ClipRegistry::from_ordered(clips, &names)
        }
    }

    // ========================================================================
    // Frame Loop
    // ========================================================================

    /// Measures the frame delta with the internal timer and runs [`tick`](Self::tick).
    pub fn advance(&mut self) {
        self.timer.tick();
        let dt = self.timer.dt_seconds();
        self.tick(dt);
    }

    /// Runs one frame with an explicit delta in seconds.
    pub fn tick(&mut self, dt: f32) {
        self.poll_pending();

        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.controller.update(dt);

        let view = FrameView {
            scene: &self.scene,
            pose: self.controller.pose(),
            viewport: &self.viewport,
            settings: &self.settings.renderer,
            elapsed: self.elapsed,
            frame: self.frame,
        };
        self.renderer.render(&view);
        self.frame += 1;
    }

    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f32) {
        self.viewport.resize(width, height, device_pixel_ratio);
        self.scene.camera.set_aspect(self.viewport.aspect());
    }

    // ========================================================================
    // Debug Panel
    // ========================================================================

    /// Presses a panel button and applies it.
    pub fn press(&mut self, name: &str) -> Result<()> {
        let event = self.panel.press(name)?;
        self.handle_event(event)
    }

    /// Moves a panel slider and applies the constrained value.
    pub fn set_number(&mut self, name: &str, value: f32) -> Result<()> {
        let event = self.panel.set_number(name, value)?;
        self.handle_event(event)
    }

    pub fn handle_event(&mut self, event: PanelEvent) -> Result<()> {
        match event {
            PanelEvent::Triggered { name } => match name.strip_prefix(PLAY_PREFIX) {
                Some(clip) => self.controller.play(clip),
                None => Err(StageError::UnknownControl(name.clone())),
            },
            PanelEvent::Changed { name, value } => self.apply_number(&name, value),
        }
    }

    fn apply_number(&mut self, name: &str, value: f32) -> Result<()> {
        match name {
            ENV_MAP_INTENSITY => self.scene.update_all_materials(value),
            LIGHT_INTENSITY => self.scene.light.intensity = value,
            LIGHT_X => self.scene.light.position.x = value,
            LIGHT_Y => self.scene.light.position.y = value,
            LIGHT_Z => self.scene.light.position.z = value,
            _ => return Err(StageError::UnknownControl(name.to_string())),
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn settings(&self) -> &StageSettings {
        &self.settings
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut AnimationController {
        &mut self.controller
    }

    #[must_use]
    pub fn panel(&self) -> &DebugPanel {
        &self.panel
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
