use crate::camera::{Camera, CameraPreset, OrbitRig};
use crate::constants::PROP_SEED;
use crate::environment::{Cast, Environment, Setting};
use crate::error::StoryError;
use crate::presenter::{Panel, Presenter};
use smallvec::SmallVec;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Title,
    Story(u8),
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::Title => write!(f, "title"),
            SceneKind::Story(n) => write!(f, "story-{n}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneState {
    Inactive,
    Active,
}

/// One panel a scene shows, and how long after activation it appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelReveal {
    pub panel: Panel,
    pub delay: Duration,
}

impl PanelReveal {
    pub const fn now(panel: Panel) -> Self {
        Self {
            panel,
            delay: Duration::ZERO,
        }
    }

    pub const fn after(panel: Panel, delay: Duration) -> Self {
        Self { panel, delay }
    }
}

/// Which UI a scene owns while active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiDescriptor {
    pub panels: SmallVec<[PanelReveal; 2]>,
}

impl UiDescriptor {
    pub fn with(panels: &[PanelReveal]) -> Self {
        Self {
            panels: SmallVec::from_slice(panels),
        }
    }
}

/// Static description of one scene, as authored.
#[derive(Clone, Debug)]
pub struct SceneSpec {
    pub kind: SceneKind,
    /// Required; a story without a camera for some scene can't be shown.
    pub camera: Option<CameraPreset>,
    pub setting: Setting,
    pub cast: Cast,
    pub ui: UiDescriptor,
}

/// Transient state of the current activation. Reset on every activate.
#[derive(Clone, Debug, Default)]
pub struct Visit {
    pub elapsed: Duration,
    pending: SmallVec<[PanelReveal; 2]>,
    shown: SmallVec<[Panel; 2]>,
}

impl Visit {
    pub fn pending_reveals(&self) -> &[PanelReveal] {
        &self.pending
    }

    /// Panels this visit has put on screen and not withdrawn.
    pub fn shown_panels(&self) -> &[Panel] {
        &self.shown
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    index: usize,
    kind: SceneKind,
    state: SceneState,
    preset: CameraPreset,
    pub camera: Camera,
    pub orbit: OrbitRig,
    pub environment: Environment,
    ui: UiDescriptor,
    visit: Visit,
}

impl Scene {
    pub fn from_spec(index: usize, spec: SceneSpec) -> Result<Self, StoryError> {
        let preset = spec.camera.ok_or(StoryError::MissingCamera { index })?;
        let seed = PROP_SEED ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Ok(Self {
            index,
            kind: spec.kind,
            state: SceneState::Inactive,
            preset,
            camera: Camera::from_preset(&preset),
            orbit: OrbitRig::default(),
            environment: Environment::build(spec.setting, spec.cast, seed),
            ui: spec.ui,
            visit: Visit::default(),
        })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
    #[inline]
    pub fn kind(&self) -> SceneKind {
        self.kind
    }
    #[inline]
    pub fn state(&self) -> SceneState {
        self.state
    }
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SceneState::Active
    }
    pub fn ui(&self) -> &UiDescriptor {
        &self.ui
    }
    pub fn visit(&self) -> &Visit {
        &self.visit
    }

    pub fn activate(&mut self, presenter: &mut dyn Presenter) {
        if self.is_active() {
            return;
        }
        self.state = SceneState::Active;
        self.visit = Visit::default();

        // Look-at may have been orbited away during the last visit.
        let aspect = self.camera.aspect;
        self.camera = Camera::from_preset(&self.preset);
        self.camera.aspect = aspect;
        self.orbit.reset();

        for reveal in &self.ui.panels {
            if reveal.delay.is_zero() {
                presenter.show_panel(reveal.panel);
                self.visit.shown.push(reveal.panel);
            } else {
                self.visit.pending.push(*reveal);
            }
        }
        log::info!("[scene] {} activated (index {})", self.kind, self.index);
        presenter.scene_activated(self);
    }

    /// Hides this scene's panels. 3D state stays for the next visit.
    pub fn deactivate(&mut self, presenter: &mut dyn Presenter) {
        if !self.is_active() {
            return;
        }
        self.state = SceneState::Inactive;
        self.visit.pending.clear();
        self.visit.shown.clear();
        for reveal in &self.ui.panels {
            presenter.hide_panel(reveal.panel);
        }
        log::info!("[scene] {} deactivated (index {})", self.kind, self.index);
        presenter.scene_deactivated(self);
    }

    pub fn update(&mut self, dt: Duration, presenter: &mut dyn Presenter) {
        if !self.is_active() {
            return;
        }
        self.visit.elapsed += dt;
        let elapsed = self.visit.elapsed;
        let shown = &mut self.visit.shown;
        self.visit.pending.retain(|reveal| {
            if reveal.delay <= elapsed {
                presenter.show_panel(reveal.panel);
                shown.push(reveal.panel);
                false
            } else {
                true
            }
        });
        let dt_sec = dt.as_secs_f32();
        self.environment.update(dt_sec);
        self.orbit.apply(&mut self.camera, dt_sec);
    }

    /// Drop delayed reveals and forget what is on screen, without leaving
    /// the scene. The caller is responsible for hiding the panels.
    pub fn withdraw_panels(&mut self) {
        self.visit.pending.clear();
        self.visit.shown.clear();
    }
}
