//! Scene sequencer: one active scene at a time, swapped behind a white fade.
//!
//! Navigation requests made while a transition is in flight (from the start
//! of the cover until the reveal completes) are ignored, as are requests
//! before [`Sequencer::start`]. The active index only changes at the
//! covered midpoint, where the old scene is deactivated strictly before the
//! new one is activated.

use crate::error::StoryError;
use crate::fade::{Fade, FadeEvent, FadeTiming};
use crate::presenter::{Panel, Presenter};
use crate::routes::{Route, RouteTable, Trigger};
use crate::scene::{Scene, SceneSpec};
use std::time::Duration;

/// Everything needed to build a story.
#[derive(Clone, Debug)]
pub struct StoryConfig {
    pub scenes: Vec<SceneSpec>,
    pub routes: RouteTable,
    pub timing: FadeTiming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    NotStarted,
    InFlight,
    OutOfRange,
    Blocked,
    NoRoute,
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Started { from: usize, to: usize },
    Ignored(IgnoreReason),
}

impl Navigation {
    pub fn is_started(&self) -> bool {
        matches!(self, Navigation::Started { .. })
    }
}

pub struct Sequencer<P: Presenter> {
    scenes: Vec<Scene>,
    current: usize,
    routes: RouteTable,
    fade: Fade,
    target: Option<usize>,
    running: bool,
    presenter: P,
}

impl<P: Presenter> Sequencer<P> {
    pub fn new(config: StoryConfig, presenter: P) -> Result<Self, StoryError> {
        let StoryConfig {
            scenes,
            routes,
            timing,
        } = config;
        if scenes.is_empty() {
            return Err(StoryError::EmptyStory);
        }
        routes.validate(scenes.len())?;
        let scenes = scenes
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Scene::from_spec(index, spec))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[sequencer] {} scenes, {} routes, restart -> {}",
            scenes.len(),
            routes.len(),
            routes.restart_index()
        );
        Ok(Self {
            scenes,
            current: 0,
            routes,
            fade: Fade::new(timing),
            target: None,
            running: false,
            presenter,
        })
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }
    #[inline]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }
    pub fn active_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.current).filter(|s| s.is_active())
    }
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        !self.fade.is_idle()
    }
    pub fn fade(&self) -> &Fade {
        &self.fade
    }
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Activate the first scene. A second call while running does nothing
    /// and returns false.
    pub fn start(&mut self) -> bool {
        if self.running {
            log::warn!("[sequencer] start() while already running");
            return false;
        }
        self.running = true;
        self.current = 0;
        self.scenes[0].activate(&mut self.presenter);
        true
    }

    /// Deactivate whatever is showing. Any transition in flight is dropped
    /// and the veil is taken down.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        if self.is_transitioning() {
            self.fade = Fade::new(self.fade.timing());
            self.target = None;
            self.presenter.uncover();
        }
        self.scenes[self.current].deactivate(&mut self.presenter);
        self.running = false;
    }

    pub fn advance(&mut self) -> Navigation {
        match self.routes.lookup(self.current, Trigger::Advance) {
            Some(Route::To(to)) => self.go_to(to),
            Some(Route::Blocked) => self.ignore(Trigger::Advance, IgnoreReason::Blocked),
            None => {
                let next = self.current + 1;
                if next < self.scenes.len() {
                    self.go_to(next)
                } else {
                    self.ignore(Trigger::Advance, IgnoreReason::OutOfRange)
                }
            }
        }
    }

    /// Explicit jump. Out-of-range targets are ignored.
    pub fn go_to(&mut self, target: usize) -> Navigation {
        if target >= self.scenes.len() {
            log::debug!("[sequencer] go_to({target}) ignored: only {} scenes", self.scenes.len());
            return Navigation::Ignored(IgnoreReason::OutOfRange);
        }
        self.begin_transition(target)
    }

    /// Hide every panel, drop delayed reveals, and fade back to the start.
    pub fn restart(&mut self) -> Navigation {
        if let Some(reason) = self.busy() {
            return self.ignore(Trigger::Restart, reason);
        }
        self.scenes[self.current].withdraw_panels();
        self.presenter.hide_all_panels();
        self.begin_transition(self.routes.restart_index())
    }

    pub fn trigger(&mut self, trigger: Trigger) -> Navigation {
        match trigger {
            Trigger::Advance => self.advance(),
            Trigger::Restart => self.restart(),
            Trigger::ChoiceA | Trigger::ChoiceB => match self.routes.lookup(self.current, trigger) {
                Some(Route::To(to)) => self.go_to(to),
                Some(Route::Blocked) => self.ignore(trigger, IgnoreReason::Blocked),
                None => self.ignore(trigger, IgnoreReason::NoRoute),
            },
        }
    }

    /// Advance fade timers and the active scene by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        let mut scene_dt = dt;
        let mut remaining = dt;
        while let Some((event, leftover)) = self.fade.step(remaining) {
            match event {
                FadeEvent::Covered => {
                    self.swap();
                    scene_dt = leftover;
                }
                FadeEvent::Revealed => {
                    self.presenter.uncover();
                    log::debug!("[sequencer] transition settled on {}", self.current);
                }
            }
            remaining = leftover;
        }
        self.scenes[self.current].update(scene_dt, &mut self.presenter);
    }

    pub fn orbit(&mut self, dx_px: f32, dy_px: f32) {
        if let Some(scene) = self.scenes.get_mut(self.current) {
            scene.orbit.drag(dx_px, dy_px);
        }
    }

    pub fn zoom(&mut self, factor: f32) {
        if let Some(scene) = self.scenes.get_mut(self.current) {
            scene.orbit.zoom(factor);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        for scene in &mut self.scenes {
            scene.camera.set_viewport(width, height);
        }
    }

    /// Panels the current scene has shown through the presenter and not
    /// yet hidden. Empty between `restart` and the swap.
    pub fn visible_panels_of_current(&self) -> &[Panel] {
        let scene = &self.scenes[self.current];
        if !scene.is_active() {
            return &[];
        }
        scene.visit().shown_panels()
    }

    fn busy(&self) -> Option<IgnoreReason> {
        if !self.running {
            Some(IgnoreReason::NotStarted)
        } else if self.is_transitioning() {
            Some(IgnoreReason::InFlight)
        } else {
            None
        }
    }

    fn begin_transition(&mut self, target: usize) -> Navigation {
        if let Some(reason) = self.busy() {
            log::debug!("[sequencer] transition to {target} ignored: {reason:?}");
            return Navigation::Ignored(reason);
        }
        if !self.fade.cover() {
            return Navigation::Ignored(IgnoreReason::InFlight);
        }
        let from = self.current;
        self.target = Some(target);
        self.presenter.cover();
        log::info!("[sequencer] transition {from} -> {target}");
        Navigation::Started { from, to: target }
    }

    fn swap(&mut self) {
        let Some(target) = self.target.take() else {
            return;
        };
        self.scenes[self.current].deactivate(&mut self.presenter);
        self.current = target;
        self.scenes[target].activate(&mut self.presenter);
        self.fade.reveal();
        self.presenter.begin_reveal();
    }

    fn ignore(&self, trigger: Trigger, reason: IgnoreReason) -> Navigation {
        let reason = self.busy().unwrap_or(reason);
        log::debug!(
            "[sequencer] {trigger:?} ignored at scene {}: {reason:?}",
            self.current
        );
        Navigation::Ignored(reason)
    }
}
