//! The UI adapter the sequencer talks through. The web frontend maps these
//! calls onto DOM elements; the native frontend logs them and shows the
//! visible panels in the window title.

use crate::scene::Scene;

/// A piece of UI whose visibility is owned by the active scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    TitleCard,
    NextButton,
    ChoiceButtons,
    EndingA,
    EndingB,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::TitleCard,
        Panel::NextButton,
        Panel::ChoiceButtons,
        Panel::EndingA,
        Panel::EndingB,
    ];
}

pub trait Presenter {
    fn show_panel(&mut self, panel: Panel);
    fn hide_panel(&mut self, panel: Panel);

    /// Bring the white veil up.
    fn cover(&mut self);
    /// Take the veil away again.
    fn uncover(&mut self);

    fn begin_reveal(&mut self) {}
    fn scene_activated(&mut self, _scene: &Scene) {}
    fn scene_deactivated(&mut self, _scene: &Scene) {}

    fn hide_all_panels(&mut self) {
        for panel in Panel::ALL {
            self.hide_panel(panel);
        }
    }
}

/// Presenter that ignores everything. Handy for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_panel(&mut self, _panel: Panel) {}
    fn hide_panel(&mut self, _panel: Panel) {}
    fn cover(&mut self) {}
    fn uncover(&mut self) {}
}
