// Host-side tests for the scene sequencer and the shipped story.
// The main crate is wasm-only, so these drive story-core with a recording presenter.

use std::time::Duration;
use story_core::story::{sea_palace, CHOICE_SCENE, ENDING_A_SCENE, ENDING_B_SCENE};
use story_core::{
    FadeTiming, IgnoreReason, Navigation, NullPresenter, Panel, Presenter, RouteTable, Scene,
    Sequencer, StoryConfig, StoryError, Trigger,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Show(Panel),
    Hide(Panel),
    Cover,
    Uncover,
    BeginReveal,
    Activated(usize),
    Deactivated(usize),
}

#[derive(Default)]
struct RecordingPresenter {
    calls: Vec<Call>,
    visible: Vec<Panel>,
}

impl RecordingPresenter {
    fn position(&self, call: &Call) -> usize {
        self.calls
            .iter()
            .position(|c| c == call)
            .unwrap_or_else(|| panic!("{call:?} never happened: {:?}", self.calls))
    }
}

impl Presenter for RecordingPresenter {
    fn show_panel(&mut self, panel: Panel) {
        self.calls.push(Call::Show(panel));
        if !self.visible.contains(&panel) {
            self.visible.push(panel);
        }
    }
    fn hide_panel(&mut self, panel: Panel) {
        self.calls.push(Call::Hide(panel));
        self.visible.retain(|p| *p != panel);
    }
    fn cover(&mut self) {
        self.calls.push(Call::Cover);
    }
    fn uncover(&mut self) {
        self.calls.push(Call::Uncover);
    }
    fn begin_reveal(&mut self) {
        self.calls.push(Call::BeginReveal);
    }
    fn scene_activated(&mut self, scene: &Scene) {
        self.calls.push(Call::Activated(scene.index()));
    }
    fn scene_deactivated(&mut self, scene: &Scene) {
        self.calls.push(Call::Deactivated(scene.index()));
    }
}

const SETTLE: Duration = Duration::from_millis(1300);

fn started() -> Sequencer<RecordingPresenter> {
    let mut seq = match Sequencer::new(sea_palace(), RecordingPresenter::default()) {
        Ok(seq) => seq,
        Err(e) => panic!("story failed to build: {e}"),
    };
    assert!(seq.start());
    seq
}

fn settle(seq: &mut Sequencer<RecordingPresenter>) {
    seq.tick(SETTLE);
    assert!(!seq.is_transitioning());
}

fn active_count(seq: &Sequencer<RecordingPresenter>) -> usize {
    seq.scenes().iter().filter(|s| s.is_active()).count()
}

fn jump(seq: &mut Sequencer<RecordingPresenter>, index: usize) {
    assert!(seq.go_to(index).is_started());
    settle(seq);
    assert_eq!(seq.current_index(), index);
}

#[test]
fn start_shows_the_title() {
    let seq = started();
    assert_eq!(seq.current_index(), 0);
    assert_eq!(active_count(&seq), 1);
    assert!(seq.presenter().visible.contains(&Panel::TitleCard));
    assert!(seq.presenter().visible.contains(&Panel::NextButton));
}

#[test]
fn second_start_is_refused() {
    let mut seq = started();
    assert!(!seq.start());
    assert_eq!(active_count(&seq), 1);
}

#[test]
fn next_walks_the_story_up_to_the_choice() {
    let mut seq = started();
    for expected in 1..=6 {
        assert!(seq.advance().is_started());
        settle(&mut seq);
        assert_eq!(seq.current_index(), expected);
        assert_eq!(active_count(&seq), 1);
    }
    assert!(seq.advance().is_started());
    settle(&mut seq);
    assert_eq!(seq.current_index(), CHOICE_SCENE);
    assert_eq!(seq.visible_panels_of_current().to_vec(), vec![Panel::ChoiceButtons]);
}

#[test]
fn choices_lead_to_their_endings() {
    let mut seq = started();
    jump(&mut seq, CHOICE_SCENE);
    assert_eq!(
        seq.trigger(Trigger::ChoiceA),
        Navigation::Started {
            from: CHOICE_SCENE,
            to: ENDING_A_SCENE
        }
    );
    settle(&mut seq);
    assert_eq!(seq.current_index(), ENDING_A_SCENE);

    jump(&mut seq, CHOICE_SCENE);
    assert!(seq.trigger(Trigger::ChoiceB).is_started());
    settle(&mut seq);
    assert_eq!(seq.current_index(), ENDING_B_SCENE);
}

#[test]
fn next_is_blocked_at_the_choice_and_endings() {
    let mut seq = started();
    for index in [CHOICE_SCENE, ENDING_A_SCENE] {
        jump(&mut seq, index);
        assert_eq!(seq.advance(), Navigation::Ignored(IgnoreReason::Blocked));
    }
    jump(&mut seq, ENDING_B_SCENE);
    assert_eq!(seq.advance(), Navigation::Ignored(IgnoreReason::OutOfRange));
    assert!(!seq.is_transitioning());
    assert_eq!(seq.current_index(), ENDING_B_SCENE);
}

#[test]
fn choices_do_nothing_outside_the_choice_scene() {
    let mut seq = started();
    jump(&mut seq, 3);
    assert_eq!(
        seq.trigger(Trigger::ChoiceA),
        Navigation::Ignored(IgnoreReason::NoRoute)
    );
    assert_eq!(seq.current_index(), 3);
}

#[test]
fn go_to_out_of_range_is_ignored() {
    let mut seq = started();
    let count = seq.scene_count();
    assert_eq!(
        seq.go_to(count),
        Navigation::Ignored(IgnoreReason::OutOfRange)
    );
    assert!(!seq.is_transitioning());
    assert_eq!(seq.current_index(), 0);
    assert!(seq.presenter().calls.iter().all(|c| *c != Call::Cover));
}

#[test]
fn restart_returns_to_the_title_from_anywhere() {
    let mut seq = started();
    for index in 0..seq.scene_count() {
        jump(&mut seq, index);
        assert!(seq.restart().is_started());
        assert!(seq.presenter().visible.is_empty());
        settle(&mut seq);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(active_count(&seq), 1);
    }
}

#[test]
fn swap_happens_under_the_veil_in_order() {
    let mut seq = started();
    seq.presenter_mut().calls.clear();
    assert!(seq.advance().is_started());

    // Still covering: nothing swapped yet.
    seq.tick(Duration::from_millis(400));
    assert_eq!(seq.current_index(), 0);
    assert!(seq.fade().opacity() > 0.0);

    settle(&mut seq);
    let p = seq.presenter();
    let cover = p.position(&Call::Cover);
    let old_out = p.position(&Call::Deactivated(0));
    let new_in = p.position(&Call::Activated(1));
    let reveal = p.position(&Call::BeginReveal);
    let uncover = p.position(&Call::Uncover);
    assert!(cover < old_out);
    assert!(old_out < new_in);
    assert!(new_in < reveal);
    assert!(reveal < uncover);
}

#[test]
fn requests_during_a_transition_are_ignored() {
    let mut seq = started();
    assert!(seq.advance().is_started());
    assert_eq!(seq.advance(), Navigation::Ignored(IgnoreReason::InFlight));
    assert_eq!(seq.restart(), Navigation::Ignored(IgnoreReason::InFlight));

    // Past the midpoint, still revealing.
    seq.tick(Duration::from_millis(900));
    assert_eq!(seq.current_index(), 1);
    assert!(seq.is_transitioning());
    assert_eq!(seq.go_to(5), Navigation::Ignored(IgnoreReason::InFlight));

    settle(&mut seq);
    assert_eq!(seq.current_index(), 1);
    let covers = seq
        .presenter()
        .calls
        .iter()
        .filter(|c| **c == Call::Cover)
        .count();
    assert_eq!(covers, 1);
}

#[test]
fn requests_before_start_are_ignored() {
    let mut seq = match Sequencer::new(sea_palace(), RecordingPresenter::default()) {
        Ok(seq) => seq,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(seq.advance(), Navigation::Ignored(IgnoreReason::NotStarted));
    assert_eq!(seq.go_to(3), Navigation::Ignored(IgnoreReason::NotStarted));
    assert_eq!(seq.restart(), Navigation::Ignored(IgnoreReason::NotStarted));
    assert!(seq.active_scene().is_none());
    assert!(seq.presenter().calls.is_empty());
}

#[test]
fn ending_panel_appears_after_its_delay() {
    let mut seq = started();
    jump(&mut seq, CHOICE_SCENE);
    assert!(seq.trigger(Trigger::ChoiceA).is_started());
    // Covered at 800ms; the ending has been up for 500ms once settled.
    settle(&mut seq);
    assert!(!seq.presenter().visible.contains(&Panel::EndingA));
    seq.tick(Duration::from_millis(1400));
    assert!(!seq.presenter().visible.contains(&Panel::EndingA));
    seq.tick(Duration::from_millis(200));
    assert!(seq.presenter().visible.contains(&Panel::EndingA));
}

#[test]
fn restart_cancels_a_pending_ending_panel() {
    let mut seq = started();
    jump(&mut seq, CHOICE_SCENE);
    assert!(seq.trigger(Trigger::ChoiceB).is_started());
    settle(&mut seq);
    assert!(seq.restart().is_started());
    settle(&mut seq);
    seq.tick(Duration::from_secs(5));
    assert_eq!(seq.current_index(), 0);
    assert!(!seq.presenter().visible.contains(&Panel::EndingB));
    assert!(seq
        .presenter()
        .calls
        .iter()
        .all(|c| *c != Call::Show(Panel::EndingB)));
}

#[test]
fn stop_leaves_nothing_active() {
    let count = started().scene_count();
    for index in 0..count {
        let mut seq = started();
        if index != 0 {
            jump(&mut seq, index);
        }
        seq.stop();
        assert_eq!(active_count(&seq), 0, "stopped at {index}");
        assert!(seq.active_scene().is_none());
        assert!(seq.presenter().visible.is_empty());
        assert_eq!(seq.presenter().calls.last(), Some(&Call::Deactivated(index)));
    }
}

#[test]
fn stop_mid_transition_drops_the_veil() {
    let mut seq = started();
    jump(&mut seq, 4);
    assert!(seq.advance().is_started());
    seq.stop();
    assert_eq!(active_count(&seq), 0);
    assert!(!seq.is_transitioning());
    assert!(seq.presenter().visible.is_empty());
    assert_eq!(seq.presenter().calls.last(), Some(&Call::Deactivated(4)));
}

#[test]
fn visible_panels_follow_what_was_shown() {
    let mut seq = started();
    jump(&mut seq, CHOICE_SCENE);
    assert!(seq.trigger(Trigger::ChoiceA).is_started());
    settle(&mut seq);
    // Ending panel still waiting for its delay.
    assert!(seq.visible_panels_of_current().is_empty());
    seq.tick(Duration::from_secs(2));
    assert_eq!(seq.visible_panels_of_current().to_vec(), vec![Panel::EndingA]);
    assert_eq!(seq.presenter().visible, vec![Panel::EndingA]);

    assert!(seq.restart().is_started());
    assert!(seq.visible_panels_of_current().is_empty());
    assert!(seq.presenter().visible.is_empty());
    settle(&mut seq);
    assert_eq!(
        seq.visible_panels_of_current().to_vec(),
        seq.presenter().visible
    );
}

#[test]
fn resize_updates_every_camera() {
    let mut seq = started();
    seq.resize(800, 400);
    assert!(seq
        .scenes()
        .iter()
        .all(|s| (s.camera.aspect - 2.0).abs() < 1e-6));
    seq.resize(0, 400);
    assert!((seq.scenes()[3].camera.aspect - 2.0).abs() < 1e-6);
}

#[test]
fn revisiting_a_scene_resets_its_camera() {
    let mut seq = started();
    jump(&mut seq, 2);
    let eye = seq.scenes()[2].camera.eye;
    seq.orbit(200.0, 0.0);
    seq.tick(Duration::from_secs(1));
    assert!((seq.scenes()[2].camera.eye - eye).length() > 1e-3);

    jump(&mut seq, 3);
    jump(&mut seq, 2);
    assert!((seq.scenes()[2].camera.eye - eye).length() < 1e-3);
}

#[test]
fn scene_without_camera_fails_to_build() {
    let mut config = sea_palace();
    config.scenes[4].camera = None;
    let result = Sequencer::new(config, RecordingPresenter::default());
    assert!(matches!(result, Err(StoryError::MissingCamera { index: 4 })));
}

#[test]
fn empty_story_and_bad_routes_fail_to_build() {
    let empty = StoryConfig {
        scenes: Vec::new(),
        routes: RouteTable::new(),
        timing: FadeTiming::default(),
    };
    assert!(matches!(
        Sequencer::new(empty, RecordingPresenter::default()),
        Err(StoryError::EmptyStory)
    ));

    let mut config = sea_palace();
    config.routes = config.routes.route(2, Trigger::ChoiceA, 40);
    assert!(matches!(
        Sequencer::new(config, RecordingPresenter::default()),
        Err(StoryError::RouteOutOfRange { to: 40, .. })
    ));
}

#[test]
fn large_tick_runs_the_whole_transition() {
    let mut seq = started();
    assert!(seq.advance().is_started());
    seq.tick(Duration::from_secs(10));
    assert_eq!(seq.current_index(), 1);
    assert!(!seq.is_transitioning());
    assert_eq!(seq.presenter().calls.last(), Some(&Call::Uncover));
}

#[test]
fn headless_run_reaches_an_ending() {
    let mut seq = match Sequencer::new(sea_palace(), NullPresenter) {
        Ok(seq) => seq,
        Err(e) => panic!("{e}"),
    };
    assert!(seq.start());
    let frame = Duration::from_millis(16);
    for trigger in [Trigger::Advance; 7].into_iter().chain([Trigger::ChoiceB]) {
        assert!(seq.trigger(trigger).is_started(), "{trigger:?}");
        while seq.is_transitioning() {
            seq.tick(frame);
        }
    }
    assert_eq!(seq.current_index(), ENDING_B_SCENE);
    assert_eq!(seq.active_scene().map(|s| s.index()), Some(ENDING_B_SCENE));
}
