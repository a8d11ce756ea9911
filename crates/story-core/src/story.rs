//! The shipped story: the Dragon King, the turtle and the rabbit.
//!
//! Scene 0 is the title, 1..=9 are story beats. Scene 7 asks the reader to
//! choose; 8 and 9 are the two endings.

use crate::camera::CameraPreset;
use crate::constants::{ENDING_REVEAL_DELAY, STORY_FOV_DEGREES, TITLE_FOV_DEGREES};
use crate::environment::{Cast, Character, Placement, Setting};
use crate::fade::FadeTiming;
use crate::presenter::Panel;
use crate::routes::{RouteTable, Trigger};
use crate::scene::{PanelReveal, SceneKind, SceneSpec, UiDescriptor};
use crate::sequencer::StoryConfig;

pub const STORY_SCENES: u8 = 9;
pub const CHOICE_SCENE: usize = 7;
pub const ENDING_A_SCENE: usize = 8;
pub const ENDING_B_SCENE: usize = 9;

const TITLE_CAMERA: CameraPreset =
    CameraPreset::new([-0.1, 0.0, 2.4], [0.0, 0.0, 0.0], TITLE_FOV_DEGREES);

/// Eye and look-at per story number.
pub fn story_camera(number: u8) -> Option<CameraPreset> {
    let (eye, target) = match number {
        1 => ([0.0, 10.0, 20.0], [0.0, 0.0, 0.0]), // palace overview
        2 => ([10.0, 5.0, 10.0], [0.0, 0.0, 0.0]), // the king and the turtle
        3 => ([-5.0, 8.0, 15.0], [0.0, 2.0, 0.0]), // shore
        4 => ([0.0, 5.0, 15.0], [0.0, 2.0, 0.0]),  // rabbit appears
        5 => ([8.0, 6.0, 12.0], [-2.0, 2.0, 0.0]), // talk
        6 => ([0.0, 12.0, 18.0], [0.0, 0.0, 0.0]), // into the forest
        7 => ([0.0, 8.0, 15.0], [0.0, 2.0, 0.0]),  // the choice
        8 => ([5.0, 7.0, 12.0], [0.0, 2.0, -2.0]), // ending A
        9 => ([-5.0, 10.0, 15.0], [0.0, 0.0, 0.0]), // ending B
        _ => return None,
    };
    Some(CameraPreset::new(eye, target, STORY_FOV_DEGREES))
}

pub fn story_setting(number: u8) -> Setting {
    match number {
        0..=2 | 8..=u8::MAX => Setting::Palace,
        3..=5 => Setting::Shore,
        _ => Setting::Forest,
    }
}

pub fn story_cast(number: u8) -> Cast {
    let mut cast = Cast::new();
    if matches!(number, 1 | 2 | 8) {
        cast.push(Placement::new(Character::DragonKing, [0.0, 3.0, -5.0]));
    }
    let turtle = match number {
        1 => Some([3.0, 1.0, 0.0]),
        2 => Some([2.0, 1.0, -3.0]),
        3 => Some([0.0, 1.0, 5.0]),
        4 => Some([-2.0, 1.0, 3.0]),
        5 => Some([-3.0, 1.0, 2.0]),
        6 => Some([0.0, 1.0, 0.0]),
        7 => Some([0.0, 1.0, 2.0]),
        8 => Some([2.0, 1.0, 0.0]),
        9 => Some([-2.0, 1.0, -2.0]),
        _ => None,
    };
    if let Some(at) = turtle {
        cast.push(Placement::new(Character::Turtle, at));
    }
    let rabbit = match number {
        4 => Some([3.0, 1.0, 5.0]),
        5 => Some([0.0, 1.0, 3.0]),
        6 => Some([2.0, 1.0, -2.0]),
        7 => Some([3.0, 1.0, 0.0]),
        8 => Some([0.0, 1.0, -3.0]),
        _ => None,
    };
    if let Some(at) = rabbit {
        cast.push(Placement::new(Character::Rabbit, at));
    }
    cast
}

pub fn story_ui(number: u8) -> UiDescriptor {
    match number as usize {
        CHOICE_SCENE => UiDescriptor::with(&[PanelReveal::now(Panel::ChoiceButtons)]),
        ENDING_A_SCENE => {
            UiDescriptor::with(&[PanelReveal::after(Panel::EndingA, ENDING_REVEAL_DELAY)])
        }
        ENDING_B_SCENE => {
            UiDescriptor::with(&[PanelReveal::after(Panel::EndingB, ENDING_REVEAL_DELAY)])
        }
        _ => UiDescriptor::with(&[PanelReveal::now(Panel::NextButton)]),
    }
}

pub fn title_spec() -> SceneSpec {
    SceneSpec {
        kind: SceneKind::Title,
        camera: Some(TITLE_CAMERA),
        setting: Setting::Sky,
        cast: Cast::new(),
        ui: UiDescriptor::with(&[
            PanelReveal::now(Panel::TitleCard),
            PanelReveal::now(Panel::NextButton),
        ]),
    }
}

pub fn story_spec(number: u8) -> SceneSpec {
    SceneSpec {
        kind: SceneKind::Story(number),
        camera: story_camera(number),
        setting: story_setting(number),
        cast: story_cast(number),
        ui: story_ui(number),
    }
}

/// "Next" only carries the reader up to the choice; endings wait for restart.
pub fn sea_palace_routes() -> RouteTable {
    RouteTable::new()
        .block(CHOICE_SCENE, Trigger::Advance)
        .block(ENDING_A_SCENE, Trigger::Advance)
        .route(CHOICE_SCENE, Trigger::ChoiceA, ENDING_A_SCENE)
        .route(CHOICE_SCENE, Trigger::ChoiceB, ENDING_B_SCENE)
        .restart_at(0)
}

pub fn sea_palace() -> StoryConfig {
    let mut scenes = Vec::with_capacity(STORY_SCENES as usize + 1);
    scenes.push(title_spec());
    scenes.extend((1..=STORY_SCENES).map(story_spec));
    StoryConfig {
        scenes,
        routes: sea_palace_routes(),
        timing: FadeTiming::default(),
    }
}
