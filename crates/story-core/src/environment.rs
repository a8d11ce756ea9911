//! Lightweight environment descriptors: what a scene looks like, not how it
//! is drawn. Frontends read these to build their draw lists.

use crate::constants::{CLOUD_COUNT, CLOUD_DRIFT_PER_SEC, CLOUD_WRAP_X};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

/// Broad look of a scene. Drives background, lights and props.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Setting {
    /// Open sky over the forest; the title screen.
    Sky,
    /// Undersea palace of the Dragon King.
    Palace,
    /// Sunlit shore where the turtle meets the rabbit.
    Shore,
    /// Forest on land.
    Forest,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropKind {
    Pillar,
    Rock,
    Trunk,
    Canopy,
    Cloud,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Vec3,
    /// Billboard radius in world units.
    pub size: f32,
    /// Horizontal stretch; clouds are wider than tall.
    pub stretch: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Character {
    DragonKing,
    Turtle,
    Rabbit,
}

impl Character {
    pub fn color(self) -> [f32; 4] {
        match self {
            Character::DragonKing => [1.0, 0.0, 0.0, 1.0],
            Character::Turtle => [0.0, 1.0, 0.0, 1.0],
            Character::Rabbit => [1.0, 1.0, 1.0, 1.0],
        }
    }

    pub fn size(self) -> f32 {
        match self {
            Character::DragonKing => 2.0,
            Character::Turtle => 1.5,
            Character::Rabbit => 1.0,
        }
    }
}

/// A character standing somewhere in a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub character: Character,
    pub position: Vec3,
}

impl Placement {
    pub const fn new(character: Character, position: [f32; 3]) -> Self {
        Self {
            character,
            position: Vec3::from_array(position),
        }
    }
}

pub type Cast = SmallVec<[Placement; 3]>;

#[derive(Clone, Debug)]
pub struct Environment {
    pub background: [f32; 3],
    pub lights: SmallVec<[Light; 2]>,
    pub props: Vec<Prop>,
    pub cast: Cast,
}

fn hex(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}

fn opaque(rgb: u32) -> [f32; 4] {
    let [r, g, b] = hex(rgb);
    [r, g, b, 1.0]
}

fn light(rgb: u32, intensity: f32) -> Light {
    Light {
        color: hex(rgb),
        intensity,
    }
}

impl Environment {
    /// Build the environment for a setting. `seed` makes scattered props
    /// (rocks, trees, clouds) land in the same place on every run.
    pub fn build(setting: Setting, cast: Cast, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut props = Vec::new();
        let (background, key) = match setting {
            Setting::Sky => {
                for _ in 0..CLOUD_COUNT {
                    props.push(Prop {
                        kind: PropKind::Cloud,
                        position: Vec3::new(
                            rng.gen_range(-10.0..10.0),
                            rng.gen_range(5.0..10.0),
                            rng.gen_range(-15.0..-5.0),
                        ),
                        size: rng.gen_range(1.0..3.0),
                        stretch: 2.0,
                        color: [1.0, 1.0, 1.0, 0.7],
                    });
                }
                (
                    hex(0xcaf0f8),
                    light(0xffeecc, 0.8),
                )
            }
            Setting::Palace => {
                for i in 0..4 {
                    let angle = i as f32 * std::f32::consts::FRAC_PI_2;
                    props.push(Prop {
                        kind: PropKind::Pillar,
                        position: Vec3::new(angle.cos() * 8.0, 5.0, angle.sin() * 8.0),
                        size: 1.2,
                        stretch: 0.25,
                        color: opaque(0x6699cc),
                    });
                }
                (
                    hex(0x0b2a55),
                    light(0x4488ff, 0.5),
                )
            }
            Setting::Shore => {
                for _ in 0..3 {
                    props.push(Prop {
                        kind: PropKind::Rock,
                        position: Vec3::new(
                            rng.gen_range(-5.0..5.0),
                            rng.gen_range(0.0..1.0),
                            rng.gen_range(-5.0..5.0),
                        ),
                        size: rng.gen_range(1.0..3.0),
                        stretch: 1.0,
                        color: opaque(0x808080),
                    });
                }
                (
                    hex(0xf5f5f5),
                    light(0xffeeaa, 0.8),
                )
            }
            Setting::Forest => {
                for _ in 0..6 {
                    let x = rng.gen_range(-10.0..10.0);
                    let z = rng.gen_range(-10.0..10.0);
                    props.push(Prop {
                        kind: PropKind::Trunk,
                        position: Vec3::new(x, 2.0, z),
                        size: 0.7,
                        stretch: 0.5,
                        color: opaque(0x8b4513),
                    });
                    props.push(Prop {
                        kind: PropKind::Canopy,
                        position: Vec3::new(x, 5.0, z),
                        size: 2.0,
                        stretch: 1.0,
                        color: opaque(0x228b22),
                    });
                }
                (
                    hex(0xe8f3e8),
                    light(0x88ff88, 0.3),
                )
            }
        };
        let ambient = light(0xffffff, if setting == Setting::Sky { 0.6 } else { 0.5 });
        let mut lights = SmallVec::new();
        lights.push(ambient);
        lights.push(key);
        Self {
            background,
            lights,
            props,
            cast,
        }
    }

    /// Time-based visual state. Clouds drift along +X and wrap around.
    pub fn update(&mut self, dt_sec: f32) {
        let mut cloud = 0usize;
        for prop in self.props.iter_mut().filter(|p| p.kind == PropKind::Cloud) {
            prop.position.x += CLOUD_DRIFT_PER_SEC * (cloud as f32 + 1.0) * dt_sec;
            if prop.position.x > CLOUD_WRAP_X {
                prop.position.x = -CLOUD_WRAP_X;
            }
            cloud += 1;
        }
    }

    /// Per-channel light reaching a billboard: every light's colour
    /// weighted by its intensity, mapped into [0.6, 1].
    pub fn shade(&self) -> [f32; 3] {
        let mut sum = [0.0f32; 3];
        for light in &self.lights {
            for (s, c) in sum.iter_mut().zip(light.color) {
                *s += c * light.intensity;
            }
        }
        sum.map(|s| (0.6 + 0.4 * s.min(1.5)).min(1.0))
    }
}
