//! GPU-facing data shared by both frontends: instance/uniform layouts and
//! the conversion from a scene to a back-to-front billboard list.

use crate::constants::VEIL_COLOR;
use crate::environment::{Prop, PropKind};
use crate::scene::Scene;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    /// rgb = veil colour, a = veil amount.
    pub veil: [f32; 4],
}

impl Uniforms {
    pub fn for_scene(scene: &Scene, veil_amount: f32) -> Self {
        let (right, up) = scene.camera.basis();
        Self {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            veil: [
                VEIL_COLOR[0],
                VEIL_COLOR[1],
                VEIL_COLOR[2],
                veil_amount.clamp(0.0, 1.0),
            ],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub stretch: f32,
}

// Rocks are placed by their base; lift the billboard so it sits on the ground.
fn lift(prop: &Prop) -> f32 {
    if prop.kind == PropKind::Rock {
        prop.size * 0.5
    } else {
        0.0
    }
}

/// Fill `out` with billboards for the scene, farthest first.
pub fn build_instances(scene: &Scene, out: &mut Vec<Instance>) {
    out.clear();
    let env = &scene.environment;
    let shade = env.shade();
    for prop in &env.props {
        let mut color = prop.color;
        if prop.kind != PropKind::Cloud {
            for (c, s) in color.iter_mut().zip(shade) {
                *c *= s;
            }
        }
        out.push(Instance {
            pos: (prop.position + Vec3::Y * lift(prop)).to_array(),
            scale: prop.size * 2.0,
            color,
            stretch: prop.stretch,
        });
    }
    for placement in &env.cast {
        let size = placement.character.size();
        out.push(Instance {
            pos: placement.position.to_array(),
            scale: size * 2.0,
            color: placement.character.color(),
            stretch: 1.0,
        });
    }
    let eye = scene.camera.eye;
    out.sort_by(|a, b| {
        let da = Vec3::from_array(a.pos).distance_squared(eye);
        let db = Vec3::from_array(b.pos).distance_squared(eye);
        db.total_cmp(&da)
    });
}

/// Clear colour for the scene, blended toward the veil.
pub fn clear_color(scene: &Scene, veil_amount: f32) -> [f64; 4] {
    let t = veil_amount.clamp(0.0, 1.0);
    let bg = scene.environment.background;
    let mix = |i: usize| (bg[i] + (VEIL_COLOR[i] - bg[i]) * t) as f64;
    [mix(0), mix(1), mix(2), 1.0]
}

/// Unit quad (two triangles) the billboards are expanded from.
pub const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

pub const MAX_INSTANCES: usize = 64;
