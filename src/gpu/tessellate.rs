//! CPU-side vertex generation for spark tails and glow dots.
//!
//! Geometry is rebuilt from the store snapshot every frame and uploaded
//! wholesale; with a bounded store there is nothing worth caching. Kept
//! free of GPU types so the arithmetic is unit-testable.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::particle::Particle;

/// One vertex of a spark quad.
///
/// `uv` spans [-1, 1] across dot quads and drives the soft-circle
/// fragment falloff; tail quads leave it at zero and render flat.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in screen pixels.
    pub position: [f32; 2],
    /// Shape-space coordinate for the fragment shader.
    pub uv: [f32; 2],
    /// RGBA color.
    pub color: [f32; 4],
}

/// Vertices for one frame, split per pipeline.
#[derive(Default)]
pub struct FrameGeometry {
    /// Tail quads, six vertices per moving particle.
    pub tails: Vec<Vertex>,
    /// Dot quads, six vertices per particle.
    pub dots: Vec<Vertex>,
}

/// Number of vertices each quad contributes.
pub const VERTICES_PER_QUAD: usize = 6;

// Below this squared speed a tail quad would be degenerate.
const MIN_TAIL_SPEED_SQ: f32 = 1e-6;

fn vertex(position: Vec2, uv: Vec2, color: Vec3) -> Vertex {
    Vertex {
        position: position.to_array(),
        uv: uv.to_array(),
        color: [color.x, color.y, color.z, 1.0],
    }
}

fn push_quad(out: &mut Vec<Vertex>, corners: [Vertex; 4]) {
    let [a, b, c, d] = corners;
    out.extend_from_slice(&[a, b, c, a, c, d]);
}

/// Build the frame's vertex lists from the current particle snapshot.
///
/// Per particle: a tail quad reaching from `position` back to
/// `position - velocity * tail_scale`, `size * life` wide, and a dot quad
/// of radius `size * 0.5 * life` centered on `position`. Near-stationary
/// particles draw only the dot.
pub fn tessellate<'a>(
    particles: impl Iterator<Item = &'a Particle>,
    tail_scale: f32,
) -> FrameGeometry {
    let mut geometry = FrameGeometry::default();

    for p in particles {
        if p.velocity.length_squared() > MIN_TAIL_SPEED_SQ {
            let head = p.position;
            let tail = p.position - p.velocity * tail_scale;
            let half_width = p.size * p.life * 0.5;
            let normal = p.velocity.perp().normalize() * half_width;

            push_quad(
                &mut geometry.tails,
                [
                    vertex(head + normal, Vec2::ZERO, p.color),
                    vertex(head - normal, Vec2::ZERO, p.color),
                    vertex(tail - normal, Vec2::ZERO, p.color),
                    vertex(tail + normal, Vec2::ZERO, p.color),
                ],
            );
        }

        let radius = p.size * 0.5 * p.life;
        push_quad(
            &mut geometry.dots,
            [
                vertex(p.position + Vec2::new(-radius, -radius), Vec2::new(-1.0, -1.0), p.color),
                vertex(p.position + Vec2::new(radius, -radius), Vec2::new(1.0, -1.0), p.color),
                vertex(p.position + Vec2::new(radius, radius), Vec2::new(1.0, 1.0), p.color),
                vertex(p.position + Vec2::new(-radius, radius), Vec2::new(-1.0, 1.0), p.color),
            ],
        );
    }

    geometry
}
