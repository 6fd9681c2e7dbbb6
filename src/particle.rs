//! The particle record and its per-tick physics.

use glam::{Vec2, Vec3};

/// A single transient spark.
///
/// Particles are value types: small, `Copy`, and anonymous. They are
/// referenced only by their position in the [`ParticleStore`] and carry no
/// identity of their own.
///
/// `decay` and `size` are drawn once at spawn and never change; only
/// `position`, `velocity`, and `life` mutate over a particle's lifetime.
///
/// [`ParticleStore`]: crate::ParticleStore
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in screen pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
    /// Remaining life in (0, 1]. Starts at 1.0; the particle expires at 0.
    pub life: f32,
    /// Per-tick decrement applied to `life`.
    pub decay: f32,
    /// Base visual scale. Rendered tails and dots shrink with `life`,
    /// so the on-screen size is `size * life`.
    pub size: f32,
    /// Spark color, drawn at spawn from the active palette.
    pub color: Vec3,
}

impl Particle {
    /// Advance by one tick: Euler-integrate position, then decay life.
    ///
    /// Expiry is checked by the caller via [`Particle::is_expired`] so the
    /// store can drop the particle in the same tick its life runs out.
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.life -= self.decay;
    }

    /// Whether this particle's life has run out.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}
