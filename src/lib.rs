//! # Sparktrail
//!
//! Pointer-driven spark trails: a small real-time particle engine that
//! turns cursor movement into glowing, fading sparks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sparktrail::prelude::*;
//!
//! fn main() {
//!     Trail::new()
//!         .with_palette(Palette::Fire)
//!         .with_max_particles(512)
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The three layers
//!
//! | Layer | Type | Job |
//! |-------|------|-----|
//! | Input sampler | [`PointerSampler`] | Throttle pointer events into spawn bursts |
//! | Particle store | [`ParticleStore`] | Bounded, insertion-ordered live particles |
//! | Simulation step | [`Engine::step`] | Integrate, decay, and cull once per frame |
//!
//! Pointer events insert particles; every display frame advances them and
//! removes the expired ones; the renderer redraws the whole surface from
//! the current store. All three run interleaved on the event-loop thread,
//! never concurrently.
//!
//! ### Headless use
//!
//! [`Engine`] has no window dependency. Feed it pointer positions and step
//! it yourself for tests, benchmarks, or embedding in another renderer:
//!
//! ```
//! use sparktrail::{Engine, TrailConfig, Vec2};
//!
//! let mut engine = Engine::with_seed(TrailConfig::default(), 7);
//! engine.pointer_moved(Vec2::new(100.0, 100.0));
//! engine.pointer_moved(Vec2::new(160.0, 120.0));
//! engine.step();
//! assert!(engine.particle_count() > 0);
//! ```
//!
//! ### Determinism
//!
//! Every random draw (spawn angle, speed, decay, size, color) flows
//! through one seedable generator. [`Trail::with_seed`] /
//! [`Engine::with_seed`] reproduce exact particle sequences.

mod engine;
mod particle;
mod sampler;
mod spawn;
mod store;
mod trail;

pub mod error;
pub mod gpu;
pub mod time;
pub mod visuals;

pub use engine::{Engine, TrailConfig};
pub use error::{GpuError, RunError};
pub use glam::{Vec2, Vec3};
pub use particle::Particle;
pub use sampler::{PointerSampler, SpawnRequest};
pub use spawn::SpawnContext;
pub use store::ParticleStore;
pub use trail::Trail;
pub use visuals::{BlendMode, Palette, VisualConfig};

/// Convenient re-exports for common usage.
///
/// ```no_run
/// use sparktrail::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{Engine, TrailConfig};
    pub use crate::particle::Particle;
    pub use crate::trail::Trail;
    pub use crate::visuals::{BlendMode, Palette, VisualConfig};
    pub use crate::{Vec2, Vec3};
}
