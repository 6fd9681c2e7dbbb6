//! The simulation core: configuration, spawning, and the per-tick step.
//!
//! [`Engine`] is deliberately window-free. It owns the particle store, the
//! pointer sampler, and the spawn RNG, and exposes exactly two mutations:
//! [`Engine::pointer_moved`] for movement events and [`Engine::step`] for
//! render ticks. The windowed runner behind [`Trail`] drives it; tests and
//! benches drive it headless.
//!
//! Both mutations run on the host's single event thread, interleaved but
//! never concurrent, so the store needs no synchronization.
//!
//! [`Trail`]: crate::Trail

use std::ops::Range;

use glam::Vec2;

use crate::particle::Particle;
use crate::sampler::{PointerSampler, SpawnRequest};
use crate::spawn::SpawnContext;
use crate::store::ParticleStore;
use crate::visuals::Palette;

/// Tunable spawn and simulation parameters.
///
/// The defaults reproduce the classic fire-spark cursor trail; every knob
/// the effect hard-codes is exposed here instead.
#[derive(Debug, Clone)]
pub struct TrailConfig {
    /// Palette that spawned sparks draw their color from.
    pub palette: Palette,
    /// Maximum concurrent particles; the oldest is evicted when full.
    pub max_particles: usize,
    /// Minimum per-event pointer travel (pixels) for a guaranteed spawn.
    pub spawn_threshold: f32,
    /// Probability of spawning anyway below the threshold. Zero disables
    /// idle sparks.
    pub idle_trickle: f32,
    /// Upper bound on particles spawned per movement event.
    pub max_burst: u32,
    /// Particles per pixel of travel when sizing a burst.
    pub burst_scale: f32,
    /// Fraction of the raw pointer displacement each spark inherits, so
    /// bursts lean in the direction of travel.
    pub inertia: f32,
    /// Initial radial speed range, pixels per tick.
    pub speed: Range<f32>,
    /// Per-tick life decrement range; a spark drawn at the low end lives
    /// 50 ticks, at the high end 20.
    pub decay: Range<f32>,
    /// Base visual scale range.
    pub size: Range<f32>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            palette: Palette::Fire,
            max_particles: 1024,
            spawn_threshold: 2.0,
            idle_trickle: 0.1,
            max_burst: 5,
            burst_scale: 0.5,
            inertia: 0.1,
            speed: 1.0..3.0,
            decay: 0.02..0.05,
            size: 1.0..3.0,
        }
    }
}

/// The particle-trail simulation: sampler, store, and tick logic.
pub struct Engine {
    config: TrailConfig,
    store: ParticleStore,
    sampler: PointerSampler,
    ctx: SpawnContext,
}

impl Engine {
    /// Create an engine with clock-seeded randomness.
    pub fn new(config: TrailConfig) -> Self {
        let ctx = SpawnContext::from_entropy();
        Self::with_context(config, ctx)
    }

    /// Create an engine with a fixed seed. Identical seeds and identical
    /// pointer input produce identical particle sequences.
    pub fn with_seed(config: TrailConfig, seed: u64) -> Self {
        let ctx = SpawnContext::from_seed(seed);
        Self::with_context(config, ctx)
    }

    fn with_context(config: TrailConfig, ctx: SpawnContext) -> Self {
        let store = ParticleStore::new(config.max_particles);
        let sampler = PointerSampler::new(
            config.spawn_threshold,
            config.idle_trickle,
            config.max_burst,
            config.burst_scale,
        );
        Self {
            config,
            store,
            sampler,
            ctx,
        }
    }

    /// Feed one pointer-movement event in screen pixels. Spawns zero or
    /// more particles depending on travel distance since the last event.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        if let Some(req) = self.sampler.sample(pos, &mut self.ctx) {
            self.spawn_burst(req);
        }
    }

    /// Notify the engine that the pointer left the surface, so the next
    /// movement event does not measure a displacement across the gap.
    pub fn pointer_left(&mut self) {
        self.sampler.reset();
    }

    /// Advance one tick: integrate and decay every particle, removing the
    /// expired ones. Runs once per render callback.
    pub fn step(&mut self) {
        self.store.advance_and_cull();
    }

    fn spawn_burst(&mut self, req: SpawnRequest) {
        for _ in 0..req.count {
            let direction = self.ctx.random_direction();
            let speed = self
                .ctx
                .random_range(self.config.speed.start, self.config.speed.end);
            let particle = Particle {
                position: req.origin,
                velocity: direction * speed + req.displacement * self.config.inertia,
                life: 1.0,
                decay: self
                    .ctx
                    .random_range(self.config.decay.start, self.config.decay.end),
                size: self
                    .ctx
                    .random_range(self.config.size.start, self.config.size.end),
                color: self.ctx.pick_color(self.config.palette.colors()),
            };
            self.store.push(particle);
        }
    }

    /// Iterate live particles, oldest first.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.store.iter()
    }

    /// Number of live particles.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    /// The active configuration.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Drop every live particle, e.g. on teardown. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.store.clear();
        self.sampler.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict_config() -> TrailConfig {
        TrailConfig {
            idle_trickle: 0.0,
            ..Default::default()
        }
    }

    fn sweep(engine: &mut Engine, events: u32, stride: f32) {
        engine.pointer_moved(Vec2::ZERO);
        for i in 1..=events {
            engine.pointer_moved(Vec2::new(i as f32 * stride, 0.0));
        }
    }

    #[test]
    fn fresh_engine_is_empty_and_step_is_noop() {
        let mut engine = Engine::with_seed(strict_config(), 1);
        assert_eq!(engine.particle_count(), 0);
        engine.step();
        assert_eq!(engine.particle_count(), 0);
    }

    #[test]
    fn movement_spawns_into_store() {
        let mut engine = Engine::with_seed(strict_config(), 1);
        sweep(&mut engine, 4, 50.0);
        assert!(engine.particle_count() > 0);
    }

    #[test]
    fn sparks_inherit_pointer_inertia() {
        let config = TrailConfig {
            idle_trickle: 0.0,
            inertia: 1.0,
            speed: 0.0..0.0, // no radial component
            ..Default::default()
        };
        let mut engine = Engine::with_seed(config, 1);
        engine.pointer_moved(Vec2::ZERO);
        engine.pointer_moved(Vec2::new(40.0, 0.0));

        for p in engine.particles() {
            assert_eq!(p.velocity, Vec2::new(40.0, 0.0));
        }
    }

    #[test]
    fn lives_decrease_every_tick() {
        let mut engine = Engine::with_seed(strict_config(), 1);
        sweep(&mut engine, 4, 50.0);

        let before: Vec<f32> = engine.particles().map(|p| p.life).collect();
        engine.step();
        let after: Vec<f32> = engine.particles().map(|p| p.life).collect();

        // Nothing expires on the first tick (decay < 0.05), so the store
        // keeps its order and lengths match up.
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert!(a < b);
            assert!(*a > 0.0);
        }
    }

    #[test]
    fn store_drains_once_pointer_stops() {
        let mut engine = Engine::with_seed(strict_config(), 1);
        sweep(&mut engine, 4, 50.0);

        // Worst-case lifetime is 1 / 0.02 = 50 ticks.
        for _ in 0..51 {
            engine.step();
        }
        assert_eq!(engine.particle_count(), 0);
    }

    #[test]
    fn same_seed_and_input_is_deterministic() {
        let mut a = Engine::with_seed(strict_config(), 7);
        let mut b = Engine::with_seed(strict_config(), 7);

        sweep(&mut a, 10, 30.0);
        sweep(&mut b, 10, 30.0);
        a.step();
        b.step();

        let pa: Vec<Particle> = a.particles().copied().collect();
        let pb: Vec<Particle> = b.particles().copied().collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut engine = Engine::with_seed(strict_config(), 1);
        sweep(&mut engine, 4, 50.0);

        engine.clear();
        assert_eq!(engine.particle_count(), 0);
        engine.clear();
        assert_eq!(engine.particle_count(), 0);
    }
}
