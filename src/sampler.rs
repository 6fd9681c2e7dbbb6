//! Pointer sampling: turns raw movement events into spawn requests.
//!
//! The sampler is the throttle between the platform's pointer-event rate
//! and the particle store. It retains the previous pointer position,
//! measures per-event displacement, and suppresses spawns for
//! near-stationary pointers apart from a low-probability idle trickle.

use glam::Vec2;

use crate::spawn::SpawnContext;

/// The spawn decision for one pointer-movement event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    /// Where the burst originates: the current pointer position.
    pub origin: Vec2,
    /// Raw pointer displacement since the previous event. Spawned particles
    /// inherit a fraction of this as inertia.
    pub displacement: Vec2,
    /// How many particles to spawn for this event.
    pub count: u32,
}

/// Distance-throttled spawn gating for pointer movement.
pub struct PointerSampler {
    last: Option<Vec2>,
    threshold: f32,
    idle_trickle: f32,
    max_burst: u32,
    burst_scale: f32,
}

impl PointerSampler {
    /// Create a sampler.
    ///
    /// * `threshold` - minimum per-event travel (pixels) for a guaranteed
    ///   spawn.
    /// * `idle_trickle` - probability of spawning anyway when below the
    ///   threshold. Zero disables idle sparks entirely.
    /// * `max_burst` - upper bound on particles per event.
    /// * `burst_scale` - particles per pixel of travel; the burst size is
    ///   `min(max_burst, floor(distance * burst_scale) + 1)`.
    pub fn new(threshold: f32, idle_trickle: f32, max_burst: u32, burst_scale: f32) -> Self {
        Self {
            last: None,
            threshold,
            idle_trickle,
            max_burst,
            burst_scale,
        }
    }

    /// Feed one pointer-movement event, returning the spawn decision.
    ///
    /// The retained sample is overwritten on every call. The first event
    /// after creation (or after [`PointerSampler::reset`]) only primes the
    /// sample: there is no previous position to measure against, so it
    /// never spawns.
    pub fn sample(&mut self, pos: Vec2, ctx: &mut SpawnContext) -> Option<SpawnRequest> {
        let last = self.last.replace(pos)?;

        let displacement = pos - last;
        let distance = displacement.length();

        if distance < self.threshold && ctx.random() >= self.idle_trickle {
            return None;
        }

        let count = ((distance * self.burst_scale) as u32 + 1).min(self.max_burst);
        Some(SpawnRequest {
            origin: pos,
            displacement,
            count,
        })
    }

    /// Forget the retained sample, e.g. when the pointer leaves the window.
    /// The next event re-primes instead of measuring a displacement across
    /// the gap.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict_sampler() -> PointerSampler {
        // No idle trickle: below-threshold events must never spawn.
        PointerSampler::new(2.0, 0.0, 5, 0.5)
    }

    #[test]
    fn first_event_only_primes() {
        let mut sampler = strict_sampler();
        let mut ctx = SpawnContext::from_seed(1);
        assert!(sampler.sample(Vec2::new(300.0, 300.0), &mut ctx).is_none());
    }

    #[test]
    fn below_threshold_never_spawns_without_trickle() {
        let mut sampler = strict_sampler();
        let mut ctx = SpawnContext::from_seed(1);
        sampler.sample(Vec2::new(100.0, 100.0), &mut ctx);

        for i in 0..200 {
            let wiggle = Vec2::new(100.0 + (i % 2) as f32, 100.0);
            assert!(sampler.sample(wiggle, &mut ctx).is_none());
        }
    }

    #[test]
    fn fast_movement_spawns_capped_burst() {
        let mut sampler = strict_sampler();
        let mut ctx = SpawnContext::from_seed(1);
        sampler.sample(Vec2::new(0.0, 0.0), &mut ctx);

        let req = sampler.sample(Vec2::new(100.0, 0.0), &mut ctx).unwrap();
        assert_eq!(req.count, 5); // min(5, floor(100 * 0.5) + 1)
        assert_eq!(req.origin, Vec2::new(100.0, 0.0));
        assert_eq!(req.displacement, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn slow_movement_spawns_single_particle() {
        let mut sampler = strict_sampler();
        let mut ctx = SpawnContext::from_seed(1);
        sampler.sample(Vec2::new(0.0, 0.0), &mut ctx);

        let req = sampler.sample(Vec2::new(3.0, 0.0), &mut ctx).unwrap();
        assert_eq!(req.count, 2); // floor(3 * 0.5) + 1
    }

    #[test]
    fn idle_trickle_spawns_roughly_its_probability() {
        let mut sampler = PointerSampler::new(2.0, 0.1, 5, 0.5);
        let mut ctx = SpawnContext::from_seed(42);
        sampler.sample(Vec2::new(100.0, 100.0), &mut ctx);

        let mut spawns = 0;
        for i in 0..1000 {
            let wiggle = Vec2::new(100.0 + (i % 2) as f32 * 0.5, 100.0);
            if sampler.sample(wiggle, &mut ctx).is_some() {
                spawns += 1;
            }
        }
        // Expect ~100 out of 1000; allow a generous band for the fixed seed.
        assert!((50..200).contains(&spawns), "got {spawns} trickle spawns");
    }

    #[test]
    fn reset_forgets_last_sample() {
        let mut sampler = strict_sampler();
        let mut ctx = SpawnContext::from_seed(1);
        sampler.sample(Vec2::new(0.0, 0.0), &mut ctx);
        sampler.reset();

        // Would be a 500 px jump, but the sampler re-primes instead.
        assert!(sampler.sample(Vec2::new(500.0, 0.0), &mut ctx).is_none());
    }
}
