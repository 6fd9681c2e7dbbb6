//! Bounded, insertion-ordered storage for live particles.

use std::collections::VecDeque;

use crate::particle::Particle;

/// The set of currently live particles, oldest first.
///
/// The store is bounded: inserting into a full store evicts the oldest
/// particle, so sustained fast pointer movement cannot grow it without
/// limit. Insertion order is preserved across removals, which is what makes
/// oldest-first eviction a simple pop from the front.
pub struct ParticleStore {
    particles: VecDeque<Particle>,
    max_particles: usize,
}

impl ParticleStore {
    /// Create an empty store holding at most `max_particles` at once.
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(max_particles),
            max_particles,
        }
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The configured maximum number of concurrent particles.
    #[inline]
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// Insert a particle, evicting the oldest one first if the store is
    /// full. A zero-capacity store drops every insert.
    pub fn push(&mut self, particle: Particle) {
        if self.max_particles == 0 {
            return;
        }
        if self.particles.len() >= self.max_particles {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
    }

    /// One simulation tick: advance every particle in insertion order and
    /// drop the ones whose life ran out.
    ///
    /// This is a single compacting pass, so every surviving particle is
    /// visited exactly once and none is skipped when its neighbors are
    /// removed. Expired particles are gone before the tick ends; they are
    /// never observable with `life <= 0`. Running on an empty store is a
    /// no-op.
    pub fn advance_and_cull(&mut self) {
        self.particles.retain_mut(|p| {
            p.advance();
            !p.is_expired()
        });
    }

    /// Iterate live particles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Drop all particles. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn spark(tag: f32, life: f32, decay: f32) -> Particle {
        Particle {
            position: Vec2::new(tag, 0.0),
            velocity: Vec2::ZERO,
            life,
            decay,
            size: 1.0,
            color: Vec3::ONE,
        }
    }

    #[test]
    fn push_evicts_oldest_at_capacity() {
        let mut store = ParticleStore::new(3);
        for tag in 0..5 {
            store.push(spark(tag as f32, 1.0, 0.0));
        }

        assert_eq!(store.len(), 3);
        let tags: Vec<f32> = store.iter().map(|p| p.position.x).collect();
        assert_eq!(tags, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_store_stays_empty() {
        let mut store = ParticleStore::new(0);
        store.push(spark(0.0, 1.0, 0.0));
        assert!(store.is_empty());
    }

    #[test]
    fn cull_removes_expired_in_same_tick() {
        let mut store = ParticleStore::new(8);
        store.push(spark(0.0, 0.05, 0.1)); // dies this tick
        store.push(spark(1.0, 1.0, 0.1));

        store.advance_and_cull();

        assert_eq!(store.len(), 1);
        for p in store.iter() {
            assert!(p.life > 0.0);
        }
    }

    #[test]
    fn compaction_keeps_every_survivor_exactly_once() {
        // Particles at even indices expire this tick; the odd ones survive
        // and must all still be present, in order, with no duplicates.
        let mut store = ParticleStore::new(16);
        for i in 0..10 {
            let life = if i % 2 == 0 { 0.05 } else { 1.0 };
            store.push(spark(i as f32, life, 0.1));
        }

        store.advance_and_cull();

        let tags: Vec<f32> = store.iter().map(|p| p.position.x).collect();
        assert_eq!(tags, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn cull_on_empty_store_is_noop() {
        let mut store = ParticleStore::new(4);
        store.advance_and_cull();
        assert!(store.is_empty());

        store.clear();
        store.clear();
        assert!(store.is_empty());
    }
}
