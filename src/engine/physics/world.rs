use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::body::{Body, BodyParams};
use super::collision::{self, CollisionEvent, CollisionEventQueue, Resolution};
use crate::core::math::Arena;
use crate::engine::audio::AudioCue;

/// Owns the bodies of a session and advances them
pub struct World {
    /// Playfield the bodies bounce inside
    arena: Arena,

    /// Ranges used whenever a body is re-randomized
    params: BodyParams,

    /// Restitution applied to every contact
    restitution: f64,

    /// Bodies in stable order; earlier pairs resolve first
    bodies: Vec<Body>,

    /// Resolved collisions since the last reset
    collision_count: u64,

    /// Pairs resolved during the most recent tick
    events: CollisionEventQueue,

    /// Randomness source for resets
    rng: StdRng,
}

impl World {
    /// Create a world of `count` random bodies seeded from OS entropy
    pub fn new(arena: Arena, params: BodyParams, count: usize) -> Self {
        Self::with_rng(arena, params, count, StdRng::from_entropy())
    }

    /// Create a world whose randomness is fully determined by `seed`
    pub fn seeded(arena: Arena, params: BodyParams, count: usize, seed: u64) -> Self {
        Self::with_rng(arena, params, count, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(arena: Arena, params: BodyParams, count: usize, mut rng: StdRng) -> Self {
        let bodies = (0..count)
            .map(|_| Body::random(arena, &params, &mut rng))
            .collect();

        Self {
            arena,
            params,
            restitution: collision::RESTITUTION,
            bodies,
            collision_count: 0,
            events: CollisionEventQueue::new(),
            rng,
        }
    }

    /// Create a world from explicit bodies
    #[cfg(test)]
    pub fn from_bodies(arena: Arena, params: BodyParams, bodies: Vec<Body>, seed: u64) -> Self {
        Self {
            arena,
            params,
            restitution: collision::RESTITUTION,
            bodies,
            collision_count: 0,
            events: CollisionEventQueue::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Override the contact restitution
    pub fn set_restitution(&mut self, restitution: f64) {
        self.restitution = restitution;
    }

    /// Step the simulation forward by one tick.
    ///
    /// Every ungrabbed body moves first, then each unordered pair is visited
    /// once in index order. Pair overlap is evaluated against the state left
    /// by earlier pairs of the same tick and never revisited.
    pub fn tick(&mut self, audio: &mut dyn AudioCue) {
        self.events.clear();

        for body in self.bodies.iter_mut().filter(|body| !body.grabbed) {
            body.advance(self.arena);
        }

        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];

            for (offset, b) in tail.iter_mut().enumerate() {
                if !a.overlaps(b) {
                    continue;
                }

                if let Resolution::Resolved { impulse, .. } =
                    collision::resolve(a, b, self.restitution)
                {
                    self.collision_count += 1;
                    self.events.push(CollisionEvent {
                        first: i,
                        second: i + 1 + offset,
                        impulse,
                    });
                    audio.play_collision_sound();
                }
            }
        }
    }

    /// Re-randomize every body and zero the collision counter
    pub fn reset_all(&mut self) {
        for body in &mut self.bodies {
            body.reset(self.arena, &self.params, &mut self.rng);
        }
        self.collision_count = 0;
        self.events.clear();
        log::info!("World reset ({} bodies)", self.bodies.len());
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    /// Pairs resolved during the most recent tick
    pub fn collision_events(&self) -> &[CollisionEvent] {
        self.events.events()
    }

    #[cfg(test)]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Sum of `mass * velocity` over all bodies
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Sum of kinetic energy over all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
