use glam::DVec2;
use rand::Rng;
use std::f64::consts::PI;
use std::ops::RangeInclusive;

use crate::core::color::Rgb;
use crate::core::math::Arena;

/// Ranges used when a body is (re)randomized
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParams {
    /// Radius is drawn uniformly from this closed range
    pub radius: RangeInclusive<f64>,
    /// Per-axis speed magnitude, drawn from `[min, max)`
    pub speed_min: f64,
    pub speed_max: f64,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            radius: 10.0..=30.0,
            speed_min: 1.0,
            speed_max: 2.0,
        }
    }
}

/// Plain state produced by [`randomize`], applied to a body on reset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub color: Rgb,
}

/// Draw a fresh body state that fits entirely inside `arena`.
///
/// The arena must be at least twice the largest radius on each axis;
/// `GameConfig::validate` guarantees that for configured worlds.
pub fn randomize<R: Rng + ?Sized>(arena: Arena, params: &BodyParams, rng: &mut R) -> BodyState {
    let radius = rng.gen_range(params.radius.clone());
    let position = DVec2::new(
        rng.gen_range(radius..=arena.width - radius),
        rng.gen_range(radius..=arena.height - radius),
    );
    let velocity = DVec2::new(
        random_sign(rng) * rng.gen_range(params.speed_min..params.speed_max),
        random_sign(rng) * rng.gen_range(params.speed_min..params.speed_max),
    );

    debug_assert!(arena.fits_circle(position, radius));

    BodyState {
        position,
        velocity,
        radius,
        color: Rgb::random(rng),
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// A movable circle in the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Center, in arena coordinates
    pub position: DVec2,

    /// Displacement per tick
    pub velocity: DVec2,

    radius: f64,

    pub color: Rgb,

    /// While set, the pointer drives `position` and `advance` does nothing
    pub grabbed: bool,
}

impl Body {
    /// Create a randomized body inside `arena`
    pub fn random<R: Rng + ?Sized>(arena: Arena, params: &BodyParams, rng: &mut R) -> Self {
        Self::from(randomize(arena, params, rng))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass is proportional to area
    pub fn mass(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Re-randomize in place and drop any grab
    pub fn reset<R: Rng + ?Sized>(&mut self, arena: Arena, params: &BodyParams, rng: &mut R) {
        self.apply(randomize(arena, params, rng));
    }

    /// Overwrite the body with a previously drawn state
    pub fn apply(&mut self, state: BodyState) {
        *self = Body::from(state);
    }

    /// Integrate one tick of motion and bounce off the arena walls.
    ///
    /// Reflection only negates the velocity component; the position is not
    /// pushed back, so a body may sit past a wall for a tick.
    pub fn advance(&mut self, arena: Arena) {
        if self.grabbed {
            return;
        }

        self.position += self.velocity;

        if self.position.x - self.radius <= 0.0 || self.position.x + self.radius >= arena.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - self.radius <= 0.0 || self.position.y + self.radius >= arena.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Strict circle-circle intersection; tangent circles do not overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }

    /// Grab hit-test
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.position.distance(point) < self.radius
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.length_squared()
    }
}

impl From<BodyState> for Body {
    fn from(state: BodyState) -> Self {
        Self {
            position: state.position,
            velocity: state.velocity,
            radius: state.radius,
            color: state.color,
            grabbed: false,
        }
    }
}

/// Builder for bodies with explicit state
#[cfg(test)]
pub struct BodyBuilder {
    position: DVec2,
    velocity: DVec2,
    radius: f64,
    color: Rgb,
}

#[cfg(test)]
impl BodyBuilder {
    /// Start a body of the given radius at the origin, at rest
    pub fn new(radius: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            radius,
            color: Rgb::default(),
        }
    }

    /// Set the center
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = DVec2::new(x, y);
        self
    }

    /// Set the per-tick velocity
    pub fn velocity(mut self, x: f64, y: f64) -> Self {
        self.velocity = DVec2::new(x, y);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Build the body
    pub fn build(self) -> Body {
        assert!(self.radius > 0.0, "body radius must be positive");
        Body {
            position: self.position,
            velocity: self.velocity,
            radius: self.radius,
            color: self.color,
            grabbed: false,
        }
    }
}
