use glam::DVec2;

use super::body::Body;

/// Restitution of every body-body contact. 1.0 is perfectly elastic.
pub const RESTITUTION: f64 = 1.0;

/// Outcome of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Bodies were approaching; an impulse was applied along `normal`
    Resolved { impulse: f64, normal: DVec2 },

    /// Bodies overlap but already move apart, nothing applied
    Separating,

    /// Centers coincide, so no contact normal exists; nothing applied
    Coincident,
}

#[cfg(test)]
impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

/// Apply an impulse-based response to an overlapping pair.
///
/// The normal points from `a` to `b`. Momentum is conserved for any
/// restitution; kinetic energy only when `restitution == 1.0`.
pub fn resolve(a: &mut Body, b: &mut Body, restitution: f64) -> Resolution {
    let delta = b.position - a.position;
    let distance = delta.length();
    if distance == 0.0 {
        return Resolution::Coincident;
    }
    let normal = delta / distance;

    let relative_velocity = (b.velocity - a.velocity).dot(normal);
    if relative_velocity > 0.0 {
        return Resolution::Separating;
    }

    let inv_mass_a = a.mass().recip();
    let inv_mass_b = b.mass().recip();
    let impulse = -(1.0 + restitution) * relative_velocity / (inv_mass_a + inv_mass_b);

    a.velocity -= normal * (impulse * inv_mass_a);
    b.velocity += normal * (impulse * inv_mass_b);

    Resolution::Resolved { impulse, normal }
}

/// A pair that was resolved during a tick, by body index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub first: usize,
    pub second: usize,
    pub impulse: f64,
}

/// Collision events produced by the current tick
#[derive(Debug, Default)]
pub struct CollisionEventQueue {
    events: Vec<CollisionEvent>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Clear all events (call at start of a tick)
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, event: CollisionEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::BodyBuilder;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn momentum(a: &Body, b: &Body) -> DVec2 {
        a.momentum() + b.momentum()
    }

    #[test]
    fn test_equal_masses_exchange_velocities() {
        let mut a = BodyBuilder::new(10.0).position(0.0, 0.0).velocity(1.0, 0.0).build();
        let mut b = BodyBuilder::new(10.0).position(19.0, 0.0).velocity(-1.0, 0.0).build();

        let resolution = resolve(&mut a, &mut b, RESTITUTION);

        assert!(resolution.is_resolved());
        assert_abs_diff_eq!(a.velocity.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.velocity.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.velocity.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.velocity.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unequal_masses_conserve_momentum_and_energy() {
        let mut a = BodyBuilder::new(12.0).position(100.0, 100.0).velocity(1.8, -0.4).build();
        let mut b = BodyBuilder::new(27.0).position(130.0, 110.0).velocity(-1.1, 1.3).build();
        assert!(a.overlaps(&b));

        let p_before = momentum(&a, &b);
        let e_before = a.kinetic_energy() + b.kinetic_energy();

        assert!(resolve(&mut a, &mut b, RESTITUTION).is_resolved());

        let p_after = momentum(&a, &b);
        assert_relative_eq!(p_before.x, p_after.x, max_relative = 1e-9);
        assert_relative_eq!(p_before.y, p_after.y, max_relative = 1e-9);
        assert_relative_eq!(
            e_before,
            a.kinetic_energy() + b.kinetic_energy(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_resolved_pair_is_separating() {
        let mut a = BodyBuilder::new(15.0).position(0.0, 0.0).velocity(2.0, 1.0).build();
        let mut b = BodyBuilder::new(25.0).position(30.0, 5.0).velocity(-1.0, 0.0).build();

        assert!(resolve(&mut a, &mut b, RESTITUTION).is_resolved());
        // A second pass on the same overlap must not inject more energy
        assert_eq!(resolve(&mut a, &mut b, RESTITUTION), Resolution::Separating);
    }

    #[test]
    fn test_separating_pair_untouched() {
        let mut a = BodyBuilder::new(10.0).position(0.0, 0.0).velocity(-1.0, 0.0).build();
        let mut b = BodyBuilder::new(10.0).position(15.0, 0.0).velocity(1.0, 0.0).build();

        assert_eq!(resolve(&mut a, &mut b, RESTITUTION), Resolution::Separating);
        assert_eq!(a.velocity, DVec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_coincident_centers_skip() {
        let mut a = BodyBuilder::new(10.0).position(50.0, 50.0).velocity(1.0, 2.0).build();
        let mut b = BodyBuilder::new(20.0).position(50.0, 50.0).velocity(-3.0, 0.5).build();

        assert_eq!(resolve(&mut a, &mut b, RESTITUTION), Resolution::Coincident);
        assert_eq!(a.velocity, DVec2::new(1.0, 2.0));
        assert_eq!(b.velocity, DVec2::new(-3.0, 0.5));
    }

    #[test]
    fn test_inelastic_restitution_stops_equal_masses() {
        let mut a = BodyBuilder::new(10.0).position(0.0, 0.0).velocity(1.0, 0.0).build();
        let mut b = BodyBuilder::new(10.0).position(19.0, 0.0).velocity(-1.0, 0.0).build();

        resolve(&mut a, &mut b, 0.0);

        assert_abs_diff_eq!(a.velocity.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.velocity.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_event_queue_clear() {
        let mut queue = CollisionEventQueue::new();
        queue.push(CollisionEvent {
            first: 0,
            second: 1,
            impulse: 2.0,
        });
        assert_eq!(queue.events().len(), 1);

        queue.clear();
        assert!(queue.events().is_empty());
    }
}
