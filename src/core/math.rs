// Math utilities and helper functions

use glam::DVec2;

/// The rectangular playfield. Origin is the top-left corner, +y points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if a circle lies entirely inside the arena
    pub fn fits_circle(&self, center: DVec2, radius: f64) -> bool {
        center.x >= radius
            && center.x <= self.width - radius
            && center.y >= radius
            && center.y <= self.height - radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_circle() {
        let arena = Arena::new(100.0, 50.0);
        assert!(arena.fits_circle(DVec2::new(10.0, 10.0), 10.0));
        assert!(arena.fits_circle(DVec2::new(90.0, 40.0), 10.0));
        assert!(!arena.fits_circle(DVec2::new(9.9, 25.0), 10.0));
        assert!(!arena.fits_circle(DVec2::new(50.0, 40.1), 10.0));
    }
}
