// Pointer events as delivered to the interaction controller

use glam::DVec2;

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    Press(DVec2),
    Move(DVec2),
    Release(DVec2),
    Quit,
}

/// A pointer event stamped with the time it arrived, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub time: f64,
}

impl PointerEvent {
    pub fn press(x: f64, y: f64, time: f64) -> Self {
        Self {
            kind: PointerKind::Press(DVec2::new(x, y)),
            time,
        }
    }

    pub fn moved(x: f64, y: f64, time: f64) -> Self {
        Self {
            kind: PointerKind::Move(DVec2::new(x, y)),
            time,
        }
    }

    pub fn release(x: f64, y: f64, time: f64) -> Self {
        Self {
            kind: PointerKind::Release(DVec2::new(x, y)),
            time,
        }
    }

    pub fn quit(time: f64) -> Self {
        Self {
            kind: PointerKind::Quit,
            time,
        }
    }
}
