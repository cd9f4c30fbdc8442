// Grab / drag / fling state machine

use glam::DVec2;

use super::event::{PointerEvent, PointerKind};
use crate::engine::physics::World;

/// Two presses closer together than this (seconds) reset the game
pub const DOUBLE_PRESS_WINDOW: f64 = 0.3;

/// Drag displacement is divided by this to give the fling velocity
pub const FLING_DIVISOR: f64 = 10.0;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,

    /// `body` is under the pointer; `anchor` is where the press landed
    Dragging { body: usize, anchor: DVec2 },
}

/// What an event did, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionOutcome {
    Grabbed(usize),
    Dragged(usize),
    Flung { body: usize, velocity: DVec2 },
    Reset,
    Quit,
    Ignored,
}

/// Interprets pointer events against the bodies of a [`World`]
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: DragState,

    /// Time of the previous press, if any
    last_press_time: Option<f64>,

    double_press_window: f64,

    fling_divisor: f64,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::with_tuning(DOUBLE_PRESS_WINDOW, FLING_DIVISOR)
    }

    pub fn with_tuning(double_press_window: f64, fling_divisor: f64) -> Self {
        Self {
            state: DragState::Idle,
            last_press_time: None,
            double_press_window,
            fling_divisor,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Index of the body currently held, if any
    #[cfg(test)]
    pub fn grabbed_body(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { body, .. } => Some(body),
            DragState::Idle => None,
        }
    }

    /// Apply one pointer event to `world`
    pub fn handle(&mut self, event: PointerEvent, world: &mut World) -> InteractionOutcome {
        match event.kind {
            PointerKind::Press(point) => self.press(point, event.time, world),
            PointerKind::Move(point) => self.drag(point, world),
            PointerKind::Release(point) => self.release(point, world),
            PointerKind::Quit => InteractionOutcome::Quit,
        }
    }

    fn press(&mut self, point: DVec2, time: f64, world: &mut World) -> InteractionOutcome {
        let double_press = self
            .last_press_time
            .is_some_and(|last| time - last < self.double_press_window);
        self.last_press_time = Some(time);

        if double_press {
            // reset_all clears every grab flag, so the drag ends with it
            world.reset_all();
            self.state = DragState::Idle;
            return InteractionOutcome::Reset;
        }

        if let DragState::Dragging { .. } = self.state {
            return InteractionOutcome::Ignored;
        }

        // First hit in index order wins
        let hit = world
            .bodies()
            .iter()
            .position(|body| body.contains_point(point));

        match hit.and_then(|index| world.body_mut(index).map(|body| (index, body))) {
            Some((index, body)) => {
                body.grabbed = true;
                self.state = DragState::Dragging {
                    body: index,
                    anchor: point,
                };
                log::debug!("Grabbed body {} at ({:.1}, {:.1})", index, point.x, point.y);
                InteractionOutcome::Grabbed(index)
            }
            None => InteractionOutcome::Ignored,
        }
    }

    fn drag(&mut self, point: DVec2, world: &mut World) -> InteractionOutcome {
        let DragState::Dragging { body: index, .. } = self.state else {
            return InteractionOutcome::Ignored;
        };

        match world.body_mut(index) {
            Some(body) => {
                body.position = point;
                InteractionOutcome::Dragged(index)
            }
            None => InteractionOutcome::Ignored,
        }
    }

    fn release(&mut self, point: DVec2, world: &mut World) -> InteractionOutcome {
        let DragState::Dragging {
            body: index,
            anchor,
        } = self.state
        else {
            return InteractionOutcome::Ignored;
        };
        self.state = DragState::Idle;

        let Some(body) = world.body_mut(index) else {
            return InteractionOutcome::Ignored;
        };
        let velocity = (point - anchor) / self.fling_divisor;
        body.velocity = velocity;
        body.grabbed = false;
        log::debug!(
            "Flung body {} with velocity ({:.2}, {:.2})",
            index,
            velocity.x,
            velocity.y
        );

        InteractionOutcome::Flung {
            body: index,
            velocity,
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
