// Translation from winit window events to pointer events

use glam::DVec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::event::PointerEvent;

/// Mouse button bound to grab/drag/fling
pub const GRAB_BUTTON: MouseButton = MouseButton::Left;

/// Tracks the cursor so button events can carry a position.
///
/// winit reports button state without coordinates, so the last
/// `CursorMoved` position is reused for presses and releases.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    /// Last cursor position in arena (logical) coordinates
    cursor: DVec2,

    /// Physical pixels per logical pixel
    scale_factor: f64,
}

impl PointerTracker {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            cursor: DVec2::ZERO,
            scale_factor,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Convert a window event into a pointer event stamped with `time`
    pub fn translate(&mut self, event: &WindowEvent, time: f64) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position, time)),
            WindowEvent::MouseInput { state, button, .. } => self.button(*state, *button, time),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                None
            }
            WindowEvent::CloseRequested => Some(PointerEvent::quit(time)),
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>, time: f64) -> PointerEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        self.cursor = DVec2::new(logical.x, logical.y);
        PointerEvent::moved(self.cursor.x, self.cursor.y, time)
    }

    /// Only the grab button produces events
    pub fn button(
        &mut self,
        state: ElementState,
        button: MouseButton,
        time: f64,
    ) -> Option<PointerEvent> {
        if button != GRAB_BUTTON {
            return None;
        }

        let DVec2 { x, y } = self.cursor;
        Some(match state {
            ElementState::Pressed => PointerEvent::press(x, y, time),
            ElementState::Released => PointerEvent::release(x, y, time),
        })
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(1.0)
    }
}
