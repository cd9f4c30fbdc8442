// Rendering boundary
//
// Rasterising circles and text belongs to the platform layer. The engine only
// describes a frame through these sinks, after the tick has finished, so the
// state being drawn is never mutated mid-call.

use glam::DVec2;

use crate::core::color::Rgb;

/// Where HUD text is anchored on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HudAnchor {
    /// Right-aligned against the top-right corner, inset by `margin`
    TopRight { margin: f64 },
}

/// Receives the shapes of one frame
pub trait RenderSink {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgb);

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Rgb);
}

/// Receives overlay text
pub trait HudSink {
    fn draw_text(&mut self, text: &str, anchor: HudAnchor);
}

/// Render sink that traces each draw call
#[derive(Debug, Default)]
pub struct LogRenderer {
    frame: u64,
    circles: usize,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames started so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Circles drawn in the current frame
    pub fn circles(&self) -> usize {
        self.circles
    }
}

impl RenderSink for LogRenderer {
    fn clear(&mut self, color: Rgb) {
        self.frame += 1;
        self.circles = 0;
        log::trace!("frame {} clear {:?}", self.frame, color);
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.circles += 1;
        log::trace!(
            "circle at ({:.1}, {:.1}) r={:.1} {:?}",
            center.x,
            center.y,
            radius,
            color
        );
    }
}
