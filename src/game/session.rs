// One play session: world, interaction state and pending input

use super::config::GameConfig;
use crate::core::color::Rgb;
use crate::engine::audio::AudioCue;
use crate::engine::input::{InteractionController, InteractionOutcome, PointerEvent, PointerQueue};
use crate::engine::physics::World;
use crate::engine::renderer::{HudAnchor, HudSink, RenderSink};

/// Background fill
pub const BACKGROUND: Rgb = Rgb::WHITE;

/// Inset of the collision counter from the top-right corner
pub const HUD_MARGIN: f64 = 10.0;

/// Result of a [`Session::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

/// Text shown by the HUD for a collision count
pub fn hud_text(collision_count: u64) -> String {
    format!("Collisions: {}", collision_count)
}

/// Owns everything a tick mutates
pub struct Session {
    world: World,
    controller: InteractionController,
    queue: PointerQueue,
}

impl Session {
    /// Build a session from a validated configuration
    pub fn new(config: &GameConfig) -> Self {
        let mut world = match config.seed {
            Some(seed) => World::seeded(
                config.arena(),
                config.body_params(),
                config.body_count,
                seed,
            ),
            None => World::new(config.arena(), config.body_params(), config.body_count),
        };
        world.set_restitution(config.restitution);

        log::info!(
            "Session created: {} bodies in {}x{} arena",
            config.body_count,
            config.width,
            config.height
        );

        Self::from_parts(
            world,
            InteractionController::with_tuning(config.double_press_window, config.fling_divisor),
        )
    }

    pub fn from_parts(world: World, controller: InteractionController) -> Self {
        Self {
            world,
            controller,
            queue: PointerQueue::new(),
        }
    }

    /// Queue an event for the next step
    pub fn push_event(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    /// Apply every queued event in arrival order, then run one tick.
    ///
    /// A quit event stops processing: later events are discarded and the
    /// world is not advanced.
    pub fn step(&mut self, audio: &mut dyn AudioCue) -> StepOutcome {
        for event in self.queue.drain() {
            match self.controller.handle(event, &mut self.world) {
                InteractionOutcome::Quit => {
                    log::info!("Quit requested");
                    return StepOutcome::Quit;
                }
                InteractionOutcome::Reset => {
                    log::info!("Double press: game reset");
                }
                _ => {}
            }
        }

        self.world.tick(audio);
        StepOutcome::Continue
    }

    /// Describe the current frame to the render and HUD sinks
    pub fn render(&self, sink: &mut dyn RenderSink, hud: &mut dyn HudSink) {
        sink.clear(BACKGROUND);
        for body in self.world.bodies() {
            sink.draw_circle(body.position, body.radius(), body.color);
        }
        hud.draw_text(
            &hud_text(self.world.collision_count()),
            HudAnchor::TopRight { margin: HUD_MARGIN },
        );
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[cfg(test)]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }
}
