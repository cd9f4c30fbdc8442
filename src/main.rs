use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

mod core;
mod engine;
mod game;

use engine::audio::LogAudio;
use engine::game_loop::{Clock, GameLoop};
use engine::input::PointerTracker;
use engine::renderer::{HudAnchor, HudSink, LogRenderer};
use game::{GameConfig, Session, StepOutcome};

const TITLE: &str = "Bonk";

/// Ticks between status lines in the log
const STATUS_INTERVAL: u64 = 600;

/// Shows the HUD line in the window title
struct TitleHud {
    window: Window,
    text: String,
}

impl HudSink for TitleHud {
    fn draw_text(&mut self, text: &str, _anchor: HudAnchor) {
        if self.text != text {
            self.text = text.to_string();
            self.window.set_title(&format!("{} - {}", TITLE, text));
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Bonk...");

    let config = GameConfig::from_env().context("invalid configuration")?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut tracker = PointerTracker::new(window.scale_factor());
    let mut session = Session::new(&config);
    let mut game_loop = GameLoop::new(config.tick_rate, config.max_catch_up);
    let mut audio = LogAudio::new();
    let mut renderer = LogRenderer::new();
    let mut hud = TitleHud {
        window,
        text: String::new(),
    };
    let mut next_status = STATUS_INTERVAL;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => {
                if let WindowEvent::RedrawRequested = event {
                    session.render(&mut renderer, &mut hud);
                    trace!("frame {}: {} circles", renderer.frame(), renderer.circles());
                } else if let Some(pointer) = tracker.translate(&event, game_loop.now()) {
                    session.push_event(pointer);
                }
            }
            Event::AboutToWait => {
                let ticks = game_loop.begin_frame();
                for _ in 0..ticks {
                    if session.step(&mut audio) == StepOutcome::Quit {
                        info!(
                            "Shutting down after {} frames and {} collision cues",
                            renderer.frame(),
                            audio.played()
                        );
                        elwt.exit();
                        return;
                    }
                    for hit in session.world().collision_events() {
                        debug!(
                            "Bodies {} and {} collided, impulse {:.1}",
                            hit.first, hit.second, hit.impulse
                        );
                    }
                }

                if game_loop.tick_count() >= next_status {
                    next_status += STATUS_INTERVAL;
                    let world = session.world();
                    let momentum = world.total_momentum();
                    info!(
                        "{:.0} fps over {} frames, {} collisions, kinetic energy {:.1}, momentum ({:.1}, {:.1})",
                        game_loop.fps(),
                        game_loop.frame_count(),
                        world.collision_count(),
                        world.kinetic_energy(),
                        momentum.x,
                        momentum.y
                    );
                }

                if ticks > 0 {
                    hud.window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(
                    Instant::now() + game_loop.time_to_next_tick(),
                ));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
