/// Game loop timing and control system
///
/// Implements a fixed timestep game loop: the simulation advances in whole
/// ticks at a constant rate regardless of how often frames are presented.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Reference simulation rate (ticks per second)
pub const DEFAULT_TICK_RATE: f64 = 60.0;

/// Maximum number of ticks per frame to prevent spiral of death
pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Source of timestamps, in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Game loop timing state
pub struct GameLoop {
    /// Length of one tick
    tick_duration: Duration,

    /// Cap on ticks run by a single frame
    max_catch_up: u32,

    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when game loop started
    start_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f64,
}

impl GameLoop {
    /// Create a new game loop running at `tick_rate` ticks per second
    pub fn new(tick_rate: f64, max_catch_up: u32) -> Self {
        let now = Instant::now();
        Self {
            tick_duration: Duration::from_secs_f64(1.0 / tick_rate),
            max_catch_up,
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE + 1),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.accumulate(frame_time)
    }

    /// Add elapsed time and take as many whole ticks as allowed
    fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < self.max_catch_up {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        // Drop time we could not catch up on instead of bursting later
        if ticks == self.max_catch_up && self.accumulator >= self.tick_duration {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Length of one tick
    #[cfg(test)]
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Time until the next tick is due
    pub fn time_to_next_tick(&self) -> Duration {
        self.tick_duration.saturating_sub(self.accumulator)
    }

    /// Get current FPS
    pub fn fps(&self) -> f64 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames presented
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f64() / self.frame_times.len() as f64;

        // Convert to FPS
        self.current_fps = if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE, DEFAULT_MAX_CATCH_UP)
    }
}

impl Clock for GameLoop {
    /// Seconds since the loop was created
    fn now(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::default();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
    }

    #[test]
    fn test_tick_duration() {
        let game_loop = GameLoop::default();
        let secs = game_loop.tick_duration().as_secs_f64();
        assert!((secs - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_accumulate_whole_ticks() {
        let mut game_loop = GameLoop::new(10.0, 5);

        assert_eq!(game_loop.accumulate(Duration::from_millis(50)), 0);
        assert_eq!(game_loop.accumulate(Duration::from_millis(60)), 1);
        assert_eq!(game_loop.accumulate(Duration::from_millis(200)), 2);
        assert_eq!(game_loop.tick_count(), 3);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut game_loop = GameLoop::new(60.0, 5);

        // 300ms would allow 18 ticks
        assert_eq!(game_loop.accumulate(Duration::from_millis(300)), 5);
        // The backlog was dropped
        assert_eq!(game_loop.accumulate(Duration::ZERO), 0);
    }

    #[test]
    fn test_time_to_next_tick() {
        let mut game_loop = GameLoop::new(10.0, 5);
        game_loop.accumulate(Duration::from_millis(30));
        assert_eq!(game_loop.time_to_next_tick(), Duration::from_millis(70));
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::default();
        assert_eq!(game_loop.frame_count(), 0);

        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 1);

        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_clock_advances() {
        let game_loop = GameLoop::default();
        let start = game_loop.now();
        thread::sleep(Duration::from_millis(10));
        assert!(game_loop.now() - start >= 0.01);
    }

    #[test]
    fn test_begin_frame_bounded() {
        let mut game_loop = GameLoop::default();
        thread::sleep(Duration::from_millis(300));
        assert!(game_loop.begin_frame() <= DEFAULT_MAX_CATCH_UP);
    }
}
