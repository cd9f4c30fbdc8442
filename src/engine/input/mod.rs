// Pointer input handling
//
// ## Architecture
//
// - `event`: timestamped pointer events (press, move, release, quit)
// - `pointer`: translation of winit window events into pointer events
// - `queue`: FIFO buffering events between ticks
// - `controller`: grab / drag / fling / double-press reset state machine
//
// ## Usage Example
//
// ```rust
// use engine::input::{InteractionController, PointerQueue, PointerTracker};
//
// // In your event loop, translate window events
// if let Some(event) = tracker.translate(&window_event, clock.now()) {
//     queue.push(event);
// }
//
// // Once per tick, apply everything that arrived, oldest first
// for event in queue.drain() {
//     controller.handle(event, &mut world);
// }
// ```

pub mod controller;
pub mod event;
pub mod pointer;
pub mod queue;

// Re-export commonly used types
pub use controller::{InteractionController, InteractionOutcome};
pub use event::PointerEvent;
pub use pointer::PointerTracker;
pub use queue::PointerQueue;
