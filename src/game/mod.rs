// Game layer: configuration and the session driving each tick

pub mod config;
pub mod session;

pub use config::GameConfig;
pub use session::{Session, StepOutcome};
