// Circle-body physics: motion, wall bounces and elastic pair collisions

pub mod body;
mod collision;
mod world;

pub use body::BodyParams;
pub use collision::RESTITUTION;
pub use world::World;
