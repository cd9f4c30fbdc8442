// Core value types shared by the engine and the game

pub mod color;
pub mod math;
