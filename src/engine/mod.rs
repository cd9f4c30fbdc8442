// Engine modules: physics, input, game loop, audio and render boundaries

pub mod audio;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
