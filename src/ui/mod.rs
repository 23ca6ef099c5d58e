//! Terminal UI scenes.

pub mod game_common;
pub mod game_scene;
pub mod setup_scene;
