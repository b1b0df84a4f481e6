//! Terminal presentation: layout widgets plus the half-block raster that
//! draws the world.

pub mod flight_scene;
pub mod game_common;
pub mod raster;

pub use flight_scene::render_flyvibe;
