//! FlyVibe - an endless flyer arcade game.
//!
//! The simulation (`core`, `flight`, `environment`) is independent of any
//! backend: entities draw through [`render::Painter`] and sounds go out as
//! [`audio::SoundCue`]s. The terminal frontend (`ui`, `input`) and the
//! headless balance tool (`simulator`) both drive the same
//! [`core::Session`].

pub mod audio;
pub mod core;
pub mod environment;
pub mod flight;
pub mod input;
pub mod render;
pub mod simulator;
pub mod ui;
pub mod utils;
