//! Moving entities: the vehicle, obstacles, particles and weather.

pub mod particle;
pub mod pipe;
pub mod vehicle;
pub mod weather;

pub use particle::{Burst, BurstColor, Particle, ParticleSystem};
pub use pipe::Pipe;
pub use vehicle::Vehicle;
pub use weather::{WeatherEffect, WeatherEvent, WeatherKind, WeatherState};
