//! A simple pilot: hold the vehicle around the next gap's midpoint.

use crate::core::session::Session;
use crate::flight::Pipe;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Distance below the target before a flap is triggered.
    pub margin: f64,
}

impl Autopilot {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    /// The nearest pipe the vehicle has not yet cleared.
    pub fn next_pipe(session: &Session) -> Option<&Pipe> {
        session
            .pipes
            .iter()
            .filter(|p| !p.passed && p.right() >= session.vehicle.x - session.vehicle.width / 2.0)
            .min_by(|a, b| a.x.total_cmp(&b.x))
    }

    /// Height to hold: the next gap's midpoint, or a little above the middle
    /// of the sky when no pipe is on screen.
    pub fn target_y(session: &Session) -> f64 {
        match Self::next_pipe(session) {
            Some(pipe) => pipe.gap_mid(),
            None => {
                let w = &session.config().world;
                (w.height - w.ground_height) / 2.0
            }
        }
    }

    /// Flap when sinking below the target and the cooldown allows it.
    pub fn should_flap(&self, session: &Session) -> bool {
        let vehicle = &session.vehicle;
        vehicle.alive
            && vehicle.flap_cooldown == 0
            && vehicle.velocity >= 0.0
            && vehicle.y > Self::target_y(session) + self.margin
    }
}
