//! The day-night phase clock and the pure functions of phase it drives.
//!
//! Phase 0.0 is noon, 0.5 is midnight. Everything here except
//! [`DayCycle::advance`] is a pure function of phase.

use crate::render::Rgba;

/// Night window; clouds are fully suppressed and stars fully visible inside it.
pub const NIGHT_START: f64 = 0.40;
pub const NIGHT_END: f64 = 0.60;

const STAR_FADE_IN: (f64, f64) = (0.35, NIGHT_START);
const STAR_FADE_OUT: (f64, f64) = (NIGHT_END, 0.65);
const CLOUD_DUSK: (f64, f64) = (0.32, NIGHT_START);
const CLOUD_DAWN: (f64, f64) = (NIGHT_END, 0.68);
const LIGHT_DUSK: (f64, f64) = (0.30, 0.40);
const LIGHT_DAWN: (f64, f64) = (0.60, 0.70);
pub const NIGHT_LIGHTING: f64 = 0.35;

/// A labeled sky color at a phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyWaypoint {
    pub phase: f64,
    pub label: &'static str,
    pub color: Rgba,
}

const fn waypoint(phase: f64, label: &'static str, r: u8, g: u8, b: u8) -> SkyWaypoint {
    SkyWaypoint {
        phase,
        label,
        color: Rgba::rgb(r, g, b),
    }
}

/// Ordered by phase, first and last both noon so the cycle closes.
pub const SKY_WAYPOINTS: [SkyWaypoint; 9] = [
    waypoint(0.00, "noon", 135, 206, 235),
    waypoint(0.20, "afternoon", 170, 200, 225),
    waypoint(0.30, "sunset", 250, 140, 90),
    waypoint(0.38, "dusk", 90, 70, 130),
    waypoint(0.50, "midnight", 10, 12, 40),
    waypoint(0.62, "pre-dawn", 20, 24, 82),
    waypoint(0.70, "dawn", 240, 160, 120),
    waypoint(0.80, "morning", 150, 200, 240),
    waypoint(1.00, "noon", 135, 206, 235),
];

/// Cyclic phase clock in `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCycle {
    phase: f64,
    step: f64,
}

impl DayCycle {
    pub fn new(day_length_ticks: u32) -> Self {
        Self {
            phase: 0.0,
            step: 1.0 / day_length_ticks.max(1) as f64,
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn advance(&mut self) {
        self.set_phase(self.phase + self.step);
    }

    /// Wrap into `[0, 1)`. Non-finite values fall back to noon.
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = sanitize_phase(phase);
    }
}

/// Wrap a phase into `[0, 1)`, or reset it to noon if it is not a number.
pub fn sanitize_phase(phase: f64) -> f64 {
    if !phase.is_finite() {
        tracing::warn!("invalid day phase {phase}; resetting to noon");
        return 0.0;
    }
    let wrapped = phase.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// 0 before `lo`, 1 after `hi`, linear between.
fn ramp(phase: f64, (lo, hi): (f64, f64)) -> f64 {
    ((phase - lo) / (hi - lo)).clamp(0.0, 1.0)
}

pub fn is_night(phase: f64) -> bool {
    (NIGHT_START..=NIGHT_END).contains(&phase)
}

/// Sky color, piecewise-linear between the two waypoints around `phase`.
pub fn sky_color(phase: f64) -> Rgba {
    let phase = sanitize_phase(phase);
    for pair in SKY_WAYPOINTS.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if phase >= from.phase && phase < to.phase {
            let t = (phase - from.phase) / (to.phase - from.phase);
            return from.color.lerp(to.color, t);
        }
    }
    SKY_WAYPOINTS[0].color
}

/// Label of the waypoint segment `phase` falls in.
pub fn time_of_day(phase: f64) -> &'static str {
    let phase = sanitize_phase(phase);
    SKY_WAYPOINTS
        .windows(2)
        .find(|pair| phase >= pair[0].phase && phase < pair[1].phase)
        .map(|pair| pair[0].label)
        .unwrap_or(SKY_WAYPOINTS[0].label)
}

/// Star field opacity in `[0, 1]`.
pub fn star_opacity(phase: f64) -> f64 {
    ramp(phase, STAR_FADE_IN) * (1.0 - ramp(phase, STAR_FADE_OUT))
}

/// Cloud spawn and opacity factor in `[0, 1]`; zero inside the night window.
pub fn cloud_factor(phase: f64) -> f64 {
    (1.0 - ramp(phase, CLOUD_DUSK)).max(ramp(phase, CLOUD_DAWN))
}

/// Brightness multiplier for the parallax layers and obstacles.
pub fn lighting_factor(phase: f64) -> f64 {
    let darkness = ramp(phase, LIGHT_DUSK) * (1.0 - ramp(phase, LIGHT_DAWN));
    1.0 - darkness * (1.0 - NIGHT_LIGHTING)
}
