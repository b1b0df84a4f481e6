//! Sun and moon positions along a semicircular arc.

use super::timeline::sanitize_phase;
use crate::render::{Painter, Rgba};
use std::f64::consts::PI;

/// The sun is up from `SUNRISE` through noon (phase 0) to `SUNSET`; the moon
/// covers the rest.
const SUNRISE: f64 = 0.675;
const SUNSET: f64 = 0.325;
/// Sun color blends toward orange within this fraction of either arc end.
const HORIZON_BLEND: f64 = 0.15;
/// Peak height of the arc above the horizon, as a fraction of world height.
const ARC_HEIGHT: f64 = 0.6;

const SUN_YELLOW: Rgba = Rgba::rgb(255, 220, 80);
const SUN_ORANGE: Rgba = Rgba::rgb(255, 140, 0);
const MOON_COLOR: Rgba = Rgba::rgb(235, 235, 220);
const MOON_SHADOW: Rgba = Rgba::rgb(200, 200, 190);

const SUN_RADIUS: f64 = 22.0;
const MOON_RADIUS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    Sun,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub kind: BodyKind,
    pub x: f64,
    pub y: f64,
    /// Progress along the arc, 0 at rise and 1 at set.
    pub t: f64,
    pub color: Rgba,
}

impl CelestialBody {
    /// Which body is up at `phase` and where it is.
    pub fn at(phase: f64, width: f64, height: f64, horizon: f64) -> Self {
        let phase = sanitize_phase(phase);
        let sun_span = 1.0 - SUNRISE + SUNSET;
        let is_sun = phase >= SUNRISE || phase <= SUNSET;

        let (kind, t, color) = if is_sun {
            let t = (phase - SUNRISE).rem_euclid(1.0) / sun_span;
            let edge = t.min(1.0 - t);
            let color = SUN_ORANGE.lerp(SUN_YELLOW, edge / HORIZON_BLEND);
            (BodyKind::Sun, t, color)
        } else {
            let t = (phase - SUNSET) / (SUNRISE - SUNSET);
            (BodyKind::Moon, t, MOON_COLOR)
        };

        Self {
            kind,
            x: t * width,
            y: horizon - (t * PI).sin() * ARC_HEIGHT * height,
            t,
            color,
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        match self.kind {
            BodyKind::Sun => {
                painter.fill_circle(self.x, self.y, SUN_RADIUS * 1.4, self.color.with_alpha(60));
                painter.fill_circle(self.x, self.y, SUN_RADIUS, self.color);
            }
            BodyKind::Moon => {
                painter.fill_circle(self.x, self.y, MOON_RADIUS, self.color);
                painter.fill_circle(self.x - 5.0, self.y - 3.0, 3.0, MOON_SHADOW);
                painter.fill_circle(self.x + 4.0, self.y + 5.0, 2.0, MOON_SHADOW);
            }
        }
    }
}
