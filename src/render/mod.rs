//! Render contract between the simulation and whatever draws it.
//!
//! Entities never know what backend they are drawn on. Each exposes a
//! `draw(&self, &mut dyn Painter)` that reads only its own state; the terminal
//! frontend implements [`Painter`] on a ratatui canvas, and tests use
//! [`RecordingPainter`].

pub mod buttons;
pub mod scene;
pub mod screens;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const GOLD: Rgba = Rgba::rgb(255, 215, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        Rgba {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: lerp_channel(self.a, other.a, t),
        }
    }

    /// Multiply RGB by a brightness factor, keeping alpha.
    pub fn scaled(self, factor: f64) -> Rgba {
        let f = factor.max(0.0);
        let scale = |c: u8| (c as f64 * f).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

/// Rainbow-mode palette, red through violet.
pub const RAINBOW: [Rgba; 7] = [
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(255, 165, 0),
    Rgba::rgb(255, 255, 0),
    Rgba::rgb(0, 255, 0),
    Rgba::rgb(0, 0, 255),
    Rgba::rgb(75, 0, 130),
    Rgba::rgb(238, 130, 238),
];

/// Alpha value from a float opacity in `0..=255`, saturating.
pub fn alpha(opacity: f64) -> u8 {
    if opacity.is_finite() {
        opacity.round().clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

/// Drawing primitives in world coordinates (origin top-left, y down).
pub trait Painter {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba);
    /// Text anchored at its horizontal center.
    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgba);
    /// Everything drawn after this call covers what was drawn before.
    fn layer(&mut self) {}
    /// Names the draw-order section that follows. Backends may ignore it.
    fn section(&mut self, _name: &'static str) {}
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect { x: f64, y: f64, w: f64, h: f64, color: Rgba },
    Circle { x: f64, y: f64, radius: f64, color: Rgba },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba },
    Text { x: f64, y: f64, text: String, color: Rgba },
    /// Section marker emitted by [`scene::draw_frame`].
    Section(&'static str),
    Layer,
}

/// Painter that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub calls: Vec<DrawCall>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section names in the order they were drawn.
    pub fn sections(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Section(name) => Some(*name),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn primitive_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| !matches!(call, DrawCall::Section(_) | DrawCall::Layer))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgba) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    fn layer(&mut self) {
        self.calls.push(DrawCall::Layer);
    }

    fn section(&mut self, name: &'static str) {
        self.calls.push(DrawCall::Section(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgba::rgb(100, 50, 25));
    }

    #[test]
    fn test_lerp_clamps_and_ignores_nan() {
        let a = Rgba::rgb(10, 10, 10);
        let b = Rgba::rgb(20, 20, 20);
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, f64::NAN), a);
    }

    #[test]
    fn test_scaled_keeps_alpha() {
        let c = Rgba::rgba(100, 200, 40, 77).scaled(0.5);
        assert_eq!(c, Rgba::rgba(50, 100, 20, 77));
    }

    #[test]
    fn test_alpha_saturates() {
        assert_eq!(alpha(-5.0), 0);
        assert_eq!(alpha(300.0), 255);
        assert_eq!(alpha(f64::INFINITY), 0);
    }
}
