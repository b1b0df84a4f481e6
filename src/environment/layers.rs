//! Parallax ground and hill bands.
//!
//! Each layer is a strip of screen-wide segments kept in a ring: when the
//! front segment scrolls fully off the left edge it is moved behind the last
//! one instead of being dropped.

use crate::render::{Painter, Rgba};
use std::collections::VecDeque;

const SEGMENTS_PER_LAYER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    pub name: &'static str,
    pub y: f64,
    pub height: f64,
    /// Scroll speed relative to the global game speed.
    pub speed: f64,
    pub color: Rgba,
    segments: VecDeque<Segment>,
}

impl ParallaxLayer {
    pub fn new(name: &'static str, y: f64, height: f64, speed: f64, color: Rgba, width: f64) -> Self {
        let segments = (0..SEGMENTS_PER_LAYER)
            .map(|i| Segment {
                x: i as f64 * width,
                width,
            })
            .collect();
        Self {
            name,
            y,
            height,
            speed,
            color,
            segments,
        }
    }

    pub fn update(&mut self, game_speed: f64) {
        let dx = self.speed * game_speed;
        for segment in &mut self.segments {
            segment.x -= dx;
        }
        while let Some(front) = self.segments.front().copied() {
            if front.x + front.width >= 0.0 {
                break;
            }
            let Some(back) = self.segments.back().copied() else {
                break;
            };
            self.segments.pop_front();
            self.segments.push_back(Segment {
                x: back.x + back.width,
                width: front.width,
            });
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn draw(&self, painter: &mut dyn Painter, lighting: f64) {
        let color = self.color.scaled(lighting);
        for segment in &self.segments {
            painter.fill_rect(segment.x, self.y, segment.width, self.height, color);
        }
    }
}

/// Ground, far hills and near hills, drawn in that order.
pub fn default_layers(width: f64, height: f64, ground_height: f64) -> Vec<ParallaxLayer> {
    let floor = height - ground_height;
    vec![
        ParallaxLayer::new("ground", floor, ground_height, 1.0, Rgba::rgb(210, 180, 140), width),
        ParallaxLayer::new("far hills", floor - 50.0, 50.0, 0.5, Rgba::rgb(70, 130, 70), width),
        ParallaxLayer::new("near hills", floor - 80.0, 80.0, 0.8, Rgba::rgb(100, 155, 100), width),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingPainter;

    #[test]
    fn test_segments_recycle_instead_of_despawning() {
        let mut layer = ParallaxLayer::new("ground", 500.0, 100.0, 1.0, Rgba::WHITE, 400.0);
        for _ in 0..2000 {
            layer.update(1.3);
        }
        assert_eq!(layer.segments().count(), SEGMENTS_PER_LAYER);
        // still contiguous and covering the screen
        let xs: Vec<f64> = layer.segments().map(|s| s.x).collect();
        assert!(xs[0] <= 0.0 && xs[0] + 400.0 >= 0.0);
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - 400.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_lighting_darkens_layer() {
        let layer = ParallaxLayer::new("hills", 0.0, 10.0, 1.0, Rgba::rgb(100, 200, 100), 400.0);
        let mut painter = RecordingPainter::new();
        layer.draw(&mut painter, 0.5);
        assert!(painter.calls.iter().all(|c| matches!(
            c,
            crate::render::DrawCall::Rect { color, .. } if *color == Rgba::rgb(50, 100, 50)
        )));
    }

    #[test]
    fn test_default_layers_sit_on_the_floor() {
        let layers = default_layers(400.0, 600.0, 100.0);
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].y, 500.0);
        assert!(layers.iter().all(|l| l.y + l.height <= 600.0));
    }
}
