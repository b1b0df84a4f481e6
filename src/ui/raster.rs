//! Half-block raster: a [`Painter`] that renders into terminal cells.
//!
//! Each cell holds two vertically stacked pixels and is emitted as `▀` with the
//! upper pixel as foreground and the lower pixel as background. Text is kept
//! in a separate per-cell overlay and replaces the half-block glyph.

use crate::render::{Painter, Rgba};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

const UPPER_HALF: &str = "▀";
/// Text fainter than this is not drawn at all.
const MIN_TEXT_ALPHA: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    color: Rgba,
}

/// Pixel buffer sized to a terminal area, addressed in world units.
#[derive(Debug, Clone)]
pub struct Raster {
    cols: usize,
    rows: usize,
    /// Pixels per world unit.
    scale_x: f64,
    scale_y: f64,
    pixels: Vec<Rgba>,
    glyphs: Vec<Option<Glyph>>,
}

fn blend(dst: Rgba, src: Rgba) -> Rgba {
    match src.a {
        0 => dst,
        255 => src,
        a => {
            let t = a as f64 / 255.0;
            Rgba {
                a: 255,
                ..dst.lerp(src.with_alpha(255), t)
            }
        }
    }
}

pub fn to_color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

impl Raster {
    /// A raster covering `cols` x `rows` cells that maps a world of
    /// `world_width` x `world_height` onto it.
    pub fn new(cols: u16, rows: u16, world_width: f64, world_height: f64) -> Self {
        let cols = cols as usize;
        let rows = rows as usize;
        let scale_x = if world_width > 0.0 { cols as f64 / world_width } else { 0.0 };
        let scale_y = if world_height > 0.0 {
            (rows * 2) as f64 / world_height
        } else {
            0.0
        };
        Self {
            cols,
            rows,
            scale_x,
            scale_y,
            pixels: vec![Rgba::BLACK; cols * rows * 2],
            glyphs: vec![None; cols * rows],
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.cols
    }

    pub fn pixel_height(&self) -> usize {
        self.rows * 2
    }

    pub fn pixel(&self, px: usize, py: usize) -> Option<Rgba> {
        (px < self.cols && py < self.pixel_height()).then(|| self.pixels[py * self.cols + px])
    }

    /// The character drawn over cell `(col, row)`, if any.
    pub fn glyph(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.glyphs[row * self.cols + col].map(|g| g.ch)
    }

    fn plot(&mut self, px: i64, py: i64, color: Rgba) {
        if px < 0 || py < 0 || px as usize >= self.cols || py as usize >= self.pixel_height() {
            return;
        }
        let i = py as usize * self.cols + px as usize;
        self.pixels[i] = blend(self.pixels[i], color);
    }

    fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale_x, y * self.scale_y)
    }

    /// Emit one line of spans per cell row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..self.cols)
                    .map(|col| {
                        let top = self.pixels[row * 2 * self.cols + col];
                        let bottom = self.pixels[(row * 2 + 1) * self.cols + col];
                        match self.glyphs[row * self.cols + col] {
                            Some(glyph) => {
                                let bg = top.lerp(bottom, 0.5);
                                let fg = blend(bg, glyph.color);
                                Span::styled(
                                    glyph.ch.to_string(),
                                    Style::default().fg(to_color(fg)).bg(to_color(bg)),
                                )
                            }
                            None => Span::styled(
                                UPPER_HALF,
                                Style::default().fg(to_color(top)).bg(to_color(bottom)),
                            ),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Painter for Raster {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        if w <= 0.0 || h <= 0.0 || color.a == 0 {
            return;
        }
        let (x0, y0) = self.to_px(x, y);
        let (x1, y1) = self.to_px(x + w, y + h);
        // a rect thinner than a pixel still shows
        let (x0, x1) = (x0.round() as i64, (x1.round() as i64).max(x0.round() as i64 + 1));
        let (y0, y1) = (y0.round() as i64, (y1.round() as i64).max(y0.round() as i64 + 1));
        for py in y0..y1 {
            for px in x0..x1 {
                self.plot(px, py, color);
            }
        }
        if color.a == 255 {
            // opaque rects hide text in the cells they fully cover
            let row_start = (y0.max(0) as usize).div_ceil(2);
            let row_end = (y1.max(0) as usize / 2).min(self.rows);
            let col_end = (x1.max(0) as usize).min(self.cols);
            for row in row_start..row_end {
                for col in x0.max(0) as usize..col_end {
                    self.glyphs[row * self.cols + col] = None;
                }
            }
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        if radius <= 0.0 || color.a == 0 {
            return;
        }
        let (cx, cy) = self.to_px(x, y);
        let rx = radius * self.scale_x;
        let ry = radius * self.scale_y;
        if rx < 0.5 && ry < 0.5 {
            self.plot(cx.floor() as i64, cy.floor() as i64, color);
            return;
        }
        let (rx, ry) = (rx.max(0.5), ry.max(0.5));
        for py in (cy - ry).floor() as i64..=(cy + ry).ceil() as i64 {
            for px in (cx - rx).floor() as i64..=(cx + rx).ceil() as i64 {
                let dx = (px as f64 + 0.5 - cx) / rx;
                let dy = (py as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.plot(px, py, color);
                }
            }
        }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        let (ax, ay) = self.to_px(x1, y1);
        let (bx, by) = self.to_px(x2, y2);
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let px = ax + (bx - ax) * t;
            let py = ay + (by - ay) * t;
            self.plot(px.floor() as i64, py.floor() as i64, color);
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgba) {
        if color.a < MIN_TEXT_ALPHA || self.rows == 0 {
            return;
        }
        let (px, py) = self.to_px(x, y);
        if py < 0.0 {
            return;
        }
        let row = (py / 2.0).floor() as usize;
        if row >= self.rows {
            return;
        }
        let len = text.chars().count() as i64;
        let start = px.round() as i64 - len / 2;
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 || col as usize >= self.cols {
                continue;
            }
            self.glyphs[row * self.cols + col as usize] = Some(Glyph { ch, color });
        }
    }

    fn layer(&mut self) {
        self.glyphs.iter_mut().for_each(|g| *g = None);
    }
}

/// The largest rectangle inside `area` with the world's aspect ratio, given
/// that a cell is two pixels tall. Centered.
pub fn fit_world(area: Rect, world_width: f64, world_height: f64) -> Rect {
    if area.width == 0 || area.height == 0 || world_width <= 0.0 || world_height <= 0.0 {
        return Rect { width: 0, height: 0, ..area };
    }
    let aspect = world_width / world_height;
    let mut rows = area.height;
    let mut cols = ((rows as f64 * 2.0) * aspect).round() as u16;
    if cols > area.width {
        cols = area.width;
        rows = ((cols as f64 / aspect) / 2.0).round().max(1.0) as u16;
        rows = rows.min(area.height);
    }
    Rect {
        x: area.x + (area.width - cols) / 2,
        y: area.y + (area.height - rows) / 2,
        width: cols,
        height: rows,
    }
}

/// Map a terminal cell back to the world point at its center, if the cell is
/// inside `play`.
pub fn cell_to_world(play: Rect, col: u16, row: u16, world_width: f64, world_height: f64) -> Option<(f64, f64)> {
    if col < play.x || row < play.y || col >= play.x + play.width || row >= play.y + play.height {
        return None;
    }
    let fx = ((col - play.x) as f64 + 0.5) / play.width as f64;
    let fy = ((row - play.y) as f64 + 0.5) / play.height as f64;
    Some((fx * world_width, fy * world_height))
}
