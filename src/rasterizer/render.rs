//! Pixel buffer drawing
//! Everything here writes straight into RGBA bytes that get uploaded to a
//! streaming texture once per frame.

use super::types::Color;

/// Alpha of the dark scanline rows
pub const SCANLINE_ALPHA: u8 = 0x20;

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let p = &self.pixels[idx..idx + 4];
            Some(Color::with_alpha(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }

    /// Signed-coordinate variant that silently drops off-screen pixels
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize, color);
        }
    }

    /// Draw a line from (x0, y0) to (x1, y1) using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.plot(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill a full horizontal row
    pub fn fill_row(&mut self, y: usize, color: Color) {
        if y >= self.height {
            return;
        }
        let bytes = color.to_bytes();
        let start = y * self.width * 4;
        for px in self.pixels[start..start + self.width * 4].chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Draw a 1px rectangle outline. Parts outside the buffer are clipped.
    pub fn draw_rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        // Skip entirely off-screen rects before walking edges
        if right < 0 || bottom < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        for px in x..=right {
            self.plot(px, y, color);
            self.plot(px, bottom, color);
        }
        for py in y..=bottom {
            self.plot(x, py, color);
            self.plot(right, py, color);
        }
    }
}

/// Build the CRT overlay: transparent white, with translucent black on every
/// even row
pub fn scanline_overlay(width: usize, height: usize, alpha: u8) -> Framebuffer {
    let mut fb = Framebuffer::new(width, height);
    fb.clear(Color::TRANSPARENT);
    let line = Color::with_alpha(0, 0, 0, alpha);
    for y in (0..height).step_by(2) {
        fb.fill_row(y, line);
    }
    fb
}
