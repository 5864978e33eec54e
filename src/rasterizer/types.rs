//! Core types for the pixel buffer

use crate::error::AssetError;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Color = Color { r: 255, g: 255, b: 255, a: 0 };
    pub const AMBER: Color = Color { r: 255, g: 176, b: 0, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Source rectangle into a sprite sheet, in texels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl FrameRect {
    pub const fn square(size: u32) -> Self {
        Self { x: 0, y: 0, w: size, h: size }
    }
}

/// CPU-side image (decoded once, then handed to the GPU)
#[derive(Debug, Clone)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
    pub name: String,
}

impl Texture {
    /// Load texture from an image file (PNG, JPEG or BMP)
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::from_image(img, name))
    }

    fn from_image(img: image::DynamicImage, name: String) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let pixels: Vec<Color> = rgba
            .pixels()
            .map(|p| Color::with_alpha(p[0], p[1], p[2], p[3]))
            .collect();

        Self {
            width: width as usize,
            height: height as usize,
            pixels,
            name,
        }
    }

    /// Create a two-color checkerboard (used as a stand-in tileset)
    pub fn checkerboard(
        width: usize,
        height: usize,
        cell: usize,
        color1: Color,
        color2: Color,
    ) -> Self {
        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let checker = ((x / cell) + (y / cell)) % 2 == 0;
                pixels.push(if checker { color1 } else { color2 });
            }
        }
        Self { width, height, pixels, name: "checkerboard".to_string() }
    }

    /// Flatten into tightly packed RGBA8 bytes
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_cells() {
        let tex = Texture::checkerboard(8, 8, 4, Color::WHITE, Color::BLACK);
        assert_eq!(tex.pixels.len(), 64);
        assert_eq!(tex.pixels[0], Color::WHITE);
        assert_eq!(tex.pixels[4], Color::BLACK);
        assert_eq!(tex.pixels[4 * 8 + 4], Color::WHITE);
    }

    #[test]
    fn test_to_rgba8_layout() {
        let tex = Texture::checkerboard(2, 1, 1, Color::WHITE, Color::with_alpha(1, 2, 3, 4));
        assert_eq!(tex.to_rgba8(), vec![255, 255, 255, 255, 1, 2, 3, 4]);
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        let err = Texture::from_file("definitely/not/here/player.png");
        assert!(matches!(err, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_from_file_loads_player_sheet() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/player.png");
        let tex = Texture::from_file(path).unwrap();
        assert_eq!((tex.width, tex.height), (64, 16));
        assert_eq!(tex.name, "player");
        assert_eq!(tex.pixels.len(), 64 * 16);
    }
}
