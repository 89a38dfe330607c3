use std::path::Path;

use anyhow::{Context, Result};

use crate::coords::ColorRgba;

/// Decoded RGBA8 image, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl TextureImage {
    /// Wraps raw RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "texture has zero size ({width}x{height})");
        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            rgba.len() == expected,
            "texture data is {} bytes, expected {expected} for {width}x{height} RGBA8",
            rgba.len()
        );
        Ok(Self { width, height, rgba })
    }

    /// Decodes an encoded image (PNG or JPEG) held in memory.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).context("failed to decode image")?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Reads and decodes an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read texture {}", path.display()))?;
        let image = Self::from_encoded(&bytes)
            .with_context(|| format!("failed to load texture {}", path.display()))?;

        log::debug!(
            "loaded texture {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        Ok(image)
    }

    /// Square checkerboard of `cells` x `cells` tiles alternating `a` and `b`.
    ///
    /// `a` is the top-left tile.
    pub fn checkerboard(size: u32, cells: u32, a: ColorRgba, b: ColorRgba) -> Self {
        let size = size.max(1);
        let cells = cells.clamp(1, size);
        let (a, b) = (a.to_rgba8(), b.to_rgba8());

        let mut rgba = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            for x in 0..size {
                let cx = x * cells / size;
                let cy = y * cells / size;
                rgba.extend_from_slice(if (cx + cy) % 2 == 0 { &a } else { &b });
            }
        }

        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA8 value at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[i..i + 4].try_into().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: ColorRgba = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: ColorRgba = ColorRgba::new(0.0, 0.0, 1.0, 1.0);

    #[test]
    fn checkerboard_alternates_tiles() {
        let img = TextureImage::checkerboard(8, 2, RED, BLUE);
        assert_eq!((img.width(), img.height()), (8, 8));
        assert_eq!(img.rgba().len(), 8 * 8 * 4);
        assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(img.pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(img.pixel(4, 0), Some([0, 0, 255, 255]));
        assert_eq!(img.pixel(0, 4), Some([0, 0, 255, 255]));
        assert_eq!(img.pixel(7, 7), Some([255, 0, 0, 255]));
    }

    #[test]
    fn checkerboard_clamps_cell_count() {
        let img = TextureImage::checkerboard(2, 50, RED, BLUE);
        assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(img.pixel(1, 0), Some([0, 0, 255, 255]));
        assert_eq!(img.pixel(2, 0), None);
    }

    #[test]
    fn from_rgba8_rejects_wrong_length() {
        assert!(TextureImage::from_rgba8(2, 2, vec![0; 15]).is_err());
        assert!(TextureImage::from_rgba8(0, 2, vec![]).is_err());
        assert!(TextureImage::from_rgba8(1, 1, vec![1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn decodes_png_from_memory() {
        let mut src = image::RgbaImage::new(3, 2);
        src.put_pixel(2, 1, image::Rgba([10, 20, 30, 40]));

        let mut png = Vec::new();
        src.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let img = TextureImage::from_encoded(&png).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.pixel(2, 1), Some([10, 20, 30, 40]));
        assert_eq!(img.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(TextureImage::from_encoded(b"definitely not an image").is_err());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = TextureImage::load("/nonexistent/cubic/texture.png").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/cubic/texture.png"));
    }
}
