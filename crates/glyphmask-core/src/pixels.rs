//! Decoded image data: [`Rgba`], [`PixelBuffer`], and the
//! [`PixelSource`] acquisition seam.

use std::fmt;

use crate::error::AcquireError;

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// A raw RGBA color, copied verbatim from the decoded image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Construct from individual components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl fmt::Display for Rgba {
    /// CSS-style `rgba(r, g, b, a)` formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// ---------------------------------------------------------------------------
// PixelBuffer
// ---------------------------------------------------------------------------

/// Row-major RGBA pixel data for one decoded image.
///
/// Addressable by `(x, y)` with `0 <= x < width`, `0 <= y < height`;
/// every access is bounds-checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw row-major RGBA bytes. `data` must hold exactly
    /// `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// A buffer of the given size filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw row-major RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The color at `(x, y)`, or `None` if outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Overwrite the color at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
    }
}

// ---------------------------------------------------------------------------
// PixelSource
// ---------------------------------------------------------------------------

/// Acquires decoded pixels for a source reference (path, URL, ...).
///
/// `load` blocks until the decode completes; it is the only point where
/// a mask operation waits. Callers wanting a timeout wrap the call
/// themselves.
pub trait PixelSource {
    /// Decode the image behind `source_ref` into an owned buffer.
    fn load(&mut self, source_ref: &str) -> Result<PixelBuffer, AcquireError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_css_display() {
        let c = Rgba::new(12, 34, 56, 78);
        assert_eq!(c.to_string(), "rgba(12, 34, 56, 78)");
    }

    #[test]
    fn buffer_get_in_bounds() {
        let mut buf = PixelBuffer::filled(3, 2, Rgba::opaque(9, 8, 7));
        assert_eq!(buf.get(0, 0), Some(Rgba::opaque(9, 8, 7)));
        assert_eq!(buf.get(2, 1), Some(Rgba::opaque(9, 8, 7)));
        buf.put(2, 1, Rgba::new(1, 2, 3, 4));
        assert_eq!(buf.get(2, 1), Some(Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn buffer_get_out_of_bounds() {
        let buf = PixelBuffer::filled(3, 2, Rgba::TRANSPARENT);
        assert_eq!(buf.get(3, 0), None);
        assert_eq!(buf.get(0, 2), None);
        assert_eq!(buf.get(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn buffer_put_out_of_bounds_ignored() {
        let mut buf = PixelBuffer::filled(2, 2, Rgba::TRANSPARENT);
        let before = buf.clone();
        buf.put(5, 5, Rgba::opaque(1, 1, 1));
        assert_eq!(buf, before);
    }

    #[test]
    fn buffer_row_major_layout() {
        // 2x2, distinct red channel per pixel, rows packed first.
        let data = vec![
            10, 0, 0, 255, 20, 0, 0, 255, //
            30, 0, 0, 255, 40, 0, 0, 255,
        ];
        let buf = PixelBuffer::new(2, 2, data);
        assert_eq!(buf.get(0, 0).unwrap().r, 10);
        assert_eq!(buf.get(1, 0).unwrap().r, 20);
        assert_eq!(buf.get(0, 1).unwrap().r, 30);
        assert_eq!(buf.get(1, 1).unwrap().r, 40);
    }
}
