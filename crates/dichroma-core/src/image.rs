//! Pixel buffer abstraction and an owned RGBA buffer.
//!
//! - [`PixelSource`] - read access: `width()`, `height()`, `get(row, col)`
//! - [`PixelSink`] - write access: `set(row, col, pixel)`
//! - [`RgbaImage`] - owned buffer implementing both
//!
//! Decoders and encoders (JPEG, PNG, ...) live outside this workspace. They
//! either fill an [`RgbaImage`] from raw bytes or implement the traits on
//! their own buffer types.
//!
//! # Memory Layout
//!
//! [`RgbaImage`] stores pixels in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [RGBA RGBA RGBA ...]  <- Row 0
//!         [RGBA RGBA RGBA ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use dichroma_core::{PixelSink, PixelSource, Rgba8, RgbaImage};
//!
//! let mut img = RgbaImage::new(4, 2);
//! img.set(1, 3, Rgba8::new(255, 0, 0, 255));
//! assert_eq!(img.get(1, 3).r, 255);
//! assert_eq!(img.width(), 4);
//! ```

use crate::{Error, Result, Rgba8};

/// Read access to a 2-D buffer of RGBA pixels.
pub trait PixelSource {
    /// Buffer width in pixels (number of columns).
    fn width(&self) -> u32;

    /// Buffer height in pixels (number of rows).
    fn height(&self) -> u32;

    /// Returns the pixel at `(row, col)`.
    ///
    /// Callers stay within `row < height()` and `col < width()`;
    /// implementations may panic otherwise.
    fn get(&self, row: u32, col: u32) -> Rgba8;

    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Write access to a 2-D buffer of RGBA pixels.
pub trait PixelSink {
    /// Buffer width in pixels.
    fn width(&self) -> u32;

    /// Buffer height in pixels.
    fn height(&self) -> u32;

    /// Stores `pixel` at `(row, col)`.
    ///
    /// Callers stay within bounds; implementations may panic otherwise.
    fn set(&mut self, row: u32, col: u32, pixel: Rgba8);

    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Owned RGBA8 pixel buffer.
///
/// # Example
///
/// ```rust
/// use dichroma_core::{Rgba8, RgbaImage};
///
/// let img = RgbaImage::filled(3, 3, Rgba8::new(1, 2, 3, 4));
/// assert_eq!(img.pixel(2, 2), Rgba8::new(1, 2, 3, 4));
/// assert_eq!(img.pixel_count(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RgbaImage {
    pixels: Vec<Rgba8>,
    width: u32,
    height: u32,
}

impl RgbaImage {
    /// Creates a buffer of transparent black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::default())
    }

    /// Creates a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Self {
        Self {
            pixels: vec![pixel; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates a buffer from existing pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self> {
        let expected = pixel_total(width, height)?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Creates a buffer from interleaved `R G B A` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * 4`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichroma_core::RgbaImage;
    ///
    /// let img = RgbaImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    /// assert_eq!(img.pixel(0, 1).to_array(), [5, 6, 7, 8]);
    /// assert!(RgbaImage::from_raw(2, 1, vec![0; 7]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = pixel_total(width, height)?
            .checked_mul(4)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Returns the buffer as interleaved `R G B A` bytes.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> Rgba8 {
        assert!(
            row < self.height && col < self.width,
            "pixel (row {row}, col {col}) out of bounds"
        );
        self.pixels[self.offset(row, col)]
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(row, col)` is outside the buffer.
    #[inline]
    pub fn try_pixel(&self, row: u32, col: u32) -> Result<Rgba8> {
        if row < self.height && col < self.width {
            Ok(self.pixels[self.offset(row, col)])
        } else {
            Err(Error::out_of_bounds(row, col, self.width, self.height))
        }
    }

    /// Sets the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, row: u32, col: u32, pixel: Rgba8) {
        assert!(
            row < self.height && col < self.width,
            "pixel (row {row}, col {col}) out of bounds"
        );
        let offset = self.offset(row, col);
        self.pixels[offset] = pixel;
    }

    /// Fills the entire buffer with `pixel`.
    pub fn fill(&mut self, pixel: Rgba8) {
        self.pixels.fill(pixel);
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// All pixels in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    /// Iterates over rows as slices of `width` pixels.
    ///
    /// Yields nothing for a zero-width buffer.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba8]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Iterates over `(row, col, pixel)` for every pixel.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba8)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, p)| ((i / width as usize) as u32, (i % width as usize) as u32, *p))
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get(&self, row: u32, col: u32) -> Rgba8 {
        self.pixel(row, col)
    }
}

impl PixelSink for RgbaImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set(&mut self, row: u32, col: u32, pixel: Rgba8) {
        self.set_pixel(row, col, pixel);
    }
}

fn pixel_total(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows usize"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_new() {
        let img = RgbaImage::new(100, 50);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.pixel(49, 99), Rgba8::default());
    }

    #[test]
    fn test_image_set_get_pixel() {
        let mut img = RgbaImage::new(10, 10);
        img.set_pixel(3, 7, Rgba8::new(9, 8, 7, 6));
        assert_eq!(img.pixel(3, 7), Rgba8::new(9, 8, 7, 6));
        assert_eq!(img.pixel(7, 3), Rgba8::default());
    }

    #[test]
    fn test_row_major_layout() {
        let mut img = RgbaImage::new(3, 2);
        img.set(1, 0, Rgba8::new(1, 1, 1, 1));
        assert_eq!(img.as_slice()[3], Rgba8::new(1, 1, 1, 1));
        let rows: Vec<&[Rgba8]> = img.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Rgba8::new(1, 1, 1, 1));
    }

    #[test]
    fn test_try_pixel_out_of_bounds() {
        let img = RgbaImage::new(4, 4);
        assert!(img.try_pixel(3, 3).is_ok());
        let err = img.try_pixel(4, 0).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_panics_out_of_bounds() {
        RgbaImage::new(2, 2).pixel(0, 2);
    }

    #[test]
    fn test_from_pixels_wrong_size() {
        assert!(RgbaImage::from_pixels(2, 2, vec![Rgba8::default(); 3]).is_err());
        assert!(RgbaImage::from_pixels(2, 2, vec![Rgba8::default(); 4]).is_ok());
    }

    #[test]
    fn test_raw_roundtrip() {
        let raw: Vec<u8> = (0..24).collect();
        let img = RgbaImage::from_raw(3, 2, raw.clone()).unwrap();
        assert_eq!(img.pixel(1, 2).to_array(), [20, 21, 22, 23]);
        assert_eq!(img.to_raw(), raw);
    }

    #[test]
    fn test_pixels_iter_coordinates() {
        let mut img = RgbaImage::new(3, 2);
        img.set(1, 2, Rgba8::new(5, 5, 5, 5));
        let found: Vec<(u32, u32)> = img
            .pixels()
            .filter(|(_, _, p)| p.r == 5)
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(found, vec![(1, 2)]);
    }

    #[test]
    fn test_empty_image() {
        let img = RgbaImage::new(0, 10);
        assert!(img.is_empty());
        assert_eq!(img.rows().count(), 0);
        assert_eq!(img.pixels().count(), 0);
    }

    #[test]
    fn test_fill() {
        let mut img = RgbaImage::new(2, 2);
        img.fill(Rgba8::new(1, 2, 3, 4));
        assert!(img.as_slice().iter().all(|p| *p == Rgba8::new(1, 2, 3, 4)));
    }
}
