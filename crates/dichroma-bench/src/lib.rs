//! Benchmark fixtures for dichroma.
//!
//! The benchmarks live in `benches/`; run them with `cargo bench`.

use dichroma_core::{Rgba8, RgbaImage};

/// A `width` x `height` image with a deterministic spread of colors.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let r = (col * 255 / width.max(1)) as u8;
            let g = (row * 255 / height.max(1)) as u8;
            let b = ((row + col) % 256) as u8;
            img.set_pixel(row, col, Rgba8::new(r, g, b, 255));
        }
    }
    img
}
