//! Word rasterizer
//!
//! Renders a word into an offscreen bitmap at the largest size that fits,
//! then samples it on a grid. Every inked sample becomes a spawn point for
//! the destroy-text effect.

mod block_font;

pub use block_font::BlockFont;

use crate::core::math::Vec2;
use crate::domain::tuning::TextFit;

/// Opaque alpha byte marks an inked pixel
const INK: u8 = 255;

/// Offscreen pixels, `stride` bytes each with alpha in the last byte
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, stride: u32) -> Self {
        let len = width as usize * height as usize * stride as usize;
        Self {
            width,
            height,
            stride,
            data: vec![0; len],
        }
    }

    fn alpha_index(&self, x: u32, y: u32) -> usize {
        (x as usize + y as usize * self.width as usize) * self.stride as usize + self.stride as usize - 1
    }

    /// Paint an opaque black pixel
    pub fn ink(&mut self, x: u32, y: u32) {
        if x >= self.width || y >= self.height || self.stride == 0 {
            return;
        }
        let alpha = self.alpha_index(x, y);
        self.data[alpha] = INK;
    }

    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height || self.stride == 0 {
            return false;
        }
        self.data.get(self.alpha_index(x, y)) == Some(&INK)
    }
}

/// Something that can measure and draw text offscreen
pub trait TextRenderer {
    /// Advance width of `word` at `size` pixels
    fn measure(&mut self, word: &str, size: f64) -> f64;

    /// Draw `word` at `size` pixels, centred on the bitmap with a middle
    /// baseline. Renderers that only produce one pixel format may ignore
    /// `stride` and report their own in the bitmap.
    fn render(&mut self, word: &str, size: f64, width: u32, height: u32, stride: u32) -> Bitmap;
}

/// Largest size (stepping down from `fit.max_size`) at which the word plus
/// padding fits in `width`; `None` when nothing positive fits.
pub fn fit_font_size(renderer: &mut dyn TextRenderer, word: &str, width: f64, fit: &TextFit) -> Option<f64> {
    let too_wide = |renderer: &mut dyn TextRenderer, size: f64| renderer.measure(word, size) + fit.padding > width;

    let mut size = fit.max_size;
    if fit.step <= 0.0 {
        return (size > 0.0 && !too_wide(renderer, size)).then_some(size);
    }
    while size > 0.0 && too_wide(renderer, size) {
        size -= fit.step;
    }
    (size > 0.0).then_some(size)
}

/// Inked samples on a `density`-spaced grid, row by row
pub fn sample_ink(bitmap: &Bitmap, density: u32) -> Vec<Vec2> {
    if density == 0 {
        return Vec::new();
    }
    let mut points = Vec::new();
    for y in (0..bitmap.height).step_by(density as usize) {
        for x in (0..bitmap.width).step_by(density as usize) {
            if bitmap.is_ink(x, y) {
                points.push(Vec2::new(x as f64, y as f64));
            }
        }
    }
    points
}

/// Spawn points for `word` on a `width` x `height` canvas
pub fn rasterize_word(
    renderer: &mut dyn TextRenderer,
    width: u32,
    height: u32,
    word: &str,
    density: u32,
    stride: u32,
    fit: &TextFit,
) -> Vec<Vec2> {
    if width == 0 || height == 0 || density == 0 || stride == 0 || word.is_empty() {
        return Vec::new();
    }
    let Some(size) = fit_font_size(renderer, word, width as f64, fit) else {
        return Vec::new();
    };
    let bitmap = renderer.render(word, size, width, height, stride);
    sample_ink(&bitmap, density)
}
