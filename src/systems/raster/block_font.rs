//! 5x7 block font
//!
//! Deterministic stand-in for a canvas text renderer: each glyph is a 5x7
//! grid with one blank column between letters, scaled so the grid height
//! equals the font size.

use super::{Bitmap, TextRenderer};

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Glyph plus the blank spacing column
const CELL_COLS: usize = GLYPH_COLS + 1;

type Glyph = [u8; GLYPH_ROWS];

const BLANK: Glyph = [0; GLYPH_ROWS];

fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => BLANK,
    }
}

#[inline]
fn bit(glyph: &Glyph, row: usize, col: usize) -> bool {
    (glyph[row] >> (GLYPH_COLS - 1 - col)) & 1 == 1
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BlockFont;

impl BlockFont {
    pub fn new() -> Self {
        Self
    }
}

impl TextRenderer for BlockFont {
    fn measure(&mut self, word: &str, size: f64) -> f64 {
        let letters = word.chars().count();
        if letters == 0 {
            return 0.0;
        }
        let scale = size / GLYPH_ROWS as f64;
        (letters * CELL_COLS - 1) as f64 * scale
    }

    fn render(&mut self, word: &str, size: f64, width: u32, height: u32, stride: u32) -> Bitmap {
        let mut bitmap = Bitmap::new(width, height, stride);
        let glyphs: Vec<Glyph> = word.chars().map(glyph).collect();
        if glyphs.is_empty() || size <= 0.0 {
            return bitmap;
        }

        let scale = size / GLYPH_ROWS as f64;
        let left = width as f64 / 2.0 - self.measure(word, size) / 2.0;
        let top = height as f64 / 2.0 - size / 2.0;

        for py in 0..height {
            let fy = (py as f64 + 0.5 - top) / scale;
            if fy < 0.0 || fy >= GLYPH_ROWS as f64 {
                continue;
            }
            let row = fy as usize;
            for px in 0..width {
                let fx = (px as f64 + 0.5 - left) / scale;
                if fx < 0.0 {
                    continue;
                }
                let cell = fx as usize;
                let (index, col) = (cell / CELL_COLS, cell % CELL_COLS);
                if col >= GLYPH_COLS {
                    continue;
                }
                let Some(glyph) = glyphs.get(index) else {
                    break;
                };
                if bit(glyph, row, col) {
                    bitmap.ink(px, py);
                }
            }
        }
        bitmap
    }
}
