use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::tuning::{DrawTextTuning, FontFace};
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::Particle;

const FONT_SWITCH: char = '~';

/// A letter together with the font it is written in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptLetter {
    pub letter: char,
    pub font: usize,
}

/// Text to write, with `~N` font switches already resolved
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    letters: Vec<ScriptLetter>,
}

impl Script {
    /// `~` followed by a digit selects that font for the following letters;
    /// any other `~` is an ordinary letter.
    pub fn parse(text: &str) -> Self {
        let mut letters = Vec::with_capacity(text.len());
        let mut font = 0;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == FONT_SWITCH {
                if let Some(index) = chars.peek().and_then(|n| n.to_digit(10)) {
                    font = index as usize;
                    chars.next();
                    continue;
                }
            }
            letters.push(ScriptLetter { letter: c, font });
        }
        Self { letters }
    }

    pub fn get(&self, index: usize) -> Option<ScriptLetter> {
        self.letters.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// CSS font shorthand for `face` at `size` pixels
pub fn font_css(face: &FontFace, size: f64) -> String {
    if face.variant.is_empty() {
        format!("{}px {}", size, face.family)
    } else {
        format!("{} {}px {}", face.variant, size, face.family)
    }
}

/// Font `index`, clamped to the configured list
pub fn font_face(tuning: &DrawTextTuning, index: usize) -> Option<&FontFace> {
    tuning.fonts.get(index).or_else(|| tuning.fonts.last())
}

/// A letter laid down on the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub letter: ScriptLetter,
    pub size: f64,
    pub pos: Vec2,
    pub angle: f64,
}

impl Particle for Glyph {
    type Params = DrawTextTuning;

    // Placed once, never moves.
    fn update(&mut self, _: &DrawTextTuning, _: &FrameContext, _: &PointerState, _: &mut Rng) {}

    fn is_alive(&self, _: &DrawTextTuning, _: &FrameContext) -> bool {
        true
    }

    fn draw(&self, tuning: &DrawTextTuning, surface: &mut dyn Surface) {
        let Some(face) = font_face(tuning, self.letter.font) else {
            return;
        };
        let mut buf = [0u8; 4];
        let text: &str = self.letter.letter.encode_utf8(&mut buf);

        surface.set_font(&font_css(face, self.size));
        surface.set_fill(&face.color);
        surface.save();
        surface.translate(self.pos.x, self.pos.y);
        surface.rotate(self.angle);
        surface.fill_text(text, 0.0, 0.0);
        surface.restore();
    }
}
