//! Letters laid along the pointer path
//!
//! The painter trails the pointer. Once the pointer has moved further than
//! the next letter is wide, the letter is written at the painter's position,
//! turned towards the pointer and sized by how far the pointer got ahead.

use crate::core::math::{distance, Vec2};
use crate::core::random::Rng;
use crate::domain::tuning::DrawTextTuning;
use crate::domain::EffectKind;
use crate::simulation::context::{FrameContext, PointerEvent, PointerState};
use crate::simulation::render::Surface;
use crate::systems::particles::{font_css, font_face, Glyph, Script};
use crate::systems::{Particle, ParticlePool};

use super::Effect;

/// What the page should show around the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawTextPhase {
    /// Nothing written yet; show the hint
    AwaitingPointer,
    Writing,
    /// Script exhausted; offer a redraw
    Finished,
}

impl DrawTextPhase {
    pub fn name(&self) -> &'static str {
        match self {
            DrawTextPhase::AwaitingPointer => "awaiting_pointer",
            DrawTextPhase::Writing => "writing",
            DrawTextPhase::Finished => "finished",
        }
    }
}

/// Cursor into the script plus the point the next letter starts from
#[derive(Clone, Debug, PartialEq)]
pub struct Painter {
    script: Script,
    next: usize,
    position: Option<Vec2>,
}

impl Painter {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            next: 0,
            position: None,
        }
    }

    /// Rewind to the first letter, writing from `at`
    pub fn restart(&mut self, at: Vec2) {
        self.next = 0;
        self.position = Some(at);
    }

    pub fn letters_written(&self) -> usize {
        self.next
    }

    /// Whether a pointer position has been taken to write from
    pub fn is_anchored(&self) -> bool {
        self.position.is_some()
    }

    /// Awaiting the pointer until the first letter lands
    pub fn phase(&self) -> DrawTextPhase {
        if self.next >= self.script.len() {
            DrawTextPhase::Finished
        } else if self.next == 0 {
            DrawTextPhase::AwaitingPointer
        } else {
            DrawTextPhase::Writing
        }
    }

    /// Place the next letter if the pointer has moved far enough
    fn place(&mut self, mouse: Vec2, tuning: &DrawTextTuning, surface: &mut dyn Surface) -> Option<Glyph> {
        let position = self.position?;
        let letter = self.script.get(self.next)?;
        let face = font_face(tuning, letter.font)?;

        let gap = distance(mouse, position);
        let size = tuning.min_font_size + gap.magnitude / 2.0;

        let mut buf = [0u8; 4];
        surface.set_font(&font_css(face, size));
        let width = surface.measure_text(letter.letter.encode_utf8(&mut buf));
        if gap.magnitude <= width {
            return None;
        }

        let angle = gap.dy.atan2(gap.dx);
        self.position = Some(position + Vec2::new(angle.cos(), angle.sin()) * width);
        self.next += 1;
        Some(Glyph {
            letter,
            size,
            pos: position,
            angle,
        })
    }
}

/// Handwriting effect; the canvas is never cleared by the loop, only by a
/// click that starts the text over
pub struct DrawText {
    tuning: DrawTextTuning,
    painter: Painter,
    glyphs: ParticlePool<Glyph>,
    rng: Rng,
}

impl DrawText {
    pub fn new(tuning: DrawTextTuning) -> Self {
        let painter = Painter::new(Script::parse(&tuning.script));
        Self {
            tuning,
            painter,
            glyphs: ParticlePool::unbounded(),
            rng: Rng::default(),
        }
    }

    pub fn phase(&self) -> DrawTextPhase {
        self.painter.phase()
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    pub fn glyphs(&self) -> &ParticlePool<Glyph> {
        &self.glyphs
    }
}

impl Effect for DrawText {
    fn kind(&self) -> EffectKind {
        EffectKind::DrawText
    }

    fn setup(&mut self, _frame: &FrameContext, _surface: &mut dyn Surface) {
        self.glyphs.clear();
        self.painter = Painter::new(Script::parse(&self.tuning.script));
    }

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState) {
        self.glyphs.update(&self.tuning, frame, pointer, &mut self.rng);
    }

    // Letters are painted as they are placed.
    fn draw(&mut self, _frame: &FrameContext, _surface: &mut dyn Surface) {}

    fn pointer(&mut self, event: PointerEvent, frame: &FrameContext, pointer: &PointerState, surface: &mut dyn Surface) {
        match event {
            PointerEvent::Move => {
                if !self.painter.is_anchored() {
                    self.painter.restart(pointer.mouse);
                    return;
                }
                if let Some(glyph) = self.painter.place(pointer.mouse, &self.tuning, surface) {
                    glyph.draw(&self.tuning, surface);
                    self.glyphs.push(glyph);
                }
            }
            PointerEvent::Click => {
                self.glyphs.clear();
                self.painter.restart(pointer.mouse);
                surface.clear(frame.width, frame.height);
            }
        }
    }

    fn autoclear(&self) -> bool {
        false
    }

    fn particle_count(&self) -> usize {
        self.glyphs.len()
    }

    fn phase(&self) -> Option<DrawTextPhase> {
        Some(self.painter.phase())
    }

    fn destroy(&mut self, _surface: &mut dyn Surface) {
        self.glyphs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::render::{DrawCommand, RecordingSurface};

    fn effect() -> (DrawText, FrameContext, RecordingSurface) {
        let frame = FrameContext::new(800.0, 400.0);
        let mut effect = DrawText::new(DrawTextTuning::default());
        let mut surface = RecordingSurface::new();
        effect.setup(&frame, &mut surface);
        (effect, frame, surface)
    }

    fn move_to(effect: &mut DrawText, frame: &FrameContext, surface: &mut RecordingSurface, x: f64, y: f64) {
        effect.pointer(PointerEvent::Move, frame, &PointerState::at(x, y), surface);
    }

    #[test]
    fn first_move_only_anchors_the_painter() {
        let (mut effect, frame, mut surface) = effect();
        assert_eq!(effect.phase(), DrawTextPhase::AwaitingPointer);
        move_to(&mut effect, &frame, &mut surface, 10.0, 10.0);
        assert!(effect.painter().is_anchored());
        assert_eq!(effect.phase(), DrawTextPhase::AwaitingPointer);
        assert_eq!(effect.particle_count(), 0);
    }

    #[test]
    fn writing_starts_with_the_first_letter() {
        let (mut effect, frame, mut surface) = effect();
        move_to(&mut effect, &frame, &mut surface, 10.0, 10.0);
        move_to(&mut effect, &frame, &mut surface, 15.0, 10.0);
        assert_eq!(effect.phase(), DrawTextPhase::AwaitingPointer);
        move_to(&mut effect, &frame, &mut surface, 60.0, 10.0);
        assert_eq!(effect.painter().letters_written(), 1);
        assert_eq!(effect.phase(), DrawTextPhase::Writing);
    }

    #[test]
    fn small_moves_write_nothing() {
        let (mut effect, frame, mut surface) = effect();
        move_to(&mut effect, &frame, &mut surface, 10.0, 10.0);
        // 5px of travel against a 16.5px font: "H" is 8.25px wide on the recorder
        move_to(&mut effect, &frame, &mut surface, 15.0, 10.0);
        assert_eq!(effect.painter().letters_written(), 0);
    }

    #[test]
    fn letters_follow_the_pointer() {
        let (mut effect, frame, mut surface) = effect();
        move_to(&mut effect, &frame, &mut surface, 0.0, 100.0);
        move_to(&mut effect, &frame, &mut surface, 40.0, 100.0);

        assert_eq!(effect.painter().letters_written(), 1);
        let glyph = effect.glyphs().iter().next().unwrap();
        assert_eq!(glyph.letter.letter, 'H');
        assert_eq!(glyph.pos, Vec2::new(0.0, 100.0));
        assert_eq!(glyph.size, 34.0);
        assert_eq!(glyph.angle, 0.0);
        assert!(surface.commands().contains(&DrawCommand::FillText {
            text: "H".to_string(),
            x: 0.0,
            y: 0.0,
        }));
        // advanced by the letter width: 1 char * 34px * 0.5
        assert_eq!(effect.painter.position, Some(Vec2::new(17.0, 100.0)));
    }

    #[test]
    fn script_runs_out() {
        let tuning = DrawTextTuning {
            script: "a~1b".to_string(),
            ..DrawTextTuning::default()
        };
        let frame = FrameContext::new(800.0, 400.0);
        let mut effect = DrawText::new(tuning);
        let mut surface = RecordingSurface::new();
        effect.setup(&frame, &mut surface);

        move_to(&mut effect, &frame, &mut surface, 0.0, 0.0);
        for x in [100.0, 300.0, 500.0] {
            move_to(&mut effect, &frame, &mut surface, x, 0.0);
        }
        assert_eq!(effect.particle_count(), 2);
        assert_eq!(effect.phase(), DrawTextPhase::Finished);
        let fonts: Vec<usize> = effect.glyphs().iter().map(|g| g.letter.font).collect();
        assert_eq!(fonts, vec![0, 1]);
    }

    #[test]
    fn click_wipes_and_restarts() {
        let (mut effect, frame, mut surface) = effect();
        move_to(&mut effect, &frame, &mut surface, 0.0, 0.0);
        move_to(&mut effect, &frame, &mut surface, 100.0, 0.0);
        assert_eq!(effect.particle_count(), 1);

        effect.pointer(PointerEvent::Click, &frame, &PointerState::at(5.0, 5.0), &mut surface);
        assert_eq!(effect.particle_count(), 0);
        assert_eq!(effect.phase(), DrawTextPhase::AwaitingPointer);
        assert!(effect.painter().is_anchored());
        assert_eq!(effect.painter().letters_written(), 0);
        assert_eq!(surface.commands().last(), Some(&DrawCommand::Clear { width: 800.0, height: 400.0 }));
    }
}
