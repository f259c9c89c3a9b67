use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::color::Color;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::Particle;

/// Shared paint state for every tile in a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlusPaint {
    pub width: f64,
    pub rotation: f64,
    pub color: Color,
    pub offset: Vec2,
}

/// One plus sign of the brain-failure grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlusTile {
    pub center: Vec2,
}

impl PlusTile {
    pub fn new(center: Vec2) -> Self {
        Self { center }
    }
}

impl Particle for PlusTile {
    type Params = PlusPaint;

    // Tiles never move; the shared rotation animates them.
    fn update(&mut self, _: &PlusPaint, _: &FrameContext, _: &PointerState, _: &mut Rng) {}

    /// On canvas with one tile of margin
    fn is_alive(&self, paint: &PlusPaint, frame: &FrameContext) -> bool {
        let w = paint.width;
        let Vec2 { x, y } = self.center;
        y > -w && y < frame.height + w && x > -w && x < frame.width + w
    }

    fn draw(&self, paint: &PlusPaint, surface: &mut dyn Surface) {
        let w = paint.width;
        let x = self.center.x + paint.offset.x;
        let y = self.center.y + paint.offset.y;

        surface.translate(x, y);
        surface.rotate(paint.rotation);

        surface.set_fill(&paint.color);
        surface.fill_rect(-w / 2.0, -w / 6.0, w, w / 3.0);
        surface.fill_rect(-w / 6.0, -w / 2.0, w / 3.0, w);

        surface.rotate(-paint.rotation);
        surface.translate(-x, -y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::render::{DrawCommand, RecordingSurface};

    fn paint() -> PlusPaint {
        PlusPaint {
            width: 75.0,
            rotation: 0.3,
            color: Color::WHITE,
            offset: Vec2::new(-50.0, -25.0),
        }
    }

    #[test]
    fn margin_is_one_tile() {
        let frame = FrameContext::new(300.0, 300.0);
        assert!(PlusTile::new(Vec2::new(-74.0, 10.0)).is_alive(&paint(), &frame));
        assert!(!PlusTile::new(Vec2::new(-75.0, 10.0)).is_alive(&paint(), &frame));
        assert!(!PlusTile::new(Vec2::new(10.0, 375.0)).is_alive(&paint(), &frame));
    }

    #[test]
    fn draw_restores_transform() {
        let mut surface = RecordingSurface::new();
        PlusTile::new(Vec2::new(100.0, 100.0)).draw(&paint(), &mut surface);
        let commands = surface.commands();
        assert_eq!(commands.first(), Some(&DrawCommand::Translate { x: 50.0, y: 75.0 }));
        assert_eq!(commands.last(), Some(&DrawCommand::Translate { x: -50.0, y: -75.0 }));
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::FillRect { .. })), 2);
    }
}
