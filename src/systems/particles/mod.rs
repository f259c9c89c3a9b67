//! Particle variants
//!
//! One module per effect. Each variant keeps only per-instance state; the
//! shared constants arrive as `Params` on every call.

mod body;
mod ball;
mod bubble;
mod droplet;
mod dot;
mod vertex;
mod plus;
mod glyph;

pub use body::{Body, Wander};
pub use ball::Ball;
pub use bubble::Bubble;
pub use droplet::{Band, Droplet};
pub use dot::Dot;
pub use vertex::StripeVertex;
pub use plus::{PlusPaint, PlusTile};
pub use glyph::{font_css, font_face, Glyph, Script, ScriptLetter};

use crate::core::random::Rng;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

/// A simulated entity owned by a `ParticlePool`
pub trait Particle {
    /// Immutable tuning shared by every particle of this kind
    type Params;

    /// Advance one frame: pointer influence, wander, damping, integration
    fn update(&mut self, params: &Self::Params, frame: &FrameContext, pointer: &PointerState, rng: &mut Rng);

    /// Liveness predicate; the pool culls particles that fail it
    fn is_alive(&self, params: &Self::Params, frame: &FrameContext) -> bool;

    fn draw(&self, params: &Self::Params, surface: &mut dyn Surface);
}
