//! Domain data: colours, tuning tables, effect lineup

pub mod color;
pub mod error;
pub mod lineup;
pub mod tuning;

pub use color::Color;
pub use error::ConfigError;
pub use lineup::{EffectDescriptor, EffectKind, Lineup};
pub use tuning::Tuning;
