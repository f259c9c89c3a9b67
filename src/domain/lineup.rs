//! Effect lineup
//!
//! The page's composition root: which effect mounts in which container and
//! how long it renders before freezing until hovered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    DrawText,
    BallPit,
    River,
    Bubbles,
    Stripes,
    BrainFailure,
    DestroyText,
}

impl EffectKind {
    pub const ALL: [EffectKind; 7] = [
        EffectKind::DrawText,
        EffectKind::BallPit,
        EffectKind::River,
        EffectKind::Bubbles,
        EffectKind::Stripes,
        EffectKind::BrainFailure,
        EffectKind::DestroyText,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::DrawText => "draw_text",
            EffectKind::BallPit => "ball_pit",
            EffectKind::River => "river",
            EffectKind::Bubbles => "bubbles",
            EffectKind::Stripes => "stripes",
            EffectKind::BrainFailure => "brain_failure",
            EffectKind::DestroyText => "destroy_text",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        EffectKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownEffect(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub kind: EffectKind,
    /// CSS selector of the element hosting the canvas
    pub container: String,
    /// Freeze this many ms after construction; `None` keeps it running
    pub pause_after_ms: Option<u32>,
}

impl EffectDescriptor {
    fn new(kind: EffectKind, container: &str, pause_after_ms: Option<u32>) -> Self {
        Self {
            kind,
            container: container.to_string(),
            pause_after_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub effects: Vec<EffectDescriptor>,
}

impl Lineup {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get(&self, kind: EffectKind) -> Option<&EffectDescriptor> {
        self.effects.iter().find(|d| d.kind == kind)
    }
}

impl Default for Lineup {
    fn default() -> Self {
        Self {
            effects: vec![
                EffectDescriptor::new(EffectKind::DrawText, "#top .canvas-container", None),
                EffectDescriptor::new(EffectKind::BallPit, "#ball-pit .canvas-container", Some(0)),
                EffectDescriptor::new(EffectKind::River, "#river .canvas-container", Some(700)),
                EffectDescriptor::new(EffectKind::Bubbles, "#bubbles .canvas-container", Some(200)),
                EffectDescriptor::new(EffectKind::Stripes, "#stripes .canvas-container", Some(0)),
                EffectDescriptor::new(EffectKind::BrainFailure, "#brain-failure .canvas-container", Some(0)),
                EffectDescriptor::new(EffectKind::DestroyText, "#destroy .canvas-container", Some(0)),
            ],
        }
    }
}
