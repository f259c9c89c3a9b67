//! Tuning tables
//!
//! Every numeric constant the effects use lives here. A JSON bundle may
//! override any subset of them; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::core::random::Span;

use super::color::Color;
use super::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ball_pit: BallPitTuning,
    pub bubbles: BubblesTuning,
    pub river: RiverTuning,
    pub stripes: StripesTuning,
    pub brain_failure: BrainFailureTuning,
    pub draw_text: DrawTextTuning,
    pub destroy_text: DestroyTextTuning,
}

// Ceilings on the fields that size particle pools
const MAX_BALL_DENSITY: f64 = 0.01;
const MAX_DROPLETS_PER_PX: f64 = 10.0;
const MAX_EXTRA_ROWS: f64 = 100.0;
const MAX_BUBBLES: usize = 10_000;
/// Smallest vertex spacing or tile width, in pixels
const MIN_STEP_PX: f64 = 1.0;

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ball = &self.ball_pit;
        check_span("ball_pit.radius", ball.radius)?;
        check_span("ball_pit.speed", ball.speed)?;
        check_drag_span("ball_pit.drag", ball.drag)?;
        check_positive("ball_pit.max_speed", ball.max_speed)?;
        check_range("ball_pit.density", ball.density, 0.0, MAX_BALL_DENSITY)?;

        let bubbles = &self.bubbles;
        check_drag_span("bubbles.drag", bubbles.drag)?;
        check_span("bubbles.small_radius", bubbles.small_radius)?;
        check_span("bubbles.large_radius", bubbles.large_radius)?;
        check_drag("bubbles.shrink", bubbles.shrink)?;
        if bubbles.max_particles == 0 {
            return Err(ConfigError::invalid("bubbles.max_particles", "must be at least 1"));
        }
        check_count("bubbles.max_particles", bubbles.max_particles)?;
        check_count("bubbles.initial_particles", bubbles.initial_particles)?;
        check_count("bubbles.spawn_on_click", bubbles.spawn_on_click)?;
        check_range("bubbles.spawn_on_touch", bubbles.spawn_on_touch, 1.0, MAX_BUBBLES as f64)?;

        check_drag("river.friction", self.river.friction)?;
        check_span("river.lightness", self.river.lightness)?;
        check_range("river.droplets_per_px", self.river.droplets_per_px, 0.0, MAX_DROPLETS_PER_PX)?;

        check_range("stripes.spacing", self.stripes.spacing, MIN_STEP_PX, f64::MAX)?;
        check_drag("stripes.spring", self.stripes.spring)?;

        check_range("brain_failure.plus_width", self.brain_failure.plus_width, MIN_STEP_PX, f64::MAX)?;
        check_range("brain_failure.extra_rows", self.brain_failure.extra_rows, 0.0, MAX_EXTRA_ROWS)?;
        check_positive("brain_failure.period_ms", self.brain_failure.period_ms)?;

        if self.draw_text.fonts.is_empty() {
            return Err(ConfigError::invalid("draw_text.fonts", "needs at least one font"));
        }

        let destroy = &self.destroy_text;
        check_drag("destroy_text.drag", destroy.drag)?;
        if destroy.word.trim().is_empty() {
            return Err(ConfigError::invalid("destroy_text.word", "must not be empty"));
        }
        if destroy.density == 0 {
            return Err(ConfigError::invalid("destroy_text.density", "must be at least 1"));
        }
        if destroy.stride == 0 {
            return Err(ConfigError::invalid("destroy_text.stride", "must be at least 1"));
        }
        Ok(())
    }
}

fn check_span(field: &'static str, span: Span) -> Result<(), ConfigError> {
    if span.is_ordered() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("min {} above max {}", span.min, span.max)))
    }
}

fn check_drag(field: &'static str, drag: f64) -> Result<(), ConfigError> {
    if drag > 0.0 && drag < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{} is outside (0, 1)", drag)))
    }
}

fn check_drag_span(field: &'static str, span: Span) -> Result<(), ConfigError> {
    check_span(field, span)?;
    check_drag(field, span.min)?;
    check_drag(field, span.max)
}

/// Finite and within `[min, max]`
fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{} is outside [{}, {}]", value, min, max)))
    }
}

fn check_count(field: &'static str, count: usize) -> Result<(), ConfigError> {
    if count <= MAX_BUBBLES {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{} is above {}", count, MAX_BUBBLES)))
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{} must be positive", value)))
    }
}

/// Random heading walk shared by balls and bubbles
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderTuning {
    /// Per-particle wander rate
    pub rate: Span,
    /// Heading change per frame, scaled by the rate
    pub step: Span,
    /// Acceleration along the heading
    pub force: f64,
}

impl Default for WanderTuning {
    fn default() -> Self {
        Self {
            rate: Span::new(0.5, 2.0),
            step: Span::new(-0.5, 0.5),
            force: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallPitTuning {
    /// Balls per square pixel
    pub density: f64,
    pub radius: Span,
    pub speed: Span,
    pub drag: Span,
    pub wander: WanderTuning,
    pub mouse_radius: f64,
    pub mouse_repulsion: f64,
    pub max_speed: f64,
    /// Velocity multiplier on click
    pub click_boost: f64,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: Span,
}

impl Default for BallPitTuning {
    fn default() -> Self {
        Self {
            density: 0.001,
            radius: Span::new(4.0, 10.0),
            speed: Span::new(2.0, 8.0),
            drag: Span::new(0.9, 0.99),
            wander: WanderTuning::default(),
            mouse_radius: 150.0,
            mouse_repulsion: 0.4,
            max_speed: 40.0,
            click_boost: 2.0,
            hue: 47.0,
            saturation: 80.0,
            lightness: Span::new(30.0, 55.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubblesTuning {
    pub max_particles: usize,
    pub initial_particles: usize,
    /// Initial bubbles land within this many pixels of the centre
    pub initial_spread: f64,
    /// Upper bound of bubbles spawned per pointer move
    pub spawn_on_touch: f64,
    pub spawn_on_click: usize,
    pub small_radius: Span,
    pub large_radius: Span,
    /// Bubbles above this radius launch faster
    pub fast_above: f64,
    pub speed: Span,
    pub fast_speed: Span,
    pub drag: Span,
    pub wander: WanderTuning,
    /// Radius multiplier per frame
    pub shrink: f64,
    pub min_radius: f64,
    pub hue: f64,
    pub saturation: Span,
    pub lightness: Span,
    pub composite: String,
}

impl Default for BubblesTuning {
    fn default() -> Self {
        Self {
            max_particles: 280,
            initial_particles: 40,
            initial_spread: 100.0,
            spawn_on_touch: 4.0,
            spawn_on_click: 50,
            small_radius: Span::new(5.0, 40.0),
            large_radius: Span::new(30.0, 80.0),
            fast_above: 35.0,
            speed: Span::new(2.0, 8.0),
            fast_speed: Span::new(4.0, 16.0),
            drag: Span::new(0.9, 0.99),
            wander: WanderTuning::default(),
            shrink: 0.96,
            min_radius: 0.5,
            hue: 47.0,
            saturation: Span::new(30.0, 80.0),
            lightness: Span::new(30.0, 55.0),
            composite: "lighter".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiverTuning {
    /// Droplets per pixel of canvas width
    pub droplets_per_px: f64,
    /// Band height as a fraction of canvas height
    pub flow_width: f64,
    /// Band shift above centre as a fraction of canvas height
    pub flow_offset: f64,
    pub mouse_radius: f64,
    pub mouse_repulsion: f64,
    /// Downstream acceleration; also scales the vertical jitter
    pub flow: f64,
    pub friction: f64,
    pub boundary_nudge: f64,
    pub entry_speed: f64,
    pub lightness: Span,
    /// Translucent fill laid over the previous frame
    pub fade: Color,
}

impl Default for RiverTuning {
    fn default() -> Self {
        Self {
            droplets_per_px: 1.1,
            flow_width: 0.15,
            flow_offset: 0.17,
            mouse_radius: 75.0,
            mouse_repulsion: 0.4,
            flow: 0.3,
            friction: 0.95,
            boundary_nudge: 0.4,
            entry_speed: 5.0,
            lightness: Span::new(30.0, 70.0),
            fade: Color::Rgba(255, 255, 255, 0.05),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StripeLine {
    pub color: Color,
    /// Shift above the vertical centre
    pub y_offset: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripesTuning {
    /// Distance between vertices
    pub spacing: f64,
    pub mouse_sensitivity: f64,
    pub line_width: f64,
    /// Lines start and end this far outside the canvas
    pub overlap: f64,
    /// Fraction of the displacement recovered per frame
    pub spring: f64,
    pub lines: Vec<StripeLine>,
}

impl Default for StripesTuning {
    fn default() -> Self {
        Self {
            spacing: 6.0,
            mouse_sensitivity: 450.0,
            line_width: 10.0,
            overlap: 10.0,
            spring: 0.07,
            lines: vec![
                StripeLine { color: Color::hex(0xDDDDDD), y_offset: -10.0 },
                StripeLine { color: Color::hex(0x666666), y_offset: -25.0 },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainFailureTuning {
    pub plus_width: f64,
    pub period_ms: f64,
    pub grey: Color,
    pub white: Color,
    /// Rows laid out past the bottom edge to cover the diagonal shift
    pub extra_rows: f64,
}

impl Default for BrainFailureTuning {
    fn default() -> Self {
        Self {
            plus_width: 75.0,
            period_ms: 1450.0,
            grey: Color::hsl(48.0, 0.0, 85.0),
            white: Color::hsl(48.0, 0.0, 100.0),
            extra_rows: 11.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontFace {
    pub family: String,
    /// CSS font weight/style prefix, may be empty
    pub variant: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawTextTuning {
    /// Text to write; `~N` switches to font N and is not drawn
    pub script: String,
    pub min_font_size: f64,
    pub fonts: Vec<FontFace>,
}

impl Default for DrawTextTuning {
    fn default() -> Self {
        let playfair = "'Playfair Display'".to_string();
        Self {
            script: "Hi there, ~1I'm Phil!~0 Scroll down to see the ~2top 5 reasons~0 you should ~1hire me."
                .to_string(),
            min_font_size: 14.0,
            fonts: vec![
                FontFace { family: playfair.clone(), variant: String::new(), color: Color::hex(0x838B91) },
                FontFace { family: playfair.clone(), variant: "bold".to_string(), color: Color::WHITE },
                FontFace { family: playfair, variant: "bold".to_string(), color: Color::hex(0xFCC908) },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestroyTextTuning {
    pub word: String,
    /// Sampling grid step in pixels
    pub density: u32,
    /// Bytes per bitmap pixel
    pub stride: u32,
    pub radius: f64,
    pub drag: f64,
    /// Dots already faster than this keep their velocity when hit
    pub release_speed: f64,
    pub mouse_radius: f64,
    pub click_radius: f64,
    pub jitter: Span,
    pub color: Color,
    pub font: TextFit,
    pub win_image: String,
    /// Banner height as a fraction of canvas height
    pub win_height: f64,
    pub win_backdrop: Color,
}

impl Default for DestroyTextTuning {
    fn default() -> Self {
        Self {
            word: "THANKS".to_string(),
            density: 10,
            stride: 4,
            radius: 4.0,
            drag: 0.995,
            release_speed: 1.0,
            mouse_radius: 20.0,
            click_radius: 60.0,
            jitter: Span::new(-2.0, 2.0),
            color: Color::hex(0xFDC900),
            font: TextFit::default(),
            win_image: "images/winner.png".to_string(),
            win_height: 0.6,
            win_backdrop: Color::BLACK,
        }
    }
}

/// Font-size search for rasterized words
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFit {
    pub max_size: f64,
    pub step: f64,
    /// Horizontal room left around the word
    pub padding: f64,
}

impl Default for TextFit {
    fn default() -> Self {
        Self {
            max_size: 225.0,
            step: 20.0,
            padding: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"bubbles":{"max_particles":12}}"#).unwrap();
        assert_eq!(tuning.bubbles.max_particles, 12);
        assert_eq!(tuning.bubbles.initial_particles, 40);
        assert_eq!(tuning.ball_pit, BallPitTuning::default());
    }

    #[test]
    fn drag_outside_unit_interval_is_rejected() {
        let err = Tuning::from_json(r#"{"river":{"friction":1.5}}"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "river.friction"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_density_is_rejected() {
        assert!(Tuning::from_json(r#"{"destroy_text":{"density":0}}"#).is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Tuning::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn json_round_trip_preserves_defaults() {
        let json = Tuning::default().to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }

    fn rejected_field(json: &str) -> &'static str {
        match Tuning::from_json(json).unwrap_err() {
            ConfigError::Invalid { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sub_pixel_spacing_is_rejected() {
        assert_eq!(rejected_field(r#"{"stripes":{"spacing":1e-300}}"#), "stripes.spacing");
        assert_eq!(rejected_field(r#"{"brain_failure":{"plus_width":0.5}}"#), "brain_failure.plus_width");
    }

    #[test]
    fn pool_sizing_fields_are_bounded() {
        assert_eq!(rejected_field(r#"{"ball_pit":{"density":1000.0}}"#), "ball_pit.density");
        assert_eq!(rejected_field(r#"{"ball_pit":{"density":-5.0}}"#), "ball_pit.density");
        assert_eq!(rejected_field(r#"{"river":{"droplets_per_px":1e12}}"#), "river.droplets_per_px");
        assert_eq!(rejected_field(r#"{"brain_failure":{"extra_rows":1e15}}"#), "brain_failure.extra_rows");
        assert_eq!(rejected_field(r#"{"bubbles":{"initial_particles":1000000}}"#), "bubbles.initial_particles");
    }

    #[test]
    fn zero_density_ball_pit_is_allowed() {
        assert!(Tuning::from_json(r#"{"ball_pit":{"density":0.0}}"#).is_ok());
    }
}
