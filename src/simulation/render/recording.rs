use std::collections::HashMap;

use crate::domain::color::Color;

use super::surface::{LineJoin, Surface};

/// Width of one character as a fraction of the font size
const DEFAULT_ADVANCE: f64 = 0.5;
const DEFAULT_FONT_PX: f64 = 10.0;

/// One recorded surface call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    Fill(Color),
    StrokeStyle(Color),
    LineWidth(f64),
    LineJoin(LineJoin),
    Composite(String),
    BeginPath,
    ClosePath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticCurveTo { cpx: f64, cpy: f64, x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64 },
    FillPath,
    StrokePath,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    Font(String),
    FillText { text: String, x: f64, y: f64 },
    LoadImage(String),
    Image { key: String, x: f64, y: f64, width: f64, height: f64 },
    Backdrop(Option<Color>),
}

/// `Surface` that keeps every call for inspection
///
/// Text is measured as `chars * font_px * advance`, where `font_px` is read
/// from the last `set_font` call.
#[derive(Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    images: HashMap<String, (f64, f64)>,
    font_px: f64,
    advance: f64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            images: HashMap::new(),
            font_px: DEFAULT_FONT_PX,
            advance: DEFAULT_ADVANCE,
        }
    }

    /// Register an image as loaded with the given natural size
    pub fn with_image(mut self, key: &str, width: f64, height: f64) -> Self {
        self.images.insert(key.to_string(), (width, height));
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain everything recorded so far
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel size from a CSS font shorthand (`bold 40px serif` -> 40)
fn font_px(font: &str) -> Option<f64> {
    font.split_whitespace()
        .find_map(|token| token.strip_suffix("px"))
        .and_then(|size| size.parse().ok())
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.record(DrawCommand::Clear { width, height });
    }

    fn save(&mut self) {
        self.record(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.record(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.record(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.record(DrawCommand::Rotate { angle });
    }

    fn set_fill(&mut self, color: &Color) {
        self.record(DrawCommand::Fill(*color));
    }

    fn set_stroke(&mut self, color: &Color) {
        self.record(DrawCommand::StrokeStyle(*color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(DrawCommand::LineWidth(width));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.record(DrawCommand::LineJoin(join));
    }

    fn set_composite(&mut self, operation: &str) {
        self.record(DrawCommand::Composite(operation.to_string()));
    }

    fn begin_path(&mut self) {
        self.record(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.record(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(DrawCommand::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.record(DrawCommand::QuadraticCurveTo { cpx, cpy, x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
        self.record(DrawCommand::Arc { x, y, radius });
    }

    fn fill(&mut self) {
        self.record(DrawCommand::FillPath);
    }

    fn stroke(&mut self) {
        self.record(DrawCommand::StrokePath);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawCommand::FillRect { x, y, width, height });
    }

    fn set_font(&mut self, font: &str) {
        if let Some(px) = font_px(font) {
            self.font_px = px;
        }
        self.record(DrawCommand::Font(font.to_string()));
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_px * self.advance
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.record(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn load_image(&mut self, key: &str) {
        self.record(DrawCommand::LoadImage(key.to_string()));
    }

    fn image_size(&self, key: &str) -> Option<(f64, f64)> {
        self.images.get(key).copied()
    }

    fn draw_image(&mut self, key: &str, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawCommand::Image {
            key: key.to_string(),
            x,
            y,
            width,
            height,
        });
    }

    fn set_backdrop(&mut self, color: Option<&Color>) {
        self.record(DrawCommand::Backdrop(color.copied()));
    }
}
