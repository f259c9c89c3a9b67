//! Browser drawing: `Surface` over a canvas 2D context, and the offscreen
//! canvas used to rasterize words

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement};

use crate::domain::color::Color;
use crate::systems::raster::{Bitmap, TextRenderer};

use super::surface::{LineJoin, Surface};

/// Bytes per pixel of `ImageData`
const RGBA: u32 = 4;
const WORD_FONT: &str = "impact, 'Open Sans Condensed'";

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has an unexpected type"))
}

// Drawing never fails the frame; a rejected call is logged and skipped.
fn warn_on(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        console_warn!("canvas {} failed: {:?}", op, err);
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    container: Option<HtmlElement>,
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        let container = canvas
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
        Ok(Self {
            canvas,
            ctx,
            container,
            images: HashMap::new(),
        })
    }

    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    pub fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    /// Resize the backing store; this also resets the context state
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        warn_on("translate", self.ctx.translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        warn_on("rotate", self.ctx.rotate(angle));
    }

    fn set_fill(&mut self, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke(&mut self, color: &Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(join.as_str());
    }

    fn set_composite(&mut self, operation: &str) {
        warn_on("composite", self.ctx.set_global_composite_operation(operation));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cpx, cpy, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        // negative radii throw
        warn_on("arc", self.ctx.arc(x, y, radius.max(0.0), start, end));
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        warn_on("fill_text", self.ctx.fill_text(text, x, y));
    }

    fn load_image(&mut self, key: &str) {
        if self.images.contains_key(key) {
            return;
        }
        match HtmlImageElement::new() {
            Ok(image) => {
                image.set_src(key);
                self.images.insert(key.to_string(), image);
            }
            Err(err) => console_warn!("cannot load {}: {:?}", key, err),
        }
    }

    fn image_size(&self, key: &str) -> Option<(f64, f64)> {
        let image = self.images.get(key)?;
        if !image.complete() || image.natural_width() == 0 {
            return None;
        }
        Some((image.natural_width() as f64, image.natural_height() as f64))
    }

    fn draw_image(&mut self, key: &str, x: f64, y: f64, width: f64, height: f64) {
        let Some(image) = self.images.get(key) else {
            return;
        };
        warn_on(
            "draw_image",
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, width, height),
        );
    }

    fn set_backdrop(&mut self, color: Option<&Color>) {
        let Some(container) = &self.container else {
            return;
        };
        let value = color.map(Color::to_css).unwrap_or_default();
        warn_on("backdrop", container.style().set_property("background-color", &value));
    }
}

/// Offscreen canvas that renders words black on transparent
pub struct CanvasText {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasText {
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    fn set_size(&self, size: f64) {
        self.ctx.set_font(&format!("bold {}px {}", size, WORD_FONT));
    }
}

impl TextRenderer for CanvasText {
    fn measure(&mut self, word: &str, size: f64) -> f64 {
        self.set_size(size);
        self.ctx.measure_text(word).map(|m| m.width()).unwrap_or(0.0)
    }

    fn render(&mut self, word: &str, size: f64, width: u32, height: u32, _stride: u32) -> Bitmap {
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        self.ctx.set_fill_style_str("#000000");
        self.set_size(size);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align("center");

        let pixels = self
            .ctx
            .fill_text(word, width as f64 / 2.0, height as f64 / 2.0)
            .and_then(|_| self.ctx.get_image_data(0.0, 0.0, width as f64, height as f64));
        match pixels {
            Ok(image) => Bitmap {
                width,
                height,
                stride: RGBA,
                data: image.data().0,
            },
            Err(err) => {
                console_warn!("cannot rasterize {:?}: {:?}", word, err);
                Bitmap::new(width, height, RGBA)
            }
        }
    }
}
