use crate::domain::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Round,
    Bevel,
    Miter,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
        }
    }
}

/// 2D raster drawing surface (a canvas 2D context in the browser)
///
/// Effects only draw through this trait so they can run against a recorder
/// in native tests.
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);

    fn set_fill(&mut self, color: &Color);
    fn set_stroke(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);
    /// `globalCompositeOperation`
    fn set_composite(&mut self, operation: &str);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// CSS font shorthand, e.g. `bold 40px 'Playfair Display'`
    fn set_font(&mut self, font: &str);
    /// Advance width of `text` in the current font
    fn measure_text(&mut self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Start fetching an image so it can be drawn later
    fn load_image(&mut self, key: &str);
    /// Natural size of a preloaded image, `None` until it has loaded
    fn image_size(&self, key: &str) -> Option<(f64, f64)>;
    fn draw_image(&mut self, key: &str, x: f64, y: f64, width: f64, height: f64);

    /// Background of the element hosting the canvas; `None` restores the
    /// stylesheet value.
    fn set_backdrop(&mut self, color: Option<&Color>);
}
