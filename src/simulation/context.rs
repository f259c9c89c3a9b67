use crate::core::math::Vec2;

/// Per-frame timing and canvas size, fixed for the duration of a frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameContext {
    pub width: f64,
    pub height: f64,
    /// Time since the loop started
    pub millis: f64,
    /// Time since the previous frame
    pub dt: f64,
}

impl FrameContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            millis: 0.0,
            dt: 0.0,
        }
    }

    /// Move the clock to `millis`, deriving `dt` from the previous value
    pub fn advance_to(&mut self, millis: f64) {
        self.dt = (millis - self.millis).max(0.0);
        self.millis = millis;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Latest mouse and touch positions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    pub mouse: Vec2,
    pub touches: Vec<Vec2>,
}

impl PointerState {
    pub fn at(x: f64, y: f64) -> Self {
        let mut pointer = Self::default();
        pointer.move_to(x, y);
        pointer
    }

    /// Mouse moves mirror into the first touch slot
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.mouse = Vec2::new(x, y);
        self.touches.clear();
        self.touches.push(self.mouse);
    }

    pub fn set_touches(&mut self, touches: &[Vec2]) {
        self.touches.clear();
        self.touches.extend_from_slice(touches);
        if let Some(first) = touches.first() {
            self.mouse = *first;
        }
    }

    /// First touch, falling back to the mouse
    pub fn primary(&self) -> Vec2 {
        self.touches.first().copied().unwrap_or(self.mouse)
    }
}

/// Pointer input forwarded by the harness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Move,
    Click,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_derives_dt() {
        let mut frame = FrameContext::new(100.0, 50.0);
        frame.advance_to(16.0);
        frame.advance_to(40.0);
        assert_eq!(frame.dt, 24.0);
        assert_eq!(frame.millis, 40.0);
    }

    #[test]
    fn mouse_move_fills_first_touch() {
        let pointer = PointerState::at(3.0, 4.0);
        assert_eq!(pointer.primary(), Vec2::new(3.0, 4.0));
        assert_eq!(pointer.touches.len(), 1);
    }

    #[test]
    fn touches_drive_the_mouse() {
        let mut pointer = PointerState::default();
        pointer.set_touches(&[Vec2::new(9.0, 1.0), Vec2::new(2.0, 2.0)]);
        assert_eq!(pointer.mouse, Vec2::new(9.0, 1.0));
        assert_eq!(pointer.primary(), Vec2::new(9.0, 1.0));
    }
}
