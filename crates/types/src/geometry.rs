/// A bounding box in viewport coordinates (CSS pixels, origin at the top-left
/// corner of the viewport, y growing downwards).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Distance from the viewport top to the top edge of the box.
    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the same box shifted vertically by `dy`.
    pub fn translate_y(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_keeps_size() {
        let r = Rect::new(0.0, 120.0, 300.0, 40.0).translate_y(-200.0);
        assert_eq!(r.top(), -80.0);
        assert_eq!(r.bottom(), -40.0);
        assert_eq!(r.width, 300.0);
    }
}
