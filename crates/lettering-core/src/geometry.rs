//! Drawing box and alignment for text renderables.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of drawn text inside its drawing box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    /// Text starts at the left edge of the box.
    #[default]
    Left,
    /// Text is centered on the horizontal middle of the box.
    Center,
}

impl Align {
    /// X coordinate where a run of `width` should start inside `bounds`.
    pub fn origin_x(self, bounds: Rect, width: f64) -> f64 {
        match self {
            Align::Left => bounds.x0,
            Align::Center => bounds.center().x - width * 0.5,
        }
    }
}

/// The drawing box of a renderable.
///
/// The size is fixed by whoever measured the text; the setters only move
/// the box. Setters chain:
///
/// ```
/// # use lettering_core::Dimensions;
/// # use kurbo::Size;
/// let mut dims = Dimensions::new(Size::new(40.0, 10.0));
/// dims.left(5.0).center(20.0);
/// assert_eq!(dims.rect().y0, 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    rect: Rect,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Dimensions {
    /// Create a box of the given size with its top-left corner at the origin.
    pub fn new(size: Size) -> Self {
        Self {
            rect: Rect::from_origin_size(Point::ORIGIN, size),
        }
    }

    /// Current box.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Box size.
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Resize, keeping the top-left corner in place.
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.rect = Rect::from_origin_size(self.rect.origin(), size);
        self
    }

    /// Place the left edge at `x`.
    pub fn left(&mut self, x: f64) -> &mut Self {
        let dx = x - self.rect.x0;
        self.shift(dx, 0.0)
    }

    /// Place the right edge at `x`.
    pub fn right(&mut self, x: f64) -> &mut Self {
        let dx = x - self.rect.x1;
        self.shift(dx, 0.0)
    }

    /// Place the horizontal middle at `x`.
    pub fn middle(&mut self, x: f64) -> &mut Self {
        let dx = x - self.rect.center().x;
        self.shift(dx, 0.0)
    }

    /// Place the top edge at `y`.
    pub fn top(&mut self, y: f64) -> &mut Self {
        let dy = y - self.rect.y0;
        self.shift(0.0, dy)
    }

    /// Place the bottom edge at `y`.
    pub fn bottom(&mut self, y: f64) -> &mut Self {
        let dy = y - self.rect.y1;
        self.shift(0.0, dy)
    }

    /// Place the vertical center at `y`.
    pub fn center(&mut self, y: f64) -> &mut Self {
        let dy = y - self.rect.center().y;
        self.shift(0.0, dy)
    }

    fn shift(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.rect = self.rect + kurbo::Vec2::new(dx, dy);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_box_at_origin() {
        let dims = Dimensions::new(Size::new(30.0, 12.0));
        assert_eq!(dims.rect(), Rect::new(0.0, 0.0, 30.0, 12.0));
    }

    #[test]
    fn test_left_top_chain() {
        let mut dims = Dimensions::new(Size::new(30.0, 12.0));
        dims.left(10.0).top(20.0);
        assert_eq!(dims.rect(), Rect::new(10.0, 20.0, 40.0, 32.0));
    }

    #[test]
    fn test_middle_and_center() {
        let mut dims = Dimensions::new(Size::new(30.0, 12.0));
        dims.middle(50.0).center(25.0);
        assert_eq!(dims.rect(), Rect::new(35.0, 19.0, 65.0, 31.0));
    }

    #[test]
    fn test_right_bottom() {
        let mut dims = Dimensions::new(Size::new(30.0, 12.0));
        dims.right(100.0).bottom(50.0);
        assert_eq!(dims.rect(), Rect::new(70.0, 38.0, 100.0, 50.0));
    }

    #[test]
    fn test_later_setter_wins_on_same_axis() {
        let mut dims = Dimensions::new(Size::new(30.0, 12.0));
        dims.left(10.0).middle(0.0);
        assert_eq!(dims.rect().x0, -15.0);
    }

    #[test]
    fn test_set_size_keeps_origin() {
        let mut dims = Dimensions::new(Size::new(30.0, 12.0));
        dims.left(5.0).top(6.0).set_size(Size::new(10.0, 4.0));
        assert_eq!(dims.rect(), Rect::new(5.0, 6.0, 15.0, 10.0));
    }

    #[test]
    fn test_align_origin() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert_eq!(Align::Left.origin_x(bounds, 40.0), 0.0);
        assert_eq!(Align::Center.origin_x(bounds, 40.0), 30.0);
    }
}
