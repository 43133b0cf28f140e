//! In-memory graphics context that records requests and draw calls.

use crate::config::TextStyle;
use crate::context::{ContextError, ContextResult, GraphicContext, SvgText};
use crate::geometry::{Align, Dimensions};
use kurbo::{Rect, Size};
use std::cell::{Cell, RefCell};

/// Advance width per character, as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// One draw issued against a [`RecordingContext`] window.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Text the renderable was created from.
    pub source: String,
    /// Text passed to the draw.
    pub text: String,
    /// Drawing box at draw time.
    pub bounds: Rect,
    /// Alignment at draw time.
    pub align: Align,
}

/// Recorded draw calls for one frame.
pub type Frame = Vec<DrawCall>;

/// Text handle produced by [`RecordingContext`].
#[derive(Debug, Clone)]
pub struct RecordedText {
    source: String,
    style: TextStyle,
    dimensions: Dimensions,
    align: Align,
}

impl RecordedText {
    /// Text this handle was created from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl SvgText for RecordedText {
    type Surface = Frame;

    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    fn dimensions_mut(&mut self) -> &mut Dimensions {
        &mut self.dimensions
    }

    fn align(&self) -> Align {
        self.align
    }

    fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    fn measure(&self, text: &str) -> ContextResult<Size> {
        Ok(approximate_size(&self.style, text))
    }

    fn draw(&self, surface: &mut Frame, text: &str) -> ContextResult<()> {
        surface.push(DrawCall {
            source: self.source.clone(),
            text: text.to_string(),
            bounds: self.dimensions.rect(),
            align: self.align,
        });
        Ok(())
    }
}

/// Fixed-advance text size: widest line times a per-char width, one line height per line.
fn approximate_size(style: &TextStyle, text: &str) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let max_line_len = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    let line_count = text.lines().count().max(1);
    Size::new(
        max_line_len as f64 * f64::from(style.font_size) * CHAR_WIDTH_FACTOR,
        line_count as f64 * style.line_px(),
    )
}

/// Graphics context that keeps everything in memory.
///
/// Useful in tests and anywhere the draw calls themselves are the output.
#[derive(Debug, Default)]
pub struct RecordingContext {
    style: TextStyle,
    requests: RefCell<Vec<String>>,
    frame: RefCell<Frame>,
    fail_next: Cell<bool>,
}

impl RecordingContext {
    /// Create a recording context with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording context with a specific style.
    pub fn with_style(style: TextStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Number of `make_svg_text` requests so far.
    pub fn requests(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Texts of all `make_svg_text` requests, in order.
    pub fn requested_texts(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Make the next `make_svg_text` call fail.
    pub fn fail_next_creation(&self) {
        self.fail_next.set(true);
    }

    /// Draw calls recorded since the last [`take_frame`](Self::take_frame).
    pub fn frame(&self) -> Frame {
        self.frame.borrow().clone()
    }

    /// Drain the recorded draw calls.
    pub fn take_frame(&self) -> Frame {
        std::mem::take(&mut *self.frame.borrow_mut())
    }
}

impl GraphicContext for RecordingContext {
    type Surface = Frame;
    type Text = RecordedText;

    fn make_svg_text(&self, text: &str) -> ContextResult<RecordedText> {
        self.requests.borrow_mut().push(text.to_string());
        if self.fail_next.replace(false) {
            return Err(ContextError::TextCreation(format!(
                "refused to create text for {:?}",
                text
            )));
        }
        Ok(RecordedText {
            source: text.to_string(),
            style: self.style.clone(),
            dimensions: Dimensions::new(approximate_size(&self.style, text)),
            align: Align::default(),
        })
    }

    fn with_window<R>(&self, draw: impl FnOnce(&mut Frame) -> R) -> ContextResult<R> {
        let mut frame = self
            .frame
            .try_borrow_mut()
            .map_err(|e| ContextError::Surface(format!("Frame already borrowed: {}", e)))?;
        Ok(draw(&mut frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_requests() {
        let ctx = RecordingContext::new();
        ctx.make_svg_text("one").unwrap();
        ctx.make_svg_text("two").unwrap();

        assert_eq!(ctx.requests(), 2);
        assert_eq!(ctx.requested_texts(), vec!["one", "two"]);
    }

    #[test]
    fn test_text_sized_from_style() {
        let ctx = RecordingContext::with_style(TextStyle::default().with_font_size(10.0));
        let text = ctx.make_svg_text("abcd").unwrap();
        let size = text.dimensions().size();

        assert!((size.width - 24.0).abs() < 1e-9);
        assert!((size.height - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_multiline_measure() {
        let ctx = RecordingContext::with_style(TextStyle::default().with_font_size(10.0));
        let text = ctx.make_svg_text("").unwrap();
        let size = text.measure("ab\nabcd\nc").unwrap();

        assert!((size.width - 24.0).abs() < 1e-9);
        assert!((size.height - 36.0).abs() < 1e-5);
        assert_eq!(text.measure("").unwrap(), Size::ZERO);
    }

    #[test]
    fn test_fail_next_creation_is_one_shot() {
        let ctx = RecordingContext::new();
        ctx.fail_next_creation();

        assert!(matches!(
            ctx.make_svg_text("x"),
            Err(ContextError::TextCreation(_))
        ));
        assert!(ctx.make_svg_text("x").is_ok());
        assert_eq!(ctx.requests(), 2);
    }

    #[test]
    fn test_draw_records_call() {
        let ctx = RecordingContext::new();
        let mut text = ctx.make_svg_text("src").unwrap();
        text.dimensions_mut().left(3.0).top(4.0);
        text.set_align(Align::Center);

        ctx.with_window(|frame| text.draw(frame, "shown")).unwrap().unwrap();

        let frame = ctx.take_frame();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].source, "src");
        assert_eq!(frame[0].text, "shown");
        assert_eq!(frame[0].bounds.origin(), kurbo::Point::new(3.0, 4.0));
        assert_eq!(frame[0].align, Align::Center);
        assert!(ctx.frame().is_empty());
    }

    #[test]
    fn test_reentrant_window_is_an_error() {
        let ctx = RecordingContext::new();
        let inner = ctx.with_window(|_| ctx.with_window(|_| ())).unwrap();
        assert!(matches!(inner, Err(ContextError::Surface(_))));
    }
}
