//! Graphics context abstraction.
//!
//! A graphics context owns the drawing surface and knows how to turn a
//! string into a positioned, drawable text handle. Widgets only ever talk
//! to these two traits.

use crate::geometry::{Align, Dimensions};
use kurbo::Size;
use thiserror::Error;

/// Graphics context errors.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Text creation failed: {0}")]
    TextCreation(String),
    #[error("Surface error: {0}")]
    Surface(String),
    #[error("Draw failed: {0}")]
    Draw(String),
}

/// Result type for graphics context operations.
pub type ContextResult<T> = Result<T, ContextError>;

/// A drawable, measurable text handle produced by a [`GraphicContext`].
pub trait SvgText {
    /// Surface this handle draws onto.
    type Surface;

    /// The drawing box.
    fn dimensions(&self) -> &Dimensions;

    /// The drawing box, for positioning.
    fn dimensions_mut(&mut self) -> &mut Dimensions;

    /// Current alignment mode.
    fn align(&self) -> Align;

    /// Set the alignment mode.
    fn set_align(&mut self, align: Align);

    /// Size `text` would occupy when drawn with this handle's style.
    ///
    /// Fails if `text` differs from the source and cannot be shaped.
    fn measure(&self, text: &str) -> ContextResult<Size>;

    /// Draw `text` inside the drawing box.
    ///
    /// `text` does not have to be the string the handle was created from.
    fn draw(&self, surface: &mut Self::Surface, text: &str) -> ContextResult<()>;
}

/// Provider of text handles and of the window surface.
///
/// Methods take `&self` so several widgets can share one context;
/// implementations keep caches and surfaces behind interior mutability.
pub trait GraphicContext {
    /// The drawing target.
    type Surface;

    /// Text handle type.
    type Text: SvgText<Surface = Self::Surface>;

    /// Create a text handle for `text`.
    fn make_svg_text(&self, text: &str) -> ContextResult<Self::Text>;

    /// Run `draw` against the current window surface.
    fn with_window<R>(&self, draw: impl FnOnce(&mut Self::Surface) -> R) -> ContextResult<R>;
}
