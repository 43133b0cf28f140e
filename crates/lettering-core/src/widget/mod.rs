//! Text widget bound to a graphics context.
//!
//! A widget holds its text and, once bound, a borrowed graphics context and
//! the renderable the context produced for that text:
//! - unbound: only the text exists
//! - bound: the context is known, a renderable usually exists
//!
//! Drawing positions the renderable inside a box and draws the current text.

mod binding;
mod text;

pub use text::TextWidget;

use crate::context::ContextError;
use thiserror::Error;

/// Widget errors.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Widget is not bound to a graphics context")]
    Unbound,
    #[error("Widget has no renderable for its text")]
    MissingRenderable,
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
