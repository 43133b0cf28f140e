//! Binding state of a widget.

use crate::context::{ContextResult, GraphicContext};

/// A renderable together with the text it was created from.
pub(crate) struct Prepared<T> {
    pub(crate) source: String,
    pub(crate) handle: T,
}

impl<T> Prepared<T> {
    /// Ask `context` for a renderable of `text`.
    pub(crate) fn create<G>(context: &G, text: &str) -> ContextResult<Self>
    where
        G: GraphicContext<Text = T>,
    {
        log::debug!("Creating renderable for {:?}", text);
        let handle = context.make_svg_text(text)?;
        Ok(Self {
            source: text.to_string(),
            handle,
        })
    }
}

/// Where a widget stands with respect to its graphics context.
pub(crate) enum Binding<'gc, G: GraphicContext> {
    /// No context yet.
    Unbound,
    /// Bound to `context`; `renderable` is absent only if creation failed.
    Bound {
        context: &'gc G,
        renderable: Option<Prepared<G::Text>>,
    },
}

impl<G: GraphicContext> Default for Binding<'_, G> {
    fn default() -> Self {
        Self::Unbound
    }
}

impl<'gc, G: GraphicContext> Binding<'gc, G> {
    /// Check if a context is bound.
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }

    /// Check if a renderable exists.
    pub fn has_renderable(&self) -> bool {
        matches!(
            self,
            Self::Bound {
                renderable: Some(_),
                ..
            }
        )
    }

    /// The bound context, if any.
    pub fn context(&self) -> Option<&'gc G> {
        match self {
            Self::Bound { context, .. } => Some(*context),
            Self::Unbound => None,
        }
    }

    pub(crate) fn prepared(&self) -> Option<&Prepared<G::Text>> {
        match self {
            Self::Bound { renderable, .. } => renderable.as_ref(),
            Self::Unbound => None,
        }
    }
}
