//! The text widget.

use super::binding::{Binding, Prepared};
use super::{WidgetError, WidgetResult};
use crate::config::{RefreshPolicy, WidgetConfig};
use crate::context::{GraphicContext, SvgText};
use crate::geometry::Align;
use kurbo::{Rect, Size};
use std::fmt;

/// A string drawn through a graphics context.
///
/// The widget borrows its context for `'gc`, so the context must outlive it.
/// The renderable is created on [`bind`](Self::bind). Under the default
/// [`RefreshPolicy::Sticky`] a later [`set_text`](Self::set_text) keeps the
/// existing renderable, and draws pass the new text to the old renderable;
/// only a rebind refreshes it. [`RefreshPolicy::OnChange`] recreates it
/// whenever the text changes.
pub struct TextWidget<'gc, G: GraphicContext> {
    text: String,
    policy: RefreshPolicy,
    binding: Binding<'gc, G>,
}

impl<G: GraphicContext> fmt::Debug for TextWidget<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextWidget")
            .field("text", &self.text)
            .field("policy", &self.policy)
            .field("bound", &self.binding.is_bound())
            .field("source", &self.binding.prepared().map(|p| p.source.as_str()))
            .finish()
    }
}

impl<'gc, G: GraphicContext> TextWidget<'gc, G> {
    /// Create an unbound widget.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            policy: RefreshPolicy::default(),
            binding: Binding::default(),
        }
    }

    /// Create an unbound widget using the refresh policy from `config`.
    pub fn from_config(text: impl Into<String>, config: &WidgetConfig) -> Self {
        Self::new(text).with_policy(config.refresh)
    }

    /// Set the refresh policy.
    pub fn with_policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The refresh policy.
    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    ///
    /// While bound, a renderable is created if none exists. An existing one
    /// is recreated only under [`RefreshPolicy::OnChange`] and only if the
    /// text differs from its source. If creation fails the error is returned
    /// and any existing renderable is kept.
    pub fn set_text(&mut self, text: impl Into<String>) -> WidgetResult<()> {
        self.text = text.into();

        let Binding::Bound {
            context,
            renderable,
        } = &mut self.binding
        else {
            return Ok(());
        };

        let refresh = match (renderable.as_ref(), self.policy) {
            (None, _) => true,
            (Some(prepared), RefreshPolicy::OnChange) => prepared.source != self.text,
            (Some(_), RefreshPolicy::Sticky) => false,
        };
        if refresh {
            match Prepared::create(*context, &self.text) {
                Ok(prepared) => *renderable = Some(prepared),
                Err(e) => {
                    log::warn!("Failed to create renderable for {:?}: {}", self.text, e);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }

    /// Bind to `context` and create a fresh renderable for the current text.
    ///
    /// Replaces any previous context and renderable. If creation fails the
    /// widget stays bound to `context` without a renderable, even if it had
    /// one from an earlier bind; a later [`set_text`](Self::set_text) retries.
    pub fn bind(&mut self, context: &'gc G) -> WidgetResult<()> {
        log::debug!("Binding text widget {:?}", self.text);
        match Prepared::create(context, &self.text) {
            Ok(prepared) => {
                self.binding = Binding::Bound {
                    context,
                    renderable: Some(prepared),
                };
                Ok(())
            }
            Err(e) => {
                log::warn!("Failed to create renderable for {:?}: {}", self.text, e);
                self.binding = Binding::Bound {
                    context,
                    renderable: None,
                };
                Err(e.into())
            }
        }
    }

    /// Check if a context is bound.
    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// Check if a renderable exists.
    pub fn has_renderable(&self) -> bool {
        self.binding.has_renderable()
    }

    /// Check if the renderable was created from text other than the current text.
    pub fn is_stale(&self) -> bool {
        self.binding
            .prepared()
            .is_some_and(|prepared| prepared.source != self.text)
    }

    /// The bound context.
    pub fn context(&self) -> Option<&'gc G> {
        self.binding.context()
    }

    /// The renderable, if one exists.
    pub fn renderable(&self) -> Option<&G::Text> {
        self.binding.prepared().map(|prepared| &prepared.handle)
    }

    /// Size of the current text as measured by the renderable.
    pub fn measure(&self) -> WidgetResult<Size> {
        if !self.binding.is_bound() {
            return Err(WidgetError::Unbound);
        }
        let prepared = self
            .binding
            .prepared()
            .ok_or(WidgetError::MissingRenderable)?;
        Ok(prepared.handle.measure(&self.text)?)
    }

    /// Draw with the box's top-left corner at (`x`, `y`).
    ///
    /// The alignment mode is left as it is.
    pub fn draw(&mut self, x: f64, y: f64) -> WidgetResult<()> {
        self.draw_with(|handle| {
            handle.dimensions_mut().left(x).top(y);
        })
    }

    /// Draw left-aligned at `bounds.x0`, vertically centered in `bounds`.
    ///
    /// The width of `bounds` does not affect placement and nothing is clipped.
    pub fn draw_in(&mut self, bounds: Rect) -> WidgetResult<()> {
        let center = bounds.center();
        self.draw_with(|handle| {
            handle.dimensions_mut().left(bounds.x0).center(center.y);
            handle.set_align(Align::Left);
        })
    }

    /// Draw centered in `bounds`.
    pub fn draw_centered(&mut self, bounds: Rect) -> WidgetResult<()> {
        let center = bounds.center();
        self.draw_with(|handle| {
            handle.dimensions_mut().middle(center.x).center(center.y);
            handle.set_align(Align::Center);
        })
    }

    fn draw_with(&mut self, place: impl FnOnce(&mut G::Text)) -> WidgetResult<()> {
        let Binding::Bound {
            context,
            renderable,
        } = &mut self.binding
        else {
            return Err(WidgetError::Unbound);
        };
        let prepared = renderable.as_mut().ok_or(WidgetError::MissingRenderable)?;

        if prepared.source != self.text {
            log::trace!(
                "Drawing {:?} with renderable made for {:?}",
                self.text,
                prepared.source
            );
        }

        place(&mut prepared.handle);
        let handle = &prepared.handle;
        let text = self.text.as_str();
        context.with_window(|surface| handle.draw(surface, text))??;
        Ok(())
    }
}
