//! Lettering demo application.
//!
//! Lays out a small panel of text widgets against any graphics context.

use kurbo::Rect;
use lettering_core::{
    ConfigError, ContextError, GraphicContext, TextWidget, WidgetConfig, WidgetError,
};
use std::path::Path;
use thiserror::Error;

/// Demo errors.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),
    #[error("Context error: {0}")]
    Context(#[from] ContextError),
}

/// Result type for the demo.
pub type DemoResult<T> = Result<T, DemoError>;

/// Panel margin around and between rows.
pub const MARGIN: f64 = 16.0;
/// Height of the caption row.
pub const ROW_HEIGHT: f64 = 40.0;
/// Button width.
pub const BUTTON_WIDTH: f64 = 120.0;
/// Button height.
pub const BUTTON_HEIGHT: f64 = 32.0;

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> DemoResult<WidgetConfig> {
    match path {
        Some(path) => Ok(WidgetConfig::load(path)?),
        None => Ok(WidgetConfig::default()),
    }
}

/// Bind a title, a caption and a button label to `context` and draw two frames.
///
/// The caption text changes between frames. Returns the number of draws issued.
pub fn draw_panel<G: GraphicContext>(context: &G, config: &WidgetConfig) -> DemoResult<usize> {
    let mut title = TextWidget::from_config("Lettering", config);
    let mut caption = TextWidget::from_config("Text drawn through a graphics context", config);
    let mut button = TextWidget::from_config("OK", config);

    title.bind(context)?;
    caption.bind(context)?;
    button.bind(context)?;

    let title_height = title.measure()?.height;
    let caption_row = Rect::from_origin_size((MARGIN, MARGIN + title_height), (400.0, ROW_HEIGHT));
    let button_box = Rect::from_origin_size(
        (MARGIN, caption_row.y1 + MARGIN),
        (BUTTON_WIDTH, BUTTON_HEIGHT),
    );

    let mut draws = 0;
    for frame in 0..2 {
        if frame == 1 {
            caption.set_text("Caption updated after bind")?;
            if caption.is_stale() {
                log::info!("Caption renderable still shows its first text");
            }
        }
        title.draw(MARGIN, MARGIN)?;
        caption.draw_in(caption_row)?;
        button.draw_centered(button_box)?;
        draws += 3;
    }
    Ok(draws)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettering_core::{Align, RecordingContext, RefreshPolicy};

    #[test]
    fn test_panel_with_defaults() {
        let ctx = RecordingContext::new();
        let draws = draw_panel(&ctx, &WidgetConfig::default()).unwrap();

        let frame = ctx.take_frame();
        assert_eq!(draws, 6);
        assert_eq!(frame.len(), 6);
        assert_eq!(ctx.requests(), 3);
        assert_eq!(frame[4].text, "Caption updated after bind");
        assert_eq!(frame[4].source, "Text drawn through a graphics context");
        assert_eq!(frame[5].align, Align::Center);
    }

    #[test]
    fn test_panel_refreshes_on_change() {
        let ctx = RecordingContext::new();
        let config = WidgetConfig {
            refresh: RefreshPolicy::OnChange,
            ..WidgetConfig::default()
        };
        draw_panel(&ctx, &config).unwrap();

        let frame = ctx.take_frame();
        assert_eq!(ctx.requests(), 4);
        assert_eq!(frame[4].source, "Caption updated after bind");
    }

    #[test]
    fn test_panel_bind_failure() {
        let ctx = RecordingContext::new();
        ctx.fail_next_creation();
        let result = draw_panel(&ctx, &WidgetConfig::default());
        assert!(matches!(result, Err(DemoError::Widget(_))));
    }

    #[test]
    fn test_panel_layout_constants() {
        let ctx = RecordingContext::new();
        draw_panel(&ctx, &WidgetConfig::default()).unwrap();

        let frame = ctx.take_frame();
        assert_eq!(frame[0].bounds.origin(), kurbo::Point::new(MARGIN, MARGIN));
        assert_eq!(frame[1].bounds.x0, MARGIN);

        let title_height = frame[0].bounds.height();
        let button_center = frame[2].bounds.center();
        let expected_y = MARGIN + title_height + ROW_HEIGHT + MARGIN + BUTTON_HEIGHT * 0.5;
        assert!((button_center.x - (MARGIN + BUTTON_WIDTH * 0.5)).abs() < 1e-9);
        assert!((button_center.y - expected_y).abs() < 1e-6);
    }

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), WidgetConfig::default());
    }
}
