//! Lettering Core Library
//!
//! A text widget that draws through a pluggable graphics context, plus the
//! context traits, drawing-box geometry, configuration, and an in-memory
//! recording context.

pub mod config;
pub mod context;
pub mod geometry;
pub mod recording;
pub mod widget;

pub use config::{ConfigError, ConfigResult, RefreshPolicy, TextStyle, WidgetConfig};
pub use context::{ContextError, ContextResult, GraphicContext, SvgText};
pub use geometry::{Align, Dimensions};
pub use recording::{DrawCall, Frame, RecordedText, RecordingContext};
pub use widget::{TextWidget, WidgetError, WidgetResult};
