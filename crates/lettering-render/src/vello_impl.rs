//! Vello-based graphics context.

use kurbo::{Affine, Point, Rect, Size};
use lettering_core::{
    Align, ContextError, ContextResult, Dimensions, GraphicContext, SvgText, TextStyle,
};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, Layout, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use vello::Scene;

/// Font and layout caches shared by a context and every text it creates.
struct Shaper {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<LayoutContext<Brush>>,
    style: TextStyle,
}

impl Shaper {
    fn brush(&self) -> Brush {
        let [r, g, b, a] = self.style.color;
        Brush::Solid(Color::from_rgba8(r, g, b, a))
    }

    /// Lay out `text` on a single unconstrained line per paragraph.
    fn layout(&self, text: &str) -> ContextResult<Layout<Brush>> {
        let mut font_cx = self
            .font_cx
            .try_borrow_mut()
            .map_err(|e| ContextError::TextCreation(format!("Font context busy: {}", e)))?;
        let mut layout_cx = self
            .layout_cx
            .try_borrow_mut()
            .map_err(|e| ContextError::TextCreation(format!("Layout context busy: {}", e)))?;

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(self.style.font_size));
        builder.push_default(StyleProperty::Brush(self.brush()));
        builder.push_default(StyleProperty::FontStack(parley::FontStack::Single(
            parley::FontFamily::Named(self.style.font_family.as_str().into()),
        )));
        let mut layout = builder.build(text);

        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());
        Ok(layout)
    }
}

fn layout_size(layout: &Layout<Brush>) -> Size {
    Size::new(layout.width() as f64, layout.height() as f64)
}

/// Top-left corner of a run of `width` drawn inside `bounds`.
fn text_origin(bounds: Rect, align: Align, width: f64) -> Point {
    Point::new(align.origin_x(bounds, width), bounds.y0)
}

/// Encode every glyph run of `layout` into `scene`. Returns the glyph count.
fn encode_layout(scene: &mut Scene, layout: &Layout<Brush>, transform: Affine, brush: &Brush) -> usize {
    let mut glyph_count = 0;

    for line in layout.lines() {
        for item in line.items() {
            let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };
            let mut x = glyph_run.offset();
            let y = glyph_run.baseline();
            let run = glyph_run.run();
            let font = run.font();
            let font_size = run.font_size();
            let synthesis = run.synthesis();
            let glyph_xform = synthesis
                .skew()
                .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

            let glyphs: Vec<vello::Glyph> = glyph_run
                .glyphs()
                .map(|glyph| {
                    let gx = x + glyph.x;
                    let gy = y - glyph.y;
                    x += glyph.advance;
                    vello::Glyph {
                        id: glyph.id,
                        x: gx,
                        y: gy,
                    }
                })
                .collect();

            if !glyphs.is_empty() {
                glyph_count += glyphs.len();
                scene
                    .draw_glyphs(font)
                    .brush(brush)
                    .hint(true)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(font_size)
                    .normalized_coords(run.normalized_coords())
                    .draw(Fill::NonZero, glyphs.into_iter());
            }
        }
    }

    glyph_count
}

/// Text handle produced by [`VelloContext`].
pub struct VelloText {
    shaper: Rc<Shaper>,
    source: String,
    layout: Layout<Brush>,
    dimensions: Dimensions,
    align: Align,
}

impl VelloText {
    /// Text this handle was laid out from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl SvgText for VelloText {
    type Surface = Scene;

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
        if text.is_empty() {
            return Ok(Size::ZERO);
        }
        if text == self.source {
            return Ok(layout_size(&self.layout));
        }
        let layout = self.shaper.layout(text)?;
        Ok(layout_size(&layout))
    }

    fn draw(&self, scene: &mut Scene, text: &str) -> ContextResult<()> {
        if text.is_empty() {
            return Ok(());
        }

        let shaped;
        let layout = if text == self.source {
            &self.layout
        } else {
            shaped = self
                .shaper
                .layout(text)
                .map_err(|e| ContextError::Draw(e.to_string()))?;
            &shaped
        };

        let size = layout_size(layout);
        let origin = text_origin(self.dimensions.rect(), self.align, size.width);
        let transform = Affine::translate(origin.to_vec2());
        let brush = self.shaper.brush();

        let glyph_count = encode_layout(scene, layout, transform, &brush);
        log::trace!("Encoded {} glyphs for {:?}", glyph_count, text);

        // No glyphs resolved (font missing): mark the spot instead
        if glyph_count == 0 {
            let font_size = f64::from(self.shaper.style.font_size);
            let width = text.chars().count() as f64 * font_size * 0.6;
            let rect = Rect::from_origin_size(
                Point::ORIGIN,
                (width.max(20.0), self.shaper.style.line_px()),
            );
            scene.fill(
                Fill::NonZero,
                transform,
                Color::from_rgba8(255, 100, 100, 100),
                None,
                &rect,
            );
        }
        Ok(())
    }
}

/// Graphics context that shapes text with Parley and draws into a Vello scene.
pub struct VelloContext {
    shaper: Rc<Shaper>,
    scene: RefCell<Scene>,
}

impl Default for VelloContext {
    fn default() -> Self {
        Self::new(TextStyle::default())
    }
}

impl VelloContext {
    /// Create a context that shapes text with `style`, using the system fonts.
    pub fn new(style: TextStyle) -> Self {
        Self {
            shaper: Rc::new(Shaper {
                font_cx: RefCell::new(FontContext::new()),
                layout_cx: RefCell::new(LayoutContext::new()),
                style,
            }),
            scene: RefCell::new(Scene::new()),
        }
    }

    /// The text style.
    pub fn style(&self) -> &TextStyle {
        &self.shaper.style
    }

    /// Register font data (TTF/OTF/collection) with the font collection.
    pub fn register_font(&self, data: Vec<u8>) -> ContextResult<()> {
        let mut font_cx = self
            .shaper
            .font_cx
            .try_borrow_mut()
            .map_err(|e| ContextError::TextCreation(format!("Font context busy: {}", e)))?;
        font_cx
            .collection
            .register_fonts(vello::peniko::Blob::new(Arc::new(data)), None);
        Ok(())
    }

    /// Take the encoded scene, leaving an empty one behind.
    pub fn take_scene(&self) -> ContextResult<Scene> {
        let mut scene = self
            .scene
            .try_borrow_mut()
            .map_err(|e| ContextError::Surface(format!("Scene already borrowed: {}", e)))?;
        Ok(std::mem::take(&mut *scene))
    }
}

impl GraphicContext for VelloContext {
    type Surface = Scene;
    type Text = VelloText;

    fn make_svg_text(&self, text: &str) -> ContextResult<VelloText> {
        let (layout, size) = if text.is_empty() {
            (Layout::new(), Size::ZERO)
        } else {
            let layout = self.shaper.layout(text)?;
            let size = layout_size(&layout);
            (layout, size)
        };
        Ok(VelloText {
            shaper: Rc::clone(&self.shaper),
            source: text.to_string(),
            layout,
            dimensions: Dimensions::new(size),
            align: Align::default(),
        })
    }

    fn with_window<R>(&self, draw: impl FnOnce(&mut Scene) -> R) -> ContextResult<R> {
        let mut scene = self
            .scene
            .try_borrow_mut()
            .map_err(|e| ContextError::Surface(format!("Scene already borrowed: {}", e)))?;
        Ok(draw(&mut scene))
    }
}
