// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer trait, render context, and injected registry.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::{Cell, CellKind};
use crate::data::CellRegion;
use crate::ops::DrawOp;
use crate::renderers;
use crate::text::TextMeasurer;
use crate::theme::CellTheme;

/// Everything a renderer needs besides the cell itself.
///
/// Borrowed per frame from engine state; renderers hold no references
/// between calls.
#[derive(Copy, Clone)]
pub struct RenderCtx<'a> {
    /// Resolved visual parameters.
    pub theme: &'a CellTheme,
    /// Host text metrics.
    pub text: &'a dyn TextMeasurer,
}

impl core::fmt::Debug for RenderCtx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderCtx")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl<'a> RenderCtx<'a> {
    /// Creates a context from a theme and a text measurer.
    #[must_use]
    pub fn new(theme: &'a CellTheme, text: &'a dyn TextMeasurer) -> Self {
        Self { theme, text }
    }
}

/// Per-variant cell behavior: measuring, drawing, and sub-region hit
/// testing.
///
/// Implementations must be pure: `draw` only appends ops, and
/// `check_region` computes would-be values without committing anything.
pub trait CellRenderer: core::fmt::Debug {
    /// The size the cell's content wants within `width`.
    ///
    /// The engine takes the per-row maximum of measured heights when a
    /// renderer reports more than the nominal row height (wrapped text,
    /// multi-line link lists).
    fn measure(&self, cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size;

    /// Draws the cell into `out`. Pure: no state is touched.
    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>);

    /// Hit-tests `point` against the cell's interactive sub-regions.
    ///
    /// `should_mutate` is `true` when the caller intends to apply an
    /// [`CellRegion::Update`] result and `false` for hover feedback;
    /// renderers may use it to suppress destructive interpretations (a
    /// rating renderer only treats "click the current star" as a clear when
    /// mutating).
    fn check_region(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        should_mutate: bool,
        ctx: &RenderCtx<'_>,
    ) -> CellRegion {
        let _ = (cell, rect, point, should_mutate, ctx);
        CellRegion::Blank
    }

    /// Runs [`CellRenderer::check_region`] and forwards non-blank results.
    fn on_click(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        ctx: &RenderCtx<'_>,
        callback: &mut dyn FnMut(CellRegion),
    ) {
        let region = self.check_region(cell, rect, point, true, ctx);
        if !region.is_blank() {
            callback(region);
        }
    }
}

/// One renderer per cell kind, constructed once and injected into the
/// engine.
///
/// The registry is deliberately a plain struct resolved by exhaustive
/// match — no global state, no string keys — so multiple grids on one page
/// can carry different registries and adding a kind is a compile-time
/// change. Kinds left empty by a sparse build degrade to the text renderer
/// with a warning logged once per kind.
#[derive(Debug)]
pub struct RendererRegistry {
    slots: Slots,
    fallback: renderers::TextRenderer,
    warned: core::cell::Cell<u16>,
}

#[derive(Debug, Default)]
struct Slots {
    text: Option<Box<dyn CellRenderer>>,
    number: Option<Box<dyn CellRenderer>>,
    boolean: Option<Box<dyn CellRenderer>>,
    date: Option<Box<dyn CellRenderer>>,
    select: Option<Box<dyn CellRenderer>>,
    multi_select: Option<Box<dyn CellRenderer>>,
    rating: Option<Box<dyn CellRenderer>>,
    link: Option<Box<dyn CellRenderer>>,
    user: Option<Box<dyn CellRenderer>>,
    attachment: Option<Box<dyn CellRenderer>>,
    button: Option<Box<dyn CellRenderer>>,
    loading: Option<Box<dyn CellRenderer>>,
}

/// Builder for sparse or customized registries.
#[derive(Debug, Default)]
pub struct RendererRegistryBuilder {
    slots: Slots,
}

impl RendererRegistryBuilder {
    /// Registers `renderer` for `kind`, replacing any previous registration.
    ///
    /// [`CellKind::Computed`] has no slot — computed cells dispatch on their
    /// display variant — so registering it is ignored with a warning.
    #[must_use]
    pub fn with(mut self, kind: CellKind, renderer: Box<dyn CellRenderer>) -> Self {
        let slot = match kind {
            CellKind::Text => &mut self.slots.text,
            CellKind::Number => &mut self.slots.number,
            CellKind::Boolean => &mut self.slots.boolean,
            CellKind::Date => &mut self.slots.date,
            CellKind::Select => &mut self.slots.select,
            CellKind::MultiSelect => &mut self.slots.multi_select,
            CellKind::Rating => &mut self.slots.rating,
            CellKind::Link => &mut self.slots.link,
            CellKind::User => &mut self.slots.user,
            CellKind::Attachment => &mut self.slots.attachment,
            CellKind::Button => &mut self.slots.button,
            CellKind::Loading => &mut self.slots.loading,
            CellKind::Computed => {
                log::warn!("computed cells dispatch on their display variant; renderer ignored");
                return self;
            }
        };
        *slot = Some(renderer);
        self
    }

    /// Finishes the registry.
    #[must_use]
    pub fn build(self) -> RendererRegistry {
        RendererRegistry {
            slots: self.slots,
            fallback: renderers::TextRenderer::default(),
            warned: core::cell::Cell::new(0),
        }
    }
}

impl RendererRegistry {
    /// An empty builder; kinds not registered fall back to text rendering.
    #[must_use]
    pub fn builder() -> RendererRegistryBuilder {
        RendererRegistryBuilder::default()
    }

    /// A registry with the built-in renderer for every kind.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::builder()
            .with(CellKind::Text, Box::new(renderers::TextRenderer::default()))
            .with(CellKind::Number, Box::new(renderers::NumberRenderer))
            .with(CellKind::Boolean, Box::new(renderers::BooleanRenderer))
            .with(CellKind::Date, Box::new(renderers::DateRenderer))
            .with(CellKind::Select, Box::new(renderers::SelectRenderer))
            .with(CellKind::MultiSelect, Box::new(renderers::SelectRenderer))
            .with(CellKind::Rating, Box::new(renderers::RatingRenderer))
            .with(CellKind::Link, Box::new(renderers::LinkRenderer))
            .with(CellKind::User, Box::new(renderers::UserRenderer))
            .with(CellKind::Attachment, Box::new(renderers::AttachmentRenderer))
            .with(CellKind::Button, Box::new(renderers::ButtonRenderer))
            .with(CellKind::Loading, Box::new(renderers::LoadingRenderer))
            .build()
    }

    fn renderer_for(&self, kind: CellKind) -> &dyn CellRenderer {
        let slot: Option<&dyn CellRenderer> = match kind {
            CellKind::Text => self.slots.text.as_deref(),
            CellKind::Number => self.slots.number.as_deref(),
            CellKind::Boolean => self.slots.boolean.as_deref(),
            CellKind::Date => self.slots.date.as_deref(),
            CellKind::Select => self.slots.select.as_deref(),
            CellKind::MultiSelect => self.slots.multi_select.as_deref(),
            CellKind::Rating => self.slots.rating.as_deref(),
            CellKind::Link => self.slots.link.as_deref(),
            CellKind::User => self.slots.user.as_deref(),
            CellKind::Attachment => self.slots.attachment.as_deref(),
            CellKind::Button => self.slots.button.as_deref(),
            CellKind::Loading => self.slots.loading.as_deref(),
            // Every dispatch path unwraps computed cells first; the arm
            // exists for exhaustiveness and degrades to text.
            CellKind::Computed => None,
        };
        match slot {
            Some(renderer) => renderer,
            None => {
                self.warn_once(kind);
                &self.fallback
            }
        }
    }

    fn warn_once(&self, kind: CellKind) {
        let bit = 1_u16 << kind_index(kind);
        if self.warned.get() & bit == 0 {
            self.warned.set(self.warned.get() | bit);
            log::warn!("no renderer registered for {kind:?}; falling back to text");
        }
    }

    /// Unwraps computed cells down to their display variant.
    fn resolve<'c>(cell: &'c Cell) -> (&'c Cell, bool) {
        let mut current = cell;
        let mut computed = false;
        while let Cell::Computed { display, .. } = current {
            computed = true;
            current = display;
        }
        (current, computed)
    }

    /// Measures a cell's desired content size within `width`.
    #[must_use]
    pub fn measure(&self, cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        let (cell, _) = Self::resolve(cell);
        self.renderer_for(cell.kind()).measure(cell, ctx, width)
    }

    /// Draws a cell into `out`.
    pub fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let (cell, _) = Self::resolve(cell);
        self.renderer_for(cell.kind()).draw(cell, rect, ctx, out);
    }

    /// Hit-tests a cell's sub-regions.
    ///
    /// Computed cells are read-only: their regions are always
    /// [`CellRegion::Blank`], regardless of the display variant.
    #[must_use]
    pub fn check_region(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        should_mutate: bool,
        ctx: &RenderCtx<'_>,
    ) -> CellRegion {
        let (inner, computed) = Self::resolve(cell);
        if computed {
            return CellRegion::Blank;
        }
        self.renderer_for(inner.kind())
            .check_region(inner, rect, point, should_mutate, ctx)
    }

    /// Runs the click path: non-blank regions reach `callback`.
    pub fn on_click(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        ctx: &RenderCtx<'_>,
        callback: &mut dyn FnMut(CellRegion),
    ) {
        let (inner, computed) = Self::resolve(cell);
        if computed {
            return;
        }
        self.renderer_for(inner.kind())
            .on_click(inner, rect, point, ctx, callback);
    }
}

fn kind_index(kind: CellKind) -> u16 {
    match kind {
        CellKind::Text => 0,
        CellKind::Number => 1,
        CellKind::Boolean => 2,
        CellKind::Date => 3,
        CellKind::Select => 4,
        CellKind::MultiSelect => 5,
        CellKind::Rating => 6,
        CellKind::Link => 7,
        CellKind::User => 8,
        CellKind::Attachment => 9,
        CellKind::Button => 10,
        CellKind::Computed => 11,
        CellKind::Loading => 12,
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};

    use super::{RenderCtx, RendererRegistry};
    use crate::cell::{Cell, CellKind, ComputedSource};
    use crate::data::CellRegion;
    use crate::renderers::BooleanRenderer;
    use crate::text::MonospaceMeasurer;
    use crate::theme::CellTheme;

    fn ctx<'a>(theme: &'a CellTheme, text: &'a MonospaceMeasurer) -> RenderCtx<'a> {
        RenderCtx::new(theme, text)
    }

    #[test]
    fn sparse_registry_falls_back_to_text() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = ctx(&theme, &text);
        let registry = RendererRegistry::builder()
            .with(CellKind::Boolean, Box::new(BooleanRenderer))
            .build();

        // A rating cell has no registered renderer: it draws as text and
        // never panics.
        let cell = Cell::rating(Some(3));
        let mut ops = Vec::new();
        registry.draw(&cell, Rect::new(0.0, 0.0, 80.0, 36.0), &ctx, &mut ops);
        assert!(!ops.is_empty());

        // Its regions are blank under the fallback.
        let region = registry.check_region(
            &cell,
            Rect::new(0.0, 0.0, 80.0, 36.0),
            Point::new(10.0, 10.0),
            true,
            &ctx,
        );
        assert!(region.is_blank());
    }

    #[test]
    fn computed_cells_render_but_never_interact() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = ctx(&theme, &text);
        let registry = RendererRegistry::with_defaults();

        let cell = Cell::Computed {
            source: ComputedSource::Formula,
            display: Box::new(Cell::boolean(true)),
        };
        let rect = Rect::new(0.0, 0.0, 80.0, 36.0);

        let mut ops = Vec::new();
        registry.draw(&cell, rect, &ctx, &mut ops);
        assert!(!ops.is_empty());

        // The display variant would toggle; the computed wrapper must not.
        let region = registry.check_region(&cell, rect, Point::new(40.0, 18.0), true, &ctx);
        assert_eq!(region, CellRegion::Blank);

        let mut clicked = false;
        registry.on_click(&cell, rect, Point::new(40.0, 18.0), &ctx, &mut |_| {
            clicked = true;
        });
        assert!(!clicked);
    }

    #[test]
    fn on_click_forwards_non_blank_regions() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = ctx(&theme, &text);
        let registry = RendererRegistry::with_defaults();

        let cell = Cell::boolean(false);
        let rect = Rect::new(0.0, 0.0, 80.0, 36.0);
        let mut seen = Vec::new();
        registry.on_click(&cell, rect, Point::new(40.0, 18.0), &ctx, &mut |region| {
            seen.push(region);
        });
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], CellRegion::Update(_)));
    }
}
