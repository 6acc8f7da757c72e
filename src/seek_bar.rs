//! The seek bar's state object.
//!
//! [`SeekBar`] owns configuration, progress, interaction state and the
//! geometry derived from the last layout. A host forwards layout and pointer
//! events to it and asks it for draw primitives; it never draws or dispatches
//! anything itself.

use floem::kurbo::{Insets, Rect, Size};
use floem::peniko::Color;
use tracing::{debug, trace};

use crate::config::{self, DebugOverlay, ElementSizes, Palette, RangeConfig, StyleConfig};
use crate::constants;
use crate::error::ConfigError;
use crate::geometry::{self, Geometry};
use crate::render::{self, Primitive};
use crate::touch::{InteractionState, PointerEvent, PointerPhase};

#[derive(Debug, Clone)]
pub struct SeekBar {
    style: StyleConfig,
    range: RangeConfig,
    progress: f64,
    state: InteractionState,
    padding: Insets,
    /// Size from the last layout pass; `None` until the first one.
    view_size: Option<Size>,
    geometry: Option<Geometry>,
    needs_paint: bool,
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::new(StyleConfig::default(), RangeConfig::default(), constants::PROGRESS)
    }
}

impl SeekBar {
    /// `progress` is clamped into `range`; NaN starts at `min`.
    pub fn new(style: StyleConfig, range: RangeConfig, progress: f64) -> Self {
        let progress = if progress.is_nan() {
            range.min()
        } else {
            range.clamp(progress)
        };
        Self {
            style,
            range,
            progress,
            state: InteractionState::Idle,
            padding: Insets::ZERO,
            view_size: None,
            geometry: None,
            needs_paint: true,
        }
    }

    // ---- Layout ----

    /// Records a layout pass. Returns `false` if neither size nor padding changed.
    ///
    /// A real change ends any drag in progress.
    pub fn on_layout(&mut self, size: Size, padding: Insets) -> bool {
        if self.view_size == Some(size) && self.padding == padding {
            return false;
        }
        if self.state.end_drag() {
            debug!("layout changed during drag, drag ended");
        }
        self.view_size = Some(size);
        self.padding = padding;
        self.relayout();
        true
    }

    pub fn set_padding(&mut self, padding: Insets) {
        if self.padding == padding {
            return;
        }
        self.padding = padding;
        self.relayout();
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Smallest size that fits one thumb across and five thumbs down.
    pub fn min_size(&self) -> Size {
        let thumb = self.style.sizes.thumb_size();
        Size::new(
            thumb + self.padding.x0 + self.padding.x1,
            constants::MIN_HEIGHT_IN_THUMBS * thumb + self.padding.y0 + self.padding.y1,
        )
    }

    /// `None` before the first layout.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Clip rect for painting, if there is anything to paint.
    pub fn content_area(&self) -> Option<Rect> {
        self.geometry
            .filter(|g| g.metrics.is_drawable())
            .map(|g| g.metrics.content)
    }

    fn relayout(&mut self) {
        let Some(size) = self.view_size else {
            return;
        };
        let geometry = Geometry::compute(size, self.padding, &self.style);
        debug!(
            width = size.width,
            height = size.height,
            content = ?geometry.metrics.content,
            travel_top = geometry.metrics.travel.top,
            travel_bottom = geometry.metrics.travel.bottom,
            drawable = geometry.metrics.is_drawable(),
            "seek bar geometry recomputed"
        );
        if !geometry.metrics.is_drawable() && self.state.end_drag() {
            debug!("geometry no longer drawable, drag ended");
        }
        self.geometry = Some(geometry);
        self.invalidate();
    }

    // ---- Pointer input ----

    /// Feeds one pointer event through the state machine. Returns whether the
    /// event was consumed.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        let Some(geometry) = self.geometry else {
            trace!(?event, "pointer event before layout ignored");
            return false;
        };
        let travel = geometry.metrics.travel;

        match event.phase {
            PointerPhase::Down => {
                if self.state.is_dragging() {
                    return false;
                }
                let Some(thumb_y) = self.thumb_y() else {
                    return false;
                };
                if !geometry.accepts(event.pos, thumb_y) {
                    trace!(pos = ?event.pos, "pointer down outside touch region");
                    return false;
                }
                let Some(pixel_y) = self.state.begin_drag(event.pos.y, &travel) else {
                    return false;
                };
                self.apply_drag(pixel_y, &geometry);
                debug!(pixel_y, progress = self.progress, "drag started");
                true
            }
            PointerPhase::Move => {
                if !self.state.is_dragging() {
                    return false;
                }
                if let Some(pixel_y) = self.state.update_drag(event.pos.y, &travel) {
                    self.apply_drag(pixel_y, &geometry);
                    trace!(pixel_y, progress = self.progress, "drag moved");
                }
                true
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                if !self.state.end_drag() {
                    return false;
                }
                debug!(phase = ?event.phase, progress = self.progress, "drag ended");
                self.needs_paint = true;
                true
            }
        }
    }

    /// Stores the mapped value as is, so the thumb stays put on release. With a
    /// nonzero `min` this can fall below `min`.
    fn apply_drag(&mut self, pixel_y: f64, geometry: &Geometry) {
        if let Some(progress) =
            geometry::pixel_y_to_progress(pixel_y, &self.range, &geometry.metrics.travel)
        {
            self.progress = progress;
        }
        self.needs_paint = true;
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Current thumb center Y. During a drag this is the pointer position,
    /// otherwise it is derived from progress. `None` without usable geometry.
    pub fn thumb_y(&self) -> Option<f64> {
        if let Some(pixel_y) = self.state.drag_y() {
            return Some(pixel_y);
        }
        let geometry = self.geometry?;
        geometry::progress_to_pixel_y(self.progress, &self.range, &geometry.metrics.travel)
    }

    // ---- Rendering ----

    /// Draw primitives for the current state. Empty if there is nothing to draw.
    pub fn render(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.render_into(&mut out);
        out
    }

    /// Like [`render`](Self::render), reusing `out`'s allocation.
    pub fn render_into(&self, out: &mut Vec<Primitive>) {
        out.clear();
        let (Some(geometry), Some(thumb_y)) = (self.geometry.as_ref(), self.thumb_y()) else {
            return;
        };
        render::build_primitives(geometry, self.state, thumb_y, &self.style, out);
    }

    /// Re-derives the thumb position from progress and marks the bar for repaint.
    pub fn invalidate(&mut self) {
        if let (InteractionState::Dragging { .. }, Some(geometry)) = (self.state, self.geometry) {
            if let Some(pixel_y) =
                geometry::progress_to_pixel_y(self.progress, &self.range, &geometry.metrics.travel)
            {
                self.state = InteractionState::Dragging { pixel_y };
            }
        }
        self.needs_paint = true;
    }

    /// Returns and clears the repaint request.
    pub fn take_needs_paint(&mut self) -> bool {
        std::mem::take(&mut self.needs_paint)
    }

    // ---- Configuration ----

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Sets progress, clamped into `[min, max]`. NaN is ignored.
    pub fn set_progress(&mut self, progress: f64) {
        if progress.is_nan() {
            trace!("NaN progress ignored");
            return;
        }
        self.progress = self.range.clamp(progress);
        self.invalidate();
    }

    pub fn min(&self) -> f64 {
        self.range.min()
    }

    pub fn max(&self) -> f64 {
        self.range.max()
    }

    pub fn range(&self) -> RangeConfig {
        self.range
    }

    /// Fails without touching the current range unless `min < max`.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        let range = RangeConfig::new(min, max)?;
        debug!(min, max, "range updated");
        self.range = range;
        self.progress = range.clamp(self.progress);
        self.invalidate();
        Ok(())
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
        self.relayout();
        self.needs_paint = true;
    }

    /// Fails without touching the current sizes if the widths are out of order.
    pub fn set_element_sizes(
        &mut self,
        thumb_size: f64,
        not_selected_bar_width: f64,
        selected_bar_width: f64,
    ) -> Result<(), ConfigError> {
        let sizes = ElementSizes::new(thumb_size, not_selected_bar_width, selected_bar_width)?;
        debug!(
            thumb_size,
            not_selected_bar_width, selected_bar_width, "element sizes updated"
        );
        self.style.sizes = sizes;
        self.relayout();
        Ok(())
    }

    pub fn set_preferred_touch_area_width(&mut self, width: f64) -> Result<(), ConfigError> {
        let width = config::check_size("preferred touch area width", width)?;
        self.style.preferred_touch_area_width = width;
        self.relayout();
        Ok(())
    }

    pub fn set_bar_colors(&mut self, not_selected: Color, selected: Color, selected_touched: Color) {
        let palette = &mut self.style.palette;
        palette.not_selected_bar = not_selected;
        palette.selected_bar = selected;
        palette.selected_bar_touched = selected_touched;
        self.needs_paint = true;
    }

    pub fn set_thumb_colors(&mut self, thumb: Color, touched: Color, touched_halo: Color) {
        let palette = &mut self.style.palette;
        palette.thumb = thumb;
        palette.thumb_touched = touched;
        palette.thumb_touched_halo = touched_halo;
        self.needs_paint = true;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.style.palette = palette;
        self.needs_paint = true;
    }

    pub fn set_debug_overlay(&mut self, debug: DebugOverlay) {
        self.style.debug = debug;
        self.needs_paint = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out() -> SeekBar {
        let mut bar = SeekBar::default();
        bar.on_layout(Size::new(40.0, 300.0), Insets::ZERO);
        bar.take_needs_paint();
        bar
    }

    #[test]
    fn identical_layout_is_a_no_op() {
        let mut bar = laid_out();
        assert!(!bar.on_layout(Size::new(40.0, 300.0), Insets::ZERO));
        assert!(!bar.take_needs_paint());
        assert!(bar.on_layout(Size::new(40.0, 301.0), Insets::ZERO));
        assert!(bar.take_needs_paint());
    }

    #[test]
    fn relayout_ends_drag() {
        let mut bar = laid_out();
        assert!(bar.on_pointer_event(PointerEvent::new(PointerPhase::Down, 20.0, 100.0)));
        assert!(bar.state().is_dragging());
        bar.on_layout(Size::new(60.0, 300.0), Insets::ZERO);
        assert_eq!(bar.state(), InteractionState::Idle);
    }

    #[test]
    fn nan_progress_is_ignored() {
        let mut bar = laid_out();
        bar.set_progress(25.0);
        bar.set_progress(f64::NAN);
        assert_eq!(bar.progress(), 25.0);
        assert!(bar.render().iter().all(|p| !matches!(
            p,
            Primitive::Disc { circle, .. } if circle.center.y.is_nan()
        )));

        let fresh = SeekBar::new(StyleConfig::default(), RangeConfig::default(), f64::NAN);
        assert_eq!(fresh.progress(), 0.0);
    }

    #[test]
    fn nan_pointer_y_keeps_drag_position() {
        let mut bar = laid_out();
        assert!(!bar.on_pointer_event(PointerEvent::new(PointerPhase::Down, 20.0, f64::NAN)));
        assert_eq!(bar.state(), InteractionState::Idle);

        assert!(bar.on_pointer_event(PointerEvent::new(PointerPhase::Down, 20.0, 100.0)));
        let progress = bar.progress();
        bar.on_pointer_event(PointerEvent::new(PointerPhase::Move, 20.0, f64::NAN));
        assert_eq!(bar.progress(), progress);
        assert_eq!(bar.thumb_y(), Some(100.0));
    }

    #[test]
    fn shrinking_travel_band_ends_drag() {
        let mut bar = laid_out();
        assert!(bar.on_pointer_event(PointerEvent::new(PointerPhase::Down, 20.0, 100.0)));
        // A 300px thumb leaves no room to travel in a 300px tall bar.
        bar.set_element_sizes(300.0, 4.0, 10.0).unwrap();
        assert_eq!(bar.state(), InteractionState::Idle);
        assert!(!bar.on_pointer_event(PointerEvent::new(PointerPhase::Move, 20.0, 150.0)));
        assert!(bar.render().is_empty());
    }

    #[test]
    fn set_progress_during_drag_moves_thumb() {
        let mut bar = laid_out();
        bar.on_pointer_event(PointerEvent::new(PointerPhase::Down, 20.0, 100.0));
        bar.set_progress(0.0);
        assert_eq!(bar.thumb_y(), Some(287.5));
        assert!(bar.state().is_dragging());
    }

    #[test]
    fn padding_before_layout_is_kept() {
        let mut bar = SeekBar::default();
        bar.set_padding(Insets::uniform(5.0));
        assert!(bar.geometry().is_none());
        bar.on_layout(Size::new(40.0, 300.0), Insets::uniform(5.0));
        assert_eq!(
            bar.content_area(),
            Some(Rect::new(5.0, 5.0, 35.0, 295.0))
        );
    }

    #[test]
    fn min_size_counts_thumbs_and_padding() {
        let mut bar = SeekBar::default();
        bar.set_element_sizes(20.0, 4.0, 10.0).unwrap();
        bar.set_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(bar.min_size(), Size::new(24.0, 106.0));
    }

    #[test]
    fn color_changes_request_paint() {
        let mut bar = laid_out();
        let c = Color::rgb8(1, 2, 3);
        bar.set_bar_colors(c, c, c);
        assert!(bar.take_needs_paint());
        bar.set_thumb_colors(c, c, c);
        assert_eq!(bar.style().palette.thumb_touched_halo, c);
        assert!(bar.take_needs_paint());
    }

    #[test]
    fn render_into_reuses_buffer() {
        let bar = laid_out();
        let mut buf = Vec::with_capacity(8);
        bar.render_into(&mut buf);
        let first = buf.clone();
        bar.render_into(&mut buf);
        assert_eq!(buf, first);
        assert_eq!(buf, bar.render());
    }
}
