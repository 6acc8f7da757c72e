//! Pixel-space geometry of the seek bar.
//!
//! Everything here is recomputed wholesale from the view size, padding and
//! style whenever any of them changes. Nothing is patched incrementally.
//!
//! Y grows downwards, so the top of the travel band corresponds to `max` and
//! the bottom to `min`.

use floem::kurbo::{BezPath, Insets, Point, Rect, Size};

use crate::config::{RangeConfig, StyleConfig};

/// Vertical span the thumb center may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelBand {
    pub top: f64,
    pub bottom: f64,
}

impl TravelBand {
    pub fn extent(&self) -> f64 {
        self.bottom - self.top
    }

    /// Zero or negative extent: the content area is shorter than the thumb.
    pub fn is_degenerate(&self) -> bool {
        self.extent() <= 0.0
    }

    /// Clamps `y` into the band. `None` for a degenerate band or a NaN `y`.
    pub fn clamp(&self, y: f64) -> Option<f64> {
        if self.is_degenerate() || y.is_nan() {
            None
        } else {
            Some(y.clamp(self.top, self.bottom))
        }
    }
}

/// Content area and travel band derived from a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// View rect shrunk by padding, never negative in size.
    pub content: Rect,
    pub center_x: f64,
    pub travel: TravelBand,
}

impl LayoutMetrics {
    pub fn compute(view: Size, padding: Insets, thumb_size: f64) -> Self {
        let x0 = padding.x0;
        let y0 = padding.y0;
        let width = (view.width - padding.x0 - padding.x1).max(0.0);
        let height = (view.height - padding.y0 - padding.y1).max(0.0);
        let content = Rect::new(x0, y0, x0 + width, y0 + height);

        let half_thumb = thumb_size / 2.0;
        Self {
            content,
            center_x: x0 + width / 2.0,
            travel: TravelBand {
                top: y0 + half_thumb,
                bottom: y0 + height - half_thumb,
            },
        }
    }

    pub fn content_width(&self) -> f64 {
        self.content.width()
    }

    pub fn content_height(&self) -> f64 {
        self.content.height()
    }

    /// Whether there is anything to draw or hit-test.
    pub fn is_drawable(&self) -> bool {
        self.content_width() > 0.0 && self.content_height() > 0.0 && !self.travel.is_degenerate()
    }
}

/// Horizontal band that accepts a drag start over the full content height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchBand {
    pub start_x: f64,
    pub end_x: f64,
}

impl TouchBand {
    /// Centered on the content; `max(thumb_size, preferred_width)` wide, clipped
    /// to the content area.
    pub fn compute(metrics: &LayoutMetrics, preferred_width: f64, thumb_size: f64) -> Self {
        let half = preferred_width.max(thumb_size) / 2.0;
        Self {
            start_x: (metrics.center_x - half).max(metrics.content.x0),
            end_x: (metrics.center_x + half).min(metrics.content.x1),
        }
    }

    pub fn width(&self) -> f64 {
        self.end_x - self.start_x
    }
}

/// Maps progress to the thumb's Y coordinate. `None` for a degenerate band.
///
/// The numerator is `progress` rather than `progress - min`, so ranges with a
/// nonzero `min` land outside the band.
pub fn progress_to_pixel_y(progress: f64, range: &RangeConfig, travel: &TravelBand) -> Option<f64> {
    if travel.is_degenerate() {
        return None;
    }
    Some(travel.bottom - travel.extent() * progress / range.span())
}

/// Maps a Y coordinate (clamped into the band first) back to progress.
/// `None` for a degenerate band.
pub fn pixel_y_to_progress(y: f64, range: &RangeConfig, travel: &TravelBand) -> Option<f64> {
    let y = travel.clamp(y)?;
    Some(range.span() * (travel.bottom - y) / travel.extent())
}

/// Layout metrics plus the touch band, as one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub metrics: LayoutMetrics,
    pub touch: TouchBand,
}

impl Geometry {
    pub fn compute(view: Size, padding: Insets, style: &StyleConfig) -> Self {
        let thumb_size = style.sizes.thumb_size();
        let metrics = LayoutMetrics::compute(view, padding, thumb_size);
        let touch = TouchBand::compute(&metrics, style.preferred_touch_area_width, thumb_size);
        Self { metrics, touch }
    }

    /// The touch band stretched over the full content height.
    pub fn touch_column(&self) -> Rect {
        let content = self.metrics.content;
        Rect::new(self.touch.start_x, content.y0, self.touch.end_x, content.y1)
    }

    /// Full-width strip around the thumb, `content_width / 2` above and below
    /// it, clipped to the content area vertically.
    pub fn proximity_strip(&self, thumb_y: f64) -> Rect {
        let content = self.metrics.content;
        let half = self.metrics.content_width() / 2.0;
        Rect::new(
            content.x0,
            (thumb_y - half).max(content.y0),
            content.x1,
            (thumb_y + half).min(content.y1),
        )
    }

    /// Whether a pointer-down at `pos` may start a drag.
    pub fn accepts(&self, pos: Point, thumb_y: f64) -> bool {
        self.metrics.is_drawable()
            && (self.touch_column().contains(pos) || self.proximity_strip(thumb_y).contains(pos))
    }

    /// Closed outline of the union of the touch column and the proximity strip.
    pub fn touch_region_outline(&self, thumb_y: f64) -> BezPath {
        let ring = union_ring(self.touch_column(), self.proximity_strip(thumb_y));
        let mut path = BezPath::new();
        for (i, pt) in ring.into_iter().enumerate() {
            if i == 0 {
                path.move_to(pt);
            } else {
                path.line_to(pt);
            }
        }
        path.close_path();
        path
    }
}

/// Clockwise vertex ring of a column/strip cross, where the strip spans at
/// least the column's width and the column at least the strip's height.
///
/// The full twelve-corner cross is always emitted and then simplified, which
/// yields the eight-corner "T" when the strip touches the top or bottom edge
/// and a plain rectangle when the column fills the width.
fn union_ring(column: Rect, strip: Rect) -> Vec<Point> {
    if strip.height() <= 0.0 {
        return simplify_ring(vec![
            Point::new(column.x0, column.y0),
            Point::new(column.x1, column.y0),
            Point::new(column.x1, column.y1),
            Point::new(column.x0, column.y1),
        ]);
    }
    simplify_ring(vec![
        Point::new(column.x0, column.y0),
        Point::new(column.x1, column.y0),
        Point::new(column.x1, strip.y0),
        Point::new(strip.x1, strip.y0),
        Point::new(strip.x1, strip.y1),
        Point::new(column.x1, strip.y1),
        Point::new(column.x1, column.y1),
        Point::new(column.x0, column.y1),
        Point::new(column.x0, strip.y1),
        Point::new(strip.x0, strip.y1),
        Point::new(strip.x0, strip.y0),
        Point::new(column.x0, strip.y0),
    ])
}

/// Drops repeated and collinear vertices until none remain.
fn simplify_ring(mut ring: Vec<Point>) -> Vec<Point> {
    loop {
        let n = ring.len();
        if n < 3 {
            return ring;
        }
        let redundant = (0..n).find(|&i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            collinear(prev, ring[i], next)
        });
        match redundant {
            Some(i) => {
                ring.remove(i);
            }
            None => return ring,
        }
    }
}

fn collinear(a: Point, b: Point, c: Point) -> bool {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x) == 0.0
}
