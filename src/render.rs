//! Draw primitives for one frame of the seek bar.

use floem::kurbo::{BezPath, Circle, Line, Point, Rect};
use floem::peniko::Color;

use crate::config::StyleConfig;
use crate::geometry::Geometry;
use crate::touch::InteractionState;

/// A shape plus how to paint it, in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Fill { rect: Rect, color: Color },
    /// Hairline outline.
    Outline { path: BezPath, color: Color },
    Stroke { line: Line, width: f64, color: Color },
    Disc { circle: Circle, color: Color },
}

/// Replaces the contents of `out` with the primitives for the current state.
///
/// Leaves `out` empty when the geometry has nothing to draw.
pub fn build_primitives(
    geometry: &Geometry,
    state: InteractionState,
    thumb_y: f64,
    style: &StyleConfig,
    out: &mut Vec<Primitive>,
) {
    out.clear();
    let metrics = &geometry.metrics;
    if !metrics.is_drawable() {
        return;
    }

    if let Some(color) = style.debug.content_area {
        out.push(Primitive::Fill {
            rect: metrics.content,
            color,
        });
    }
    if let Some(color) = style.debug.touch_area {
        out.push(Primitive::Outline {
            path: geometry.touch_region_outline(thumb_y),
            color,
        });
    }

    let dragging = state.is_dragging();
    let x = metrics.center_x;
    let thumb = Point::new(x, thumb_y);
    let bottom = Point::new(x, metrics.travel.bottom);
    let palette = &style.palette;

    out.push(Primitive::Stroke {
        line: Line::new((x, metrics.travel.top), bottom),
        width: style.sizes.not_selected_bar_width(),
        color: palette.not_selected_bar,
    });
    out.push(Primitive::Stroke {
        line: Line::new(thumb, bottom),
        width: style.sizes.selected_bar_width(),
        color: palette.selected_bar(dragging),
    });
    if dragging {
        out.push(Primitive::Disc {
            circle: Circle::new(thumb, metrics.content_width() / 2.0),
            color: palette.thumb_touched_halo,
        });
    }
    out.push(Primitive::Disc {
        circle: Circle::new(thumb, style.sizes.thumb_radius()),
        color: palette.thumb(dragging),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DebugOverlay;
    use floem::kurbo::{Insets, Size};

    fn geometry(width: f64, height: f64) -> Geometry {
        Geometry::compute(Size::new(width, height), Insets::ZERO, &StyleConfig::default())
    }

    #[test]
    fn idle_draws_tracks_and_thumb() {
        let style = StyleConfig::default();
        let mut out = Vec::new();
        build_primitives(&geometry(40.0, 300.0), InteractionState::Idle, 150.0, &style, &mut out);

        assert_eq!(out.len(), 3);
        assert_eq!(
            out[0],
            Primitive::Stroke {
                line: Line::new((20.0, 12.5), (20.0, 287.5)),
                width: style.sizes.not_selected_bar_width(),
                color: style.palette.not_selected_bar,
            }
        );
        assert_eq!(
            out[1],
            Primitive::Stroke {
                line: Line::new((20.0, 150.0), (20.0, 287.5)),
                width: style.sizes.selected_bar_width(),
                color: style.palette.selected_bar,
            }
        );
        assert_eq!(
            out[2],
            Primitive::Disc {
                circle: Circle::new((20.0, 150.0), 12.5),
                color: style.palette.thumb,
            }
        );
    }

    #[test]
    fn dragging_adds_halo_and_touched_colors() {
        let style = StyleConfig::default();
        let mut out = Vec::new();
        let state = InteractionState::Dragging { pixel_y: 100.0 };
        build_primitives(&geometry(40.0, 300.0), state, 100.0, &style, &mut out);

        assert_eq!(out.len(), 4);
        assert!(matches!(
            out[1],
            Primitive::Stroke { color, .. } if color == style.palette.selected_bar_touched
        ));
        assert_eq!(
            out[2],
            Primitive::Disc {
                circle: Circle::new((20.0, 100.0), 20.0),
                color: style.palette.thumb_touched_halo,
            }
        );
        assert!(matches!(
            out[3],
            Primitive::Disc { color, .. } if color == style.palette.thumb_touched
        ));
    }

    #[test]
    fn debug_overlays_come_first() {
        let style = StyleConfig::default().with_debug(DebugOverlay {
            content_area: Some(Color::rgb8(255, 0, 0)),
            touch_area: Some(Color::rgb8(0, 255, 0)),
        });
        let mut out = Vec::new();
        build_primitives(&geometry(40.0, 300.0), InteractionState::Idle, 150.0, &style, &mut out);

        assert_eq!(out.len(), 5);
        assert_eq!(
            out[0],
            Primitive::Fill {
                rect: Rect::new(0.0, 0.0, 40.0, 300.0),
                color: Color::rgb8(255, 0, 0),
            }
        );
        assert!(matches!(out[1], Primitive::Outline { .. }));
    }

    #[test]
    fn degenerate_geometry_draws_nothing() {
        let style = StyleConfig::default();
        let mut out = vec![Primitive::Fill {
            rect: Rect::ZERO,
            color: Color::rgb8(0, 0, 0),
        }];
        // Shorter than the thumb.
        build_primitives(&geometry(40.0, 20.0), InteractionState::Idle, 10.0, &style, &mut out);
        assert!(out.is_empty());
        // No width.
        build_primitives(&geometry(0.0, 300.0), InteractionState::Idle, 10.0, &style, &mut out);
        assert!(out.is_empty());
    }
}
