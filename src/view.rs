//! Floem view wrapping a [`SeekBar`].

use floem::kurbo::{Insets, Point, Rect, Size, Stroke};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::render::Primitive;
use crate::seek_bar::SeekBar;
use crate::touch::{PointerEvent, PointerPhase};

enum SeekBarUpdate {
    Progress(f64),
}

pub struct VerticalSeekBar {
    id: ViewId,
    bar: SeekBar,
    /// Reused between frames.
    primitives: Vec<Primitive>,
    on_change: Option<Box<dyn Fn(f64)>>,
}

/// Creates a vertical seek bar with the default style and a `0..100` range.
///
/// Drags write to `progress`; external changes to it move the thumb.
pub fn vertical_seek_bar(progress: RwSignal<f64>) -> VerticalSeekBar {
    vertical_seek_bar_with(progress, SeekBar::default())
}

/// Creates a vertical seek bar from a preconfigured [`SeekBar`].
pub fn vertical_seek_bar_with(progress: RwSignal<f64>, mut bar: SeekBar) -> VerticalSeekBar {
    let id = ViewId::new();

    create_effect(move |_| {
        let p = progress.get();
        id.update_state(SeekBarUpdate::Progress(p));
    });

    bar.set_progress(progress.get_untracked());
    // Element sizes are fixed once the view exists, so the minimum size is too.
    let min = bar.min_size();

    VerticalSeekBar {
        id,
        bar,
        primitives: Vec::new(),
        on_change: Some(Box::new(move |p| {
            progress.set(p);
        })),
    }
    .style(move |s| {
        s.min_width(min.width as f32)
            .min_height(min.height as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl VerticalSeekBar {
    fn flush(&mut self, progress_before: f64) {
        let progress = self.bar.progress();
        if progress != progress_before {
            if let Some(cb) = &self.on_change {
                cb(progress);
            }
        }
        if self.bar.take_needs_paint() {
            self.id.request_layout();
        }
    }
}

impl View for VerticalSeekBar {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SeekBarUpdate>() {
            match *update {
                // Echo of our own drag write; re-setting would clamp it.
                SeekBarUpdate::Progress(p) if p == self.bar.progress() => {}
                SeekBarUpdate::Progress(p) => self.bar.set_progress(p),
            }
            if self.bar.take_needs_paint() {
                self.id.request_layout();
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let pointer = match event {
            Event::PointerDown(e) => PointerEvent {
                phase: PointerPhase::Down,
                pos: e.pos,
            },
            Event::PointerMove(e) => PointerEvent {
                phase: PointerPhase::Move,
                pos: e.pos,
            },
            Event::PointerUp(e) => PointerEvent {
                phase: PointerPhase::Up,
                pos: e.pos,
            },
            Event::FocusLost => PointerEvent {
                phase: PointerPhase::Cancel,
                pos: Point::ZERO,
            },
            _ => return EventPropagation::Continue,
        };

        let before = self.bar.progress();
        let consumed = self.bar.on_pointer_event(pointer);
        if consumed && pointer.phase == PointerPhase::Down {
            cx.update_active(self.id());
        }
        self.flush(before);

        if consumed && pointer.phase != PointerPhase::Cancel {
            EventPropagation::Stop
        } else {
            EventPropagation::Continue
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        let size = Size::new(layout.size.width as f64, layout.size.height as f64);
        let p = layout.padding;
        let padding = Insets::new(p.left as f64, p.top as f64, p.right as f64, p.bottom as f64);
        self.bar.on_layout(size, padding);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let Some(clip) = self.bar.content_area() else {
            return;
        };
        self.bar.render_into(&mut self.primitives);
        self.bar.take_needs_paint();

        cx.save();
        cx.clip(&clip);
        for primitive in &self.primitives {
            match primitive {
                Primitive::Fill { rect, color } => cx.fill(rect, *color, 0.0),
                Primitive::Outline { path, color } => cx.stroke(path, *color, &Stroke::new(1.0)),
                Primitive::Stroke { line, width, color } => {
                    cx.stroke(line, *color, &Stroke::new(*width))
                }
                Primitive::Disc { circle, color } => cx.fill(circle, *color, 0.0),
            }
        }
        cx.restore();
    }
}
