//! Idle/dragging state machine for the thumb.

use floem::kurbo::Point;

use crate::geometry::TravelBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer event in the seek bar's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pos: Point,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            pos: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// The thumb follows the pointer; `pixel_y` is already clamped into the
    /// travel band.
    Dragging { pixel_y: f64 },
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn drag_y(&self) -> Option<f64> {
        match *self {
            Self::Dragging { pixel_y } => Some(pixel_y),
            Self::Idle => None,
        }
    }

    /// Enters `Dragging` at `pointer_y`. Returns the clamped thumb Y, or `None`
    /// (staying idle) if the band is degenerate.
    ///
    /// # Panics
    ///
    /// If a drag is already in progress.
    pub fn begin_drag(&mut self, pointer_y: f64, travel: &TravelBand) -> Option<f64> {
        assert!(
            !self.is_dragging(),
            "begin_drag called while a drag is already in progress"
        );
        let pixel_y = travel.clamp(pointer_y)?;
        *self = Self::Dragging { pixel_y };
        Some(pixel_y)
    }

    /// Moves the dragged thumb to `pointer_y`, clamped into the band.
    ///
    /// # Panics
    ///
    /// If no drag is in progress.
    pub fn update_drag(&mut self, pointer_y: f64, travel: &TravelBand) -> Option<f64> {
        assert!(
            self.is_dragging(),
            "update_drag called while no drag is in progress"
        );
        let pixel_y = travel.clamp(pointer_y)?;
        *self = Self::Dragging { pixel_y };
        Some(pixel_y)
    }

    /// Returns to `Idle`. `true` if a drag was actually ended.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND: TravelBand = TravelBand {
        top: 10.0,
        bottom: 390.0,
    };

    #[test]
    fn starts_idle() {
        assert_eq!(InteractionState::default(), InteractionState::Idle);
        assert_eq!(InteractionState::Idle.drag_y(), None);
    }

    #[test]
    fn drag_cycle_clamps_pointer() {
        let mut state = InteractionState::Idle;
        assert_eq!(state.begin_drag(0.0, &BAND), Some(10.0));
        assert_eq!(state, InteractionState::Dragging { pixel_y: 10.0 });
        assert_eq!(state.update_drag(200.0, &BAND), Some(200.0));
        assert_eq!(state.update_drag(1000.0, &BAND), Some(390.0));
        assert_eq!(state.drag_y(), Some(390.0));
        assert!(state.end_drag());
        assert!(!state.end_drag());
        assert_eq!(state, InteractionState::Idle);
    }

    #[test]
    fn degenerate_band_does_not_start_a_drag() {
        let mut state = InteractionState::Idle;
        let band = TravelBand {
            top: 10.0,
            bottom: 5.0,
        };
        assert_eq!(state.begin_drag(7.0, &band), None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn nan_pointer_is_skipped() {
        let mut state = InteractionState::Idle;
        assert_eq!(state.begin_drag(f64::NAN, &BAND), None);
        assert_eq!(state, InteractionState::Idle);

        state.begin_drag(50.0, &BAND);
        assert_eq!(state.update_drag(f64::NAN, &BAND), None);
        assert_eq!(state.drag_y(), Some(50.0));
    }

    #[test]
    #[should_panic(expected = "already in progress")]
    fn begin_while_dragging_panics() {
        let mut state = InteractionState::Dragging { pixel_y: 20.0 };
        state.begin_drag(30.0, &BAND);
    }

    #[test]
    #[should_panic(expected = "no drag is in progress")]
    fn update_while_idle_panics() {
        let mut state = InteractionState::Idle;
        state.update_drag(30.0, &BAND);
    }
}
