//! Pointer gesture state machine.
//!
//! ```text
//!   Idle ──press──▶ Pressed ──moved past drag threshold──▶ Dragging
//!    ▲                 │                                      │
//!    └──── release ────┴──────────── release ─────────────────┘
//! ```
//!
//! A release from `Pressed` is a tap, a release from `Dragging` is a drag.
//! Either may instead be a horizontal swipe if the pointer travelled far
//! enough sideways quickly enough.

use std::mem;

use crate::config::EngineConfig;

/// Bookkeeping for one press-to-release gesture, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub start_x: f32,
    pub start_y: f32,
    pub last_x: f32,
    pub last_y: f32,
    /// The press began inside the content rect; only such presses scroll.
    pub inside_content: bool,
    /// Item under the pointer when it went down.
    pub pressed_index: Option<usize>,
    /// Ticks since the press.
    pub ticks: u32,
}

impl Gesture {
    pub fn new(x: f32, y: f32, inside_content: bool, pressed_index: Option<usize>) -> Self {
        Self {
            start_x: x,
            start_y: y,
            last_x: x,
            last_y: y,
            inside_content,
            pressed_index,
            ticks: 0,
        }
    }

    /// Travel from the press origin to the latest position.
    pub fn displacement(&self) -> (f32, f32) {
        (self.last_x - self.start_x, self.last_y - self.start_y)
    }

    /// Move to `(x, y)` and return the scroll delta for this tick.
    ///
    /// Moving the pointer up scrolls the content down, so the delta is
    /// positive when `y` decreases.
    fn advance(&mut self, x: f32, y: f32) -> f32 {
        let delta = self.last_y - y;
        self.last_x = x;
        self.last_y = y;
        self.ticks = self.ticks.saturating_add(1);
        delta
    }

    fn exceeds(&self, threshold: f32) -> bool {
        let (dx, dy) = self.displacement();
        dx.abs().max(dy.abs()) > threshold
    }

    fn swipe(&self, config: &EngineConfig) -> Option<SwipeDirection> {
        let (dx, dy) = self.displacement();
        if self.ticks > config.swipe_max_ticks
            || dx.abs() < config.swipe_distance
            || dx.abs() <= dy.abs()
        {
            return None;
        }
        Some(if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Result of one held-pointer tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStep {
    /// Scroll delta since the previous tick.
    pub delta_y: f32,
    /// This tick turned a press into a drag.
    pub started_drag: bool,
    pub dragging: bool,
    pub inside_content: bool,
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    Tap(Gesture),
    Drag(Gesture),
    Swipe(SwipeDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchState {
    #[default]
    Idle,
    Pressed(Gesture),
    Dragging(Gesture),
}

impl TouchState {
    pub fn is_touching(&self) -> bool {
        !matches!(self, TouchState::Idle)
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            TouchState::Idle => None,
            TouchState::Pressed(gesture) | TouchState::Dragging(gesture) => Some(gesture),
        }
    }

    /// Begin a gesture, abandoning any in progress.
    pub fn press(&mut self, gesture: Gesture) {
        *self = TouchState::Pressed(gesture);
    }

    /// Follow a held pointer. `None` when no gesture is in progress.
    pub fn track(&mut self, x: f32, y: f32, drag_threshold: f32) -> Option<TrackStep> {
        match self {
            TouchState::Idle => None,
            TouchState::Pressed(gesture) => {
                let delta_y = gesture.advance(x, y);
                let inside_content = gesture.inside_content;
                if gesture.exceeds(drag_threshold) {
                    let dragged = *gesture;
                    *self = TouchState::Dragging(dragged);
                    return Some(TrackStep {
                        delta_y,
                        started_drag: true,
                        dragging: true,
                        inside_content,
                    });
                }
                Some(TrackStep {
                    delta_y,
                    started_drag: false,
                    dragging: false,
                    inside_content,
                })
            }
            TouchState::Dragging(gesture) => {
                let delta_y = gesture.advance(x, y);
                Some(TrackStep {
                    delta_y,
                    started_drag: false,
                    dragging: true,
                    inside_content: gesture.inside_content,
                })
            }
        }
    }

    /// End the gesture at `(x, y)` and classify it. Always leaves the state `Idle`.
    pub fn release(&mut self, x: f32, y: f32, config: &EngineConfig) -> Option<Release> {
        match mem::take(self) {
            TouchState::Idle => None,
            TouchState::Pressed(mut gesture) => {
                gesture.advance(x, y);
                Some(match gesture.swipe(config) {
                    Some(direction) => Release::Swipe(direction),
                    None => Release::Tap(gesture),
                })
            }
            TouchState::Dragging(mut gesture) => {
                gesture.advance(x, y);
                Some(match gesture.swipe(config) {
                    Some(direction) => Release::Swipe(direction),
                    None => Release::Drag(gesture),
                })
            }
        }
    }

    /// Drop the gesture without classifying it.
    pub fn reset(&mut self) {
        *self = TouchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed_at(x: f32, y: f32) -> TouchState {
        let mut state = TouchState::Idle;
        state.press(Gesture::new(x, y, true, Some(0)));
        state
    }

    #[test]
    fn test_press_then_release_is_tap() {
        let config = EngineConfig::default();
        let mut state = pressed_at(10.0, 10.0);
        assert!(state.is_touching());
        let release = state.release(11.0, 10.0, &config);
        assert!(matches!(release, Some(Release::Tap(g)) if g.pressed_index == Some(0)));
        assert_eq!(state, TouchState::Idle);
    }

    #[test]
    fn test_drag_threshold() {
        let mut state = pressed_at(10.0, 50.0);

        let step = state.track(10.0, 40.0, 12.0).unwrap();
        assert_eq!(step.delta_y, 10.0);
        assert!(!step.dragging);

        let step = state.track(10.0, 37.0, 12.0).unwrap();
        assert!(step.started_drag);
        assert!(matches!(state, TouchState::Dragging(_)));

        let step = state.track(10.0, 40.0, 12.0).unwrap();
        assert_eq!(step.delta_y, -3.0);
        assert!(step.dragging && !step.started_drag);
    }

    #[test]
    fn test_release_after_drag() {
        let config = EngineConfig::default();
        let mut state = pressed_at(10.0, 50.0);
        state.track(10.0, 20.0, config.drag_threshold);
        assert!(matches!(
            state.release(10.0, 18.0, &config),
            Some(Release::Drag(_))
        ));
    }

    #[test]
    fn test_swipe_left() {
        let config = EngineConfig::default();
        let mut state = pressed_at(100.0, 20.0);
        state.track(70.0, 22.0, config.drag_threshold);
        assert_eq!(
            state.release(40.0, 24.0, &config),
            Some(Release::Swipe(SwipeDirection::Left))
        );
    }

    #[test]
    fn test_slow_swipe_is_a_drag() {
        let config = EngineConfig::default();
        let mut state = pressed_at(100.0, 20.0);
        for step in 1..=20 {
            state.track(100.0 - step as f32 * 3.0, 20.0, config.drag_threshold);
        }
        assert!(matches!(
            state.release(40.0, 20.0, &config),
            Some(Release::Drag(_))
        ));
    }

    #[test]
    fn test_idle_ignores_track_and_release() {
        let config = EngineConfig::default();
        let mut state = TouchState::Idle;
        assert_eq!(state.track(1.0, 1.0, 12.0), None);
        assert_eq!(state.release(1.0, 1.0, &config), None);
    }
}
