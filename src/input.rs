//! Input model: buttons, wheel deltas, and the pan gesture state machine.
//!
//! Event handlers never touch the camera directly. They feed raw pointer and
//! wheel data through this module, which turns gestures into
//! [`CameraCommand`]s for the camera reducer to apply. The machine has two
//! states: `Idle` between gestures and `Panning` while a pointer button is
//! held down.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{CameraCommand, ZoomDirection};
use crate::geom::Vec2;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The pan gesture state machine.
#[derive(Debug, Clone, Copy, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A pointer button is held; each move pans by the inter-event delta.
    Panning {
        /// Screen position of the previous pointer event.
        last_screen: Vec2,
    },
}

impl InputState {
    /// Begin a pan. Any button starts the gesture.
    pub fn on_pointer_down(&mut self, screen: Vec2, _button: Button) {
        *self = Self::Panning { last_screen: screen };
    }

    /// Advance the gesture. While panning, emits the delta from the previous
    /// pointer position; while idle, emits nothing.
    pub fn on_pointer_move(&mut self, screen: Vec2) -> Option<CameraCommand> {
        match *self {
            Self::Idle => None,
            Self::Panning { last_screen } => {
                *self = Self::Panning { last_screen: screen };
                Some(CameraCommand::PanBy(screen.sub(last_screen)))
            }
        }
    }

    /// End the gesture.
    pub fn on_pointer_up(&mut self) {
        *self = Self::Idle;
    }
}

/// Translate a wheel event at `screen` into a zoom command. A zero vertical
/// delta produces nothing.
#[must_use]
pub fn wheel_command(screen: Vec2, delta: WheelDelta) -> Option<CameraCommand> {
    if delta.dy > 0.0 {
        Some(CameraCommand::ZoomStep { direction: ZoomDirection::Out, anchor: screen })
    } else if delta.dy < 0.0 {
        Some(CameraCommand::ZoomStep { direction: ZoomDirection::In, anchor: screen })
    } else {
        None
    }
}
