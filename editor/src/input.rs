//! Input model: mouse buttons, modifier keys, keys, wheel deltas, and the
//! cursor the editor asks the host to show.
//!
//! All positions handed to the editor are container-space CSS pixels, i.e.
//! already relative to the top-left of the editing surface.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::rect_box::{DragSource, Handle};

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key, named as the browser reports it (`"Escape"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    pub dx: f64,
    /// Vertical scroll in pixels; negative scrolls up (zoom in).
    pub dy: f64,
}

/// Pointer cursor requested by the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Default,
    Grab,
    Grabbing,
    Crosshair,
    Move,
    NResize,
    SResize,
    EResize,
    WResize,
    NwResize,
    NeResize,
    SwResize,
    SeResize,
}

impl Cursor {
    /// Cursor shown over (or while dragging) a rectangle part.
    #[must_use]
    pub fn for_drag_source(source: DragSource) -> Self {
        match source {
            DragSource::Move => Self::Move,
            DragSource::Resize(handle) => match handle {
                Handle::TopEdge => Self::NResize,
                Handle::BottomEdge => Self::SResize,
                Handle::LeftEdge => Self::WResize,
                Handle::RightEdge => Self::EResize,
                Handle::TopLeftCorner => Self::NwResize,
                Handle::TopRightCorner => Self::NeResize,
                Handle::BottomLeftCorner => Self::SwResize,
                Handle::BottomRightCorner => Self::SeResize,
            },
        }
    }

    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Crosshair => "crosshair",
            Self::Move => "move",
            Self::NResize => "n-resize",
            Self::SResize => "s-resize",
            Self::EResize => "e-resize",
            Self::WResize => "w-resize",
            Self::NwResize => "nw-resize",
            Self::NeResize => "ne-resize",
            Self::SwResize => "sw-resize",
            Self::SeResize => "se-resize",
        }
    }
}
