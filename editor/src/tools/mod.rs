//! Built-in tools.
//!
//! | Tool | Name | Role |
//! |------|------|------|
//! | [`DragTool`] | `drag` | Pan the view; hover, select, move and resize rectangles |
//! | [`RectTool`] | `rect` | Draw a new rectangle |
//! | [`PointTool`] | `point` | Drop a point annotation |

mod drag;
mod point;
mod rect;

pub use drag::DragTool;
pub use point::PointTool;
pub use rect::RectTool;
