#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use crate::annotation::{Annotation, new_annotation_id};
use crate::geometry::Point;
use crate::input::Cursor;
use crate::tool::{Tool, ToolContext};

/// Drop a point annotation where the user clicks.
#[derive(Debug, Default)]
pub struct PointTool;

impl PointTool {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tool for PointTool {
    fn name(&self) -> &'static str {
        "point"
    }

    fn cursor(&self) -> Cursor {
        Cursor::Crosshair
    }

    fn shows_crosshair(&self) -> bool {
        true
    }

    fn on_click(&mut self, ctx: &mut ToolContext<'_>, pos: Point) {
        let annotation = Annotation::point(new_annotation_id(), ctx.to_image(pos));
        ctx.add_annotation(annotation.clone());
        ctx.select(Some(annotation));
    }
}
