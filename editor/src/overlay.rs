//! Overlays: layers stacked above the annotations, independent of the tool.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::consts::{CROSSHAIR_OVERLAY_Z, MASK_OVERLAY_Z};
use crate::mask::{MaskInput, compute_mask};
use crate::scene::{Layer, MaskLayer, SceneContext};

pub trait Overlay {
    fn name(&self) -> &'static str;

    /// Stacking order; higher draws later.
    fn z_index(&self) -> i32;

    /// Layer for the current state, or `None` when nothing should be drawn.
    fn layer(&self, ctx: &SceneContext<'_>) -> Option<Layer>;
}

/// Spotlight mask following the active tool's hover/selection.
///
/// Present whenever masking is enabled, even at opacity 0, so renderers can
/// animate between states.
#[derive(Debug, Default)]
pub struct RectMaskOverlay;

impl Overlay for RectMaskOverlay {
    fn name(&self) -> &'static str {
        "rect_mask"
    }

    fn z_index(&self) -> i32 {
        MASK_OVERLAY_Z
    }

    fn layer(&self, ctx: &SceneContext<'_>) -> Option<Layer> {
        if !ctx.config.enable_mask {
            return None;
        }
        let mask = compute_mask(&MaskInput {
            annotations: ctx.annotations,
            hovered_id: ctx.focus.hovered,
            selected_id: ctx.focus.selected,
            enable_mask: ctx.config.enable_mask,
            alpha: ctx.config.mask_alpha,
        });
        Some(Layer::Mask(MaskLayer {
            opacity: mask.opacity,
            bounds: ctx.image_bounds(),
            cutouts: mask
                .cutouts
                .into_iter()
                .map(|r| ctx.transform.rect_image_to_container(r))
                .collect(),
        }))
    }
}

/// Dashed crosshair at the pointer for tools that want one.
#[derive(Debug, Default)]
pub struct CrosshairOverlay;

impl Overlay for CrosshairOverlay {
    fn name(&self) -> &'static str {
        "crosshair"
    }

    fn z_index(&self) -> i32 {
        CROSSHAIR_OVERLAY_Z
    }

    fn layer(&self, ctx: &SceneContext<'_>) -> Option<Layer> {
        if !ctx.config.show_crosshair || !ctx.tool.shows_crosshair() {
            return None;
        }
        ctx.pointer.map(|at| Layer::Crosshair { at })
    }
}
