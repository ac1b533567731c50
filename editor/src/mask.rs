//! Spotlight mask: how strongly to dim the image and which regions to leave
//! undimmed, derived from the annotation list and hover/selection focus.
//!
//! Rules, first match wins:
//!
//! | selected | hovered            | opacity |
//! |----------|--------------------|---------|
//! | none     | none               | alpha   |
//! | set      | same as selected   | 0       |
//! | set      | anything else      | 0       |
//! | none     | set                | alpha   |
//!
//! Masking is off entirely (opacity 0) when disabled or when there are no
//! rect annotations. Cut-outs are every rect when nothing is hovered, and
//! only the hovered rect otherwise. Ids that no longer resolve to an
//! annotation count as unset.

#[cfg(test)]
#[path = "mask_test.rs"]
mod mask_test;

use crate::annotation::{Annotation, find};
use crate::geometry::Rect;

/// Everything the mask depends on.
#[derive(Debug, Clone, Copy)]
pub struct MaskInput<'a> {
    pub annotations: &'a [Annotation],
    pub hovered_id: Option<&'a str>,
    pub selected_id: Option<&'a str>,
    pub enable_mask: bool,
    pub alpha: f64,
}

/// Computed mask in image space.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    pub opacity: f64,
    pub cutouts: Vec<Rect>,
}

#[must_use]
pub fn compute_mask(input: &MaskInput<'_>) -> Mask {
    let hovered = input.hovered_id.and_then(|id| find(input.annotations, id));
    let selected = input.selected_id.and_then(|id| find(input.annotations, id));

    let cutouts: Vec<Rect> = match hovered {
        Some(anno) => anno.as_rect().into_iter().collect(),
        None => input.annotations.iter().filter_map(Annotation::as_rect).collect(),
    };

    let has_rects = input.annotations.iter().any(|a| a.as_rect().is_some());
    // Any live selection switches the spotlight off, whatever is hovered.
    let opacity = if !input.enable_mask || !has_rects || selected.is_some() { 0.0 } else { input.alpha };

    Mask { opacity, cutouts }
}
