//! Editor configuration supplied by the host at construction time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MASK_ALPHA, DEFAULT_MAX_SCALE, DEFAULT_MIN_DRAW_SIZE_PX, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP,
};
use crate::error::EditorError;

/// Which wheel gestures zoom the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Every wheel event zooms.
    #[default]
    Wheel,
    /// Only wheel events with Ctrl held zoom.
    CtrlWheel,
}

/// When drag gestures report `update` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// On every pointer move and again on release.
    #[default]
    Live,
    /// On release only.
    CommitOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub enable_mask: bool,
    /// Dimming opacity in `[0, 1]`.
    pub mask_alpha: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Zoom factor per wheel notch; must exceed 1.
    pub zoom_step: f64,
    pub scale_mode: ScaleMode,
    /// Minimum container-space width and height of a drawn rectangle.
    pub min_draw_size: f64,
    /// Scale at construction and after [`crate::engine::EditorCore::reset`].
    pub initial_scale: f64,
    pub show_crosshair: bool,
    pub update_policy: UpdatePolicy,
    /// Tool active at construction.
    pub default_tool: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            enable_mask: false,
            mask_alpha: DEFAULT_MASK_ALPHA,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
            scale_mode: ScaleMode::default(),
            min_draw_size: DEFAULT_MIN_DRAW_SIZE_PX,
            initial_scale: 1.0,
            show_crosshair: false,
            update_policy: UpdatePolicy::default(),
            default_tool: "drag".to_owned(),
        }
    }
}

impl EditorConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ConfigParse`] for malformed JSON and
    /// [`EditorError::InvalidConfig`] when a value fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EditorError> {
        if !(0.0..=1.0).contains(&self.mask_alpha) {
            return Err(invalid("mask_alpha", format!("{} is outside [0, 1]", self.mask_alpha)));
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(invalid("min_scale", format!("{} must be positive", self.min_scale)));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            return Err(invalid(
                "max_scale",
                format!("{} must be at least min_scale {}", self.max_scale, self.min_scale),
            ));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(invalid("zoom_step", format!("{} must be greater than 1", self.zoom_step)));
        }
        if !(self.min_draw_size.is_finite() && self.min_draw_size >= 0.0) {
            return Err(invalid("min_draw_size", format!("{} must not be negative", self.min_draw_size)));
        }
        if !(self.min_scale..=self.max_scale).contains(&self.initial_scale) {
            return Err(invalid(
                "initial_scale",
                format!("{} is outside [{}, {}]", self.initial_scale, self.min_scale, self.max_scale),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> EditorError {
    EditorError::InvalidConfig { field, reason }
}
