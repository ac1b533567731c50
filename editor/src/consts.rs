//! Shared numeric constants for the editor crate.

// ── View ────────────────────────────────────────────────────────

/// Lower zoom bound used by the default configuration.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Upper zoom bound used by the default configuration.
pub const DEFAULT_MAX_SCALE: f64 = 10.0;

/// Multiplicative zoom step per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

// ── Drawing ─────────────────────────────────────────────────────

/// Container-space width/height below which a draw gesture counts as a click.
pub const DEFAULT_MIN_DRAW_SIZE_PX: f64 = 10.0;

// ── Mask ────────────────────────────────────────────────────────

/// Dimming opacity applied outside cut-out regions.
pub const DEFAULT_MASK_ALPHA: f64 = 0.5;

// ── Hit-testing ─────────────────────────────────────────────────

/// Half the side of a square corner handle, in container pixels.
pub const CORNER_HANDLE_HALF_PX: f64 = 6.0;

/// Half the thickness of an edge resize band, in container pixels.
pub const EDGE_BAND_HALF_PX: f64 = 3.0;

// ── Overlays ────────────────────────────────────────────────────

/// Stacking order of the rect mask overlay.
pub const MASK_OVERLAY_Z: i32 = 10;

/// Stacking order of the crosshair overlay.
pub const CROSSHAIR_OVERLAY_Z: i32 = 20;
