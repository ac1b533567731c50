//! Headless image-annotation editor core.
//!
//! The editor turns pointer, wheel and key events on an image view into
//! proposed annotation changes. It never draws and never stores annotations
//! on its own behalf: the host supplies the annotation list, applies (or
//! rejects) the [`engine::Action`]s each handler returns, and renders the
//! [`scene::Scene`] the editor describes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EditorCore`] event entry point and [`engine::Action`] |
//! | [`annotation`] | Annotation model, change events, host-side `apply_change` |
//! | [`geometry`] | Points, rectangles, and the image/container view transform |
//! | [`rect_box`] | Rectangle drag-session state machine (move and 8 resize handles) |
//! | [`hit`] | Hit-testing rectangles and their handles |
//! | [`tool`] | The `Tool` trait and per-event `ToolContext` |
//! | [`tools`] | Built-in drag, rect and point tools |
//! | [`registry`] | Tool and overlay registry |
//! | [`mask`] | Spotlight mask rule table |
//! | [`overlay`] | Mask and crosshair overlays |
//! | [`scene`] | Render model produced for the host |
//! | [`input`] | Buttons, modifiers, keys, wheel deltas, cursors |
//! | [`config`] | Host-supplied `EditorConfig` |
//! | [`error`] | `EditorError` |
//! | [`consts`] | Shared numeric constants (zoom limits, handle sizes, etc.) |

pub mod annotation;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod mask;
pub mod overlay;
pub mod rect_box;
pub mod registry;
pub mod scene;
pub mod tool;
pub mod tools;

pub use error::EditorError;
