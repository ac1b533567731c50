//! Gesture scripts: a recorded session replayed through the editor.
//!
//! A script is one JSON document:
//!
//! ```json
//! {
//!   "config": { "enable_mask": true },
//!   "image_size": { "width": 640, "height": 480 },
//!   "annotations": [{ "id": "a", "type": "rect", "data": { "x1": 50, "y1": 50, "x2": 200, "y2": 200 } }],
//!   "events": [
//!     { "event": "click", "x": 100, "y": 100 },
//!     { "event": "down", "x": 200, "y": 200 },
//!     { "event": "move", "x": 220, "y": 230 },
//!     { "event": "up", "x": 220, "y": 230 }
//!   ]
//! }
//! ```
//!
//! The replay plays the host: every `annotation_changed` action is applied
//! to a host-owned list that is handed back to the editor before the next
//! event.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use editor::EditorError;
use editor::annotation::{Annotation, apply_change};
use editor::config::EditorConfig;
use editor::engine::{Action, EditorCore};
use editor::geometry::{Point, Size};
use editor::input::{Button, Key, Modifiers, WheelDelta};
use editor::scene::Scene;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Overrides the config passed on the command line when present.
    #[serde(default)]
    pub config: Option<EditorConfig>,
    #[serde(default)]
    pub image_size: Option<Size>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub events: Vec<Event>,
}

/// One recorded input. Positions are container-space pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
    Leave,
    Click {
        x: f64,
        y: f64,
    },
    Key {
        key: String,
    },
    Wheel {
        x: f64,
        y: f64,
        #[serde(default)]
        dx: f64,
        dy: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Tool {
        name: String,
    },
    Remove {
        id: String,
    },
    Scale {
        value: f64,
    },
    Reset,
}

/// Result of a replay.
#[derive(Debug)]
pub struct Replay {
    /// Every action in emission order, paired with the index of the event
    /// that produced it.
    pub actions: Vec<(usize, Action)>,
    /// Host list after all changes were applied.
    pub annotations: Vec<Annotation>,
    pub scene: Scene,
}

impl Script {
    /// Parse a script document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error for malformed scripts.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Replay every event through a fresh editor.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid or an event names an unknown tool.
    pub fn replay(&self, config: EditorConfig) -> Result<Replay, EditorError> {
        let config = self.config.clone().unwrap_or(config);
        let mut editor = EditorCore::with_config(config)?;
        if let Some(size) = self.image_size {
            editor.set_image_size(size);
        }
        let mut host = self.annotations.clone();
        editor.set_annotations(host.clone());

        let mut actions = Vec::new();
        for (idx, event) in self.events.iter().enumerate() {
            tracing::trace!(idx, ?event, "replaying");
            let emitted = dispatch(&mut editor, event)?;
            let mut changed = false;
            for action in &emitted {
                if let Action::AnnotationChanged(change) = action {
                    if apply_change(&mut host, change) {
                        changed = true;
                    } else {
                        tracing::warn!(idx, id = %change.annotation.id, change = ?change.change, "host rejected change");
                    }
                }
            }
            if changed {
                editor.set_annotations(host.clone());
            }
            actions.extend(emitted.into_iter().map(|action| (idx, action)));
        }
        tracing::info!(events = self.events.len(), actions = actions.len(), "replay finished");

        Ok(Replay { actions, annotations: host, scene: editor.scene() })
    }
}

fn dispatch(editor: &mut EditorCore, event: &Event) -> Result<Vec<Action>, EditorError> {
    let actions = match event {
        Event::Down { x, y, button } => editor.on_pointer_down(Point::new(*x, *y), *button),
        Event::Move { x, y } => editor.on_pointer_move(Point::new(*x, *y)),
        Event::Up { x, y } => editor.on_pointer_up(Point::new(*x, *y)),
        Event::Leave => editor.on_pointer_leave(),
        Event::Click { x, y } => editor.on_click(Point::new(*x, *y)),
        Event::Key { key } => editor.on_key_down(&Key(key.clone())),
        Event::Wheel { x, y, dx, dy, modifiers } => {
            editor.on_wheel(Point::new(*x, *y), WheelDelta { dx: *dx, dy: *dy }, *modifiers)
        }
        Event::Tool { name } => editor.set_tool(name)?,
        Event::Remove { id } => editor.remove_annotation(id),
        Event::Scale { value } => editor.set_scale(*value),
        Event::Reset => editor.reset(),
    };
    Ok(actions)
}
