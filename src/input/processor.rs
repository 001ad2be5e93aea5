//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (viewport size,
//! pointer position, button and modifier state) and the key-binding map. It
//! is the only thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::GalleryEngine::execute) method. Pixel → NDC
//! normalization happens here, so the engine only ever sees [-1, 1]
//! pointer coordinates.

use glam::Vec2;

use super::event::{InputEvent, PointerButton};
use super::keyboard::KeyAction;
use crate::engine::GalleryCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`GalleryCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Viewport size in physical pixels.
    viewport: (u32, u32),
    /// Last pointer position in physical pixels.
    pointer_pos: Vec2,
    /// Whether the primary pointer button is currently held.
    button_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default key bindings and a zero viewport
    /// (pointer events produce no pick commands until the first resize).
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            viewport: (0, 0),
            pointer_pos: Vec2::ZERO,
            button_pressed: false,
            shift_pressed: false,
            key_bindings,
        }
    }

    /// Last pointer position in physical pixels.
    #[must_use]
    pub fn pointer_pos(&self) -> Vec2 {
        self.pointer_pos
    }

    /// Whether the primary pointer button is pressed.
    #[must_use]
    pub fn button_pressed(&self) -> bool {
        self.button_pressed
    }

    /// Process a raw input event and return the commands it produces.
    ///
    /// A pointer move while dragging yields both a hover-pick command and a
    /// camera command, so the return is a (small) list.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<GalleryCommand> {
        match event {
            InputEvent::PointerMoved { x, y, primary } => {
                if !primary {
                    return Vec::new();
                }
                self.handle_pointer_moved(x, y)
            }
            InputEvent::PointerButton {
                button,
                pressed,
                primary,
            } => {
                if !primary {
                    return Vec::new();
                }
                self.handle_pointer_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                vec![GalleryCommand::Zoom { delta }]
            }
            InputEvent::KeyPressed { key } => {
                self.lookup_key(&key).into_iter().collect()
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                Vec::new()
            }
            InputEvent::Resized { width, height } => {
                self.viewport = (width, height);
                Vec::new()
            }
            InputEvent::PanelCloseControl => {
                vec![GalleryCommand::ClosePanel]
            }
        }
    }

    /// Pointer moved — always a hover pick (when the viewport is valid),
    /// plus a camera drag command while the button is held.
    fn handle_pointer_moved(&mut self, x: f32, y: f32) -> Vec<GalleryCommand> {
        let delta = Vec2::new(x, y) - self.pointer_pos;
        self.pointer_pos = Vec2::new(x, y);

        let mut commands = Vec::with_capacity(2);
        if let Some(ndc) = self.normalize(x, y) {
            commands.push(GalleryCommand::PointerMove { ndc });
        }
        if self.button_pressed {
            if self.shift_pressed {
                commands.push(GalleryCommand::PanCamera { delta });
            } else {
                commands.push(GalleryCommand::RotateCamera { delta });
            }
        }
        commands
    }

    /// Pointer button — track state, emit a pick command on primary press.
    fn handle_pointer_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
    ) -> Vec<GalleryCommand> {
        if button != PointerButton::Left {
            return Vec::new();
        }

        self.button_pressed = pressed;
        if !pressed {
            return Vec::new();
        }

        self.normalize(self.pointer_pos.x, self.pointer_pos.y)
            .map(|ndc| GalleryCommand::PointerDown { ndc })
            .into_iter()
            .collect()
    }

    /// Look up a key press in the binding map.
    fn lookup_key(&self, key: &str) -> Option<GalleryCommand> {
        self.key_bindings.lookup(key).map(|action| match action {
            KeyAction::Cancel => GalleryCommand::ClosePanel,
            KeyAction::RecenterCamera => GalleryCommand::RecenterCamera,
        })
    }

    /// Pixel → NDC ([-1, 1], y up). `None` for a zero-size viewport — the
    /// degenerate case is a defined no-op, not an error.
    fn normalize(&self, x: f32, y: f32) -> Option<Vec2> {
        let (w, h) = self.viewport;
        if w == 0 || h == 0 {
            return None;
        }
        Some(Vec2::new(
            (x / w as f32) * 2.0 - 1.0,
            -(y / h as f32) * 2.0 + 1.0,
        ))
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
