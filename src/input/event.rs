/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`GalleryCommand`](crate::engine::GalleryCommand)
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an absolute viewport position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
        /// Whether this is the primary pointer. Non-primary pointers are
        /// ignored.
        primary: bool,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Whether this is the primary pointer.
        primary: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// A key was pressed. Key strings use the `winit::keyboard::KeyCode`
    /// debug format: `"Escape"`, `"KeyQ"`, etc.
    KeyPressed {
        /// Physical key string.
        key: String,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// The viewport was resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// A panel close control was activated (the host has already stopped
    /// the event from propagating further).
    PanelCloseControl,
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Left,
    /// Secondary (right) button.
    Right,
    /// Middle button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
