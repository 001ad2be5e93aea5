//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, pointer
//! gesture, UI close button, or programmatic call — is represented as a
//! `GalleryCommand`. Consumers construct commands and pass them to
//! [`GalleryEngine::execute`](super::GalleryEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — keyboard, pointer,
/// UI, or API all look identical:
///
/// ```ignore
/// engine.execute(GalleryCommand::ClosePanel);
/// engine.execute(GalleryCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryCommand {
    // ── Picking ─────────────────────────────────────────────────────
    /// Pointer hover at a normalized device coordinate: update the outline
    /// target set and cursor request.
    PointerMove {
        /// Pointer position in NDC ([-1, 1], y up).
        ndc: Vec2,
    },

    /// Pointer press at a normalized device coordinate: activate the info
    /// panel of a clicked selectable object.
    PointerDown {
        /// Pointer position in NDC ([-1, 1], y up).
        ndc: Vec2,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the orbit camera by `delta` pixels of drag.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the orbit camera by `delta` pixels of drag.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Animate the camera back to its home pose.
    RecenterCamera,

    // ── Panel ───────────────────────────────────────────────────────
    /// Close the active info panel (cancel key or close control).
    ClosePanel,
}
