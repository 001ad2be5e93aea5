//! Highlight presentation: the outline target set and cursor style the host
//! renderer consumes each frame.

use crate::scene::ObjectId;

/// Cursor style requested by the selection controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Arrow cursor — nothing selectable under the pointer.
    #[default]
    Default,
    /// Pointer (hand) cursor — a selectable object is hovered.
    Pointer,
}

/// Sink for highlight decisions made by the selection controller.
///
/// The production implementation is [`OutlineHighlight`]; the host's outline
/// post-process and window cursor read from it. Tests substitute recording
/// fakes.
pub trait HighlightPresenter {
    /// Replace the outline target set. Always a full overwrite, never a
    /// merge.
    fn set_outline_targets(&mut self, targets: &[ObjectId]);

    /// Request a cursor style.
    fn set_cursor(&mut self, style: CursorStyle);
}

/// Records the current outline target set and cursor style.
///
/// Outline *parameters* (edge strength, pulse, colors) live in
/// [`OutlineOptions`](crate::options::OutlineOptions); applying both to an
/// actual post-process pass is the host renderer's job.
#[derive(Debug, Default)]
pub struct OutlineHighlight {
    targets: Vec<ObjectId>,
    cursor: CursorStyle,
}

impl OutlineHighlight {
    /// Create an empty highlight state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The objects the outline pass should currently highlight.
    #[must_use]
    pub fn targets(&self) -> &[ObjectId] {
        &self.targets
    }

    /// The cursor style currently requested.
    #[must_use]
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }
}

impl HighlightPresenter for OutlineHighlight {
    fn set_outline_targets(&mut self, targets: &[ObjectId]) {
        self.targets.clear();
        self.targets.extend_from_slice(targets);
    }

    fn set_cursor(&mut self, style: CursorStyle) {
        self.cursor = style;
    }
}
