//! The selection controller: translates pointer input into an
//! outline-target set, a cursor request, and a panel-visibility decision.
//!
//! All the mutable interaction state (selectable pool, active panel) lives
//! on one [`SelectionController`] instance; collaborators are injected per
//! call so hosts and tests can substitute their own ray query and
//! presenters.

use glam::Vec2;

use crate::camera::Camera;
use crate::highlight::{CursorStyle, HighlightPresenter};
use crate::panel::PanelPresenter;
use crate::picking::{Hit, RayQuery};
use crate::scene::ObjectId;

/// Pointer-driven selection and panel state for the gallery scene.
///
/// # Selection policy
///
/// Only the nearest hit of a query is considered. If its name carries the
/// selectable prefix, the outline target set becomes exactly that object and
/// the cursor becomes a pointer; in every other case (no hits, non-matching
/// nearest hit) the outline set reverts to the full selectable pool and the
/// cursor to the default arrow. Every pointer move overwrites the previous
/// state; nothing accumulates.
pub struct SelectionController {
    prefix: String,
    pool: Vec<ObjectId>,
    pool_published: bool,
    active_panel: Option<String>,
}

impl SelectionController {
    /// Create a controller with an empty selectable pool.
    ///
    /// The controller is usable immediately; until
    /// [`publish_pool`](Self::publish_pool) delivers the loaded pool, the
    /// fallback outline set is simply empty.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            pool: Vec::new(),
            pool_published: false,
            active_panel: None,
        }
    }

    /// One-shot publication of the selectable pool after the scene loads.
    ///
    /// Also pushes the pool as the initial outline target set, matching the
    /// scene-ready behavior of the original. A second publication is ignored
    /// (membership is immutable after load).
    pub fn publish_pool(
        &mut self,
        pool: Vec<ObjectId>,
        highlight: &mut dyn HighlightPresenter,
    ) {
        if self.pool_published {
            log::warn!("selectable pool already published; ignoring");
            return;
        }
        log::debug!("selectable pool published: {} objects", pool.len());
        self.pool = pool;
        self.pool_published = true;
        highlight.set_outline_targets(&self.pool);
    }

    /// The selectable pool (empty before publication).
    #[must_use]
    pub fn pool(&self) -> &[ObjectId] {
        &self.pool
    }

    /// Identifier of the active panel, if any.
    #[must_use]
    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel.as_deref()
    }

    /// Handle a pointer move at `ndc`: query the scene and overwrite the
    /// outline target set and cursor request.
    pub fn pointer_move(
        &mut self,
        ndc: Vec2,
        camera: &Camera,
        query: &dyn RayQuery,
        highlight: &mut dyn HighlightPresenter,
    ) {
        let hits = query.query(ndc, camera);
        match self.matching_nearest(&hits) {
            Some(hit) => {
                highlight.set_outline_targets(&[hit.object]);
                highlight.set_cursor(CursorStyle::Pointer);
            }
            None => {
                highlight.set_outline_targets(&self.pool);
                highlight.set_cursor(CursorStyle::Default);
            }
        }
    }

    /// Handle a pointer down at `ndc`: if the nearest hit is selectable,
    /// close any active panel and activate the one keyed by the hit's name.
    ///
    /// Non-matching hits and empty hit lists leave the panel state
    /// untouched.
    pub fn pointer_down(
        &mut self,
        ndc: Vec2,
        camera: &Camera,
        query: &dyn RayQuery,
        panels: &mut dyn PanelPresenter,
    ) {
        let hits = query.query(ndc, camera);
        if let Some(hit) = self.matching_nearest(&hits) {
            let id = hit.name.clone();
            log::debug!("panel activated: {id}");
            // Transient close-then-open, as the original did on every click
            panels.deactivate_all();
            panels.activate(&id);
            self.active_panel = Some(id);
        }
    }

    /// Close the active panel. Idempotent: closing with no active panel is
    /// a no-op and does not call the presenter.
    pub fn close_panel(&mut self, panels: &mut dyn PanelPresenter) {
        if self.active_panel.take().is_some() {
            log::debug!("panel closed");
            panels.deactivate_all();
        }
    }

    /// The nearest hit, if its name starts with the selectable prefix.
    /// Later hits are never considered.
    fn matching_nearest<'h>(&self, hits: &'h [Hit]) -> Option<&'h Hit> {
        hits.first().filter(|hit| hit.name.starts_with(&self.prefix))
    }
}
