//! Info-panel presentation: at most one blurb panel is active at a time,
//! keyed by the clicked object's name.

/// Sink for panel visibility decisions made by the selection controller.
///
/// The host UI looks panels up by the selectable object's identifier (the
/// original used a `data-painting-id` attribute); activating an id with no
/// matching panel is a defined no-op on the host side.
pub trait PanelPresenter {
    /// Make the panel for `id` active.
    fn activate(&mut self, id: &str);

    /// Deactivate every panel.
    fn deactivate_all(&mut self);
}

/// Records which panel is currently active, for the host UI to mirror.
#[derive(Debug, Default)]
pub struct PanelModel {
    active: Option<String>,
}

impl PanelModel {
    /// Create the model with no active panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the active panel, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

impl PanelPresenter for PanelModel {
    fn activate(&mut self, id: &str) {
        self.active = Some(id.to_owned());
    }

    fn deactivate_all(&mut self) {
        self.active = None;
    }
}
