//! The single "currently selected state" slot.

/// Which state, if any, the dashboard is filtered to.
///
/// No validation happens here; [`crate::interpret_click`] is the only
/// writer and only stores names the map produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    state: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selected_state(&mut self, state: Option<String>) {
        self.state = state;
    }

    /// The selected state name, or `None` for the whole country.
    pub fn selected_state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}
