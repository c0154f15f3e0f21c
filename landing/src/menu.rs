//! Mobile navigation panel state.

/// Whether the mobile navigation panel is expanded.
///
/// Owned by the header; starts collapsed and lives as long as the header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Collapse after a panel link was selected.
    pub fn close(&mut self) {
        self.open = false;
    }
}
