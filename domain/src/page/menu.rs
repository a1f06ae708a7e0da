//! Mobile navigation menu

/// Open/closed state of the mobile menu.
///
/// Page scrolling is locked exactly while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns whether anything changed
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
