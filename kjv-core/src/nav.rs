use serde::Serialize;

/// Scroll offset past which the navbar switches to its solid background.
pub const SCROLLED_OFFSET_PX: f64 = 50.0;

/// Navbar state: the mobile menu flag and the derived "scrolled" flag.
///
/// Unlike reveals, both flags move in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute the scrolled flag. Returns true when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_OFFSET_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Flip the mobile menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// The mobile link list: present only while the menu is open.
    pub fn menu_links<'a, T>(&self, links: &'a [T]) -> &'a [T] {
        if self.menu_open {
            links
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_is_strictly_past_the_offset() {
        let mut nav = NavState::new();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(50.5));
        assert!(nav.is_scrolled());
    }

    #[test]
    fn scrolled_reverts_when_scrolling_back_up() {
        let mut nav = NavState::new();
        nav.on_scroll(400.0);
        assert!(nav.on_scroll(10.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn menu_links_follow_the_menu_flag() {
        let links = ["#home", "#about"];
        let mut nav = NavState::new();
        assert!(nav.menu_links(&links).is_empty());
        assert!(nav.toggle_menu());
        assert_eq!(nav.menu_links(&links), &links);
        nav.close_menu();
        assert!(nav.menu_links(&links).is_empty());
    }
}
