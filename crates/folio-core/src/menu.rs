//! Mobile navigation overlay state.

/// Icon class shown while the menu is closed
pub const ICON_CLOSED: &str = "fa-bars";
/// Icon class shown while the menu is open
pub const ICON_OPEN: &str = "fa-times";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click landed somewhere on the page; close unless it hit the menu
    /// itself or its toggle.
    pub fn on_outside_click(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if inside_menu || inside_toggle {
            return false;
        }
        self.close()
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.open {
            ICON_OPEN
        } else {
            ICON_CLOSED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = MobileMenu::new();
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.icon_class(), ICON_OPEN);
        assert!(!menu.toggle());
        assert_eq!(menu.icon_class(), ICON_CLOSED);
    }

    #[test]
    fn close_reports_change() {
        let mut menu = MobileMenu::new();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_only_outside() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(!menu.on_outside_click(true, false));
        assert!(!menu.on_outside_click(false, true));
        assert!(menu.is_open());
        assert!(menu.on_outside_click(false, false));
        assert!(!menu.is_open());
    }
}
