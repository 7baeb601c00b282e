/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Menu button pressed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A drawer link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn button_label(self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }

    /// Inline style for the collapsible drawer.
    ///
    /// Animates `grid-template-rows` between `0fr` and `1fr`, which moves the
    /// height from zero to the natural content height without measuring it.
    /// `display` is left to the drawer's classes so `md:hidden` still applies.
    pub fn drawer_style(self, transition: std::time::Duration) -> String {
        let secs = transition.as_secs_f64();
        let (rows, opacity) = if self.open { ("1fr", 1) } else { ("0fr", 0) };
        format!(
            "grid-template-rows: {rows}; opacity: {opacity}; \
             transition: grid-template-rows {secs}s ease, opacity {secs}s ease;"
        )
    }
}
