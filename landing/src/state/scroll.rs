/// Visibility of the floating scroll-to-top button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Hidden,
    Visible,
}

impl Affordance {
    /// Visible only once the page is scrolled strictly past `threshold`.
    /// No hysteresis: the same offset always gives the same answer.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    pub fn opacity(self) -> f64 {
        match self {
            Self::Visible => 1.0,
            Self::Hidden => 0.0,
        }
    }

    /// Downward shift in px; the hidden button sits `hidden_offset` lower.
    pub fn translate_y(self, hidden_offset: f64) -> f64 {
        match self {
            Self::Visible => 0.0,
            Self::Hidden => hidden_offset,
        }
    }

    pub fn style(self, hidden_offset: f64) -> String {
        format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity(),
            self.translate_y(hidden_offset)
        )
    }
}

/// Clamps a raw `window.scrollY` reading to a non-negative offset.
///
/// Elastic overscroll on some browsers reports negative values.
pub fn normalize_offset(raw: f64) -> f64 {
    if raw.is_finite() { raw.max(0.0) } else { 0.0 }
}
