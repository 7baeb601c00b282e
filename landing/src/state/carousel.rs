use std::time::Duration;

/// Round-robin index over a fixed number of slides.
///
/// The browser interval calls [`Carousel::tick`] once per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    ticked: bool,
}

impl Carousel {
    /// A carousel showing slide 0. A zero `len` is treated as a single slide.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            current: 0,
            ticked: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// One full period elapsed.
    pub fn tick(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.ticked = true;
        self.current
    }

    /// Presentation of slide `index` given the current position.
    pub fn phase_of(&self, index: usize) -> SlidePhase {
        if index == self.current {
            if self.ticked {
                SlidePhase::Showing
            } else {
                SlidePhase::Entering
            }
        } else if self.ticked && (index + 1) % self.len == self.current {
            SlidePhase::Leaving
        } else {
            SlidePhase::Waiting
        }
    }
}

/// Where a slide sits in the cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// The first slide on mount, played in through the `slide-enter` keyframes.
    Entering,
    /// The current slide, fully opaque.
    Showing,
    /// The previous slide, fading and shrinking out.
    Leaving,
    /// Not shown; parked slightly enlarged so it scales down on entry.
    Waiting,
}

impl SlidePhase {
    pub fn opacity(self) -> f64 {
        match self {
            Self::Entering | Self::Showing => 1.0,
            Self::Leaving | Self::Waiting => 0.0,
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            Self::Entering | Self::Showing => 1.0,
            Self::Leaving => 0.95,
            Self::Waiting => 1.05,
        }
    }

    /// Only the current slide takes pointer events.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Entering | Self::Showing)
    }

    /// Inline style for an absolutely positioned slide image.
    pub fn style(self, fade: Duration) -> String {
        let secs = fade.as_secs_f64();
        // A waiting slide must snap back to 1.05 without animating, otherwise
        // it would visibly grow while transparent.
        let transition = match self {
            Self::Waiting => "none".to_string(),
            _ => format!("opacity {secs}s ease-in-out, transform {secs}s ease-in-out"),
        };
        let mut style = format!(
            "opacity: {}; transform: scale({}); transition: {}; pointer-events: {};",
            self.opacity(),
            self.scale(),
            transition,
            if self.is_interactive() { "auto" } else { "none" },
        );
        if self == Self::Entering {
            style.push_str(&format!(" animation: slide-enter {secs}s ease-in-out;"));
        }
        style
    }
}
