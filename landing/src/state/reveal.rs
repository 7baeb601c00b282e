use std::time::Duration;

use crate::config::PageConfig;

/// Opacity and vertical offset of a block at one end of its reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub y: f64,
}

impl Pose {
    pub const fn new(opacity: f64, y: f64) -> Self {
        Self { opacity, y }
    }
}

/// How a block enters: hidden/visible poses, duration and stagger delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub hidden: Pose,
    pub visible: Pose,
    pub duration: Duration,
    pub delay: Duration,
}

impl RevealSpec {
    /// Fade up from `offset` px below, no delay.
    pub fn fade_up(config: &PageConfig) -> Self {
        Self {
            hidden: Pose::new(0.0, config.reveal_offset),
            visible: Pose::new(1.0, 0.0),
            duration: config.reveal_duration,
            delay: Duration::ZERO,
        }
    }

    /// This reveal, delayed by `index` stagger steps.
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            delay: step.saturating_mul(steps),
            ..self
        }
    }

    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed { self.visible } else { self.hidden }
    }

    /// Inline style for the block. The transition is always present so the
    /// change to the visible pose animates with ease-out.
    pub fn style(&self, revealed: bool) -> String {
        let pose = self.pose(revealed);
        let secs = self.duration.as_secs_f64();
        let delay = self.delay.as_secs_f64();
        format!(
            "opacity: {}; transform: translateY({}px); \
             transition: opacity {secs}s ease-out {delay}s, transform {secs}s ease-out {delay}s;",
            pose.opacity, pose.y
        )
    }
}

/// Fire-once latch fed by visibility changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds one visibility observation. Returns `true` only for the
    /// observation that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }
}
