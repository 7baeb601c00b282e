// Page state machines, free of any DOM access

pub mod carousel;
pub mod lifecycle;
pub mod menu;
pub mod reveal;
pub mod scroll;

pub use carousel::{Carousel, SlidePhase};
pub use lifecycle::{Liveness, Subscription, Teardown};
pub use menu::MenuState;
pub use reveal::{Pose, RevealLatch, RevealSpec};
pub use scroll::{Affordance, normalize_offset};
