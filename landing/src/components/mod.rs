// Reusable building blocks shared by the page sections

mod carousel;
mod icons;
mod reveal;

pub use carousel::ImageCarousel;
pub use icons::{Icon, SvgIcon};
pub use reveal::Reveal;
