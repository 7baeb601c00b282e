// Landing page sections, in page order

mod about;
mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod promise;
mod scroll_top;

pub use about::About;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use promise::Promise;
pub use scroll_top::ScrollToTop;
