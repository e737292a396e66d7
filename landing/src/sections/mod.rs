// Landing page sections, top to bottom

pub mod icons;

mod cta;
mod features;
mod footer;
mod hero;
mod nav;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
