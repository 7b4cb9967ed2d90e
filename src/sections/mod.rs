// Page sections, top to bottom.

mod about;
mod contact;
mod differentiators;
mod footer;
mod hero;
mod nav;
mod services;

pub use about::About;
pub use contact::Contact;
pub use differentiators::Differentiators;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use services::Services;
