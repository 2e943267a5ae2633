// Landing page sections

mod about;
mod contact;
mod features;
mod footer;
mod hero;
mod navbar;
mod pricing;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
