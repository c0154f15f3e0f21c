// Landing page sections, top to bottom
// Developed by the Miaozhan Web Team (c)2026

mod cta;
mod footer;
mod hero;
mod icons;
mod instructor;
mod intro;
mod layout;
mod modules;
mod nav;
mod outcomes;
mod syllabus;

pub use cta::CallToAction;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::Icon;
pub use instructor::Instructor;
pub use intro::Intro;
pub use layout::{Placeholder, Section};
pub use modules::Modules;
pub use nav::{MOBILE_NAV_ID, Nav};
pub use outcomes::Outcomes;
pub use syllabus::{Syllabus, syllabus_column_order};
