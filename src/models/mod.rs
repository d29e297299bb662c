pub use application::*;
pub use contact_detail::*;
pub use enquiry::*;
pub use event::*;
pub use gallery::*;
pub use hero_slide::*;
pub use news::*;
pub use program::*;
pub use session::*;
pub use staff::*;
pub use syllabus::*;
pub use testimonial::*;
pub use user::*;

mod application;
mod contact_detail;
mod enquiry;
mod event;
mod gallery;
mod hero_slide;
mod news;
mod program;
mod session;
mod staff;
mod syllabus;
mod testimonial;
mod user;
