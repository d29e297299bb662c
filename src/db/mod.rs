pub use applications::*;
pub use contact_details::*;
pub use db::*;
pub use enquiries::*;
pub use events::*;
pub use gallery::*;
pub use hero::*;
pub use news::*;
pub use programs::*;
pub use sessions::*;
pub use staff::*;
pub use stats::*;
pub use syllabus::*;
pub use testimonials::*;
pub use users::*;

mod applications;
mod contact_details;
mod db;
mod enquiries;
mod events;
mod gallery;
mod hero;
mod news;
mod programs;
mod sessions;
mod staff;
mod stats;
mod syllabus;
mod testimonials;
mod users;
