pub use auth::*;
pub use events::*;
pub use uploads::*;

mod auth;
mod events;
mod uploads;
