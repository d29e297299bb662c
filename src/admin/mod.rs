pub use engine::*;
pub use notes::*;
pub use reorder::*;
pub use validate::*;

mod engine;
mod notes;
mod reorder;
mod validate;
