pub mod card;
pub mod filters;
pub mod format;

pub use card::*;
pub use filters::*;
pub use format::*;
