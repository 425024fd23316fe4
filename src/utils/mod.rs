pub mod constants;
pub mod errors;
pub mod format;
pub mod math;

pub use constants::*;
pub use errors::*;
pub use format::format_general;
pub use math::*;
