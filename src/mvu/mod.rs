pub mod round;
pub mod runtime;

pub use round::*;
pub use runtime::*;
