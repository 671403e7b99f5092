pub mod loss;
pub mod rules;
pub mod summary;
pub mod transform;

pub use loss::*;
pub use rules::*;
pub use summary::*;
pub use transform::*;
