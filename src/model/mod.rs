pub mod hole;
pub mod round;
pub mod rows;
pub mod settings;
pub mod summary;
pub mod template;
pub mod utils;

pub use hole::*;
pub use round::*;
pub use rows::*;
pub use settings::*;
pub use summary::*;
pub use template::*;
pub use utils::*;
