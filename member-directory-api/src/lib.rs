pub mod audit;
pub mod error;

pub use audit::*;
pub use error::*;
