pub mod identifiable;
pub mod member;
pub mod team;

// Re-exports
pub use identifiable::*;
pub use member::*;
pub use team::*;
