//! Inheritance versus composition
pub mod composition;
pub mod inheritance;

pub use composition::CompositionExample;
pub use inheritance::InheritanceExample;
