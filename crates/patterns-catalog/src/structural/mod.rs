//! Structural patterns
pub mod adapter;
pub mod decorator;
pub mod facade;
pub mod proxy;

pub use adapter::AdapterExample;
pub use decorator::DecoratorExample;
pub use facade::FacadeExample;
pub use proxy::ProxyExample;
