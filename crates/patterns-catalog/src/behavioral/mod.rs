//! Behavioral patterns
pub mod observer;
pub mod strategy;

pub use observer::ObserverExample;
pub use strategy::StrategyExample;
