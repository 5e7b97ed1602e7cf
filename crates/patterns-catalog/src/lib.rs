//! Patterns Catalog: the design pattern demonstrations.
//!
//! Each pattern is written with traits and composition and wrapped in an
//! [`Example`] so the harness can run it by name.
//!
//! # Catalog
//!
//! ```text
//! behavioral   observer, strategy
//! creational   abstract-factory, factory-method, prototype, singleton
//! structural   adapter, decorator, facade, proxy
//! concepts     inheritance, composition
//! ```

pub mod behavioral;
pub mod concepts;
pub mod creational;
pub mod error;
pub mod structural;

pub use error::CatalogError;

use patterns_core::{Example, HarnessResult, Registry};
use std::sync::Arc;

/// All demonstrations, in catalog order
pub fn examples() -> Vec<Arc<dyn Example>> {
    vec![
        Arc::new(behavioral::ObserverExample),
        Arc::new(behavioral::StrategyExample),
        Arc::new(creational::AbstractFactoryExample),
        Arc::new(creational::FactoryMethodExample),
        Arc::new(creational::PrototypeExample),
        Arc::new(creational::SingletonExample),
        Arc::new(structural::AdapterExample),
        Arc::new(structural::DecoratorExample),
        Arc::new(structural::FacadeExample),
        Arc::new(structural::ProxyExample),
        Arc::new(concepts::InheritanceExample),
        Arc::new(concepts::CompositionExample),
    ]
}

/// Registers every demonstration into `registry`
pub fn register_all(registry: &mut Registry) -> HarnessResult<()> {
    for example in examples() {
        let name = example.name().to_string();
        registry.register(&name, example)?;
    }
    tracing::debug!(count = registry.len(), "catalog registered");
    Ok(())
}

/// A fresh registry holding the whole catalog
pub fn default_registry() -> HarnessResult<Registry> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}
