//! Creational patterns
pub mod abstract_factory;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

pub use abstract_factory::AbstractFactoryExample;
pub use factory_method::FactoryMethodExample;
pub use prototype::PrototypeExample;
pub use singleton::SingletonExample;
