use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("report prototype with key '{0}' not found")]
    UnknownPrototype(String),

    #[error("payment processor not defined for mode '{0}'")]
    UnsupportedPaymentMode(String),
}
