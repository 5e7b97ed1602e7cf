//! Patterns Core: Example trait, Registry, Runner, and run reports
//!
//! Every pattern demonstration is an [`Example`] registered by name. The
//! [`Runner`] invokes examples from a [`Registry`] one at a time and records
//! a [`RunResult`] for each, so one failing demonstration never hides the
//! others.
//!
//! ```
//! use patterns_core::{FnExample, Registry, Runner};
//!
//! let mut registry = Registry::new();
//! registry
//!     .register_example(FnExample::new("hello", |out| {
//!         out.line("hello");
//!         Ok(())
//!     }))
//!     .unwrap();
//!
//! let report = Runner::new(&registry).run_all();
//! assert_eq!(report.exit_code(), 0);
//! ```

pub mod config;
pub mod error;
pub mod example;
pub mod logging;
pub mod registry;
pub mod report;
pub mod runner;
pub mod transcript;

pub use config::{HarnessConfig, OutputFormat};
pub use error::{HarnessError, HarnessResult};
pub use example::{Category, Example, FnExample};
pub use registry::{Registry, SharedRegistry};
pub use report::{Outcome, RunReport, RunResult};
pub use runner::Runner;
pub use transcript::Transcript;

/// Harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
