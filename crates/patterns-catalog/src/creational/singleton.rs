//! Singleton: a process-wide logger built on first use, exactly once.
//!
//! `once_cell::sync::Lazy` provides the thread-safe lazy initialization, so
//! there is no hand-written locking. The instance lives until the process
//! exits.
use once_cell::sync::Lazy;
use patterns_core::{Category, Example, Transcript};
use std::sync::atomic::{AtomicUsize, Ordering};

static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);
static INSTANCE: Lazy<LazyLogger> = Lazy::new(LazyLogger::construct);

pub struct LazyLogger {
    messages: AtomicUsize,
}

impl LazyLogger {
    fn construct() -> Self {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("singleton logger constructed");
        Self {
            messages: AtomicUsize::new(0),
        }
    }

    pub fn instance() -> &'static LazyLogger {
        &INSTANCE
    }

    pub fn log(&self, message: &str) -> String {
        self.messages.fetch_add(1, Ordering::SeqCst);
        format!("Logged message: {}", message)
    }

    /// Messages logged through this instance so far
    pub fn message_count(&self) -> usize {
        self.messages.load(Ordering::SeqCst)
    }
}

/// How many times the logger has been constructed in this process
pub fn construction_count() -> usize {
    CONSTRUCTED.load(Ordering::SeqCst)
}

pub struct SingletonExample;

impl Example for SingletonExample {
    fn name(&self) -> &str {
        "singleton"
    }

    fn summary(&self) -> &str {
        "lazily constructed process-wide logger"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let first = LazyLogger::instance();
        let second = LazyLogger::instance();

        out.line(first.log("Application started."));
        out.line(second.log("Configuration loaded."));
        out.line(format!(
            "Both handles share one instance: {}",
            std::ptr::eq(first, second)
        ));
        Ok(())
    }
}
