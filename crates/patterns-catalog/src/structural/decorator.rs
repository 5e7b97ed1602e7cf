//! Decorator: loggers wrap any other logger and tag the message on the way through.
use patterns_core::{Category, Example, Transcript};

pub trait Log {
    fn log(&self, message: &str, out: &mut Transcript);
}

pub struct DefaultLogger;

impl Log for DefaultLogger {
    fn log(&self, message: &str, out: &mut Transcript) {
        out.line(format!("Default logger - {}", message));
    }
}

pub struct AuthenticationLogger {
    inner: Box<dyn Log>,
}

impl AuthenticationLogger {
    pub fn wrap(inner: Box<dyn Log>) -> Self {
        Self { inner }
    }
}

impl Log for AuthenticationLogger {
    fn log(&self, message: &str, out: &mut Transcript) {
        self.inner.log(&format!("[AUTH] {}", message), out);
    }
}

pub struct DataProcessingLogger {
    inner: Box<dyn Log>,
}

impl DataProcessingLogger {
    pub fn wrap(inner: Box<dyn Log>) -> Self {
        Self { inner }
    }
}

impl Log for DataProcessingLogger {
    fn log(&self, message: &str, out: &mut Transcript) {
        self.inner.log(&format!("[DATA] {}", message), out);
    }
}

pub struct DecoratorExample;

impl Example for DecoratorExample {
    fn name(&self) -> &str {
        "decorator"
    }

    fn summary(&self) -> &str {
        "stacked loggers that prefix messages before delegating"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let mut logger: Box<dyn Log> = Box::new(DefaultLogger);
        logger = Box::new(AuthenticationLogger::wrap(logger));
        logger = Box::new(DataProcessingLogger::wrap(logger));

        logger.log("User authenticated successfully.", out);
        logger.log("Data processing completed.", out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outermost_decorator_runs_first() {
        let logger = DataProcessingLogger::wrap(Box::new(AuthenticationLogger::wrap(Box::new(
            DefaultLogger,
        ))));
        let mut out = Transcript::new();
        logger.log("hello", &mut out);
        assert_eq!(out.lines(), ["Default logger - [AUTH] [DATA] hello"]);
    }

    #[test]
    fn test_undecorated_logger() {
        let mut out = Transcript::new();
        DefaultLogger.log("plain", &mut out);
        assert_eq!(out.lines(), ["Default logger - plain"]);
    }
}
