//! Example Runner: invokes registered examples and records each outcome
use crate::error::{HarnessError, HarnessResult};
use crate::example::Example;
use crate::registry::Registry;
use crate::report::{Outcome, RunReport, RunResult};
use crate::transcript::Transcript;
use indexmap::IndexSet;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Borrows a registry for the length of a batch. Examples run one at a
/// time and a failing example never stops the ones after it.
pub struct Runner<'r> {
    registry: &'r Registry,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Runs every registered example in registry order
    pub fn run_all(&self) -> RunReport {
        tracing::info!(count = self.registry.len(), "running all examples");
        let results = self
            .registry
            .iter()
            .map(|(name, example)| invoke(name, example.as_ref()))
            .collect();
        RunReport::new(results)
    }

    /// Runs the named examples in registry order. Names the registry does
    /// not know are reported as `NotFound` after the known ones, in the
    /// order the caller first listed them. Blank names are skipped since
    /// no example can be registered under one.
    pub fn run<I, S>(&self, names: I) -> RunReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: IndexSet<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        tracing::info!(count = requested.len(), "running selected examples");

        let mut results: Vec<RunResult> = self
            .registry
            .iter()
            .filter(|(name, _)| requested.contains(*name))
            .map(|(name, example)| invoke(name, example.as_ref()))
            .collect();

        for name in &requested {
            if let Err(error) = self.registry.get(name) {
                tracing::warn!(%error, "example not found");
                results.push(RunResult::not_found(name.as_str()));
            }
        }

        RunReport::new(results)
    }
}

fn invoke(name: &str, example: &dyn Example) -> RunResult {
    tracing::debug!(example = name, "example started");
    let start = Instant::now();
    let mut out = Transcript::new();

    let result = execute(name, example, &mut out);
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let outcome = match result {
        Ok(()) => {
            tracing::info!(example = name, elapsed_ms, lines = out.len(), "example succeeded");
            Outcome::Success
        }
        Err(error) => {
            tracing::warn!(elapsed_ms, %error, "example failed");
            Outcome::from(error)
        }
    };

    RunResult {
        name: name.to_string(),
        outcome,
        output: out.into_lines(),
        elapsed_ms,
    }
}

/// Runs one example, turning both returned errors and panics into
/// `ExampleFailure`. Lines written before the failure stay in `out`.
fn execute(name: &str, example: &dyn Example, out: &mut Transcript) -> HarnessResult<()> {
    let reason = match panic::catch_unwind(AssertUnwindSafe(|| example.run(out))) {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(err)) => format!("{:#}", err),
        Err(payload) => format!("panicked: {}", panic_message(payload.as_ref())),
    };
    Err(HarnessError::ExampleFailure {
        name: name.to_string(),
        reason,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::FnExample;
    use anyhow::Context;

    fn registry_with(entries: Vec<FnExample>) -> Registry {
        let mut registry = Registry::new();
        for example in entries {
            registry.register_example(example).unwrap();
        }
        registry
    }

    #[test]
    fn test_output_is_captured() {
        let registry = registry_with(vec![FnExample::new("facade", |out| {
            out.line("=== Starting Movie ===");
            out.line("=== Movie Finished ===");
            Ok(())
        })]);

        let report = Runner::new(&registry).run_all();
        assert_eq!(report.results[0].output.len(), 2);
        assert_eq!(report.results[0].outcome, Outcome::Success);
    }

    #[test]
    fn test_partial_output_kept_on_failure() {
        let registry = registry_with(vec![FnExample::new("prototype", |out| {
            out.line("cloned sales report");
            Err(anyhow::anyhow!("no prototype")).context("creating audit report")
        })]);

        let report = Runner::new(&registry).run_all();
        let result = &report.results[0];
        assert_eq!(result.output, vec!["cloned sales report"]);
        assert_eq!(
            result.outcome,
            Outcome::Failure("creating audit report: no prototype".to_string())
        );
    }

    #[test]
    fn test_panic_is_recorded_as_failure() {
        let registry = registry_with(vec![
            FnExample::new("panics", |_| panic!("stack overflow in demo")),
            FnExample::new("after", |_| Ok(())),
        ]);

        let report = Runner::new(&registry).run_all();
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.results[0].outcome,
            Outcome::Failure("panicked: stack overflow in demo".to_string())
        );
        assert!(report.results[1].outcome.is_success());
    }

    #[test]
    fn test_execute_wraps_cause_in_example_failure() {
        let failing = FnExample::new("prototype", |_| {
            Err(anyhow::anyhow!("no prototype")).context("creating audit report")
        });
        let mut out = Transcript::new();

        let err = execute("prototype", &failing, &mut out).unwrap_err();
        assert_eq!(
            err,
            HarnessError::ExampleFailure {
                name: "prototype".to_string(),
                reason: "creating audit report: no prototype".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "EXAMPLE/prototype: creating audit report: no prototype"
        );
    }

    #[test]
    fn test_execute_wraps_panic_in_example_failure() {
        let panicking = FnExample::new("singleton", |_| panic!("second instance"));
        let mut out = Transcript::new();

        let err = execute("singleton", &panicking, &mut out).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::ExampleFailure { ref name, ref reason }
                if name == "singleton" && reason == "panicked: second instance"
        ));
    }

    #[test]
    fn test_run_uses_registry_order_not_caller_order() {
        let registry = registry_with(vec![
            FnExample::new("a", |_| Ok(())),
            FnExample::new("b", |_| Ok(())),
            FnExample::new("c", |_| Ok(())),
        ]);

        let report = Runner::new(&registry).run(["c", "a"]);
        let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_run_collapses_duplicate_names() {
        let registry = registry_with(vec![FnExample::new("a", |_| Ok(()))]);

        let report = Runner::new(&registry).run(["a", "a", "zz", "zz"]);
        assert_eq!(report.len(), 2);
        assert_eq!(report.results[1], RunResult::not_found("zz"));
    }

    #[test]
    fn test_run_skips_blank_names() {
        let registry = registry_with(vec![FnExample::new("observer", |_| Ok(()))]);

        let report = Runner::new(&registry).run(["observer", "", "   "]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.results[0].name, "observer");
        assert_eq!(report.exit_code(), 0);

        let report = Runner::new(&registry).run([""]);
        assert!(report.is_empty());
    }
}
