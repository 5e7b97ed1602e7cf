//! Runs the full catalog through the harness.

use patterns_catalog::default_registry;
use patterns_core::{Category, Outcome, Runner};

#[test]
fn test_full_catalog_succeeds() {
    let registry = default_registry().unwrap();
    let report = Runner::new(&registry).run_all();

    assert_eq!(report.len(), 12);
    for result in &report.results {
        assert_eq!(result.outcome, Outcome::Success, "{} failed", result.name);
        assert!(!result.output.is_empty(), "{} printed nothing", result.name);
    }
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_selected_patterns_follow_catalog_order() {
    let registry = default_registry().unwrap();
    let report = Runner::new(&registry).run(["proxy", "observer", "visitor"]);

    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["observer", "proxy", "visitor"]);
    assert_eq!(report.results[2].outcome, Outcome::NotFound);
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn test_observer_output_through_runner() {
    let registry = default_registry().unwrap();
    let report = Runner::new(&registry).run(["observer"]);

    assert_eq!(
        report.results[0].output,
        vec![
            "Notified John of price change in AAPL: New price is 3001.25",
            "Notified Bob of price change in AAPL: New price is 3001.25",
            "Notified John of price change in AAPL: New price is 3005.12",
            "Notified Bob of price change in AAPL: New price is 3005.12",
        ]
    );
}

#[test]
fn test_categories() {
    let registry = default_registry().unwrap();
    let structural: Vec<&str> = registry
        .iter()
        .filter(|(_, e)| e.category() == Category::Structural)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(structural, ["adapter", "decorator", "facade", "proxy"]);
}
