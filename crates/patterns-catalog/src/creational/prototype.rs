//! Prototype: reports are produced by cloning registered templates.
use crate::error::CatalogError;
use patterns_core::{Category, Example, Transcript};
use std::collections::HashMap;

pub trait ReportPrototype {
    fn clone_box(&self) -> Box<dyn ReportPrototype>;
    fn generate(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct SalesReport {
    pub report_type: String,
}

impl ReportPrototype for SalesReport {
    fn clone_box(&self) -> Box<dyn ReportPrototype> {
        Box::new(self.clone())
    }

    fn generate(&self) -> String {
        format!("Generating {} Sales Report...", self.report_type)
    }
}

#[derive(Debug, Clone)]
pub struct FinancialReport {
    pub report_name: String,
}

impl ReportPrototype for FinancialReport {
    fn clone_box(&self) -> Box<dyn ReportPrototype> {
        Box::new(self.clone())
    }

    fn generate(&self) -> String {
        format!("Generating {} Financial Report...", self.report_name)
    }
}

#[derive(Default)]
pub struct ReportManager {
    prototypes: HashMap<String, Box<dyn ReportPrototype>>,
}

impl ReportManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, prototype: Box<dyn ReportPrototype>) {
        self.prototypes.insert(key.into(), prototype);
    }

    /// Returns a fresh copy of the prototype stored under `key`
    pub fn create(&self, key: &str) -> Result<Box<dyn ReportPrototype>, CatalogError> {
        self.prototypes
            .get(key)
            .map(|p| p.clone_box())
            .ok_or_else(|| CatalogError::UnknownPrototype(key.to_string()))
    }
}

pub struct PrototypeExample;

impl Example for PrototypeExample {
    fn name(&self) -> &str {
        "prototype"
    }

    fn summary(&self) -> &str {
        "reports cloned from registered prototypes"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let mut manager = ReportManager::new();
        manager.register(
            "Sales",
            Box::new(SalesReport {
                report_type: "Sales".to_string(),
            }),
        );
        manager.register(
            "Financial",
            Box::new(FinancialReport {
                report_name: "Financial".to_string(),
            }),
        );

        for key in ["Sales", "Financial"] {
            out.line(manager.create(key)?.generate());
        }
        Ok(())
    }
}
