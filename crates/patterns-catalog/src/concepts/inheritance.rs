//! Reuse by "inheritance": the helper arrives as a provided trait method.
use patterns_core::{Category, Example, Transcript};

pub trait Arithmetic {
    fn add(&self, a: i32, b: i32) -> i32 {
        a + b
    }
}

pub struct Accounting;

impl Arithmetic for Accounting {}

impl Accounting {
    pub fn generate_invoice(&self) -> i32 {
        let initial = 1000;
        let additional = 100;
        self.add(initial, additional)
    }
}

pub struct InheritanceExample;

impl Example for InheritanceExample {
    fn name(&self) -> &str {
        "inheritance"
    }

    fn summary(&self) -> &str {
        "invoice totals through an inherited helper method"
    }

    fn category(&self) -> Category {
        Category::Concepts
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let total = Accounting.generate_invoice();
        out.line(format!("Total invested amount = {}", total));
        Ok(())
    }
}
