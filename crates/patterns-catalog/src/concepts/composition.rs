//! Reuse by composition: accounting holds a helper instead of being one.
use patterns_core::{Category, Example, Transcript};

#[derive(Default)]
pub struct MathHelper;

impl MathHelper {
    pub fn add(&self, a: i32, b: i32) -> i32 {
        a + b
    }
}

#[derive(Default)]
pub struct Accounting {
    math: MathHelper,
}

impl Accounting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_invoice(&self) -> i32 {
        let initial = 1000;
        let additional = 100;
        self.math.add(initial, additional)
    }
}

pub struct CompositionExample;

impl Example for CompositionExample {
    fn name(&self) -> &str {
        "composition"
    }

    fn summary(&self) -> &str {
        "invoice totals through a held helper object"
    }

    fn category(&self) -> Category {
        Category::Concepts
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let total = Accounting::new().generate_invoice();
        out.line(format!("Total invested amount = {}", total));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_inheritance_total() {
        assert_eq!(
            Accounting::new().generate_invoice(),
            crate::concepts::inheritance::Accounting.generate_invoice()
        );
    }
}
