//! Example Trait: single contract for every pattern demonstration
use crate::transcript::Transcript;
use serde::Serialize;
use std::fmt;

/// Grouping used when listing the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
    Concepts,
    Custom,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Behavioral => "behavioral",
            Self::Creational => "creational",
            Self::Structural => "structural",
            Self::Concepts => "concepts",
            Self::Custom => "custom",
        };
        f.write_str(label)
    }
}

/// A named demonstration that can be run with no caller input.
pub trait Example: Send + Sync {
    /// Unique name (ex: "observer")
    fn name(&self) -> &str;

    /// One-line description shown by `patterns list`
    fn summary(&self) -> &str {
        ""
    }

    fn category(&self) -> Category {
        Category::Custom
    }

    /// Runs the demonstration, writing its output to `out`
    fn run(&self, out: &mut Transcript) -> anyhow::Result<()>;
}

type Action = dyn Fn(&mut Transcript) -> anyhow::Result<()> + Send + Sync;

/// Adapts a closure into an [`Example`].
pub struct FnExample {
    name: String,
    summary: String,
    category: Category,
    action: Box<Action>,
}

impl FnExample {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut Transcript) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            summary: String::new(),
            category: Category::Custom,
            action: Box::new(action),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

impl Example for FnExample {
    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn category(&self) -> Category {
        self.category
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        (self.action)(out)
    }
}

impl fmt::Debug for FnExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnExample")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_example_runs_closure() {
        let example = FnExample::new("hello", |out| {
            out.line("hello");
            Ok(())
        })
        .with_summary("says hello")
        .with_category(Category::Behavioral);

        let mut out = Transcript::new();
        example.run(&mut out).unwrap();

        assert_eq!(example.name(), "hello");
        assert_eq!(example.summary(), "says hello");
        assert_eq!(example.category(), Category::Behavioral);
        assert_eq!(out.lines(), ["hello"]);
    }

    #[test]
    fn test_fn_example_propagates_error() {
        let example = FnExample::new("broken", |_| anyhow::bail!("card declined"));
        let err = example.run(&mut Transcript::new()).unwrap_err();
        assert_eq!(err.to_string(), "card declined");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Structural.to_string(), "structural");
        assert_eq!(Category::Custom.to_string(), "custom");
    }
}
