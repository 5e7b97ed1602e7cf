//! Transcript: the text lines an example produces while it runs

/// Ordered sink for the observable output of one example.
///
/// Examples never print directly; the runner hands each one a fresh
/// transcript and keeps the captured lines in the run result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line of output
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_order() {
        let mut transcript = Transcript::new();
        transcript.line("first");
        transcript.line(format!("second {}", 2));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.lines(), ["first", "second 2"]);
        assert_eq!(transcript.into_lines(), vec!["first", "second 2"]);
    }
}
