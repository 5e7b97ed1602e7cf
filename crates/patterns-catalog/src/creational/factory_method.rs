//! Factory Method, two ways.
//!
//! File processors defer reader construction to a `create_reader` method,
//! and card payments are dispatched from a `PaymentMode` tag through an
//! exhaustive match.
use crate::error::CatalogError;
use patterns_core::{Category, Example, Transcript};
use std::fmt;
use std::str::FromStr;

pub trait FileReader {
    fn read(&self, path: &str, out: &mut Transcript);
}

pub struct PdfFileReader;

impl FileReader for PdfFileReader {
    fn read(&self, path: &str, out: &mut Transcript) {
        out.line(format!("Reading PDF file: {}", path));
    }
}

pub struct TextFileReader;

impl FileReader for TextFileReader {
    fn read(&self, path: &str, out: &mut Transcript) {
        out.line(format!("Reading Word document: {}", path));
    }
}

pub trait FileProcessor {
    /// The factory method
    fn create_reader(&self) -> Box<dyn FileReader>;

    fn process_file(&self, path: &str, out: &mut Transcript) {
        let reader = self.create_reader();
        if path.trim().is_empty() {
            out.line("Unsupported file format.");
        } else {
            reader.read(path, out);
        }
    }
}

pub struct PdfFileProcessor;

impl FileProcessor for PdfFileProcessor {
    fn create_reader(&self) -> Box<dyn FileReader> {
        Box::new(PdfFileReader)
    }
}

pub struct TextFileProcessor;

impl FileProcessor for TextFileProcessor {
    fn create_reader(&self) -> Box<dyn FileReader> {
        Box::new(TextFileReader)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    DebitCard,
    CreditCard,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 2] = [PaymentMode::DebitCard, PaymentMode::CreditCard];

    /// Constructor for this mode's processor
    pub fn processor(self) -> Box<dyn CardProcessor> {
        match self {
            Self::DebitCard => Box::new(DebitCardProcessor),
            Self::CreditCard => Box::new(CreditCardProcessor),
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DebitCard => f.write_str("debit"),
            Self::CreditCard => f.write_str("credit"),
        }
    }
}

impl FromStr for PaymentMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" | "debit-card" => Ok(Self::DebitCard),
            "credit" | "credit-card" => Ok(Self::CreditCard),
            other => Err(CatalogError::UnsupportedPaymentMode(other.to_string())),
        }
    }
}

pub trait CardProcessor {
    fn process_payment(&self, amount: f64, out: &mut Transcript);
}

pub struct DebitCardProcessor;

impl CardProcessor for DebitCardProcessor {
    fn process_payment(&self, amount: f64, out: &mut Transcript) {
        out.line(format!("Processing Debit Card payment of ${:.2}.", amount));
    }
}

pub struct CreditCardProcessor;

impl CardProcessor for CreditCardProcessor {
    fn process_payment(&self, amount: f64, out: &mut Transcript) {
        out.line(format!("Processing Credit Card payment of ${:.2}.", amount));
    }
}

pub struct FactoryMethodExample;

impl Example for FactoryMethodExample {
    fn name(&self) -> &str {
        "factory-method"
    }

    fn summary(&self) -> &str {
        "file readers from processor subtypes, card processors from a payment mode tag"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        PdfFileProcessor.process_file("sample.pdf", out);
        TextFileProcessor.process_file("document.docx", out);

        let mode: PaymentMode = "debit".parse()?;
        mode.processor().process_payment(100.0, out);
        Ok(())
    }
}
