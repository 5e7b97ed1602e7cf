//! Strategy: the payment method is swapped at runtime without touching the processor.
use patterns_core::{Category, Example, Transcript};

pub trait PaymentStrategy {
    fn perform_payment(&self, out: &mut Transcript);
}

pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn perform_payment(&self, out: &mut Transcript) {
        out.line("Payment performed using a credit card.");
    }
}

pub struct DebitCardPayment;

impl PaymentStrategy for DebitCardPayment {
    fn perform_payment(&self, out: &mut Transcript) {
        out.line("Payment performed using a debit card.");
    }
}

pub struct PaymentProcessor {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentProcessor {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn process_order(&self, out: &mut Transcript) {
        self.strategy.perform_payment(out);
        out.line("Payment processed.");
    }
}

pub struct StrategyExample;

impl Example for StrategyExample {
    fn name(&self) -> &str {
        "strategy"
    }

    fn summary(&self) -> &str {
        "payment processor with a swappable payment strategy"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let mut processor = PaymentProcessor::new(Box::new(DebitCardPayment));
        processor.process_order(out);

        processor.set_strategy(Box::new(CreditCardPayment));
        processor.process_order(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapping_strategy_changes_behaviour() {
        let mut processor = PaymentProcessor::new(Box::new(CreditCardPayment));
        let mut out = Transcript::new();
        processor.process_order(&mut out);
        processor.set_strategy(Box::new(DebitCardPayment));
        processor.process_order(&mut out);

        assert_eq!(
            out.lines(),
            [
                "Payment performed using a credit card.",
                "Payment processed.",
                "Payment performed using a debit card.",
                "Payment processed.",
            ]
        );
    }
}
