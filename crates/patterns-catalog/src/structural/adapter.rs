//! Adapter: third-party gateways made to look like our payment processor.
use patterns_core::{Category, Example, Transcript};

pub trait PaymentProcessor {
    fn process_payment(&self, amount: f64, out: &mut Transcript);
}

pub struct StandardPaymentProcessor;

impl PaymentProcessor for StandardPaymentProcessor {
    fn process_payment(&self, amount: f64, out: &mut Transcript) {
        out.line(format!(
            "Processing payment of {} using the standard payment processor.",
            currency(amount)
        ));
    }
}

/// Interface exposed by external gateways; not ours to change
pub trait ThirdPartyGateway {
    fn pay(&self, amount: f64, out: &mut Transcript);
}

pub struct PayPalGateway;

impl ThirdPartyGateway for PayPalGateway {
    fn pay(&self, amount: f64, out: &mut Transcript) {
        out.line(format!("Paid {} via PayPal.", currency(amount)));
    }
}

pub struct StripeGateway;

impl ThirdPartyGateway for StripeGateway {
    fn pay(&self, amount: f64, out: &mut Transcript) {
        out.line(format!("Paid {} via Stripe.", currency(amount)));
    }
}

pub struct GatewayAdapter<G> {
    gateway: G,
}

impl<G: ThirdPartyGateway> GatewayAdapter<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: ThirdPartyGateway> PaymentProcessor for GatewayAdapter<G> {
    fn process_payment(&self, amount: f64, out: &mut Transcript) {
        self.gateway.pay(amount, out);
    }
}

fn currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub struct AdapterExample;

impl Example for AdapterExample {
    fn name(&self) -> &str {
        "adapter"
    }

    fn summary(&self) -> &str {
        "PayPal and Stripe gateways adapted to the payment processor interface"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let processors: [(&dyn PaymentProcessor, f64); 3] = [
            (&StandardPaymentProcessor, 100.0),
            (&GatewayAdapter::new(PayPalGateway), 50.0),
            (&GatewayAdapter::new(StripeGateway), 75.0),
        ];
        for (processor, amount) in processors {
            processor.process_payment(amount, out);
        }
        Ok(())
    }
}
