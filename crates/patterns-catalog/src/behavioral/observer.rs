//! Observer: a stock notifies registered investors when its price changes.
use patterns_core::{Category, Example, Transcript};
use std::rc::Rc;

pub trait Investor {
    fn update(&self, stock: &Stock, out: &mut Transcript);
}

pub struct NamedInvestor {
    name: String,
}

impl NamedInvestor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Investor for NamedInvestor {
    fn update(&self, stock: &Stock, out: &mut Transcript) {
        out.line(format!(
            "Notified {} of price change in {}: New price is {}",
            self.name,
            stock.symbol(),
            stock.price()
        ));
    }
}

pub struct Stock {
    symbol: String,
    price: f64,
    investors: Vec<Rc<dyn Investor>>,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            investors: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn register(&mut self, investor: Rc<dyn Investor>) {
        self.investors.push(investor);
    }

    /// Removes `investor` by identity
    pub fn deregister(&mut self, investor: &Rc<dyn Investor>) {
        self.investors.retain(|i| !Rc::ptr_eq(i, investor));
    }

    pub fn investor_count(&self) -> usize {
        self.investors.len()
    }

    /// Updates the price; investors are notified only when it changes.
    pub fn set_price(&mut self, price: f64, out: &mut Transcript) {
        if self.price == price {
            return;
        }
        self.price = price;
        for investor in &self.investors {
            investor.update(self, out);
        }
    }
}

pub struct ObserverExample;

impl Example for ObserverExample {
    fn name(&self) -> &str {
        "observer"
    }

    fn summary(&self) -> &str {
        "stock price changes fan out to registered investors"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let mut apple = Stock::new("AAPL", 3000.0);
        apple.register(Rc::new(NamedInvestor::new("John")));
        apple.register(Rc::new(NamedInvestor::new("Bob")));

        apple.set_price(3001.25, out);
        apple.set_price(3005.12, out);
        Ok(())
    }
}
