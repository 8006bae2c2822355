use serde::{Deserialize, Serialize};
use tracing::info;

/// Pricing rule applied to a cart total at checkout.
pub trait BillingStrategy: Send + Sync {
    fn calculate_bill(&self, amount: f64) -> f64;

    /// Returns the strategy name for logging.
    fn name(&self) -> &'static str;
}

/// 10% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDiscount;

impl BillingStrategy for StandardDiscount {
    fn calculate_bill(&self, amount: f64) -> f64 {
        amount * 0.90
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

/// 20% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumDiscount;

impl BillingStrategy for PremiumDiscount {
    fn calculate_bill(&self, amount: f64) -> f64 {
        amount * 0.80
    }

    fn name(&self) -> &'static str {
        "premium"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl BillingStrategy for NoDiscount {
    fn calculate_bill(&self, amount: f64) -> f64 {
        amount
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Result of a checkout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bill {
    /// Sum of item prices before the strategy is applied.
    pub total: f64,
    pub amount_due: f64,
}

/// Cart whose checkout price is decided by a swappable [`BillingStrategy`].
pub struct ShoppingCart {
    strategy: Box<dyn BillingStrategy>,
    items: Vec<f64>,
}

impl ShoppingCart {
    pub fn new(strategy: impl BillingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            items: Vec::new(),
        }
    }

    /// Replace the strategy. Items already in the cart are kept.
    pub fn set_strategy(&mut self, strategy: impl BillingStrategy + 'static) {
        self.strategy = Box::new(strategy);
    }

    pub fn add_item(&mut self, price: f64) {
        self.items.push(price);
    }

    pub fn items(&self) -> &[f64] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().sum()
    }

    pub fn checkout(&self) -> Bill {
        let total = self.total();
        let bill = Bill {
            total,
            amount_due: self.strategy.calculate_bill(total),
        };

        info!(
            strategy = self.strategy.name(),
            total = bill.total,
            amount_due = bill.amount_due,
            "checked out cart"
        );
        bill
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn cart_switches_strategy() {
        let mut cart = ShoppingCart::new(StandardDiscount);
        cart.add_item(100.0);
        cart.add_item(50.0);

        let bill = cart.checkout();
        assert_close(bill.total, 150.0);
        assert_close(bill.amount_due, 135.0);

        cart.set_strategy(PremiumDiscount);
        cart.add_item(20.0);

        let bill = cart.checkout();
        assert_close(bill.total, 170.0);
        assert_close(bill.amount_due, 136.0);
        assert_eq!(cart.items().len(), 3);
    }

    #[test]
    fn no_discount_charges_total() {
        let mut cart = ShoppingCart::new(NoDiscount);
        cart.add_item(19.99);

        assert_eq!(cart.checkout().amount_due, 19.99);
        assert_eq!(NoDiscount.name(), "none");
    }

    #[test]
    fn empty_cart_is_free() {
        let cart = ShoppingCart::new(PremiumDiscount);

        assert_eq!(
            cart.checkout(),
            Bill {
                total: 0.0,
                amount_due: 0.0,
            }
        );
    }
}
