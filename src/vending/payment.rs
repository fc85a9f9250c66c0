//! Simulated card payments.

use crate::vending::config::Product;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides whether a card payment goes through.
///
/// Implemented by the random simulator used at the console and by
/// deterministic stand-ins in tests.
pub trait PaymentGateway {
    /// Returns `true` if the payment for `product` is approved.
    fn authorize(&mut self, product: &Product) -> bool;
}

/// Gateway that declines a fixed percentage of payments at random.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    rng: StdRng,
    fail_chance: u8,
}

impl SimulatedGateway {
    /// Create a gateway seeded from the operating system.
    pub fn new(fail_chance: u8) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            fail_chance: fail_chance.min(100),
        }
    }

    /// Create a gateway whose decisions are reproducible.
    pub fn seeded(fail_chance: u8, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fail_chance: fail_chance.min(100),
        }
    }

    pub fn fail_chance(&self) -> u8 {
        self.fail_chance
    }
}

impl PaymentGateway for SimulatedGateway {
    fn authorize(&mut self, _product: &Product) -> bool {
        self.rng.gen_range(0..100u8) >= self.fail_chance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twix() -> Product {
        Product::new("Twix", 1.50, 2)
    }

    #[test]
    fn zero_chance_always_approves() {
        let mut gateway = SimulatedGateway::seeded(0, 7);
        assert!((0..500).all(|_| gateway.authorize(&twix())));
    }

    #[test]
    fn full_chance_always_declines() {
        let mut gateway = SimulatedGateway::seeded(100, 7);
        assert!((0..500).all(|_| !gateway.authorize(&twix())));
    }

    #[test]
    fn chance_is_clamped() {
        assert_eq!(SimulatedGateway::new(250).fail_chance(), 100);
    }

    #[test]
    fn seeded_gateways_agree() {
        let mut a = SimulatedGateway::seeded(50, 42);
        let mut b = SimulatedGateway::seeded(50, 42);
        let product = twix();

        for _ in 0..100 {
            assert_eq!(a.authorize(&product), b.authorize(&product));
        }
    }

    #[test]
    fn declines_roughly_at_requested_rate() {
        let mut gateway = SimulatedGateway::seeded(30, 1234);
        let product = twix();
        let declined = (0..10_000).filter(|_| !gateway.authorize(&product)).count();
        assert!((2_500..3_500).contains(&declined), "declined {declined}");
    }
}
