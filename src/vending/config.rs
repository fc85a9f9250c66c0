//! Vending machine configuration: stock, prices and payment behaviour.
//!
//! Configuration is plain serde data loaded from JSON. Validation uses
//! Stillwater's `Validation` to collect every problem in one pass rather
//! than stopping at the first.

use crate::vending::machine::edges::{CANCEL, SELECTED, UNAVAILABLE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A product slot in the machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A single problem found while validating a [`VendingConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("No products configured")]
    NoProducts,

    #[error("Product at position {position} has an empty name")]
    EmptyProductName { position: usize },

    #[error("Product name '{name}' has leading or trailing whitespace")]
    UntrimmedProductName { name: String },

    #[error("Product '{name}' is listed more than once")]
    DuplicateProduct { name: String },

    #[error("Product '{name}' has invalid price {price}")]
    InvalidPrice { name: String, price: f64 },

    #[error("Product name '{name}' collides with a selection command")]
    ReservedProductName { name: String },

    #[error("Payment failure chance {chance}% is outside 0-100")]
    FailChanceOutOfRange { chance: u8 },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn default_fail_chance() -> u8 {
    10
}

fn default_clear_screen() -> bool {
    true
}

/// Complete vending machine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendingConfig {
    /// Products in display order.
    pub products: Vec<Product>,

    /// Percentage of card payments that are declined.
    #[serde(default = "default_fail_chance")]
    pub payment_fail_chance: u8,

    /// Scroll old output away before each screen.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

impl Default for VendingConfig {
    fn default() -> Self {
        Self {
            products: vec![
                Product::new("Coffee", 3.00, 0),
                Product::new("Twix", 1.50, 2),
                Product::new("Mars", 1.00, 15),
                Product::new("Milky way", 1.20, 11),
            ],
            payment_fail_chance: default_fail_chance(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl VendingConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.products.is_empty() {
            Validation::fail(ConfigViolation::NoProducts)
        } else {
            Validation::success(())
        });

        checks.push(if self.payment_fail_chance > 100 {
            Validation::fail(ConfigViolation::FailChanceOutOfRange {
                chance: self.payment_fail_chance,
            })
        } else {
            Validation::success(())
        });

        let mut seen = HashSet::new();
        for (position, product) in self.products.iter().enumerate() {
            checks.push(check_product(position, product, &mut seen));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, converting accumulated violations into a [`ConfigError`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

fn check_product(
    position: usize,
    product: &Product,
    seen: &mut HashSet<String>,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let name = product.name.trim();

    if name.is_empty() {
        return Validation::fail(ConfigViolation::EmptyProductName { position });
    }

    // Console input is trimmed, so a padded name could never be selected.
    if name != product.name {
        return Validation::fail(ConfigViolation::UntrimmedProductName {
            name: product.name.clone(),
        });
    }

    if [CANCEL, SELECTED, UNAVAILABLE].contains(&name) {
        return Validation::fail(ConfigViolation::ReservedProductName {
            name: name.to_string(),
        });
    }

    if !seen.insert(name.to_string()) {
        return Validation::fail(ConfigViolation::DuplicateProduct {
            name: name.to_string(),
        });
    }

    if !product.price.is_finite() || product.price < 0.0 {
        return Validation::fail(ConfigViolation::InvalidPrice {
            name: name.to_string(),
            price: product.price,
        });
    }

    Validation::success(())
}
