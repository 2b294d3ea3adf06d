//! # Pricing Rules
//!
//! Discounts rewrite an item's price in place; no separate discount record is
//! kept.
//!
//! ## Order of Application
//! ```text
//! current price ──► − current × percent / 100 ──► − fixed amount ──► new price
//!                    (only if a percent is set)    (only if set)        │
//!                                                                      ▼
//!                                                  new < 0 ? reject : persist
//! ```
//! The fixed amount is subtracted from the already-discounted running price,
//! never from the original.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::{DiscountRate, Money};
use crate::validation::validate_discount_amount;

/// A discount request: an optional percentage and an optional fixed amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub percent: Option<DiscountRate>,
    pub fixed: Option<Money>,
}

impl Discount {
    pub fn new(percent: Option<DiscountRate>, fixed: Option<Money>) -> Self {
        Discount { percent, fixed }
    }

    /// Percentage only.
    pub fn percentage(rate: DiscountRate) -> Self {
        Discount {
            percent: Some(rate),
            fixed: None,
        }
    }

    /// Fixed amount only.
    pub fn fixed(amount: Money) -> Self {
        Discount {
            percent: None,
            fixed: Some(amount),
        }
    }

    /// True when neither part was supplied.
    pub fn is_empty(&self) -> bool {
        self.percent.is_none() && self.fixed.is_none()
    }

    /// Computes the discounted price.
    ///
    /// ## Errors
    /// - `CoreError::Validation` when the fixed amount is negative
    /// - `CoreError::NegativePrice` when the result would drop below zero
    ///
    /// ```rust
    /// use canteen_core::money::{DiscountRate, Money};
    /// use canteen_core::pricing::Discount;
    ///
    /// let price = Money::from_cents(10_000);
    /// let off = Discount::percentage(DiscountRate::from_percent(20));
    /// assert_eq!(off.apply_to(price).unwrap().cents(), 8_000);
    ///
    /// let too_much = Discount::fixed(Money::from_cents(15_000));
    /// assert!(too_much.apply_to(price).is_err());
    /// ```
    pub fn apply_to(&self, current: Money) -> CoreResult<Money> {
        let mut new_price = current;

        if let Some(rate) = self.percent {
            new_price -= current.percentage(rate);
        }

        if let Some(amount) = self.fixed {
            validate_discount_amount(amount)?;
            new_price -= amount;
        }

        if new_price.is_negative() {
            return Err(CoreError::NegativePrice {
                original: current,
                discounted: new_price,
            });
        }

        Ok(new_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
