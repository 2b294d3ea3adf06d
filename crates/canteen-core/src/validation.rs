//! # Validation Module
//!
//! Input validation and text parsing for the canteen POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell prompt                                                 │
//! │  └── parse_* turns the typed line into a number / Money / rate         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Business rules (THIS MODULE)                                 │
//! │  └── validate_* checks names, prices, quantities                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use canteen_core::validation::{parse_money, parse_percentage};
//!
//! assert_eq!(parse_money("price", "4,50").unwrap().cents(), 450);
//! assert_eq!(parse_percentage("12.5").unwrap().bps(), 1250);
//! ```

use crate::error::ValidationError;
use crate::money::{DiscountRate, Money};
use crate::{MAX_CATEGORY_LEN, MAX_ITEM_NAME_LEN, MAX_PRICE_CENTS, MAX_SALE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest accepted percentage, in basis points (10,000%).
const MAX_DISCOUNT_BPS: i64 = 1_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
///
/// ```rust
/// use canteen_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Pão de queijo").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a category label (at most 50 characters).
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
/// - Must fit a `DECIMAL(10, 2)` column
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a fixed discount amount (non-negative).
pub fn validate_discount_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates the quantity of a sale line.
///
/// ## Rules
/// - Must be positive (> 0)
/// - At most [`MAX_SALE_QUANTITY`]
///
/// ## User Workflow
/// ```text
/// Register sale
///   Item id: 3
///   Quantity: 0 ──► validate_sale_quantity(0) ──► "quantity must be positive"
///   Quantity: 2 ──► OK, line (3, 2) queued
/// ```
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    if qty > MAX_SALE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_SALE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates an item id typed by the operator.
pub fn validate_item_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "item id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses a whole number.
pub fn parse_integer(field: &str, text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number".to_string(),
        })
}

/// Parses a decimal amount of money into cents.
///
/// ## Rules
/// - `.` or `,` as decimal separator ("4.50", "4,50", "4", ".5")
/// - At most two fractional digits
/// - Optional leading `-` (callers decide whether negatives are allowed)
///
/// ```rust
/// use canteen_core::validation::parse_money;
///
/// assert_eq!(parse_money("price", "10").unwrap().cents(), 1000);
/// assert_eq!(parse_money("price", "0.5").unwrap().cents(), 50);
/// assert!(parse_money("price", "1.999").is_err());
/// ```
pub fn parse_money(field: &str, text: &str) -> ValidationResult<Money> {
    parse_hundredths(field, text).map(Money::from_cents)
}

/// Parses a percentage ("20", "12.5") into a [`DiscountRate`].
///
/// Negative percentages are rejected.
pub fn parse_percentage(text: &str) -> ValidationResult<DiscountRate> {
    let bps = parse_hundredths("percentage", text)?;

    if !(0..=MAX_DISCOUNT_BPS).contains(&bps) {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: MAX_DISCOUNT_BPS / 100,
        });
    }

    Ok(DiscountRate::from_bps(bps as u32))
}

/// Parses a fixed-point number with two decimals into an integer count of
/// hundredths.
fn parse_hundredths(field: &str, text: &str) -> ValidationResult<i64> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (whole, frac) = match unsigned.find(['.', ',']) {
        Some(pos) => (&unsigned[..pos], &unsigned[pos + 1..]),
        None => (unsigned, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("must be a number"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("must be a number"));
    }
    if frac.len() > 2 {
        return Err(invalid("at most two decimal places"));
    }

    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid("number is too large"))?
    };
    let frac_value: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid("must be a number"))? * 10,
        _ => frac.parse().map_err(|_| invalid("must be a number"))?,
    };

    let magnitude = whole_value
        .checked_mul(100)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(|| invalid("number is too large"))?;

    Ok(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Unit Tests
// =============================================================================
