//! # canteen-core: Pure Business Logic for the Canteen POS
//!
//! This crate holds the domain model and every rule that can be expressed
//! without touching the database or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Canteen POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Interactive Shell (canteen-shell)               │   │
//! │  │    menu ──► prompts ──► commands ──► tables / messages         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ canteen-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │ Discount  │  │  parsing  │  │   │
//! │  │   │   Sale    │  │ Discount- │  │           │  │  checks   │  │   │
//! │  │   │ SaleLine  │  │   Rate    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  canteen-db (Database Layer)                    │   │
//! │  │        SQLite queries, migrations, registrar, reports          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Sale, SaleLine, report rows)
//! - [`money`] - Money and DiscountRate with integer arithmetic
//! - [`pricing`] - Discount rules applied to item prices
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and text parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use canteen_core::money::{DiscountRate, Money};
//! use canteen_core::pricing::Discount;
//!
//! let price = Money::from_cents(10_000); // 100.00
//! let discount = Discount::new(Some(DiscountRate::from_percent(10)), Some(Money::from_cents(500)));
//!
//! // 10% off first, then 5.00 off the discounted price
//! assert_eq!(discount.apply_to(price).unwrap().cents(), 8_500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use pricing::Discount;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name.
///
/// Matches a `VARCHAR(100)` name column.
pub const MAX_ITEM_NAME_LEN: usize = 100;

/// Maximum length of an item category.
pub const MAX_CATEGORY_LEN: usize = 50;

/// Largest price accepted from user input, in cents (99,999,999.99).
///
/// Mirrors a `DECIMAL(10, 2)` column: eight integer digits, two fractional.
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

/// Largest quantity accepted on one sale line.
///
/// One line at the highest price still fits in an i64 count of cents.
pub const MAX_SALE_QUANTITY: i64 = i64::MAX / MAX_PRICE_CENTS;
