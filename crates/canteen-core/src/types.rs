//! # Domain Types
//!
//! Core domain types used throughout the canteen POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Sale       │   │    SaleLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄─┐│  id             │◄──│  sale_id (FK)   │       │
//! │  │  name           │  ││  sale_date      │   │  item_id (FK)───┼──┐    │
//! │  │  category?      │  ││  total_cents    │   │  quantity       │  │    │
//! │  │  price_cents    │  │└─────────────────┘   │  unit_price     │  │    │
//! │  │  quantity       │  │                      └─────────────────┘  │    │
//! │  └─────────────────┘  └──────────────────────────────────────────-┘    │
//! │                                                                         │
//! │  Inputs:  NewItem, ItemPatch, SaleRequestLine                          │
//! │  Outputs: SaleReceipt, SalesSummaryRow, OrderDetailRow                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every record gets a system-assigned integer id from the database. Operators
//! type these ids at the prompt, so they stay short.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{
    validate_category, validate_item_name, validate_price, ValidationResult,
};

// =============================================================================
// Item
// =============================================================================

/// A sellable inventory unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// System-assigned identifier.
    pub id: i64,

    /// Display name shown on the menu and in reports.
    pub name: String,

    /// Optional grouping ("Drinks", "Snacks", ...).
    pub category: Option<String>,

    /// Current unit price in cents. Discounts rewrite this in place.
    pub price_cents: i64,

    /// Quantity on hand. Goes negative when oversold.
    pub quantity: i64,
}

impl Item {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether more units were sold than were on hand.
    #[inline]
    pub fn is_oversold(&self) -> bool {
        self.quantity < 0
    }
}

/// Data needed to create an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: Option<String>,
    pub price: Money,
    pub quantity: i64,
}

impl NewItem {
    /// Creates a new item description. Blank categories become `None`.
    pub fn new(
        name: impl Into<String>,
        category: Option<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        NewItem {
            name: name.into().trim().to_string(),
            category: normalize_category(category),
            price,
            quantity,
        }
    }

    /// Checks name, category and price.
    ///
    /// Quantity is not checked: stock counts are the operator's business.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_item_name(&self.name)?;
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        validate_price(self.price)
    }
}

/// Field-level update for an item.
///
/// ## Explicit Presence
/// Each field is `Some` only when the operator supplied it. `Some(0)` for the
/// quantity really sets the stock to zero; it is never read as "unchanged".
///
/// ```rust
/// use canteen_core::ItemPatch;
///
/// let patch = ItemPatch::default().name("Coxinha");
/// assert!(!patch.is_empty());
/// assert!(patch.price.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
    pub quantity: Option<i64>,
}

impl ItemPatch {
    /// Sets the new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into().trim().to_string());
        self
    }

    /// Sets the new category. A blank category leaves the field unset.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize_category(Some(category.into()));
        self
    }

    /// Sets the new price.
    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the new quantity.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }

    /// Validates the supplied fields only.
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = &self.name {
            validate_item_name(name)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn normalize_category(category: Option<String>) -> Option<String> {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    pub sale_date: NaiveDate,
    /// Sum of line extensions computed at registration time.
    pub total_cents: i64,
}

impl Sale {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// One item-and-quantity entry within a sale.
///
/// Uses the snapshot pattern: `unit_price_cents` is the item price when the
/// sale was registered, independent of later price changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleLine {
    pub id: i64,
    pub sale_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl SaleLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Quantity × unit price.
    #[inline]
    pub fn extension(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// A requested (item, quantity) pair submitted for a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRequestLine {
    pub item_id: i64,
    pub quantity: i64,
}

impl SaleRequestLine {
    pub fn new(item_id: i64, quantity: i64) -> Self {
        SaleRequestLine { item_id, quantity }
    }
}

impl From<(i64, i64)> for SaleRequestLine {
    fn from((item_id, quantity): (i64, i64)) -> Self {
        SaleRequestLine { item_id, quantity }
    }
}

/// Outcome of registering a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    pub sale_id: i64,
    pub sale_date: NaiveDate,
    pub total: Money,
    /// Number of sale lines written.
    pub lines_recorded: usize,
    /// Requested item ids that did not exist, in input order.
    pub skipped_item_ids: Vec<i64>,
}

// =============================================================================
// Report Rows
// =============================================================================

/// One row of the sales summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesSummaryRow {
    pub sale_id: i64,
    pub sale_date: NaiveDate,
    /// Sum of line quantities (0 for a sale without lines).
    pub items_sold: i64,
    pub total_cents: i64,
}

impl SalesSummaryRow {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// One row of the order detail report (a sale line joined with its sale and
/// item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderDetailRow {
    pub sale_id: i64,
    pub sale_date: NaiveDate,
    pub item_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl OrderDetailRow {
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
