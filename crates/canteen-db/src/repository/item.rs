//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! ## Key Operations
//! - CRUD operations (add, get, list, update, remove)
//! - Stock overwrite
//! - Discount application (price rewrite)
//!
//! ## Partial Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Patch Is Written                               │
//! │                                                                         │
//! │  ItemPatch { name: Some("Pastel"), price: None, quantity: Some(0) }    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UPDATE items SET                                                      │
//! │      name        = COALESCE('Pastel', name)      → 'Pastel'            │
//! │      price_cents = COALESCE(NULL, price_cents)   → unchanged           │
//! │      quantity    = COALESCE(0, quantity)         → 0                   │
//! │                                                                         │
//! │  NULL means "not supplied"; zero is a real value.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use canteen_core::{CoreError, Discount, Item, ItemPatch, Money, NewItem};

/// Repository for inventory item operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let id = repo.add(&NewItem::new("Coxinha", None, Money::from_cents(650), 20)).await?;
/// repo.set_stock(id, 35).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new item and returns its assigned id.
    ///
    /// ## Errors
    /// * `DbError::Domain` - empty name, negative price, over-long fields
    /// * Any datastore failure from the insert
    pub async fn add(&self, item: &NewItem) -> DbResult<i64> {
        item.validate().map_err(CoreError::from)?;

        debug!(name = %item.name, price = %item.price, "Inserting item");

        let result = sqlx::query(
            r#"
            INSERT INTO items (name, category, price_cents, quantity)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.price.cents())
        .bind(item.quantity)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(id, name = %item.name, "Item added");
        Ok(id)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, category, price_cents, quantity
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists every item ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, category, price_cents, quantity
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Counts items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Writes the supplied fields of `patch`; absent fields are untouched.
    ///
    /// ## Returns
    /// * `Ok(true)` - The item exists (and was updated if the patch had fields)
    /// * `Ok(false)` - No item with that id
    pub async fn update(&self, id: i64, patch: &ItemPatch) -> DbResult<bool> {
        patch.validate().map_err(CoreError::from)?;

        if patch.is_empty() {
            debug!(id, "Empty patch, nothing to update");
            return Ok(self.get(id).await?.is_some());
        }

        debug!(id, ?patch, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE items SET
                name = COALESCE(?2, name),
                category = COALESCE(?3, category),
                price_cents = COALESCE(?4, price_cents),
                quantity = COALESCE(?5, quantity)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.category)
        .bind(patch.price.map(|p| p.cents()))
        .bind(patch.quantity)
        .execute(&self.pool)
        .await?;

        let matched = result.rows_affected() > 0;
        if matched {
            info!(id, "Item updated");
        }
        Ok(matched)
    }

    /// Deletes an item.
    ///
    /// ## Returns
    /// * `Ok(true)` - Item removed
    /// * `Ok(false)` - No item with that id (not an error)
    /// * `Err(DbError::ForeignKeyViolation)` - Item appears on a recorded sale
    pub async fn remove(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Removing item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            info!(id, "Item removed");
        }
        Ok(removed)
    }

    /// Overwrites the quantity on hand. No bounds check.
    ///
    /// ## Returns
    /// * `Ok(true)` - Stock written
    /// * `Ok(false)` - No item with that id
    pub async fn set_stock(&self, id: i64, quantity: i64) -> DbResult<bool> {
        debug!(id, quantity, "Setting stock");

        let result = sqlx::query("UPDATE items SET quantity = ?2 WHERE id = ?1")
            .bind(id)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Applies a discount to an item's price and persists the new price.
    ///
    /// Read and write happen in one transaction.
    ///
    /// ## Returns
    /// * `Ok(Money)` - The new price
    /// * `Err(DbError::NotFound)` - No item with that id
    /// * `Err(DbError::Domain(CoreError::NegativePrice { .. }))` - Price unchanged
    pub async fn apply_discount(&self, id: i64, discount: &Discount) -> DbResult<Money> {
        debug!(id, ?discount, "Applying discount");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let current: Option<i64> =
            sqlx::query_scalar("SELECT price_cents FROM items WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let current = match current {
            Some(cents) => Money::from_cents(cents),
            None => return Err(DbError::not_found("Item", id)),
        };

        let new_price = match discount.apply_to(current) {
            Ok(price) => price,
            Err(err) => {
                warn!(id, %current, error = %err, "Discount rejected");
                return Err(err.into());
            }
        };

        sqlx::query("UPDATE items SET price_cents = ?2 WHERE id = ?1")
            .bind(id)
            .bind(new_price.cents())
            .execute(&mut *tx)
            .await?;

        tx.commit().await.map_err(DbError::transaction)?;

        info!(id, old = %current, new = %new_price, "Discount applied");
        Ok(new_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
