//! # Sale Repository
//!
//! Sale registration and lookup.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registering a Sale (one transaction)                 │
//! │                                                                         │
//! │  [(3, 2), (99, 1), (5, 1)]                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 1: price each pair, sum the total                                │
//! │       │   item 99 unknown → skipped, no contribution                   │
//! │       ▼                                                                 │
//! │  INSERT sales (sale_date, total_cents) → sale id                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 2: price each pair again, for each known item                    │
//! │       ├── INSERT sale_lines (price snapshot)                           │
//! │       └── UPDATE items SET quantity = quantity - sold                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COMMIT  (any error → rollback, nothing written)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is decremented without a floor: selling more than is on hand leaves
//! a negative quantity.

use chrono::{Local, NaiveDate};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use canteen_core::{CoreError, Money, Sale, SaleLine, SaleReceipt, SaleRequestLine};

/// Repository for sale operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Registers a sale dated today (local time).
    pub async fn register_sale(&self, lines: &[SaleRequestLine]) -> DbResult<SaleReceipt> {
        self.register_sale_on(Local::now().date_naive(), lines).await
    }

    /// Registers a sale with an explicit date.
    ///
    /// Unknown item ids are skipped and listed in the receipt. Repeated ids
    /// produce one line (and one stock decrement) each.
    ///
    /// ## Errors
    /// Any datastore failure aborts the sale; the transaction is rolled back
    /// when `tx` is dropped without a commit. A total that overflows is
    /// rejected with [`CoreError::TotalOverflow`] before anything is written.
    pub async fn register_sale_on(
        &self,
        sale_date: NaiveDate,
        lines: &[SaleRequestLine],
    ) -> DbResult<SaleReceipt> {
        debug!(%sale_date, lines = lines.len(), "Registering sale");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let mut total = Money::zero();
        let mut skipped_item_ids = Vec::new();

        for line in lines {
            match unit_price(&mut *tx, line.item_id).await? {
                Some(price) => {
                    total = price
                        .checked_multiply_quantity(line.quantity)
                        .and_then(|extension| total.checked_add(extension))
                        .ok_or(CoreError::TotalOverflow {
                            item_id: line.item_id,
                            quantity: line.quantity,
                        })?;
                }
                None => {
                    warn!(item_id = line.item_id, "Unknown item skipped");
                    skipped_item_ids.push(line.item_id);
                }
            }
        }

        let sale_id = sqlx::query("INSERT INTO sales (sale_date, total_cents) VALUES (?1, ?2)")
            .bind(sale_date)
            .bind(total.cents())
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        let mut lines_recorded = 0;

        for line in lines {
            let Some(price) = unit_price(&mut *tx, line.item_id).await? else {
                continue;
            };

            debug!(sale_id, item_id = line.item_id, quantity = line.quantity, "Adding sale line");

            sqlx::query(
                r#"
                INSERT INTO sale_lines (sale_id, item_id, quantity, unit_price_cents)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(sale_id)
            .bind(line.item_id)
            .bind(line.quantity)
            .bind(price.cents())
            .execute(&mut *tx)
            .await?;

            sqlx::query("UPDATE items SET quantity = quantity - ?2 WHERE id = ?1")
                .bind(line.item_id)
                .bind(line.quantity)
                .execute(&mut *tx)
                .await?;

            lines_recorded += 1;
        }

        tx.commit().await.map_err(DbError::transaction)?;

        info!(sale_id, %total, lines_recorded, skipped = skipped_item_ids.len(), "Sale registered");

        Ok(SaleReceipt {
            sale_id,
            sale_date,
            total,
            lines_recorded,
            skipped_item_ids,
        })
    }

    /// Gets a sale header by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            "SELECT id, sale_date, total_cents FROM sales WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Gets the lines of a sale in insertion order.
    pub async fn get_lines(&self, sale_id: i64) -> DbResult<Vec<SaleLine>> {
        let lines = sqlx::query_as::<_, SaleLine>(
            r#"
            SELECT id, sale_id, item_id, quantity, unit_price_cents
            FROM sale_lines
            WHERE sale_id = ?1
            ORDER BY id
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }
}

/// Current unit price of an item, or `None` when it does not exist.
async fn unit_price(conn: &mut SqliteConnection, item_id: i64) -> DbResult<Option<Money>> {
    let cents: Option<i64> = sqlx::query_scalar("SELECT price_cents FROM items WHERE id = ?1")
        .bind(item_id)
        .fetch_optional(conn)
        .await?;

    Ok(cents.map(Money::from_cents))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use canteen_core::NewItem;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    async fn setup() -> (Database, i64, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let items = db.items();
        let coxinha = items
            .add(&NewItem::new("Coxinha", None, Money::from_cents(650), 10))
            .await
            .unwrap();
        let suco = items
            .add(&NewItem::new("Suco", None, Money::from_cents(500), 4))
            .await
            .unwrap();
        (db, coxinha, suco)
    }

    #[tokio::test]
    async fn test_sale_total_and_lines() {
        let (db, coxinha, suco) = setup().await;

        let receipt = db
            .sales()
            .register_sale_on(date(), &[(coxinha, 2).into(), (suco, 3).into()])
            .await
            .unwrap();

        assert_eq!(receipt.total.cents(), 2 * 650 + 3 * 500);
        assert_eq!(receipt.lines_recorded, 2);
        assert!(receipt.skipped_item_ids.is_empty());

        let sale = db.sales().get_by_id(receipt.sale_id).await.unwrap().unwrap();
        assert_eq!(sale.sale_date, date());
        assert_eq!(sale.total_cents, 2_800);

        let lines = db.sales().get_lines(receipt.sale_id).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item_id, coxinha);
        assert_eq!(lines[0].unit_price_cents, 650);
        let sum: Money = lines.iter().map(SaleLine::extension).sum();
        assert_eq!(sum, receipt.total);
    }

    #[tokio::test]
    async fn test_empty_sale() {
        let (db, _, _) = setup().await;

        let receipt = db.sales().register_sale_on(date(), &[]).await.unwrap();

        assert!(receipt.total.is_zero());
        assert_eq!(receipt.lines_recorded, 0);
        assert!(db.sales().get_by_id(receipt.sale_id).await.unwrap().is_some());
        assert!(db.sales().get_lines(receipt.sale_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_item_is_skipped() {
        let (db, coxinha, _) = setup().await;

        let receipt = db
            .sales()
            .register_sale_on(date(), &[(coxinha, 1).into(), (999, 5).into()])
            .await
            .unwrap();

        assert_eq!(receipt.total.cents(), 650);
        assert_eq!(receipt.lines_recorded, 1);
        assert_eq!(receipt.skipped_item_ids, vec![999]);

        let lines = db.sales().get_lines(receipt.sale_id).await.unwrap();
        assert!(lines.iter().all(|l| l.item_id != 999));
    }

    #[tokio::test]
    async fn test_stock_decrements_and_may_go_negative() {
        let (db, coxinha, suco) = setup().await;

        db.sales()
            .register_sale_on(date(), &[(coxinha, 3).into(), (suco, 6).into()])
            .await
            .unwrap();

        let items = db.items();
        assert_eq!(items.get(coxinha).await.unwrap().unwrap().quantity, 7);
        assert_eq!(items.get(suco).await.unwrap().unwrap().quantity, -2);
    }

    #[tokio::test]
    async fn test_repeated_item_produces_two_lines() {
        let (db, coxinha, _) = setup().await;

        let receipt = db
            .sales()
            .register_sale_on(date(), &[(coxinha, 1).into(), (coxinha, 2).into()])
            .await
            .unwrap();

        assert_eq!(receipt.lines_recorded, 2);
        assert_eq!(receipt.total.cents(), 3 * 650);
        assert_eq!(
            db.items().get(coxinha).await.unwrap().unwrap().quantity,
            7
        );
    }

    #[tokio::test]
    async fn test_line_price_is_a_snapshot() {
        let (db, coxinha, _) = setup().await;

        let receipt = db
            .sales()
            .register_sale_on(date(), &[(coxinha, 1).into()])
            .await
            .unwrap();

        db.items()
            .update(coxinha, &canteen_core::ItemPatch::default().price(Money::from_cents(900)))
            .await
            .unwrap();

        let lines = db.sales().get_lines(receipt.sale_id).await.unwrap();
        assert_eq!(lines[0].unit_price_cents, 650);
    }

    #[tokio::test]
    async fn test_register_sale_uses_today() {
        let (db, coxinha, _) = setup().await;

        let receipt = db
            .sales()
            .register_sale(&[SaleRequestLine::new(coxinha, 1)])
            .await
            .unwrap();

        assert_eq!(receipt.sale_date, Local::now().date_naive());
    }

    #[tokio::test]
    async fn test_failed_sale_rolls_back_everything() {
        let (db, coxinha, suco) = setup().await;

        sqlx::query(&format!(
            "CREATE TRIGGER reject_line BEFORE INSERT ON sale_lines \
             WHEN NEW.item_id = {suco} BEGIN SELECT RAISE(ABORT, 'line rejected'); END"
        ))
        .execute(db.pool())
        .await
        .unwrap();

        let result = db
            .sales()
            .register_sale_on(date(), &[(coxinha, 1).into(), (suco, 1).into()])
            .await;
        assert!(result.is_err());

        let sales: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(sales, 0);
        assert_eq!(
            db.items().get(coxinha).await.unwrap().unwrap().quantity,
            10
        );
    }

    #[tokio::test]
    async fn test_overflowing_total_is_rejected() {
        let (db, coxinha, suco) = setup().await;

        let result = db
            .sales()
            .register_sale_on(
                date(),
                &[(suco, 1).into(), (coxinha, 20_000_000_000_000_000).into()],
            )
            .await;
        assert!(matches!(
            result,
            Err(DbError::Domain(CoreError::TotalOverflow { item_id, .. })) if item_id == coxinha
        ));

        let sales: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(sales, 0);
        assert_eq!(db.items().get(suco).await.unwrap().unwrap().quantity, 4);
    }

    #[tokio::test]
    async fn test_overflowing_sum_of_lines_is_rejected() {
        let (db, _, _) = setup().await;
        let pricey = db
            .items()
            .add(&NewItem::new("Banquete", None, Money::from_cents(9_999_999_999), 1))
            .await
            .unwrap();
        let qty = canteen_core::MAX_SALE_QUANTITY;

        let result = db
            .sales()
            .register_sale_on(date(), &[(pricey, qty).into(), (pricey, qty).into()])
            .await;

        assert!(matches!(
            result,
            Err(DbError::Domain(CoreError::TotalOverflow { .. }))
        ));
        assert!(db.sales().get_by_id(1).await.unwrap().is_none());
    }
}
