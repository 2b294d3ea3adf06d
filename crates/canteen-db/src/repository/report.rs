//! # Report Repository
//!
//! Read-only projections over sales.
//!
//! - **Sales summary**: one row per sale that has at least one line.
//! - **Order detail**: one row per sale line, joined with its sale and item.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use canteen_core::{OrderDetailRow, SalesSummaryRow};

/// Repository for reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Per sale: id, date, total quantity sold and stored total, by sale id.
    ///
    /// Sales without lines (empty, or every item unknown) are left out.
    pub async fn sales_summary(&self) -> DbResult<Vec<SalesSummaryRow>> {
        let rows = sqlx::query_as::<_, SalesSummaryRow>(
            r#"
            SELECT
                s.id AS sale_id,
                s.sale_date,
                SUM(l.quantity) AS items_sold,
                s.total_cents
            FROM sales s
            INNER JOIN sale_lines l ON l.sale_id = s.id
            GROUP BY s.id, s.sale_date, s.total_cents
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Sales summary");
        Ok(rows)
    }

    /// Per sale line: sale id, date, item name, quantity and unit price,
    /// by sale id then line id.
    pub async fn order_detail(&self) -> DbResult<Vec<OrderDetailRow>> {
        let rows = sqlx::query_as::<_, OrderDetailRow>(
            r#"
            SELECT
                s.id AS sale_id,
                s.sale_date,
                i.name AS item_name,
                l.quantity,
                l.unit_price_cents
            FROM sales s
            INNER JOIN sale_lines l ON l.sale_id = s.id
            INNER JOIN items i ON i.id = l.item_id
            ORDER BY s.id, l.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Order detail");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use canteen_core::{Money, NewItem};
    use chrono::NaiveDate;

    async fn seeded() -> (Database, i64, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let pastel = db
            .items()
            .add(&NewItem::new("Pastel", None, Money::from_cents(800), 20))
            .await
            .unwrap();
        let cafe = db
            .items()
            .add(&NewItem::new("Cafe", Some("Bebidas".to_string()), Money::from_cents(350), 20))
            .await
            .unwrap();
        (db, pastel, cafe)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[tokio::test]
    async fn test_reports_on_empty_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.reports().sales_summary().await.unwrap().is_empty());
        assert!(db.reports().order_detail().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sales_summary() {
        let (db, pastel, cafe) = seeded().await;
        let sales = db.sales();

        let first = sales
            .register_sale_on(day(1), &[(pastel, 2).into(), (cafe, 1).into()])
            .await
            .unwrap();
        let second = sales
            .register_sale_on(day(2), &[(cafe, 4).into()])
            .await
            .unwrap();

        let rows = db.reports().sales_summary().await.unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].sale_id, first.sale_id);
        assert_eq!(rows[0].sale_date, day(1));
        assert_eq!(rows[0].items_sold, 3);
        assert_eq!(rows[0].total_cents, 1_950);

        assert_eq!(rows[1].sale_id, second.sale_id);
        assert_eq!(rows[1].items_sold, 4);
        assert_eq!(rows[1].total().cents(), 1_400);
    }

    #[tokio::test]
    async fn test_sales_without_lines_are_not_summarized() {
        let (db, pastel, _) = seeded().await;
        let sales = db.sales();

        sales.register_sale_on(day(1), &[]).await.unwrap();
        sales
            .register_sale_on(day(1), &[(999, 2).into()])
            .await
            .unwrap();
        assert!(db.reports().sales_summary().await.unwrap().is_empty());

        let sold = sales
            .register_sale_on(day(2), &[(pastel, 1).into()])
            .await
            .unwrap();
        let rows = db.reports().sales_summary().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sale_id, sold.sale_id);
    }

    #[tokio::test]
    async fn test_order_detail_order_and_names() {
        let (db, pastel, cafe) = seeded().await;
        let sales = db.sales();

        let first = sales
            .register_sale_on(day(3), &[(cafe, 1).into(), (pastel, 4).into()])
            .await
            .unwrap();
        let second = sales
            .register_sale_on(day(4), &[(pastel, 1).into()])
            .await
            .unwrap();

        let rows = db.reports().order_detail().await.unwrap();
        let view: Vec<(i64, &str, i64)> = rows
            .iter()
            .map(|r| (r.sale_id, r.item_name.as_str(), r.quantity))
            .collect();

        assert_eq!(
            view,
            vec![
                (first.sale_id, "Cafe", 1),
                (first.sale_id, "Pastel", 4),
                (second.sale_id, "Pastel", 1),
            ]
        );
        assert_eq!(rows[1].unit_price(), Money::from_cents(800));
        assert_eq!(rows[2].sale_date, day(4));
    }
}
