//! Sale registration command.

use std::io::{BufRead, Write};

use canteen_core::validation::{validate_item_id, validate_sale_quantity};
use canteen_core::SaleRequestLine;

use crate::error::ShellResult;
use crate::render::money;
use crate::shell::Shell;

impl<R: BufRead, W: Write> Shell<R, W> {
    /// 6 - Register sale.
    ///
    /// Reads (item id, quantity) pairs until the id is `0`. An invalid
    /// answer abandons the sale before anything is written.
    pub(crate) async fn register_sale(&mut self) -> ShellResult<()> {
        let mut lines = Vec::new();
        loop {
            let item_id = self
                .console
                .ask_integer("Item id (0 to finish): ", "item id")?;
            if item_id == 0 {
                break;
            }
            validate_item_id(item_id)?;

            let quantity = self
                .console
                .ask_integer(&format!("Quantity for item {item_id}: "), "quantity")?;
            validate_sale_quantity(quantity)?;
            lines.push(SaleRequestLine::new(item_id, quantity));
        }

        let receipt = self.db.sales().register_sale(&lines).await?;

        for item_id in &receipt.skipped_item_ids {
            self.console
                .say(format!("Item {item_id} not found; skipped."))?;
        }

        self.console.say(format!(
            "Sale #{} registered on {}: {} line(s), total {}.",
            receipt.sale_id,
            receipt.sale_date,
            receipt.lines_recorded,
            money(&self.currency, receipt.total)
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{memory_db, run_script};
    use canteen_core::{Money, NewItem};

    #[tokio::test]
    async fn test_register_sale_from_menu() {
        let db = memory_db().await;
        let coxinha = db
            .items()
            .add(&NewItem::new("Coxinha", None, Money::from_cents(650), 10))
            .await
            .unwrap();
        let suco = db
            .items()
            .add(&NewItem::new("Suco", None, Money::from_cents(500), 10))
            .await
            .unwrap();

        let script = format!("6\n{coxinha}\n2\n{suco}\n1\n77\n5\n0\n0\n");
        let out = run_script(&db, &script).await;

        assert!(out.contains("Item 77 not found; skipped."));
        assert!(out.contains("2 line(s), total R$ 18.00."));
        assert_eq!(db.items().get(coxinha).await.unwrap().unwrap().quantity, 8);
        assert_eq!(db.items().get(suco).await.unwrap().unwrap().quantity, 9);
    }

    #[tokio::test]
    async fn test_empty_sale_is_registered() {
        let db = memory_db().await;
        let out = run_script(&db, "6\n0\n0\n").await;

        assert!(out.contains("Sale #1 registered"));
        assert!(out.contains("0 line(s), total R$ 0.00."));
    }

    #[tokio::test]
    async fn test_zero_quantity_abandons_sale() {
        let db = memory_db().await;
        let id = db
            .items()
            .add(&NewItem::new("Bolo", None, Money::from_cents(700), 4))
            .await
            .unwrap();

        let out = run_script(&db, &format!("6\n{id}\n0\n0\n")).await;

        assert!(out.contains("Error: quantity must be positive"));
        assert!(db.sales().get_by_id(1).await.unwrap().is_none());
        assert_eq!(db.items().get(id).await.unwrap().unwrap().quantity, 4);
    }

    #[tokio::test]
    async fn test_oversized_quantity_abandons_sale() {
        let db = memory_db().await;
        let id = db
            .items()
            .add(&NewItem::new("Coxinha", None, Money::from_cents(650), 10))
            .await
            .unwrap();

        let out = run_script(&db, &format!("6\n{id}\n20000000000000000\n0\n")).await;

        assert!(out.contains("Error: quantity must be between 1 and"));
        assert!(db.sales().get_by_id(1).await.unwrap().is_none());
        assert_eq!(db.items().get(id).await.unwrap().unwrap().quantity, 10);
    }
}
