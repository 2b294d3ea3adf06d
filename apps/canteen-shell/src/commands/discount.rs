//! Discount command.

use std::io::{BufRead, Write};

use canteen_core::Discount;
use tracing::info;

use crate::error::{ShellError, ShellResult};
use crate::render::money;
use crate::shell::Shell;

impl<R: BufRead, W: Write> Shell<R, W> {
    /// 9 - Apply discount: percentage, fixed amount, or both.
    pub(crate) async fn apply_discount(&mut self) -> ShellResult<()> {
        let id = self.console.ask_item_id()?;
        let kind = self
            .console
            .ask("Discount type (1 = percentage, 2 = fixed amount, 3 = both): ")?;

        let discount = match kind.as_str() {
            "1" => Discount::percentage(self.console.ask_percentage("Percentage: ")?),
            "2" => Discount::fixed(self.console.ask_money("Amount: ", "discount")?),
            "3" => {
                let percent = self.console.ask_percentage("Percentage: ")?;
                let amount = self.console.ask_money("Amount: ", "discount")?;
                Discount::new(Some(percent), Some(amount))
            }
            other => {
                return Err(ShellError::validation(format!(
                    "Invalid discount type: '{other}'"
                )))
            }
        };

        let price = self.db.items().apply_discount(id, &discount).await?;

        info!(id, %price, "Discount applied from shell");
        self.console.say(format!(
            "New price for item {id}: {}.",
            money(&self.currency, price)
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{memory_db, run_script};
    use canteen_core::{Money, NewItem};

    async fn hundred(db: &canteen_db::Database) -> i64 {
        db.items()
            .add(&NewItem::new("Marmita", None, Money::from_cents(10_000), 5))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_percentage_discount() {
        let db = memory_db().await;
        let id = hundred(&db).await;

        let out = run_script(&db, &format!("9\n{id}\n1\n20\n0\n")).await;

        assert!(out.contains(&format!("New price for item {id}: R$ 80.00.")));
    }

    #[tokio::test]
    async fn test_both_discounts() {
        let db = memory_db().await;
        let id = hundred(&db).await;

        run_script(&db, &format!("9\n{id}\n3\n10\n5\n0\n")).await;

        assert_eq!(db.items().get(id).await.unwrap().unwrap().price_cents, 8_500);
    }

    #[tokio::test]
    async fn test_discount_below_zero_is_rejected() {
        let db = memory_db().await;
        let id = hundred(&db).await;

        let out = run_script(&db, &format!("9\n{id}\n2\n150\n0\n")).await;

        assert!(out.contains("Error: Discount would make the price negative"));
        assert_eq!(db.items().get(id).await.unwrap().unwrap().price_cents, 10_000);
    }

    #[tokio::test]
    async fn test_unknown_discount_type() {
        let db = memory_db().await;
        let id = hundred(&db).await;

        let out = run_script(&db, &format!("9\n{id}\n4\n0\n")).await;

        assert!(out.contains("Error: Invalid discount type: '4'"));
    }

    #[tokio::test]
    async fn test_discount_on_missing_item() {
        let db = memory_db().await;
        let out = run_script(&db, "9\n5\n1\n10\n0\n").await;

        assert!(out.contains("Error: Item not found: 5"));
    }
}
