//! Report commands.

use std::io::{BufRead, Write};

use crate::error::ShellResult;
use crate::render::{order_detail_table, sales_summary_table};
use crate::shell::Shell;

impl<R: BufRead, W: Write> Shell<R, W> {
    /// 7 - Sales report.
    pub(crate) async fn sales_report(&mut self) -> ShellResult<()> {
        let rows = self.db.reports().sales_summary().await?;

        if rows.is_empty() {
            return self.console.say("No sales registered.");
        }
        self.console.say(sales_summary_table(&rows, &self.currency))
    }

    /// 8 - Order report.
    pub(crate) async fn order_report(&mut self) -> ShellResult<()> {
        let rows = self.db.reports().order_detail().await?;

        if rows.is_empty() {
            return self.console.say("No sale lines registered.");
        }
        self.console.say(order_detail_table(&rows, &self.currency))
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{memory_db, run_script};
    use canteen_core::{Money, NewItem, SaleRequestLine};

    #[tokio::test]
    async fn test_reports_when_empty() {
        let db = memory_db().await;
        let out = run_script(&db, "7\n8\n0\n").await;

        assert!(out.contains("No sales registered."));
        assert!(out.contains("No sale lines registered."));
    }

    #[tokio::test]
    async fn test_reports_show_sales() {
        let db = memory_db().await;
        let id = db
            .items()
            .add(&NewItem::new("Pao de queijo", None, Money::from_cents(400), 30))
            .await
            .unwrap();
        db.sales()
            .register_sale(&[SaleRequestLine::new(id, 3)])
            .await
            .unwrap();

        let out = run_script(&db, "7\n8\n0\n").await;

        assert!(out.contains("Items sold"));
        assert!(out.contains("R$ 12.00"));
        assert!(out.contains("Pao de queijo"));
        assert!(out.contains("R$ 4.00"));
    }
}
