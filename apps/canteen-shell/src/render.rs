//! Text tables for the item listing and the reports.

use std::ops::RangeFrom;

use canteen_core::{Item, Money, OrderDetailRow, SalesSummaryRow};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

/// Formats an amount with the currency symbol, e.g. `R$ 12.50`.
pub fn money(currency: &str, amount: Money) -> String {
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{currency} {amount}")
    }
}

/// Item listing: id, name, category, price, quantity.
pub fn items_table(items: &[Item], currency: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Category", "Price", "Quantity"]);

    for item in items {
        builder.push_record([
            item.id.to_string(),
            item.name.clone(),
            item.category.clone().unwrap_or_else(|| "-".to_string()),
            money(currency, item.price()),
            item.quantity.to_string(),
        ]);
    }

    finish(builder, Columns::new(3..))
}

/// Sales summary: one row per sale.
pub fn sales_summary_table(rows: &[SalesSummaryRow], currency: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Sale", "Date", "Items sold", "Total"]);

    for row in rows {
        builder.push_record([
            row.sale_id.to_string(),
            row.sale_date.to_string(),
            row.items_sold.to_string(),
            money(currency, row.total()),
        ]);
    }

    finish(builder, Columns::new(2..))
}

/// Order detail: one row per sale line.
pub fn order_detail_table(rows: &[OrderDetailRow], currency: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Sale", "Date", "Item", "Quantity", "Unit price", "Subtotal"]);

    for row in rows {
        builder.push_record([
            row.sale_id.to_string(),
            row.sale_date.to_string(),
            row.item_name.clone(),
            row.quantity.to_string(),
            money(currency, row.unit_price()),
            money(currency, row.unit_price().multiply_quantity(row.quantity)),
        ]);
    }

    finish(builder, Columns::new(3..))
}

fn finish(builder: Builder, numeric: Columns<RangeFrom<usize>>) -> String {
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(numeric, Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_money_with_symbol() {
        assert_eq!(money("R$", Money::from_cents(1250)), "R$ 12.50");
        assert_eq!(money("", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_items_table_contents() {
        let items = vec![
            Item {
                id: 1,
                name: "Coxinha".to_string(),
                category: Some("Salgados".to_string()),
                price_cents: 650,
                quantity: 12,
            },
            Item {
                id: 2,
                name: "Suco".to_string(),
                category: None,
                price_cents: 500,
                quantity: -3,
            },
        ];

        let table = items_table(&items, "R$");

        assert!(table.contains("Coxinha"));
        assert!(table.contains("Salgados"));
        assert!(table.contains("R$ 6.50"));
        assert!(table.contains("-3"));
    }

    #[test]
    fn test_order_detail_subtotal() {
        let rows = vec![OrderDetailRow {
            sale_id: 4,
            sale_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            item_name: "Pastel".to_string(),
            quantity: 3,
            unit_price_cents: 800,
        }];

        let table = order_detail_table(&rows, "$");

        assert!(table.contains("2024-06-01"));
        assert!(table.contains("$ 8.00"));
        assert!(table.contains("$ 24.00"));
    }
}
