//! Inventory commands.

use std::io::{BufRead, Write};

use canteen_core::validation::{parse_integer, parse_money};
use canteen_core::{CoreError, ItemPatch, NewItem};
use tracing::info;

use crate::error::ShellResult;
use crate::render::{items_table, money};
use crate::shell::Shell;

impl<R: BufRead, W: Write> Shell<R, W> {
    /// 1 - Add item.
    pub(crate) async fn add_item(&mut self) -> ShellResult<()> {
        let name = self.console.ask("Name: ")?;
        let category = self.console.ask_optional("Category (blank for none): ")?;
        let price = self.console.ask_money("Price: ", "price")?;
        let quantity = self.console.ask_integer("Quantity: ", "quantity")?;

        let item = NewItem::new(name, category, price, quantity);
        let id = self.db.items().add(&item).await?;

        info!(id, "Item added from shell");
        self.console.say(format!("Item added with id {id}."))
    }

    /// 2 - Update item. Blank answers leave the field unchanged.
    pub(crate) async fn update_item(&mut self) -> ShellResult<()> {
        let id = self.console.ask_item_id()?;
        let mut patch = ItemPatch::default();

        if let Some(name) = self.console.ask_optional("New name (blank to keep): ")? {
            patch = patch.name(name);
        }
        if let Some(category) = self.console.ask_optional("New category (blank to keep): ")? {
            patch = patch.category(category);
        }
        if let Some(price) = self.console.ask_optional("New price (blank to keep): ")? {
            patch = patch.price(parse_money("price", &price)?);
        }
        if let Some(quantity) = self.console.ask_optional("New quantity (blank to keep): ")? {
            patch = patch.quantity(parse_integer("quantity", &quantity)?);
        }

        if !self.db.items().update(id, &patch).await? {
            return Err(CoreError::ItemNotFound(id).into());
        }

        if patch.is_empty() {
            self.console.say(format!("Nothing to change for item {id}."))
        } else {
            self.console.say(format!("Item {id} updated."))
        }
    }

    /// 3 - Remove item. A missing id is reported, not treated as an error.
    pub(crate) async fn remove_item(&mut self) -> ShellResult<()> {
        let id = self.console.ask_item_id()?;

        if self.db.items().remove(id).await? {
            self.console.say(format!("Item {id} removed."))
        } else {
            self.console.say(format!("No item with id {id}; nothing removed."))
        }
    }

    /// 4 - List items.
    pub(crate) async fn list_items(&mut self) -> ShellResult<()> {
        let items = self.db.items().list().await?;

        if items.is_empty() {
            return self.console.say("No items registered.");
        }

        let table = items_table(&items, &self.currency);
        self.console.say(table)?;

        let oversold: Vec<String> = items
            .iter()
            .filter(|item| item.is_oversold())
            .map(|item| item.id.to_string())
            .collect();
        if !oversold.is_empty() {
            self.console.say(format!("Oversold items: {}", oversold.join(", ")))?;
        }
        Ok(())
    }

    /// 5 - Update stock (overwrite, no bounds check).
    pub(crate) async fn update_stock(&mut self) -> ShellResult<()> {
        let id = self.console.ask_item_id()?;
        let quantity = self.console.ask_integer("New quantity: ", "quantity")?;

        if !self.db.items().set_stock(id, quantity).await? {
            return Err(CoreError::ItemNotFound(id).into());
        }

        let item = self.db.items().get(id).await?;
        match item {
            Some(item) => self.console.say(format!(
                "Stock for {} set to {} (price {}).",
                item.name,
                item.quantity,
                money(&self.currency, item.price())
            )),
            None => Err(CoreError::ItemNotFound(id).into()),
        }
    }
}
