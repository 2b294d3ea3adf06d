//! # Interactive Menu
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Loop                                       │
//! │                                                                         │
//! │  print menu ──► read choice ──► dispatch to command                    │
//! │       ▲                              │                                  │
//! │       │          Ok ─────────────────┤                                  │
//! │       │          Err(validation,     │                                  │
//! │       │              not found, db)  ├──► "Error: ..." printed          │
//! │       └──────────────────────────────┘                                  │
//! │                                                                         │
//! │  0 or end of input ──► "Goodbye." and return                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use canteen_db::Database;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::{ErrorCode, ShellResult};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddItem,
    UpdateItem,
    RemoveItem,
    ListItems,
    UpdateStock,
    RegisterSale,
    SalesReport,
    OrderReport,
    ApplyDiscount,
    Quit,
}

impl MenuOption {
    /// All options in display order.
    pub const ALL: [MenuOption; 10] = [
        MenuOption::AddItem,
        MenuOption::UpdateItem,
        MenuOption::RemoveItem,
        MenuOption::ListItems,
        MenuOption::UpdateStock,
        MenuOption::RegisterSale,
        MenuOption::SalesReport,
        MenuOption::OrderReport,
        MenuOption::ApplyDiscount,
        MenuOption::Quit,
    ];

    /// Parses the number typed at the menu prompt.
    pub fn parse(choice: &str) -> Option<Self> {
        let option = match choice.trim() {
            "1" => MenuOption::AddItem,
            "2" => MenuOption::UpdateItem,
            "3" => MenuOption::RemoveItem,
            "4" => MenuOption::ListItems,
            "5" => MenuOption::UpdateStock,
            "6" => MenuOption::RegisterSale,
            "7" => MenuOption::SalesReport,
            "8" => MenuOption::OrderReport,
            "9" => MenuOption::ApplyDiscount,
            "0" => MenuOption::Quit,
            _ => return None,
        };
        Some(option)
    }

    pub fn key(self) -> char {
        match self {
            MenuOption::AddItem => '1',
            MenuOption::UpdateItem => '2',
            MenuOption::RemoveItem => '3',
            MenuOption::ListItems => '4',
            MenuOption::UpdateStock => '5',
            MenuOption::RegisterSale => '6',
            MenuOption::SalesReport => '7',
            MenuOption::OrderReport => '8',
            MenuOption::ApplyDiscount => '9',
            MenuOption::Quit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::AddItem => "Add item",
            MenuOption::UpdateItem => "Update item",
            MenuOption::RemoveItem => "Remove item",
            MenuOption::ListItems => "List items",
            MenuOption::UpdateStock => "Update stock",
            MenuOption::RegisterSale => "Register sale",
            MenuOption::SalesReport => "Sales report",
            MenuOption::OrderReport => "Order report",
            MenuOption::ApplyDiscount => "Apply discount",
            MenuOption::Quit => "Quit",
        }
    }
}

/// The interactive shell: a database handle plus a console.
#[derive(Debug)]
pub struct Shell<R, W> {
    pub(crate) db: Database,
    pub(crate) console: Console<R, W>,
    pub(crate) currency: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(db: Database, currency: impl Into<String>, input: R, output: W) -> Self {
        Shell {
            db,
            console: Console::new(input, output),
            currency: currency.into(),
        }
    }

    /// Runs the menu until the operator quits or input ends.
    ///
    /// Command failures are printed and the menu is shown again; only a
    /// broken console ends the loop with an error.
    pub async fn run(&mut self) -> ShellResult<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.console.read_line("Choose an option: ")? else {
                break;
            };

            let Some(option) = MenuOption::parse(&choice) else {
                self.console.say(format!("Invalid option: '{choice}'"))?;
                continue;
            };

            if option == MenuOption::Quit {
                break;
            }

            debug!(?option, "Menu option selected");

            match self.dispatch(option).await {
                Ok(()) => {}
                Err(err) if err.code == ErrorCode::InputClosed => break,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(code = %err.code, ?option, "Command failed: {}", err.message);
                    self.console.say(format!("Error: {err}"))?;
                }
            }
        }

        self.console.say("Goodbye.")
    }

    async fn dispatch(&mut self, option: MenuOption) -> ShellResult<()> {
        match option {
            MenuOption::AddItem => self.add_item().await,
            MenuOption::UpdateItem => self.update_item().await,
            MenuOption::RemoveItem => self.remove_item().await,
            MenuOption::ListItems => self.list_items().await,
            MenuOption::UpdateStock => self.update_stock().await,
            MenuOption::RegisterSale => self.register_sale().await,
            MenuOption::SalesReport => self.sales_report().await,
            MenuOption::OrderReport => self.order_report().await,
            MenuOption::ApplyDiscount => self.apply_discount().await,
            MenuOption::Quit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> ShellResult<()> {
        self.console.say("")?;
        self.console.say("=== Canteen ===")?;
        for option in MenuOption::ALL {
            self.console.say(format!("{} - {}", option.key(), option.label()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use canteen_db::DbConfig;
    use std::io::Cursor;

    pub(crate) async fn memory_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Feeds `script` to a shell over `db` and returns everything it printed.
    pub(crate) async fn run_script(db: &Database, script: &str) -> String {
        let mut out = Vec::new();
        Shell::new(db.clone(), "R$", Cursor::new(script.as_bytes()), &mut out)
            .run()
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_keys_round_trip() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::parse(&option.key().to_string()), Some(option));
        }
        assert_eq!(MenuOption::parse("10"), None);
        assert_eq!(MenuOption::parse(""), None);
    }

    #[tokio::test]
    async fn test_quit_immediately() {
        let db = memory_db().await;
        let out = run_script(&db, "0\n").await;

        assert!(out.contains("9 - Apply discount"));
        assert!(out.trim_end().ends_with("Goodbye."));
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let db = memory_db().await;
        let out = run_script(&db, "").await;
        assert!(out.contains("Goodbye."));
    }

    #[tokio::test]
    async fn test_invalid_option_shows_menu_again() {
        let db = memory_db().await;
        let out = run_script(&db, "x\n0\n").await;

        assert!(out.contains("Invalid option: 'x'"));
        assert_eq!(out.matches("=== Canteen ===").count(), 2);
    }

    #[tokio::test]
    async fn test_input_ending_mid_command_quits_cleanly() {
        let db = memory_db().await;
        let out = run_script(&db, "1\nCoxinha\n").await;

        assert!(out.contains("Goodbye."));
        assert_eq!(db.items().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_command_error_keeps_shell_running() {
        let db = memory_db().await;
        let out = run_script(&db, "5\n42\n3\n4\n0\n").await;

        assert!(out.contains("Error: Item not found: 42"));
        assert!(out.contains("No items registered."));
    }
}
