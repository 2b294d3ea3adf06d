//! # Menu Commands
//!
//! One module per concern; each adds handler methods to [`Shell`].
//!
//! ```text
//! commands/
//! ├── item.rs      ◄─── 1 add, 2 update, 3 remove, 4 list, 5 stock
//! ├── sale.rs      ◄─── 6 register sale
//! ├── report.rs    ◄─── 7 sales report, 8 order report
//! └── discount.rs  ◄─── 9 apply discount
//! ```
//!
//! [`Shell`]: crate::shell::Shell

mod discount;
mod item;
mod report;
mod sale;
