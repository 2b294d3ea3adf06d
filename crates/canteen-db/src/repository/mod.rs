//! # Repository Module
//!
//! Database repository implementations for the canteen POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Shell menu option                                                     │
//! │       │                                                                 │
//! │       │  db.items().apply_discount(3, &discount)                       │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── add / get / list                                                  │
//! │  ├── update / set_stock / remove                                       │
//! │  └── apply_discount                                                    │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Inventory CRUD, stock and discounts
//! - [`sale::SaleRepository`] - Sale registration and lookup
//! - [`report::ReportRepository`] - Sales summary and order detail

pub mod item;
pub mod report;
pub mod sale;
