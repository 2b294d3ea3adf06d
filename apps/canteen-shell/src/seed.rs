//! # Seed Data Generator
//!
//! Populates an empty database with a demo canteen menu.
//!
//! ## Usage
//! ```bash
//! # Insert 12 items (default)
//! canteen seed
//!
//! # Insert a custom amount into a specific database
//! canteen --db ./data/canteen.db seed --count 40
//! ```
//!
//! ## Generated Items
//! Names come from a fixed catalog per category; once the catalog is used
//! up, portion variants ("Grande", "Combo") are added with a price surcharge.
//! Stock is spread between 10 and 50 units.

use std::io::Write;
use std::time::Instant;

use canteen_core::{Money, NewItem};
use canteen_db::Database;
use tracing::info;

use crate::error::ShellResult;

/// Catalog per category: (name, base price in cents).
const CATALOG: &[(&str, &[(&str, i64)])] = &[
    (
        "Salgados",
        &[
            ("Coxinha", 650),
            ("Pastel de carne", 800),
            ("Pão de queijo", 400),
            ("Esfiha", 550),
            ("Enroladinho", 600),
        ],
    ),
    (
        "Bebidas",
        &[
            ("Suco de laranja", 700),
            ("Refrigerante lata", 600),
            ("Água mineral", 300),
            ("Café", 350),
        ],
    ),
    (
        "Doces",
        &[
            ("Brigadeiro", 300),
            ("Bolo de cenoura", 700),
            ("Pudim", 900),
        ],
    ),
    (
        "Refeições",
        &[("Marmita", 2_200), ("Prato feito", 2_500), ("Salada", 1_800)],
    ),
];

/// Portion variants: (suffix, surcharge in cents).
const VARIANTS: &[(&str, i64)] = &[("", 0), ("Grande", 250), ("Combo", 500)];

/// Inserts up to `count` demo items and returns how many were written.
///
/// Does nothing when the database already has items.
pub async fn seed<W: Write>(db: &Database, count: usize, out: &mut W) -> ShellResult<usize> {
    let items = db.items();

    let existing = items.count().await?;
    if existing > 0 {
        writeln!(out, "Database already has {existing} items; skipping seed.")?;
        return Ok(0);
    }

    let start = Instant::now();
    let mut generated = 0;

    for item in catalog().take(count) {
        items.add(&item).await?;
        generated += 1;
    }

    info!(generated, elapsed = ?start.elapsed(), "Seed complete");
    writeln!(out, "Inserted {generated} items.")?;
    Ok(generated)
}

/// Every catalog item, then every variant of it.
fn catalog() -> impl Iterator<Item = NewItem> {
    VARIANTS.iter().flat_map(|(suffix, surcharge)| {
        CATALOG.iter().flat_map(move |(category, entries)| {
            entries.iter().map(move |(name, price)| {
                let name = if suffix.is_empty() {
                    (*name).to_string()
                } else {
                    format!("{name} {suffix}")
                };
                let stock = 10 + (name.len() as i64 * 7) % 41;
                NewItem::new(
                    name,
                    Some((*category).to_string()),
                    Money::from_cents(price + surcharge),
                    stock,
                )
            })
        })
    })
}
