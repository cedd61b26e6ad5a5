use anyhow::Result;
use chrono::NaiveDate;

use stockroom::domain::{Product, ProductError};
use stockroom::infra::app_config;
use stockroom::infra::db::Database;

// (id, name, description, quantity, (year, month, day))
const SAMPLES: &[(&str, &str, &str, u32, (i32, u32, u32))] = &[
    ("HW-0001", "Hex Bolt M8x40", "Zinc plated, box of 100", 24, (2024, 1, 8)),
    ("HW-0002", "Hex Nut M8", "Zinc plated, box of 200", 31, (2024, 1, 8)),
    ("HW-0003", "Flat Washer M8", "Stainless A2, box of 250", 12, (2024, 1, 15)),
    ("TL-0101", "Cordless Drill 18V", "Two batteries and charger", 6, (2024, 2, 2)),
    ("TL-0102", "Bar Clamp 600mm", "Quick release", 14, (2024, 2, 19)),
    ("EL-0201", "Cable Tie 200mm", "Black UV resistant, pack of 100", 40, (2024, 3, 4)),
    ("EL-0202", "Wago Connector 3-way", "Lever terminal, pack of 50", 0, (2024, 3, 11)),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = app_config::load_config();
    let db = Database::open_at(Database::resolve_path(None, &config))?;
    log::info!("seeding database at {}", db.path().display());

    let inserted = run(&db)?;
    println!("Inserted {} of {} sample products.", inserted, SAMPLES.len());
    Ok(())
}

/// Insert every sample product whose id is not taken yet.
pub fn run(db: &Database) -> Result<usize> {
    let repo = db.product_repo();
    let mut inserted = 0;

    for &(id, name, description, quantity, (y, m, d)) in SAMPLES {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid sample date for {}", id))?;
        let product = Product::new(id, name, description, quantity, date);

        match repo.insert(&product) {
            Ok(()) => {
                log::info!("inserted product {} ({})", id, name);
                inserted += 1;
            }
            Err(ProductError::DuplicateId(_)) => log::info!("skipped existing product {}", id),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_seed_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let db = Database::open_at(dir.path().join("products.db")).unwrap();

        assert_eq!(run(&db).unwrap(), SAMPLES.len());
        assert_eq!(run(&db).unwrap(), 0);
        assert_eq!(db.product_repo().count().unwrap(), SAMPLES.len());
    }
}
