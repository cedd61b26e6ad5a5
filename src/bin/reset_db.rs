use anyhow::Result;

use stockroom::infra::app_config;
use stockroom::infra::db::{Database, database::DB_PATH_ENV};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = app_config::load_config();
    let db_path = Database::resolve_path(None, &config);

    if !db_path.exists() {
        log::info!("no database at {}, nothing to reset", db_path.display());
        println!("No reset needed. Set {} to target another file.", DB_PATH_ENV);
        return Ok(());
    }

    log::info!("connecting to database at {}", db_path.display());
    let db = Database::open_at(db_path)?;
    run(&db)?;
    Ok(())
}

/// Delete every product, returning how many were removed.
pub fn run(db: &Database) -> Result<usize> {
    let repo = db.product_repo();

    let before = repo.count()?;
    log::info!("products before reset: {}", before);

    let removed = repo.delete_all()?;
    log::info!("cleared {} products", removed);

    let after = repo.count()?;
    if after == 0 {
        println!("Database reset, {} products deleted.", removed);
    } else {
        log::warn!("{} products still exist after reset", after);
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockroom::domain::Product;
    use tempfile::TempDir;

    #[test]
    fn test_reset_db_run() {
        let dir = TempDir::new().unwrap();
        let db = Database::open_at(dir.path().join("products.db")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let repo = db.product_repo();
        repo.insert(&Product::new("A", "One", "", 1, date)).unwrap();
        repo.insert(&Product::new("B", "Two", "", 2, date)).unwrap();

        assert_eq!(run(&db).unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_reset_empty_database_removes_nothing() {
        let dir = TempDir::new().unwrap();
        let db = Database::open_at(dir.path().join("products.db")).unwrap();

        assert_eq!(run(&db).unwrap(), 0);
        assert_eq!(db.product_repo().count().unwrap(), 0);
    }
}
