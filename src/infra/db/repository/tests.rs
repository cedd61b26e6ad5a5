use crate::domain::{Product, ProductError};
use crate::infra::db::Database;
use crate::infra::db::repository::*;
use chrono::NaiveDate;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup() -> anyhow::Result<(TempDir, ProductRepository)> {
    let dir = TempDir::new()?;
    let db = Database::open_at(dir.path().join("products.db"))?;
    Ok((dir, ProductRepository::new(db)))
}

#[test]
fn test_insert_then_get() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    let product = Product::new("P-100", "Hex Bolt", "Zinc plated", 250, date(2024, 5, 2));

    repo.insert(&product)?;
    assert_eq!(repo.get("P-100")?, product);

    Ok(())
}

#[test]
fn test_get_missing_is_not_found() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    let err = repo.get("nope").unwrap_err();
    assert!(matches!(err, ProductError::NotFound(id) if id == "nope"));
    Ok(())
}

#[test]
fn test_insert_duplicate_keeps_original() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    let original = Product::new("P-1", "Washer", "Steel", 10, date(2024, 1, 1));
    repo.insert(&original)?;

    let clash = Product::new("P-1", "Nut", "Brass", 99, date(2024, 2, 2));
    let err = repo.insert(&clash).unwrap_err();
    assert!(matches!(err, ProductError::DuplicateId(id) if id == "P-1"));

    assert_eq!(repo.get("P-1")?, original);
    assert_eq!(repo.count()?, 1);
    Ok(())
}

#[test]
fn test_insert_stamps_updated_with_created() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    let mut product = Product::new("P-1", "Washer", "Steel", 10, date(2024, 1, 1));
    product.date_updated = date(2030, 1, 1);
    repo.insert(&product)?;

    let stored = repo.get("P-1")?;
    assert_eq!(stored.date_updated, date(2024, 1, 1));
    Ok(())
}

#[test]
fn test_update_missing_is_not_found() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    let ghost = Product::new("ghost", "Ghost", "", 1, date(2024, 1, 1));
    let err = repo.update(&ghost).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(repo.count()?, 0);
    Ok(())
}

#[test]
fn test_update_overwrites_fields_but_not_created_date() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    repo.insert(&Product::new("P-7", "Drill", "Cordless", 3, date(2024, 1, 10)))?;

    let edited = Product::new("P-7", "Drill 18V", "Cordless, two batteries", 5, date(2024, 6, 1));
    repo.update(&edited)?;

    let stored = repo.get("P-7")?;
    assert_eq!(stored.name, "Drill 18V");
    assert_eq!(stored.description, "Cordless, two batteries");
    assert_eq!(stored.quantity, 5);
    assert_eq!(stored.date_created, date(2024, 1, 10));
    assert_eq!(stored.date_updated, date(2024, 6, 1));
    Ok(())
}

#[test]
fn test_delete() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    repo.insert(&Product::new("P-1", "Saw", "Hand saw", 2, date(2024, 1, 1)))?;
    repo.insert(&Product::new("P-2", "Hammer", "Claw", 4, date(2024, 1, 1)))?;

    repo.delete("P-1")?;
    assert!(repo.get("P-1").unwrap_err().is_not_found());
    assert_eq!(repo.get("P-2")?.name, "Hammer");

    assert!(repo.delete("P-1").unwrap_err().is_not_found());
    Ok(())
}

#[test]
fn test_list_filters_by_name_case_insensitively() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    repo.insert(&Product::new("A", "Steel Bolt", "", 1, date(2024, 1, 1)))?;
    repo.insert(&Product::new("B", "Brass nut", "bolt-on", 1, date(2024, 1, 1)))?;
    repo.insert(&Product::new("C", "BOLT cutter", "", 1, date(2024, 1, 1)))?;

    let all = repo.list("")?;
    let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);

    let bolts = repo.list("bolt")?;
    let ids: Vec<_> = bolts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "C"]);

    assert!(repo.list("washer")?.is_empty());
    Ok(())
}

#[test]
fn test_delete_all() -> anyhow::Result<()> {
    let (_dir, repo) = setup()?;
    repo.insert(&Product::new("A", "One", "", 1, date(2024, 1, 1)))?;
    repo.insert(&Product::new("B", "Two", "", 2, date(2024, 1, 1)))?;

    assert_eq!(repo.delete_all()?, 2);
    assert_eq!(repo.count()?, 0);
    Ok(())
}

#[test]
fn test_repositories_share_the_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("products.db");
    let first = Database::open_at(&path)?.product_repo();
    let second = Database::open_at(&path)?.product_repo();

    first.insert(&Product::new("X", "Shared", "", 1, date(2024, 1, 1)))?;
    assert_eq!(second.get("X")?.name, "Shared");
    Ok(())
}

#[test]
fn test_sqlite_failures_surface_as_storage_errors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let db = Database::open_at(dir.path().join("products.db"))?;
    db.connect()?.execute_batch("DROP TABLE products;")?;

    let err = db.product_repo().list("").unwrap_err();
    assert!(matches!(err, ProductError::Storage(_)));
    assert!(err.is_storage_failure());
    Ok(())
}

#[test]
fn test_primary_key_clash_maps_to_duplicate_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let db = Database::open_at(dir.path().join("products.db"))?;
    let conn = db.connect()?;
    let insert = "INSERT INTO products (id, name, description, quantity, date_created, date_updated)
                  VALUES (?1, ?2, 'd', 1, '2024-01-01', '2024-01-01')";
    conn.execute(insert, ["P-1", "Bolt"])?;

    // A second writer slipping past the existence check hits the primary key.
    let clash = conn.execute(insert, ["P-1", "Nut"]).unwrap_err();
    let err = super::product::duplicate_or_storage(clash, "P-1");
    assert!(matches!(err, ProductError::DuplicateId(id) if id == "P-1"));

    let not_null = conn
        .execute(insert, rusqlite::params!["P-2", rusqlite::types::Null])
        .unwrap_err();
    let err = super::product::duplicate_or_storage(not_null, "P-2");
    assert!(matches!(err, ProductError::Storage(_)));
    Ok(())
}
