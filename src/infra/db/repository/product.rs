use super::super::Database;
use crate::domain::{Product, ProductError};
use rusqlite::{ErrorCode, OptionalExtension, Row, TransactionBehavior};

const PRODUCT_COLUMNS: &str = "id, name, description, quantity, date_created, date_updated";

/// Repository for product operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn get(&self, id: &str) -> Result<Product, ProductError> {
        let conn = self.db.connect()?;
        conn.query_row(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
            [id],
            product_from_row,
        )
        .optional()?
        .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Products whose name contains `query`, ignoring case, in insertion order.
    pub fn list(&self, query: &str) -> Result<Vec<Product>, ProductError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY rowid"
        ))?;

        // SQLite's LIKE only folds ASCII, so the name filter runs here.
        let rows = stmt.query_map([], product_from_row)?;
        let mut products = Vec::new();
        for row in rows {
            let product = row?;
            if product.name_matches(query) {
                products.push(product);
            }
        }
        Ok(products)
    }

    pub fn insert(&self, product: &Product) -> Result<(), ProductError> {
        let mut conn = self.db.connect()?;
        // Take the write lock up front so the existence check holds until commit.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)",
            [&product.id],
            |row| row.get(0),
        )?;
        if exists {
            return Err(ProductError::DuplicateId(product.id.clone()));
        }

        tx.execute(
            &format!("INSERT INTO products ({PRODUCT_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
            rusqlite::params![
                &product.id,
                &product.name,
                &product.description,
                product.quantity,
                product.date_created,
                product.date_created,
            ],
        )
        .map_err(|err| duplicate_or_storage(err, &product.id))?;
        tx.commit()?;
        Ok(())
    }

    /// Overwrites name, description, quantity and the updated date.
    /// The created date stays as first inserted.
    pub fn update(&self, product: &Product) -> Result<(), ProductError> {
        let conn = self.db.connect()?;
        let affected = conn.execute(
            "UPDATE products SET name = ?2, description = ?3, quantity = ?4, date_updated = ?5 WHERE id = ?1",
            rusqlite::params![
                &product.id,
                &product.name,
                &product.description,
                product.quantity,
                product.date_updated,
            ],
        )?;
        if affected == 0 {
            return Err(ProductError::NotFound(product.id.clone()));
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), ProductError> {
        let conn = self.db.connect()?;
        let affected = conn.execute("DELETE FROM products WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn count(&self) -> Result<usize, ProductError> {
        let conn = self.db.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn delete_all(&self) -> Result<usize, ProductError> {
        let conn = self.db.connect()?;
        let affected = conn.execute("DELETE FROM products", [])?;
        Ok(affected)
    }
}

/// A primary key clash on insert means the id is taken.
pub(super) fn duplicate_or_storage(err: rusqlite::Error, id: &str) -> ProductError {
    let primary_key_clash = matches!(
        &err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    );
    if primary_key_clash {
        ProductError::DuplicateId(id.to_string())
    } else {
        ProductError::Storage(err)
    }
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        quantity: row.get(3)?,
        date_created: row.get(4)?,
        date_updated: row.get(5)?,
    })
}
