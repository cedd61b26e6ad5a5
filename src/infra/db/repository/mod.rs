//! Repository implementations for data access in Stockroom.
//!
//! Each operation opens its own connection through [`Database::connect`] and
//! releases it before returning.
//!
//! [`Database::connect`]: super::Database::connect

mod product;

pub use product::ProductRepository;

#[cfg(test)]
mod tests;
