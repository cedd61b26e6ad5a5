use super::action::{Action, StoreAction};
use super::command::Command;
use crate::domain::ProductError;

use super::super::InventoryApp;

/// Execute a command against the repository and feed the outcome back.
///
/// Commands run to completion on the UI thread; each one opens and closes
/// its own database connection.
pub fn run(app: &mut InventoryApp, command: Command) {
    log::debug!("running {:?}", command);

    let outcome = match command {
        Command::LoadProducts { query } => {
            let result = app.products.list(&query);
            log_failure("list products", &result);
            StoreAction::ProductsLoaded(result)
        }
        Command::LoadProduct { id } => {
            let result = app.products.get(&id);
            log_failure("load product", &result);
            StoreAction::ProductLoaded(result)
        }
        Command::InsertProduct(product) => {
            let result = app.products.insert(&product).map(|()| product.id);
            log_write("inserted", &result);
            StoreAction::ProductInserted(result)
        }
        Command::UpdateProduct(product) => {
            let result = app.products.update(&product).map(|()| product.id);
            log_write("updated", &result);
            StoreAction::ProductUpdated(result)
        }
        Command::DeleteProduct { id } => {
            let result = app.products.delete(&id).map(|()| id);
            log_write("deleted", &result);
            StoreAction::ProductDeleted(result)
        }
    };

    app.dispatch(Action::Store(outcome));
}

fn log_write(verb: &str, result: &Result<String, ProductError>) {
    match result {
        Ok(id) => log::info!("{} product {}", verb, id),
        Err(err) if err.is_storage_failure() => {
            log::warn!("product could not be {}: {}", verb, err)
        }
        Err(err) => log::debug!("product not {}: {}", verb, err),
    }
}

fn log_failure<T>(operation: &str, result: &Result<T, ProductError>) {
    if let Err(err) = result
        && err.is_storage_failure()
    {
        log::warn!("failed to {}: {}", operation, err);
    }
}
