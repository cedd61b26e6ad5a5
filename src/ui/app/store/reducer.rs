use super::super::state::{AppState, FormState, Notice};
use super::action::{Action, DialogAction, FormAction, SearchAction, StoreAction};
use super::command::Command;
use crate::domain::{FormError, ProductError, ProductId};

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Form(action) => reduce_form(state, action),
        Action::Search(action) => reduce_search(state, action),
        Action::Dialog(action) => reduce_dialog(state, action),
        Action::Store(action) => reduce_store(state, action),
    }
}

fn reduce_form(state: &mut AppState, action: FormAction) -> Vec<Command> {
    match action {
        FormAction::SetId(text) => {
            state.form.id = text;
            Vec::new()
        }
        FormAction::SetName(text) => {
            state.form.name = text;
            Vec::new()
        }
        FormAction::SetDescription(text) => {
            state.form.description = text;
            Vec::new()
        }
        FormAction::SetQuantity(text) => {
            if text.chars().all(|c| c.is_ascii_digit()) {
                state.form.quantity = text;
            }
            Vec::new()
        }
        FormAction::SetDate(date) => {
            state.form.date = date;
            Vec::new()
        }
        FormAction::Clear => {
            state.clear_form();
            Vec::new()
        }
        FormAction::Add => match state.form.to_product() {
            Ok(product) => vec![Command::InsertProduct(product)],
            Err(err) => {
                state.notice = Some(Notice::from(&err));
                Vec::new()
            }
        },
        FormAction::Update => match state.form.to_product() {
            Ok(product) => vec![Command::UpdateProduct(product)],
            Err(err) => {
                state.notice = Some(Notice::from(&err));
                Vec::new()
            }
        },
        FormAction::Remove => {
            if state.form.id.trim().is_empty() {
                state.notice = Some(Notice::from(&FormError::MissingId));
                return Vec::new();
            }
            state.pending_delete = Some(state.form.id.clone());
            Vec::new()
        }
    }
}

fn reduce_search(state: &mut AppState, action: SearchAction) -> Vec<Command> {
    match action {
        SearchAction::SetQuery(query) => {
            state.search_query = query;
            vec![reload(state)]
        }
        SearchAction::Refresh => vec![reload(state)],
        SearchAction::SelectProduct { id } => {
            state.selected_id = Some(id.clone());
            vec![Command::LoadProduct { id }]
        }
    }
}

fn reduce_dialog(state: &mut AppState, action: DialogAction) -> Vec<Command> {
    match action {
        DialogAction::DismissNotice => {
            state.notice = None;
            Vec::new()
        }
        DialogAction::ConfirmDelete => match state.pending_delete.take() {
            Some(id) => vec![Command::DeleteProduct { id }],
            None => Vec::new(),
        },
        DialogAction::CancelDelete => {
            state.pending_delete = None;
            Vec::new()
        }
    }
}

fn reduce_store(state: &mut AppState, action: StoreAction) -> Vec<Command> {
    match action {
        StoreAction::ProductsLoaded(result) => {
            match result {
                Ok(products) => state.products = products,
                Err(err) => state.notice = Some(Notice::storage(&err)),
            }
            Vec::new()
        }
        StoreAction::ProductLoaded(result) => match result {
            Ok(product) => {
                state.form = FormState::from_product(&product);
                state.selected_id = Some(product.id);
                Vec::new()
            }
            Err(err) => {
                state.selected_id = None;
                state.notice = Some(Notice::from(&err));
                if err.is_not_found() {
                    vec![reload(state)]
                } else {
                    Vec::new()
                }
            }
        },
        StoreAction::ProductInserted(result)
        | StoreAction::ProductUpdated(result)
        | StoreAction::ProductDeleted(result) => after_write(state, result),
    }
}

fn after_write(state: &mut AppState, result: Result<ProductId, ProductError>) -> Vec<Command> {
    match result {
        Ok(_) => {
            state.clear_form();
            vec![reload(state)]
        }
        Err(err) => {
            state.notice = Some(Notice::from(&err));
            Vec::new()
        }
    }
}

fn reload(state: &AppState) -> Command {
    Command::LoadProducts {
        query: state.search_query.clone(),
    }
}
