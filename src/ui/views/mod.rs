//! Screen sections rendered by the root app.

pub(crate) mod product_form;
pub(crate) mod product_grid;

pub(crate) use product_form::render_product_form;
pub(crate) use product_grid::render_product_grid;
