mod catalog;
mod export;
mod json;
mod markdown;

pub(crate) use catalog::print_catalog;
pub(crate) use export::{export_path, write_export};
pub(crate) use json::{catalog_json, error_json, outcome_json, print_json};
pub(crate) use markdown::Presenter;
