//! Search form and results container.

mod results;
mod search_form;

pub use results::Results;
pub use search_form::SearchForm;
