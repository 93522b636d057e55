pub mod api;
pub mod config;
pub mod data_models;
pub mod dom;
pub mod error;
pub mod highlight;
pub mod renderer;

pub use data_models::{Entry, Excerpt, HighlightRange, SearchOutput, SearchResult};
pub use renderer::{DisplayOptions, render_result_item, render_results_list};
