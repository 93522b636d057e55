use serde::Deserialize;

use crate::data_models::{SearchOutput, SearchResult};
use crate::renderer::DisplayOptions;

#[derive(Debug, Deserialize)]
pub struct RenderItemRequest {
    pub result: SearchResult,
    #[serde(default)]
    pub options: DisplayOptions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderListRequest {
    pub output: SearchOutput,
    #[serde(default)]
    pub selected: Option<usize>,
    #[serde(default)]
    pub show_scores: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderParams {
    /// Reject malformed results with 422 instead of rendering them leniently.
    #[serde(default)]
    pub validate: bool,
}
